//! Main client implementation

use crate::{types::*, ClientError, Config, Result, UploadOptions};
use bytes::Bytes;
use reqwest::{header, multipart::Form, Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, warn};
use url::Url;

/// Path prefix of the REST API
const REST_PREFIX: &str = "rest";

/// Path prefix of direct file downloads
const FILE_PREFIX: &str = "f";

/// Header carrying the password of a protected file
const PASSWORD_HEADER: &str = "x-password";

/// Request payload
pub(crate) enum RequestBody {
    Empty,
    Json(Vec<u8>),
    Multipart(Form),
}

impl RequestBody {
    /// Serialize a JSON payload
    pub(crate) fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        serde_json::to_vec(value)
            .map(Self::Json)
            .map_err(ClientError::Encode)
    }
}

/// WaifuVault client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct WaifuVaultClient {
    config: Config,
    http: Client,
}

impl WaifuVaultClient {
    /// Create a new client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)
                .map_err(|e| ClientError::Config(format!("invalid user agent: {}", e)))?,
        );

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self { config, http })
    }

    /// Create a client for the public instance
    pub fn public() -> Result<Self> {
        Self::new(Config::default())
    }

    /// Create with endpoint URL
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        Self::new(Config::new(endpoint))
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ==================== File Operations ====================

    /// Upload a file from disk, a buffer or a remote URL
    #[instrument(skip_all, fields(bucket = options.bucket_token.as_deref().map(redact)))]
    pub async fn upload(&self, options: &UploadOptions) -> Result<FileRecord> {
        let body = options.body().await?;
        let bucket = options.bucket_token.as_deref().unwrap_or_default();
        let url = self.rest_url(&[bucket], &options.query())?;

        let response = self.request(Method::PUT, url, body).send().await?;
        let record = read_json(response).await?;
        expect_retention([&record], RetentionFormat::Formatted)?;
        Ok(record)
    }

    /// File info with the retention period as an epoch timestamp
    #[instrument(skip_all, fields(token = redact(token)))]
    pub async fn file_info(&self, token: &str) -> Result<FileRecord> {
        self.fetch_file_info(token, RetentionFormat::Epoch).await
    }

    /// File info with the retention period as a human readable duration
    #[instrument(skip_all, fields(token = redact(token)))]
    pub async fn file_info_formatted(&self, token: &str) -> Result<FileRecord> {
        self.fetch_file_info(token, RetentionFormat::Formatted).await
    }

    async fn fetch_file_info(&self, token: &str, format: RetentionFormat) -> Result<FileRecord> {
        let formatted = format == RetentionFormat::Formatted;
        let url = self.rest_url(&[token], &[("formatted", Some(formatted.to_string()))])?;
        let response = self.request(Method::GET, url, RequestBody::Empty).send().await?;
        let record = read_json(response).await?;
        expect_retention([&record], format)?;
        Ok(record)
    }

    /// Delete a file. Returns whether the service confirmed the deletion.
    #[instrument(skip_all, fields(token = redact(token)))]
    pub async fn delete_file(&self, token: &str) -> Result<bool> {
        let url = self.rest_url(&[token], &[])?;
        let response = self.request(Method::DELETE, url, RequestBody::Empty).send().await?;
        read_ack(response).await
    }

    /// Download a file by filename, or by token via a file info lookup
    #[instrument(skip_all)]
    pub async fn get_file(&self, options: &GetFileOptions) -> Result<Bytes> {
        let filename = options.filename.as_deref().filter(|f| !f.is_empty());
        let token = options.token.as_deref().filter(|t| !t.is_empty());

        let url = match (filename, token) {
            (Some(filename), _) => self.file_url(filename)?,
            (None, Some(token)) => Url::parse(&self.file_info(token).await?.url)?,
            (None, None) => {
                return Err(ClientError::Validation(
                    "a token or a filename must be supplied".to_string(),
                ))
            }
        };

        let mut req = self.request(Method::GET, url, RequestBody::Empty);
        if let Some(password) = options.password.as_deref().filter(|p| !p.is_empty()) {
            req = req.header(PASSWORD_HEADER, password);
        }

        let response = req.send().await?;
        if response.status() == StatusCode::FORBIDDEN {
            return Err(ClientError::IncorrectPassword);
        }
        read_bytes(response).await
    }

    /// Change the password, expiry or filename visibility of a file
    #[instrument(skip_all, fields(token = redact(token)))]
    pub async fn modify_file(&self, token: &str, payload: &ModifyEntryPayload) -> Result<FileRecord> {
        let url = self.rest_url(&[token], &[])?;
        let body = RequestBody::json(payload)?;
        let response = self.request(Method::PATCH, url, body).send().await?;
        let record = read_json(response).await?;
        expect_retention([&record], RetentionFormat::Epoch)?;
        Ok(record)
    }

    // ==================== Helper Methods ====================

    /// `{endpoint}/rest/{segments...}?{query}`.
    ///
    /// Empty segments are skipped; query parameters that are unset or empty are dropped.
    pub(crate) fn rest_url(&self, segments: &[&str], query: &[(&str, Option<String>)]) -> Result<Url> {
        let mut url = self.endpoint_url(std::iter::once(REST_PREFIX).chain(segments.iter().copied()))?;

        let params: Vec<(&str, &str)> = query
            .iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| (*key, v))
            })
            .collect();
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }

    /// `{endpoint}/f/{filename}`
    pub(crate) fn file_url(&self, filename: &str) -> Result<Url> {
        self.endpoint_url(std::iter::once(FILE_PREFIX).chain(filename.split('/')))
    }

    fn endpoint_url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url> {
        let mut url = Url::parse(self.config.base_url())?;
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Config(format!("endpoint cannot be a base URL: {}", self.config.endpoint))
            })?
            .pop_if_empty()
            .extend(segments.into_iter().filter(|s| !s.is_empty()));
        Ok(url)
    }

    /// Build a request; the content type follows the body
    pub(crate) fn request(&self, method: Method, url: Url, body: RequestBody) -> RequestBuilder {
        debug!(host = url.host_str().unwrap_or_default(), "Sending {} request", method);
        let req = self.http.request(method, url);

        match body {
            RequestBody::Multipart(form) => req.multipart(form),
            RequestBody::Json(data) => req
                .header(header::CONTENT_TYPE, "application/json")
                .body(data),
            RequestBody::Empty => req.header(header::CONTENT_TYPE, "application/json"),
        }
    }
}

// ==================== Response Decoding ====================

/// Turn a non-success response into an error
pub(crate) async fn check_error(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await?;
    warn!(status = status.as_u16(), "Request failed");
    Err(ClientError::from_error_body(status.as_u16(), &body))
}

/// Reject file records whose retention period has the wrong form for the call
pub(crate) fn expect_retention<'a>(
    records: impl IntoIterator<Item = &'a FileRecord>,
    expected: RetentionFormat,
) -> Result<()> {
    for record in records {
        let found = record.retention_period.format();
        if found != expected {
            return Err(ClientError::Decode(<serde_json::Error as serde::de::Error>::custom(
                format!("expected {:?} retention period, got {:?}", expected, found),
            )));
        }
    }
    Ok(())
}

/// Leading characters of a token, safe to put in logs
pub(crate) fn redact(token: &str) -> &str {
    match token.char_indices().nth(8) {
        Some((end, _)) => &token[..end],
        None => "",
    }
}

/// Decode a JSON success body
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = check_error(response).await?.bytes().await?;
    serde_json::from_slice(&body).map_err(ClientError::Decode)
}

/// A successful body of exactly `true` is a confirmation; anything else is not
pub(crate) async fn read_ack(response: Response) -> Result<bool> {
    let body = check_error(response).await?.bytes().await?;
    Ok(body.as_ref() == b"true")
}

/// Raw success body
pub(crate) async fn read_bytes(response: Response) -> Result<Bytes> {
    Ok(check_error(response).await?.bytes().await?)
}
