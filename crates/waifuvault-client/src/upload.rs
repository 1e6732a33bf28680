//! Upload options and request bodies

use crate::{client::RequestBody, ClientError, Result};
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What to upload and how the service should keep it.
///
/// Exactly one of `file`, `bytes` or `url` must be set.
#[derive(Clone, Debug, Default)]
pub struct UploadOptions {
    /// File on disk
    pub file: Option<PathBuf>,
    /// Raw file contents, requires `file_name`
    pub bytes: Option<Bytes>,
    /// Remote file the service should fetch
    pub url: Option<String>,
    /// Filename to use with `bytes`
    pub file_name: Option<String>,
    /// A number followed by `m`, `h` or `d`, e.g. `1h` or `2d`.
    /// Unset keeps the file for as long as the retention policy allows.
    pub expires: Option<String>,
    /// Keep the filename out of the URL
    pub hide_filename: bool,
    /// Encrypt the file with this password
    pub password: Option<String>,
    /// Delete the file once it has been downloaded
    pub one_time_download: bool,
    /// Bucket to put the file in
    pub bucket_token: Option<String>,
}

impl UploadOptions {
    /// Upload a file from disk
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
            ..Default::default()
        }
    }

    /// Upload an in-memory buffer
    pub fn from_bytes(data: impl Into<Bytes>, file_name: impl Into<String>) -> Self {
        Self {
            bytes: Some(data.into()),
            file_name: Some(file_name.into()),
            ..Default::default()
        }
    }

    /// Let the service fetch a remote file
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Set the expiry
    pub fn with_expires(mut self, expires: impl Into<String>) -> Self {
        self.expires = Some(expires.into());
        self
    }

    /// Encrypt with a password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Hide the filename
    pub fn with_hidden_filename(mut self) -> Self {
        self.hide_filename = true;
        self
    }

    /// Delete after the first download
    pub fn with_one_time_download(mut self) -> Self {
        self.one_time_download = true;
        self
    }

    /// Put the file in a bucket
    pub fn in_bucket(mut self, bucket_token: impl Into<String>) -> Self {
        self.bucket_token = Some(bucket_token.into());
        self
    }

    /// Resolve the single content source
    pub(crate) fn source(&self) -> Result<UploadSource<'_>> {
        let url = self.url.as_deref().filter(|u| !u.is_empty());

        match (self.file.as_deref(), self.bytes.as_ref(), url) {
            (Some(path), None, None) => Ok(UploadSource::File(path)),
            (None, Some(data), None) => {
                let file_name = self
                    .file_name
                    .as_deref()
                    .filter(|n| !n.is_empty())
                    .ok_or_else(|| {
                        ClientError::Validation(
                            "file_name must be set when bytes are used".to_string(),
                        )
                    })?;
                Ok(UploadSource::Bytes { data, file_name })
            }
            (None, None, Some(url)) => Ok(UploadSource::Url(url)),
            _ => Err(ClientError::Validation(
                "exactly one of file, bytes or url must be supplied".to_string(),
            )),
        }
    }

    /// Query parameters carried by the upload
    pub(crate) fn query(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("expires", self.expires.clone()),
            ("hide_filename", Some(self.hide_filename.to_string())),
            ("one_time_download", Some(self.one_time_download.to_string())),
        ]
    }

    fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }

    /// Build the request body: multipart for local content, JSON for a URL
    pub(crate) async fn body(&self) -> Result<RequestBody> {
        let (data, file_name) = match self.source()? {
            UploadSource::Url(url) => {
                return RequestBody::json(&UrlUpload {
                    url,
                    password: self.password(),
                });
            }
            UploadSource::Bytes { data, file_name } => (data.to_vec(), file_name.to_string()),
            UploadSource::File(path) => {
                let file_name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .ok_or_else(|| {
                        ClientError::Validation(format!("not a file path: {}", path.display()))
                    })?
                    .to_string();
                let data = tokio::fs::read(path).await?;
                (data, file_name)
            }
        };

        let mime = mime_guess::from_path(&file_name).first_or_octet_stream();
        debug!(file_name = %file_name, size = data.len(), mime = %mime, "Building multipart upload");

        let part = Part::bytes(data)
            .file_name(file_name)
            .mime_str(mime.as_ref())?;
        let mut form = Form::new().part("file", part);
        if let Some(password) = self.password() {
            form = form.text("password", password.to_string());
        }

        Ok(RequestBody::Multipart(form))
    }
}

/// The one content source of an upload
#[derive(Debug)]
pub(crate) enum UploadSource<'a> {
    File(&'a Path),
    Bytes { data: &'a Bytes, file_name: &'a str },
    Url(&'a str),
}

#[derive(Serialize)]
struct UrlUpload<'a> {
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
}
