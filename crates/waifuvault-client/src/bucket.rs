//! Bucket operations

use crate::{
    client::{expect_retention, read_ack, read_json, redact, RequestBody},
    types::{Bucket, RetentionFormat},
    Result, WaifuVaultClient,
};
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

#[derive(Serialize)]
struct GetBucketBody<'a> {
    bucket_token: &'a str,
}

impl WaifuVaultClient {
    /// Create a new bucket. The service binds buckets to the caller's IP,
    /// so there is at most one bucket per IP.
    #[instrument(skip_all)]
    pub async fn create_bucket(&self) -> Result<Bucket> {
        let url = self.rest_url(&["bucket", "create"], &[])?;
        let response = self.request(Method::GET, url, RequestBody::Empty).send().await?;
        let bucket: Bucket = read_json(response).await?;
        expect_retention(&bucket.files, RetentionFormat::Epoch)?;
        Ok(bucket)
    }

    /// Get a bucket with its files and albums
    #[instrument(skip_all, fields(token = redact(token)))]
    pub async fn get_bucket(&self, token: &str) -> Result<Bucket> {
        let url = self.rest_url(&["bucket", "get"], &[])?;
        let body = RequestBody::json(&GetBucketBody { bucket_token: token })?;
        let response = self.request(Method::POST, url, body).send().await?;
        let bucket: Bucket = read_json(response).await?;
        expect_retention(&bucket.files, RetentionFormat::Epoch)?;
        Ok(bucket)
    }

    /// Delete a bucket and every file in it
    #[instrument(skip_all, fields(token = redact(token)))]
    pub async fn delete_bucket(&self, token: &str) -> Result<bool> {
        let url = self.rest_url(&["bucket", token], &[])?;
        let response = self.request(Method::DELETE, url, RequestBody::Empty).send().await?;
        read_ack(response).await
    }
}
