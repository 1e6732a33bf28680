//! Album operations
//!
//! Albums group files of one bucket and can be shared read-only through a
//! public token.

use crate::{
    client::{expect_retention, read_bytes, read_json, redact, RequestBody},
    types::{Album, GenericResult, RetentionFormat},
    Result, WaifuVaultClient,
};
use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;
use tracing::{debug, instrument};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAlbumBody<'a> {
    name: &'a str,
    bucket_token: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileTokensBody<'a> {
    file_tokens: Vec<&'a str>,
}

impl WaifuVaultClient {
    /// Create an album in a bucket
    #[instrument(skip_all, fields(bucket = redact(bucket_token), name = name))]
    pub async fn create_album(&self, bucket_token: &str, name: &str) -> Result<Album> {
        let url = self.rest_url(&["album", bucket_token], &[])?;
        let body = RequestBody::json(&CreateAlbumBody { name, bucket_token })?;
        let response = self.request(Method::POST, url, body).send().await?;
        checked_album(response).await
    }

    /// Add files to an album. The files must be in the album's bucket.
    #[instrument(skip_all, fields(album = redact(album_token), count = file_tokens.len()))]
    pub async fn associate_files<S: AsRef<str>>(
        &self,
        album_token: &str,
        file_tokens: &[S],
    ) -> Result<Album> {
        self.change_album_files(album_token, "associate", file_tokens).await
    }

    /// Remove files from an album
    #[instrument(skip_all, fields(album = redact(album_token), count = file_tokens.len()))]
    pub async fn disassociate_files<S: AsRef<str>>(
        &self,
        album_token: &str,
        file_tokens: &[S],
    ) -> Result<Album> {
        self.change_album_files(album_token, "disassociate", file_tokens).await
    }

    async fn change_album_files<S: AsRef<str>>(
        &self,
        album_token: &str,
        action: &str,
        file_tokens: &[S],
    ) -> Result<Album> {
        debug!(action, "Changing album files");
        let url = self.rest_url(&["album", album_token, action], &[])?;
        let body = RequestBody::json(&FileTokensBody {
            file_tokens: file_tokens.iter().map(AsRef::as_ref).collect(),
        })?;
        let response = self.request(Method::POST, url, body).send().await?;
        checked_album(response).await
    }

    /// Get an album and its files
    #[instrument(skip_all, fields(album = redact(album_token)))]
    pub async fn get_album(&self, album_token: &str) -> Result<Album> {
        let url = self.rest_url(&["album", album_token], &[])?;
        let response = self.request(Method::GET, url, RequestBody::Empty).send().await?;
        checked_album(response).await
    }

    /// Delete an album, optionally with the files in it
    #[instrument(skip_all, fields(album = redact(album_token), delete_files = delete_files))]
    pub async fn delete_album(&self, album_token: &str, delete_files: bool) -> Result<GenericResult> {
        let url = self.rest_url(
            &["album", album_token],
            &[("deleteFiles", Some(delete_files.to_string()))],
        )?;
        let response = self.request(Method::DELETE, url, RequestBody::Empty).send().await?;
        read_json(response).await
    }

    /// Make an album publicly viewable. Returns the public URL.
    #[instrument(skip_all, fields(album = redact(album_token)))]
    pub async fn share_album(&self, album_token: &str) -> Result<String> {
        let url = self.rest_url(&["album", "share", album_token], &[])?;
        let response = self.request(Method::GET, url, RequestBody::Empty).send().await?;
        let result: GenericResult = read_json(response).await?;
        Ok(result.description)
    }

    /// Invalidate the public URL of an album
    #[instrument(skip_all, fields(album = redact(album_token)))]
    pub async fn revoke_album(&self, album_token: &str) -> Result<GenericResult> {
        let url = self.rest_url(&["album", "revoke", album_token], &[])?;
        let response = self.request(Method::GET, url, RequestBody::Empty).send().await?;
        read_json(response).await
    }

    /// Download files of an album as a zip archive.
    ///
    /// `file_ids` are the public ids of the files; an empty slice downloads
    /// the whole album.
    #[instrument(skip_all, fields(album = redact(album_token), count = file_ids.len()))]
    pub async fn download_album(&self, album_token: &str, file_ids: &[i64]) -> Result<Bytes> {
        let url = self.rest_url(&["album", "download", album_token], &[])?;
        let body = RequestBody::json(file_ids)?;
        let response = self.request(Method::POST, url, body).send().await?;
        read_bytes(response).await
    }
}

/// Album files carry epoch retention periods
async fn checked_album(response: reqwest::Response) -> Result<Album> {
    let album: Album = read_json(response).await?;
    expect_retention(&album.files, RetentionFormat::Epoch)?;
    Ok(album)
}
