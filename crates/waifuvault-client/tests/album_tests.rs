//! Album operation tests against a mock WaifuVault server

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_create_album() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(format!("/rest/album/{}", BUCKET_TOKEN)))
        .and(body_json(json!({ "name": "album1", "bucketToken": BUCKET_TOKEN })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(album_json("album1", vec![file_json(FILE_TOKEN, json!(1234))])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let album = client.create_album(BUCKET_TOKEN, "album1").await.unwrap();
    assert_eq!(album.token, ALBUM_TOKEN);
    assert_eq!(album.name, "album1");
    assert_eq!(album.bucket_token, BUCKET_TOKEN);
    assert_eq!(album.files.len(), 1);
    assert!(album.is_shared());
}

#[tokio::test]
async fn test_create_album_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_json()))
        .mount(&server)
        .await;

    let err = client.create_album(BUCKET_TOKEN, "album1").await.unwrap_err();
    assert_eq!(err.to_string(), ERROR_TEXT);
}

#[tokio::test]
async fn test_associate_files() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(format!("/rest/album/{}/associate", ALBUM_TOKEN)))
        .and(body_json(json!({ "fileTokens": [FILE_TOKEN] })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(album_json("album1", vec![file_json(FILE_TOKEN, json!(1234))])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let album = client.associate_files(ALBUM_TOKEN, &[FILE_TOKEN]).await.unwrap();
    assert_eq!(album.files[0].token, FILE_TOKEN);
}

#[tokio::test]
async fn test_disassociate_files() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(format!("/rest/album/{}/disassociate", ALBUM_TOKEN)))
        .and(body_json(json!({ "fileTokens": [FILE_TOKEN, "another-token"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(album_json("album1", vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let tokens = vec![FILE_TOKEN.to_string(), "another-token".to_string()];
    let album = client.disassociate_files(ALBUM_TOKEN, &tokens).await.unwrap();
    assert!(album.files.is_empty());
}

#[tokio::test]
async fn test_get_album() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/rest/album/{}", ALBUM_TOKEN)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(album_json("album1", vec![file_json(FILE_TOKEN, json!(1234))])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let album = client.get_album(ALBUM_TOKEN).await.unwrap();
    assert_eq!(album.public_token.as_deref(), Some(PUBLIC_TOKEN));
    assert_eq!(album.created_at().unwrap().timestamp(), 0);
}

#[tokio::test]
async fn test_delete_album_with_and_without_files() {
    let (server, client) = setup().await;

    for delete_files in ["true", "false"] {
        Mock::given(method("DELETE"))
            .and(path(format!("/rest/album/{}", ALBUM_TOKEN)))
            .and(query_param("deleteFiles", delete_files))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "description": "deleted"
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let result = client.delete_album(ALBUM_TOKEN, true).await.unwrap();
    assert!(result.success);
    assert_eq!(result.description, "deleted");

    let result = client.delete_album(ALBUM_TOKEN, false).await.unwrap();
    assert!(result.success);
}

#[tokio::test]
async fn test_share_album_returns_public_url() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/rest/album/share/{}", ALBUM_TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "description": "sharedAlbum.foo"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let url = client.share_album(ALBUM_TOKEN).await.unwrap();
    assert_eq!(url, "sharedAlbum.foo");
}

#[tokio::test]
async fn test_revoke_album() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/rest/album/revoke/{}", ALBUM_TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "description": "album unshared"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.revoke_album(ALBUM_TOKEN).await.unwrap();
    assert!(result.success);
}

#[tokio::test]
async fn test_share_and_revoke_errors() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_json()))
        .mount(&server)
        .await;

    assert_eq!(client.share_album(ALBUM_TOKEN).await.unwrap_err().to_string(), ERROR_TEXT);
    assert_eq!(client.revoke_album(ALBUM_TOKEN).await.unwrap_err().to_string(), ERROR_TEXT);
}

#[tokio::test]
async fn test_download_selected_files() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(format!("/rest/album/download/{}", ALBUM_TOKEN)))
        .and(body_json(json!([1])))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"fake zip content".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let data = client.download_album(ALBUM_TOKEN, &[1]).await.unwrap();
    assert_eq!(data.as_ref(), b"fake zip content");
}

#[tokio::test]
async fn test_download_whole_album() {
    let (server, client) = setup().await;
    // Not valid JSON, so a JSON decode would fail
    let archive: Vec<u8> = vec![0x50, 0x4b, 0x03, 0x04, 0xff, 0x00, 0x7b];

    Mock::given(method("POST"))
        .and(path(format!("/rest/album/download/{}", ALBUM_TOKEN)))
        .and(body_json(json!([])))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(archive.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let data = client.download_album(ALBUM_TOKEN, &[]).await.unwrap();
    assert_eq!(data.as_ref(), archive.as_slice());
}

#[tokio::test]
async fn test_download_album_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_json()))
        .mount(&server)
        .await;

    let err = client.download_album(ALBUM_TOKEN, &[]).await.unwrap_err();
    assert_eq!(err.to_string(), ERROR_TEXT);
}
