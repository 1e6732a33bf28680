//! Shared fixtures for the client integration tests
#![allow(dead_code)]

use serde_json::{json, Value};
use waifuvault_client::{Config, WaifuVaultClient};
use wiremock::MockServer;

pub const FILE_TOKEN: &str = "123-fake-street";
pub const BUCKET_TOKEN: &str = "8c3d4527-4cea-4cb8-8171-002b158693ab";
pub const ALBUM_TOKEN: &str = "3ed6dafa-b56a-4207-b004-852abb6fea11";
pub const PUBLIC_TOKEN: &str = "c18ff3cb-442d-44e7-b5d1-c43a83b3a1a4";

/// Start a mock server and a client pointed at it
pub async fn setup() -> (MockServer, WaifuVaultClient) {
    let server = MockServer::start().await;
    let client = WaifuVaultClient::new(Config::new(server.uri())).unwrap();
    (server, client)
}

pub fn file_json(token: &str, retention: Value) -> Value {
    json!({
        "token": token,
        "url": "https://waifuvault.moe/f/1710111505084/08.png",
        "retentionPeriod": retention,
        "bucket": BUCKET_TOKEN,
        "id": 1,
        "views": 0,
        "options": {
            "hideFilename": false,
            "oneTimeDownload": false,
            "protected": false
        }
    })
}

pub fn bucket_json() -> Value {
    json!({
        "token": BUCKET_TOKEN,
        "files": [file_json(FILE_TOKEN, json!(1234))],
        "albums": []
    })
}

pub fn album_json(name: &str, files: Vec<Value>) -> Value {
    json!({
        "token": ALBUM_TOKEN,
        "bucketToken": BUCKET_TOKEN,
        "publicToken": PUBLIC_TOKEN,
        "name": name,
        "files": files,
        "dateCreated": 0
    })
}

pub fn error_json() -> Value {
    json!({
        "status": 400,
        "name": "BAD_REQUEST",
        "message": "Something went wrong"
    })
}

pub const ERROR_TEXT: &str = "Error 400 (BAD_REQUEST): Something went wrong";
