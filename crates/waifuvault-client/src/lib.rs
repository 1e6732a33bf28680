//! # WaifuVault Client SDK
//!
//! A client SDK for the WaifuVault temporary file hosting service.
//!
//! ## Features
//!
//! - **Uploads**: from a path, an in-memory buffer or a remote URL
//! - **File management**: info, download, modify (password, expiry), delete
//! - **Buckets**: group uploads under one token
//! - **Albums**: named, shareable subsets of a bucket, downloadable as zip
//!
//! ## Example
//!
//! ```rust,ignore
//! use waifuvault_client::{GetFileOptions, UploadOptions, WaifuVaultClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = WaifuVaultClient::public()?;
//!
//!     // Upload a buffer that expires in one hour
//!     let file = client
//!         .upload(&UploadOptions::from_bytes(b"Hello, World!".to_vec(), "hello.txt").with_expires("1h"))
//!         .await?;
//!     println!("Uploaded to {}", file.url);
//!
//!     // Download it again
//!     let data = client.get_file(&GetFileOptions::by_token(&file.token)).await?;
//!     println!("Content: {}", String::from_utf8_lossy(&data));
//!
//!     client.delete_file(&file.token).await?;
//!     Ok(())
//! }
//! ```

mod album;
mod bucket;
mod client;
mod config;
mod error;
mod types;
mod upload;

pub use client::WaifuVaultClient;
pub use config::{Config, DEFAULT_ENDPOINT};
pub use error::{ClientError, Result};
pub use types::*;
pub use upload::UploadOptions;
