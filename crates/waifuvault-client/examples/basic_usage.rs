//! Basic usage example for the WaifuVault client
//!
//! This example demonstrates:
//! - Creating a bucket
//! - Uploading into it from a buffer and from a URL
//! - Reading file info in both retention formats
//! - Grouping files into a shared album
//! - Cleaning everything up again
//!
//! Run with: cargo run --example basic_usage
//! Set WAIFUVAULT_ENDPOINT to use another instance.

use waifuvault_client::{Config, GetFileOptions, ModifyEntryPayload, UploadOptions, WaifuVaultClient, DEFAULT_ENDPOINT};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let endpoint = std::env::var("WAIFUVAULT_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let client = WaifuVaultClient::new(Config::new(endpoint))?;

    // ==================== Bucket ====================

    println!("📦 Creating bucket...");
    let bucket = client.create_bucket().await?;
    println!("   ✅ Bucket token: {}", bucket.token);

    // ==================== Uploads ====================

    println!("\n📤 Uploading 'hello.txt'...");
    let hello = client
        .upload(
            &UploadOptions::from_bytes(b"Hello, World!".to_vec(), "hello.txt")
                .with_expires("1h")
                .in_bucket(&bucket.token),
        )
        .await?;
    println!("   ✅ {}", hello.url);

    println!("\n📤 Uploading from URL...");
    let remote = client
        .upload(
            &UploadOptions::from_url("https://waifuvault.moe/assets/custom/images/08.png")
                .with_hidden_filename()
                .with_password("hunter2")
                .in_bucket(&bucket.token),
        )
        .await?;
    println!("   ✅ {} (protected: {})", remote.url, remote.is_protected());

    // ==================== File Info ====================

    let info = client.file_info(&hello.token).await?;
    let formatted = client.file_info_formatted(&hello.token).await?;
    println!("\n📋 'hello.txt' expires at {:?}", info.retention_period.expires_at());
    println!("   ({})", formatted.retention_period.as_formatted().unwrap_or("unknown"));

    let data = client.get_file(&GetFileOptions::by_token(&hello.token)).await?;
    println!("   Content: {}", String::from_utf8_lossy(&data));

    match client
        .get_file(&GetFileOptions::by_token(&remote.token).with_password("wrong"))
        .await
    {
        Err(e) if e.is_incorrect_password() => println!("   🔒 Wrong password rejected"),
        Err(e) => println!("   ⚠️  {}", e),
        Ok(_) => println!("   ⚠️  Downloaded with the wrong password"),
    }

    client
        .modify_file(&hello.token, &ModifyEntryPayload::new().with_custom_expiry("2h"))
        .await?;

    // ==================== Albums ====================

    println!("\n🖼️  Creating album...");
    let album = client.create_album(&bucket.token, "demo").await?;
    let album = client
        .associate_files(&album.token, &[&hello.token, &remote.token])
        .await?;
    println!("   ✅ '{}' holds {} files", album.name, album.files.len());

    let public_url = client.share_album(&album.token).await?;
    println!("   🔗 Shared at {}", public_url);
    client.revoke_album(&album.token).await?;

    let archive = client.download_album(&album.token, &[]).await?;
    println!("   📥 Archive is {} bytes", archive.len());

    // ==================== Cleanup ====================

    println!("\n🧹 Cleaning up...");
    client.delete_album(&album.token, false).await?;
    println!("   Deleted hello.txt: {}", client.delete_file(&hello.token).await?);
    println!("   Deleted bucket: {}", client.delete_bucket(&bucket.token).await?);

    Ok(())
}
