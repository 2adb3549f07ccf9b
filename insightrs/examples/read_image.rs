//! Fetch the current image and save it as a BMP file

use insightrs::Camera;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let ip = std::env::var("CAMERA_IP").unwrap_or_else(|_| "192.168.0.10".to_string());
    let user = std::env::var("CAMERA_USER").unwrap_or_else(|_| "admin".to_string());
    let password = std::env::var("CAMERA_PASSWORD").unwrap_or_default();
    let path = std::env::args().nth(1).unwrap_or_else(|| "image.bmp".to_string());

    let mut camera = Camera::new(ip, 23).with_credentials(user, password);
    camera.connect().await?;

    let image = camera.read_bmp().await?;
    std::fs::write(&path, &image.data)?;

    println!("Saved {} bytes to {} (checksum {})", image.size, path, image.checksum);

    camera.disconnect().await?;

    Ok(())
}
