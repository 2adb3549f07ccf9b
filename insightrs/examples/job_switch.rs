//! Switch the active job and adjust a control
//!
//! Usage: `job_switch <job file> [cell] [value]`

use std::time::Duration;

use insightrs::{Camera, OnlineState, ValueTarget};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let ip = std::env::var("CAMERA_IP").unwrap_or_else(|_| "192.168.0.10".to_string());
    let user = std::env::var("CAMERA_USER").unwrap_or_else(|_| "admin".to_string());
    let password = std::env::var("CAMERA_PASSWORD").unwrap_or_default();

    let mut args = std::env::args().skip(1);
    let job = args.next().unwrap_or_else(|| "RAMDisk/Product.job".to_string());
    let cell = args.next().unwrap_or_else(|| "A005".to_string());
    let value: i64 = args.next().map(|v| v.parse::<i64>()).transpose()?.unwrap_or(0);

    let mut camera = Camera::new(ip, 23)
        .with_credentials(user, password)
        .with_timeout(Duration::from_secs(10));
    camera.connect().await?;

    println!("{}", camera.get_info().await?);

    let active = camera.get_file().await.unwrap_or_default();
    if !active.eq_ignore_ascii_case(&job) {
        println!("Switching from {:?} to {:?}...", active, job);

        let was_online = camera.get_online().await?.is_online();
        if was_online {
            camera.set_online(OnlineState::Offline).await?;
        }

        camera.load_file(&job).await?;

        if was_online {
            camera.set_online(OnlineState::Online).await?;
        }
    }

    let target = ValueTarget::Cell(cell.parse()?);
    println!("{} was {}", target, camera.get_value(&target).await?);

    camera.set_integer(&target, value).await?;
    println!("{} is now {}", target, camera.get_value(&target).await?);

    camera.disconnect().await?;

    Ok(())
}
