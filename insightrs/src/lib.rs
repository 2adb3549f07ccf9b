//! # insightrs
//!
//! Rust client for the Cognex In-Sight native mode protocol.
//!
//! ## Features
//!
//! - Async/await API using Tokio
//! - Validated arguments: cell addresses, job slots and event codes are
//!   checked before anything reaches the wire
//! - Typed errors carrying the command, status code and documented message
//! - All native mode commands (execution, file & job, image, settings)
//!
//! ## Quick Start
//!
//! ```no_run
//! use insightrs::{Camera, EventCode, ValueTarget};
//!
//! #[tokio::main]
//! async fn main() -> insightrs::Result<()> {
//!     // Connect and log in as admin
//!     let mut camera = Camera::new("192.168.0.10", 23);
//!     camera.connect().await?;
//!
//!     // Trigger an inspection and read a result cell
//!     camera.set_event_and_wait(EventCode::ACQUIRE).await?;
//!     let count = camera.get_value(&ValueTarget::cell('A', 5)?).await?;
//!     println!("Count: {}", count);
//!
//!     // Disconnect
//!     camera.disconnect().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod camera;
pub mod commands;
pub mod error;

#[cfg(test)]
mod testing;

// Re-exports
pub use camera::Camera;
pub use error::{Error, Result};

// Re-export types
pub use insightrs_core::{Command, CommandFamily, Request, Session, SessionState, Status};
pub use insightrs_transport::{TcpTransport, Transport};
pub use insightrs_types::{
    CellAddress, Checksum, Column, EventCode, IpLock, JobFileName, JobId, NamedTransfer,
    OnlineState, Region, SystemInfo, Transfer, ValueTarget,
};
