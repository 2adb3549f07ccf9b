//! # insightrs-core
//!
//! Core protocol implementation for Cognex In-Sight native mode.
//!
//! This crate provides the low-level protocol primitives:
//! - Command definitions and per-command status messages
//! - Request framing and reply line reassembly
//! - The ASCII hex transfer format
//! - Session state
//! - Protocol constants

pub mod codec;
pub mod command;
pub mod constants;
pub mod error;
pub mod frame;
pub mod hexline;
pub mod session;
pub mod status;

pub use codec::{LineBuffer, Prompt};
pub use command::{Command, CommandFamily};
pub use error::{Error, Result};
pub use frame::Request;
pub use session::{Session, SessionState};
pub use status::Status;

pub use constants::DEFAULT_PORT;
