//! Error types for insightrs-core

use crate::{command::Command, status::Status};

/// Result type alias for insightrs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core protocol errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Command mnemonic is not part of the native mode command set
    #[error("Unknown command mnemonic: {0:?}")]
    UnknownCommand(String),

    /// Camera answered with a documented failure code
    #[error("{command} failed with status {status}: {message}")]
    Device {
        command: Command,
        status: Status,
        message: &'static str,
    },

    /// Camera answered with something that is not a status code for this command
    #[error("{command} returned unknown status code: {raw:?}")]
    UnknownStatus {
        command: Command,
        raw: String,
    },

    /// Reply did not have the expected shape
    #[error("Malformed reply to {command}: {reason}")]
    MalformedReply {
        command: Command,
        reason: String,
    },

    /// Argument cannot be put on the wire
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Hex payload line could not be decoded
    #[error("Invalid hex data: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// Invalid session state
    #[error("Invalid session state: {0}")]
    InvalidSessionState(String),

    /// Session not initialized
    #[error("Session not initialized - connect to camera first")]
    SessionNotInitialized,
}

impl Error {
    /// Build a malformed reply error
    pub fn malformed(command: Command, reason: impl Into<String>) -> Self {
        Self::MalformedReply {
            command,
            reason: reason.into(),
        }
    }

    /// Status reported by the camera, if this error came from one
    pub fn status(&self) -> Option<Status> {
        match self {
            Self::Device { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if error is recoverable (the connection is still usable)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Device { .. } | Self::InvalidArgument(_) | Self::UnknownCommand(_)
        )
    }

    /// Check if error requires reconnection
    pub fn requires_reconnect(&self) -> bool {
        matches!(
            self,
            Self::SessionNotInitialized
                | Self::InvalidSessionState(_)
                | Self::MalformedReply { .. }
                | Self::UnknownStatus { .. }
                | Self::HexDecode(_)
        )
    }
}
