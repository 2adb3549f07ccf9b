//! High-level error types

use insightrs_core::Status;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Core protocol error: {0}")]
    Core(#[from] insightrs_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] insightrs_transport::Error),

    #[error("Type error: {0}")]
    Types(#[from] insightrs_types::Error),

    #[error("Camera not connected")]
    NotConnected,

    #[error("Login failed: {0}")]
    Login(String),

    #[error("Authentication failed: camera replied {0:?}")]
    AuthenticationFailed(String),
}

impl Error {
    /// Status code reported by the camera, if the command was rejected
    pub fn status(&self) -> Option<Status> {
        match self {
            Self::Core(e) => e.status(),
            _ => None,
        }
    }

    /// Check if the camera rejected the command because of missing access rights
    pub fn is_access_denied(&self) -> bool {
        self.status() == Some(Status::AccessDenied)
    }

    /// Check if error is recoverable (the connection is still usable)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Core(e) => e.is_recoverable(),
            Self::Types(_) => true,
            Self::Transport(insightrs_transport::Error::ReadTimeout) => true,
            _ => false,
        }
    }

    /// Check if error requires reconnection
    pub fn requires_reconnect(&self) -> bool {
        match self {
            Self::Core(e) => e.requires_reconnect(),
            Self::Transport(e) => e.is_disconnect(),
            Self::NotConnected | Self::Login(_) | Self::AuthenticationFailed(_) => true,
            Self::Types(_) => false,
        }
    }
}
