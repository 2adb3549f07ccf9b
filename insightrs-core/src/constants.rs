//! Protocol constants

use std::time::Duration;

/// Native mode telnet port
pub const DEFAULT_PORT: u16 = 23;

/// Factory default user
pub const DEFAULT_USER: &str = "admin";

/// Factory default password (empty)
pub const DEFAULT_PASSWORD: &str = "";

/// Default connection timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default read timeout
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// How long to keep collecting lines for replies of unknown length (GI, SE)
pub const DEFAULT_TRAILING_WINDOW: Duration = Duration::from_millis(200);

/// Maximum characters per hex data line
pub const HEX_LINE_WIDTH: usize = 80;

/// Largest payload accepted from a size line (64 MiB)
///
/// Well above a full resolution image; anything larger is a corrupt reply.
pub const MAX_TRANSFER_SIZE: usize = 64 * 1024 * 1024;

/// Highest spreadsheet row
pub const MAX_ROW: u16 = 399;

/// Highest job slot
pub const MAX_JOB_ID: u16 = 999;

/// Highest event code (8 = acquire)
pub const MAX_EVENT_CODE: u8 = 8;

/// Login exchange
pub mod login {
    /// First line sent by the camera starts with this
    pub const WELCOME: &str = "Welcome";

    /// User name prompt (not line terminated)
    pub const USER_PROMPT: &str = "User:";

    /// Password prompt (not line terminated)
    pub const PASSWORD_PROMPT: &str = "Password:";

    /// Sent after a successful login
    pub const LOGGED_IN: &str = "User Logged In";
}
