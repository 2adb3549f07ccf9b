//! Status codes returned as the first line of every reply

use std::fmt;

use crate::{
    command::Command,
    error::{Error, Result},
};

/// Reply status code
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Status {
    Success = 1,
    Unrecognized = 0,
    InvalidArgument = -1,
    ExecutionFailed = -2,
    ChecksumFailed = -3,
    OutOfMemory = -4,
    OnlineBlocked = -5,
    AccessDenied = -6,
}

impl Status {
    /// Numeric code as sent by the camera
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Map a numeric code
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Success),
            0 => Some(Self::Unrecognized),
            -1 => Some(Self::InvalidArgument),
            -2 => Some(Self::ExecutionFailed),
            -3 => Some(Self::ChecksumFailed),
            -4 => Some(Self::OutOfMemory),
            -5 => Some(Self::OnlineBlocked),
            -6 => Some(Self::AccessDenied),
            _ => None,
        }
    }

    /// Parse a status line for `command`
    ///
    /// Surrounding whitespace is ignored. Anything that is not one of the
    /// known codes yields [`Error::UnknownStatus`].
    pub fn parse(command: Command, line: &str) -> Result<Self> {
        line.trim()
            .parse::<i32>()
            .ok()
            .and_then(Self::from_code)
            .ok_or_else(|| Error::UnknownStatus {
                command,
                raw: line.to_string(),
            })
    }

    /// Check a status line, turning failure codes into errors
    ///
    /// # Errors
    ///
    /// - [`Error::Device`] when the code is one `command` documents
    /// - [`Error::UnknownStatus`] for any other non-success reply
    ///
    /// # Examples
    ///
    /// ```
    /// use insightrs_core::{Command, Status};
    ///
    /// assert!(Status::check(Command::LoadFile, "1").is_ok());
    ///
    /// let err = Status::check(Command::LoadFile, "-2").unwrap_err();
    /// assert_eq!(err.status(), Some(Status::ExecutionFailed));
    /// ```
    pub fn check(command: Command, line: &str) -> Result<()> {
        let status = Self::parse(command, line)?;

        if status == Self::Success {
            return Ok(());
        }

        match command.status_message(status.code()) {
            Some(message) => Err(Error::Device {
                command,
                status,
                message,
            }),
            None => Err(Error::UnknownStatus {
                command,
                raw: line.to_string(),
            }),
        }
    }

    /// Check if this is a success status
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!(Status::parse(Command::GetValue, "1").unwrap(), Status::Success);
        assert_eq!(Status::parse(Command::GetValue, " -6 ").unwrap(), Status::AccessDenied);
        assert_eq!(Status::parse(Command::GetValue, "0\r").unwrap(), Status::Unrecognized);
    }

    #[test]
    fn test_parse_garbage() {
        let result = Status::parse(Command::GetValue, "Invalid");
        assert!(matches!(result, Err(Error::UnknownStatus { raw, .. }) if raw == "Invalid"));

        assert!(Status::parse(Command::GetValue, "7").is_err());
        assert!(Status::parse(Command::GetValue, "").is_err());
    }

    #[test]
    fn test_check_documented_failure() {
        let err = Status::check(Command::WriteFile, "-3").unwrap_err();

        match err {
            Error::Device {
                command,
                status,
                message,
            } => {
                assert_eq!(command, Command::WriteFile);
                assert_eq!(status, Status::ChecksumFailed);
                assert!(message.contains("checksum"));
            }
            other => panic!("Expected Device error, got {other:?}"),
        }
    }

    #[test]
    fn test_check_undocumented_failure() {
        // GF does not document -6
        let err = Status::check(Command::GetFile, "-6").unwrap_err();
        assert!(matches!(err, Error::UnknownStatus { .. }));
    }

    #[test]
    fn test_code_roundtrip() {
        for code in -6..=1 {
            let status = Status::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
        assert_eq!(Status::from_code(2), None);
    }
}
