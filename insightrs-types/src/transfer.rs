//! Bulk transfers: files, jobs, images and settings

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;

use crate::error::{Error, Result};

/// Transfer checksum, four ASCII hex digits
///
/// The camera computes it over the payload and checks it on upload. It is
/// carried as-is; this crate does not recompute it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Checksum(String);

impl Checksum {
    /// Number of hex digits
    pub const LEN: usize = 4;

    /// Parse a checksum, stored upper-case
    ///
    /// # Examples
    ///
    /// ```
    /// use insightrs_types::Checksum;
    ///
    /// assert_eq!(Checksum::parse("1a2b").unwrap().as_str(), "1A2B");
    /// assert!(Checksum::parse("12345").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();

        if text.len() != Self::LEN || !text.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::Validation(format!(
                "Checksum must be {} hex digits, got {text:?}",
                Self::LEN
            )));
        }

        Ok(Self(text.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Checksum {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payload of a read or write command
#[derive(Clone, PartialEq, Eq)]
pub struct Transfer {
    /// Size in bytes, as announced on the wire
    pub size: usize,

    /// Raw payload
    pub data: Bytes,

    pub checksum: Checksum,
}

impl Transfer {
    /// Build a transfer whose size is the payload length
    pub fn new(data: impl Into<Bytes>, checksum: Checksum) -> Self {
        let data = data.into();
        Self {
            size: data.len(),
            data,
            checksum,
        }
    }

    /// Check that the transfer can be uploaded
    pub fn validate(&self) -> Result<()> {
        if self.data.is_empty() {
            return Err(Error::Validation("Transfer data must not be empty".into()));
        }

        if self.size != self.data.len() {
            return Err(Error::Validation(format!(
                "Transfer size {} does not match data length {}",
                self.size,
                self.data.len()
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transfer")
            .field("size", &self.size)
            .field("data_len", &self.data.len())
            .field("checksum", &self.checksum.as_str())
            .finish()
    }
}

/// Transfer read from a file or job slot, with the name the camera reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedTransfer {
    pub name: String,
    pub transfer: Transfer,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checksum() -> Checksum {
        Checksum::parse("00FF").unwrap()
    }

    #[test]
    fn test_checksum_parse() {
        assert_eq!(Checksum::parse(" beef\r").unwrap().to_string(), "BEEF");
        assert!(Checksum::parse("").is_err());
        assert!(Checksum::parse("12G4").is_err());
        assert!("ABC".parse::<Checksum>().is_err());
    }

    #[test]
    fn test_transfer_new() {
        let transfer = Transfer::new(vec![1, 2, 3], checksum());
        assert_eq!(transfer.size, 3);
        assert!(transfer.validate().is_ok());
    }

    #[test]
    fn test_transfer_size_mismatch() {
        let mut transfer = Transfer::new(vec![1, 2, 3], checksum());
        transfer.size = 4;
        assert!(transfer.validate().is_err());
    }

    #[test]
    fn test_transfer_empty() {
        let transfer = Transfer::new(Vec::new(), checksum());
        assert!(transfer.validate().is_err());
    }
}
