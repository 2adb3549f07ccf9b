//! Job slots and spreadsheet events

use std::fmt;
use std::str::FromStr;

use insightrs_core::constants::{MAX_EVENT_CODE, MAX_JOB_ID};

use crate::error::{Error, Result};

/// Job slot in flash memory, 0 to 999
///
/// Jobs saved with a numerical prefix (e.g. `12Inspect.job`) can be
/// addressed by that number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(u16);

impl JobId {
    pub fn new(id: u16) -> Result<Self> {
        if id > MAX_JOB_ID {
            return Err(Error::Validation(format!(
                "The job ID must be between 0 and {MAX_JOB_ID} (inclusive), got {id}"
            )));
        }
        Ok(Self(id))
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for JobId {
    type Error = Error;

    fn try_from(id: u16) -> Result<Self> {
        Self::new(id)
    }
}

impl FromStr for JobId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let id = s
            .trim()
            .parse::<u16>()
            .map_err(|e| Error::Parse(format!("Invalid job ID {s:?}: {e}")))?;
        Self::new(id)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Spreadsheet event: soft triggers 0 to 7, or 8 to acquire an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventCode(u8);

impl EventCode {
    /// Acquire an image and update the spreadsheet
    ///
    /// Needs the AcquireImage trigger set to External, Manual or Network.
    pub const ACQUIRE: EventCode = EventCode(MAX_EVENT_CODE);

    pub fn new(code: u8) -> Result<Self> {
        if code > MAX_EVENT_CODE {
            return Err(Error::Validation(format!(
                "The event code must be between 0 and {MAX_EVENT_CODE} (inclusive), got {code}"
            )));
        }
        Ok(Self(code))
    }

    /// Soft trigger `Soft 0` .. `Soft 7`
    pub fn soft(n: u8) -> Result<Self> {
        if n >= MAX_EVENT_CODE {
            return Err(Error::Validation(format!(
                "Soft triggers are numbered 0 to {}, got {n}",
                MAX_EVENT_CODE - 1
            )));
        }
        Ok(Self(n))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_acquire(self) -> bool {
        self == Self::ACQUIRE
    }
}

impl TryFrom<u8> for EventCode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::new(code)
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
