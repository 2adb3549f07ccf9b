//! Job file names
//!
//! Names may carry a storage prefix: `RAMDisk/Test.job` or
//! `SDCARD/Test.job`. Without one the camera uses flash memory or the
//! configured job server.

use std::fmt;

use crate::error::{Error, Result};

/// File name accepted by the file commands
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobFileName(String);

impl JobFileName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(Error::Validation("The filename is missing".into()));
        }

        Ok(Self(name))
    }

    /// Name that must end in `.job` (store)
    pub fn job(name: impl Into<String>) -> Result<Self> {
        let name = Self::new(name)?;
        if !name.has_extension(&["JOB"]) {
            return Err(Error::Validation(format!(
                "The filename {:?} must have a .JOB extension",
                name.0
            )));
        }
        Ok(name)
    }

    /// Name that must end in `.job` or `.cxd` (delete)
    pub fn job_or_cxd(name: impl Into<String>) -> Result<Self> {
        let name = Self::new(name)?;
        if !name.has_extension(&["JOB", "CXD"]) {
            return Err(Error::Validation(format!(
                "The filename {:?} must have a .JOB or .CXD extension",
                name.0
            )));
        }
        Ok(name)
    }

    /// Case-insensitive extension check
    pub fn has_extension(&self, extensions: &[&str]) -> bool {
        match self.0.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => {
                extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
            }
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
