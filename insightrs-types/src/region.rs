//! EditRegion control values

use std::fmt;

use crate::error::{Error, Result};
use crate::float::WireFloat;

/// Region of an EditRegion control, in image coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Origin row offset
    pub row_offset: f64,
    /// Origin column offset
    pub col_offset: f64,
    /// Extent along the region's y-axis
    pub high: f64,
    /// Extent along the region's x-axis
    pub wide: f64,
    /// Orientation in degrees
    pub angle: f64,
    /// Curvature
    pub curve: f64,
}

impl Region {
    pub fn new(row_offset: f64, col_offset: f64, high: f64, wide: f64, angle: f64, curve: f64) -> Self {
        Self {
            row_offset,
            col_offset,
            high,
            wide,
            angle,
            curve,
        }
    }

    /// Reject NaN and infinities, which the camera cannot parse
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("row_offset", self.row_offset),
            ("col_offset", self.col_offset),
            ("high", self.high),
            ("wide", self.wide),
            ("angle", self.angle),
            ("curve", self.curve),
        ];

        match fields.iter().find(|(_, v)| !v.is_finite()) {
            Some((name, value)) => Err(Error::Validation(format!(
                "Region {name} must be finite, got {value}"
            ))),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Region {
    /// Space separated, in wire order, without exponents
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            WireFloat(self.row_offset),
            WireFloat(self.col_offset),
            WireFloat(self.high),
            WireFloat(self.wide),
            WireFloat(self.angle),
            WireFloat(self.curve)
        )
    }
}
