//! Decimal rendering of float arguments

use std::fmt;

/// An `f64` written in plain decimal notation
///
/// The sensor does not parse exponents, so `1e16` goes out as
/// `10000000000000000.0`. Whole numbers keep a trailing `.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireFloat(pub f64);

impl fmt::Display for WireFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.to_string();
        if self.0.is_finite() && !text.contains('.') {
            write!(f, "{text}.0")
        } else {
            f.write_str(&text)
        }
    }
}
