//! Two-state settings sent and returned as `0`/`1`

use std::fmt;

use crate::error::{Error, Result};

/// Online/Offline state of the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnlineState {
    Offline,
    Online,
}

/// IP address lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpLock {
    Unlocked,
    Locked,
}

macro_rules! wire_flag {
    ($ty:ident, $off:ident, $on:ident) => {
        impl $ty {
            /// Value sent on the wire
            pub fn as_wire(self) -> u8 {
                match self {
                    Self::$off => 0,
                    Self::$on => 1,
                }
            }

            /// Parse a `0`/`1` reply line
            pub fn from_wire(line: &str) -> Result<Self> {
                match line.trim() {
                    "0" => Ok(Self::$off),
                    "1" => Ok(Self::$on),
                    other => Err(Error::Parse(format!(
                        concat!("Unknown ", stringify!($ty), ": {:?}"),
                        other
                    ))),
                }
            }
        }

        impl From<bool> for $ty {
            fn from(on: bool) -> Self {
                if on { Self::$on } else { Self::$off }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:?}", self)
            }
        }
    };
}

wire_flag!(OnlineState, Offline, Online);
wire_flag!(IpLock, Unlocked, Locked);

impl OnlineState {
    pub fn is_online(self) -> bool {
        self == Self::Online
    }
}

impl IpLock {
    pub fn is_locked(self) -> bool {
        self == Self::Locked
    }
}
