//! Type definitions for insightrs
//!
//! Arguments are validated when the value is built, so a request that
//! reaches the wire is always well formed.

pub mod cell;
pub mod error;
pub mod filename;
pub mod float;
pub mod job;
pub mod mode;
pub mod region;
pub mod system_info;
pub mod transfer;

pub use cell::{CellAddress, Column, ValueTarget};
pub use error::{Error, Result};
pub use filename::JobFileName;
pub use float::WireFloat;
pub use job::{EventCode, JobId};
pub use mode::{IpLock, OnlineState};
pub use region::Region;
pub use system_info::SystemInfo;
pub use transfer::{Checksum, NamedTransfer, Transfer};
