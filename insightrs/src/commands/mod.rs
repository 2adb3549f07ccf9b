//! Native mode commands
//!
//! Each module adds one command family to [`Camera`](crate::Camera):
//!
//! | module        | commands                                          |
//! |---------------|---------------------------------------------------|
//! | [`execution`] | `SO` `GO` `SE` `SW` `RT` `SM`                     |
//! | [`file_job`]  | `LF` `TF` `RF` `WF` `DF` `GF` `SJ` `TJ` `RJ` `WJ` `DJ` `GJ` |
//! | [`image`]     | `RB` `RI` `WB` `WI`                               |
//! | [`settings`]  | `GV` `SI` `SF` `SR` `SS` `GI` `RS` `WS` `TS` `SL` `GL` |

pub mod execution;
pub mod file_job;
pub mod image;
pub mod settings;

use insightrs_core::{Command, Request, Status};

use crate::camera::Camera;
use crate::error::Result;

impl Camera {
    /// Send a bare request answered by a single `0`/`1` line (`GO`, `GL`)
    pub(crate) async fn read_flag<T>(
        &mut self,
        command: Command,
        from_wire: impl FnOnce(&str) -> insightrs_types::Result<T>,
    ) -> Result<T> {
        self.send_request(&Request::bare(command)).await?;
        let line = self.read_line().await?;
        let result = parse_flag(command, &line, from_wire);
        self.settle(result).await
    }
}

/// Parse a single-line `0`/`1` reply
///
/// These commands send the value in place of a status line. Anything that
/// is not a value is reported as the command's failure status.
fn parse_flag<T>(
    command: Command,
    line: &str,
    from_wire: impl FnOnce(&str) -> insightrs_types::Result<T>,
) -> Result<T> {
    if let Ok(value) = from_wire(line) {
        return Ok(value);
    }

    Status::check(command, line)?;

    Err(insightrs_core::Error::UnknownStatus {
        command,
        raw: line.trim().to_string(),
    }
    .into())
}
