//! Request framing
//!
//! A request is one or more ASCII lines, each terminated by CRLF. The
//! first line carries the command mnemonic and its inline argument, bulk
//! transfers follow with name, size, hex data and checksum lines.

use bytes::{BufMut, BytesMut};
use std::fmt;
use tracing::trace;

use crate::{
    command::Command,
    error::{Error, Result},
    hexline,
};

/// Line terminator used in both directions
pub const LINE_TERMINATOR: &[u8] = b"\r\n";

/// Native mode request
///
/// # Examples
///
/// ```
/// use insightrs_core::{Command, Request};
///
/// let request = Request::new(Command::LoadFile, "myjob.job").unwrap();
/// assert_eq!(&request.encode()[..], b"LFmyjob.job\r\n");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Request {
    command: Command,
    lines: Vec<String>,
}

impl Request {
    /// Create a request with an inline argument appended to the mnemonic
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the argument is not printable
    /// ASCII or contains a line break.
    pub fn new(command: Command, argument: impl AsRef<str>) -> Result<Self> {
        let argument = argument.as_ref();
        validate_line(argument)?;

        Ok(Self {
            command,
            lines: vec![format!("{}{}", command.mnemonic(), argument)],
        })
    }

    /// Create a request with no argument
    pub fn bare(command: Command) -> Self {
        Self {
            command,
            lines: vec![command.mnemonic().to_string()],
        }
    }

    /// Append an extra line (name, size, checksum)
    pub fn line(mut self, line: impl Into<String>) -> Result<Self> {
        let line = line.into();
        validate_line(&line)?;
        self.lines.push(line);
        Ok(self)
    }

    /// Append `data` as hex lines of at most 80 characters
    pub fn hex_data(mut self, data: &[u8]) -> Self {
        self.lines.extend(hexline::encode_lines(data));
        self
    }

    /// Command this request carries
    pub fn command(&self) -> Command {
        self.command
    }

    /// Lines of the request, without terminators
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Encode to bytes, every line terminated by CRLF
    pub fn encode(&self) -> BytesMut {
        let size: usize = self.lines.iter().map(|l| l.len() + LINE_TERMINATOR.len()).sum();
        let mut buf = BytesMut::with_capacity(size);

        for line in &self.lines {
            trace!(command = self.command.mnemonic(), "> {}", line);
            buf.put_slice(line.as_bytes());
            buf.put_slice(LINE_TERMINATOR);
        }

        buf
    }

    /// Total encoded size in bytes
    pub fn size(&self) -> usize {
        self.lines.iter().map(|l| l.len() + LINE_TERMINATOR.len()).sum()
    }
}

/// Check that text can be sent as a single request line
pub fn validate_line(text: &str) -> Result<()> {
    if let Some(c) = text.chars().find(|c| !c.is_ascii() || c.is_ascii_control()) {
        return Err(Error::InvalidArgument(format!(
            "{text:?} contains {c:?}, only printable ASCII is allowed"
        )));
    }
    Ok(())
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("command", &self.command)
            .field("head", &self.lines[0])
            .field("lines", &self.lines.len())
            .field("size", &self.size())
            .finish()
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Request[{}](lines={})", self.command, self.lines.len())
    }
}
