//! Reply framing
//!
//! Replies arrive as CRLF terminated lines, split across TCP reads at
//! arbitrary points. [`LineBuffer`] reassembles them. The login prompts are
//! the exception: `User: ` and `Password: ` are sent without a terminator.

use bytes::{Buf, BytesMut};
use tracing::{debug, trace};

/// Outcome of waiting for a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Prompt seen and consumed
    Ready,

    /// Buffer holds a prefix of the prompt, more bytes needed
    Pending,

    /// Buffer holds something else
    Mismatch(String),
}

/// Receive buffer that yields complete lines
#[derive(Debug, Default)]
pub struct LineBuffer {
    buf: BytesMut,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append received bytes
    pub fn extend(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Number of buffered bytes
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Take the next complete line without its terminator
    ///
    /// Lines end with CRLF; a bare LF is accepted too. Non-ASCII bytes are
    /// replaced rather than rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use insightrs_core::LineBuffer;
    ///
    /// let mut buf = LineBuffer::new();
    /// buf.extend(b"1\r\nA00");
    /// assert_eq!(buf.next_line().as_deref(), Some("1"));
    /// assert_eq!(buf.next_line(), None);
    ///
    /// buf.extend(b"5\r\n");
    /// assert_eq!(buf.next_line().as_deref(), Some("A005"));
    /// ```
    pub fn next_line(&mut self) -> Option<String> {
        let end = self.buf.iter().position(|&b| b == b'\n')?;

        let raw = self.buf.split_to(end + 1);
        let content = match raw[..end].last() {
            Some(b'\r') => &raw[..end - 1],
            _ => &raw[..end],
        };

        let line = String::from_utf8_lossy(content).into_owned();
        trace!("< {}", line);
        Some(line)
    }

    /// Consume `prompt` if the buffer starts with it
    ///
    /// Trailing spaces and an optional CRLF after the prompt are consumed
    /// as well.
    pub fn take_prompt(&mut self, prompt: &str) -> Prompt {
        let prompt = prompt.as_bytes();

        if self.buf.starts_with(prompt) {
            self.buf.advance(prompt.len());
            let skip = self
                .buf
                .iter()
                .take_while(|&&b| matches!(b, b' ' | b'\r' | b'\n'))
                .count();
            self.buf.advance(skip);
            trace!("< {} (prompt)", String::from_utf8_lossy(prompt));
            return Prompt::Ready;
        }

        if prompt.starts_with(&self.buf) {
            return Prompt::Pending;
        }

        Prompt::Mismatch(String::from_utf8_lossy(&self.buf).trim_end().to_string())
    }

    /// Drop everything buffered
    pub fn discard(&mut self) {
        if !self.buf.is_empty() {
            debug!(
                "Discarding {} stale bytes: {:?}",
                self.buf.len(),
                String::from_utf8_lossy(&self.buf)
            );
            self.buf.clear();
        }
    }
}
