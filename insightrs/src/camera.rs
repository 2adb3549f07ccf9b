//! High-level camera interface
//!
//! [`Camera`] owns the connection and the request/reply plumbing. The
//! commands themselves live in [`crate::commands`], one module per family.

use std::time::Duration;

use bytes::BytesMut;
use tracing::{debug, info, trace, warn};

use insightrs_core::{
    Command, LineBuffer, Prompt, Request, Session, Status,
    constants::{
        DEFAULT_PASSWORD, DEFAULT_READ_TIMEOUT, DEFAULT_TRAILING_WINDOW, DEFAULT_USER,
        MAX_TRANSFER_SIZE, login,
    },
    frame::{self, LINE_TERMINATOR},
    hexline,
};
use insightrs_transport::{TcpTransport, Transport};
use insightrs_types::{Checksum, Transfer};

use crate::error::{Error, Result};

/// Upper bound for the receive buffer reserved from an announced size
const PREALLOCATE_LIMIT: usize = 1024 * 1024;

/// Cognex In-Sight camera
///
/// High-level interface for the native mode protocol. One `Camera` is one
/// telnet session; commands are strictly request/reply.
///
/// # Examples
///
/// ```no_run
/// use insightrs::{Camera, OnlineState};
///
/// #[tokio::main]
/// async fn main() -> insightrs::Result<()> {
///     let mut camera = Camera::new("192.168.0.10", 23);
///
///     camera.connect().await?;
///
///     if camera.get_online().await? == OnlineState::Online {
///         println!("Active job: {}", camera.get_file().await?);
///     }
///
///     camera.disconnect().await?;
///     Ok(())
/// }
/// ```
pub struct Camera {
    transport: Box<dyn Transport>,
    session: Session,
    buffer: LineBuffer,
    user: String,
    password: String,
    timeout: Duration,
    trailing_window: Duration,
}

impl Camera {
    /// Create a new camera instance (TCP transport)
    pub fn new(ip: impl Into<String>, port: u16) -> Self {
        Self::with_transport(Box::new(TcpTransport::new(ip, port)))
    }

    /// Create a camera over a custom transport
    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            session: Session::new(),
            buffer: LineBuffer::new(),
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            timeout: DEFAULT_READ_TIMEOUT,
            trailing_window: DEFAULT_TRAILING_WINDOW,
        }
    }

    /// Set login credentials (default: `admin`, empty password)
    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = user.into();
        self.password = password.into();
        self
    }

    /// Set reply timeout
    ///
    /// `SW` waits for the inspection to finish, so slow jobs need more.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set how long to wait for more lines of a reply with no length (`GI`)
    pub fn with_trailing_window(mut self, window: Duration) -> Self {
        self.trailing_window = window;
        self
    }

    /// Check if connected and logged in
    pub fn is_connected(&self) -> bool {
        self.session.is_logged_in() && self.transport.is_connected()
    }

    /// Session handle (state, user)
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Remote address of the camera
    pub fn remote_addr(&self) -> String {
        self.transport.remote_addr()
    }

    /// Connect to the camera and log in
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network connection fails
    /// - The camera does not greet with the welcome banner
    /// - The credentials are rejected
    pub async fn connect(&mut self) -> Result<()> {
        info!("Connecting to {}...", self.transport.remote_addr());

        self.transport.connect().await?;

        if let Err(e) = self.login().await {
            warn!("Login to {} failed: {}", self.transport.remote_addr(), e);
            let _ = self.transport.disconnect().await;
            self.session.close();
            self.buffer.discard();
            return Err(e);
        }

        info!("Logged in to {} as {:?}", self.transport.remote_addr(), self.user);
        Ok(())
    }

    /// Disconnect from camera
    ///
    /// Native mode has no logout command; the socket is closed.
    pub async fn disconnect(&mut self) -> Result<()> {
        if !self.transport.is_connected() && !self.session.is_connected() {
            return Ok(());
        }

        info!("Disconnecting from {}...", self.transport.remote_addr());

        self.session.close();
        self.buffer.discard();
        self.transport.disconnect().await?;

        info!("Disconnected");
        Ok(())
    }

    async fn login(&mut self) -> Result<()> {
        let welcome = loop {
            let line = self.read_line().await?;
            if !line.trim().is_empty() {
                break line;
            }
        };

        if !welcome.starts_with(login::WELCOME) {
            return Err(Error::Login(format!(
                "expected \"{} [...]\", received {:?}",
                login::WELCOME,
                welcome
            )));
        }

        debug!("{}", welcome);
        self.session.initialize()?;

        self.expect_prompt(login::USER_PROMPT).await?;
        let user = self.user.clone();
        self.send_line(&user).await?;

        self.expect_prompt(login::PASSWORD_PROMPT).await?;
        trace!("Sending password");
        let password = self.password.clone();
        self.send_line(&password).await?;

        let reply = self.read_line().await?;
        if reply.trim() != login::LOGGED_IN {
            return Err(Error::AuthenticationFailed(reply));
        }

        self.session.login(user)?;
        Ok(())
    }

    async fn expect_prompt(&mut self, prompt: &str) -> Result<()> {
        loop {
            match self.buffer.take_prompt(prompt) {
                Prompt::Ready => return Ok(()),
                Prompt::Pending => self.fill(self.timeout).await?,
                Prompt::Mismatch(text) => {
                    return Err(Error::Login(format!(
                        "expected {prompt:?}, received {text:?}"
                    )));
                }
            }
        }
    }

    /// Send a credential line (kept out of request tracing)
    async fn send_line(&mut self, line: &str) -> Result<()> {
        frame::validate_line(line)?;

        let mut data = BytesMut::with_capacity(line.len() + LINE_TERMINATOR.len());
        data.extend_from_slice(line.as_bytes());
        data.extend_from_slice(LINE_TERMINATOR);

        self.transport.send(&data).await?;
        Ok(())
    }

    // Helper methods shared by the command modules

    pub(crate) fn ensure_connected(&self) -> Result<()> {
        if !self.is_connected() {
            return Err(Error::NotConnected);
        }
        Ok(())
    }

    /// Send a request, dropping anything left over from the previous reply
    pub(crate) async fn send_request(&mut self, request: &Request) -> Result<()> {
        self.ensure_connected()?;
        self.buffer.discard();

        let seq = self.session.next_sequence();
        debug!(seq, "Sending {:?}", request);

        let data = request.encode();
        if let Err(e) = self.transport.send(&data).await {
            self.lost_connection(&e);
            return Err(e.into());
        }

        Ok(())
    }

    /// Send a request and check its status line
    pub(crate) async fn execute(&mut self, request: &Request) -> Result<()> {
        self.send_request(request).await?;
        self.read_status(request.command()).await
    }

    /// Send a request, check its status line and return the result line
    pub(crate) async fn query(&mut self, request: &Request) -> Result<String> {
        self.execute(request).await?;
        self.read_line().await
    }

    pub(crate) async fn read_status(&mut self, command: Command) -> Result<()> {
        let line = self.read_line().await?;
        let result = Status::check(command, &line).map_err(Error::from);
        self.settle(result).await?;
        trace!("{} succeeded", command);
        Ok(())
    }

    /// Next complete reply line
    pub(crate) async fn read_line(&mut self) -> Result<String> {
        loop {
            if let Some(line) = self.buffer.next_line() {
                return Ok(line);
            }
            self.fill(self.timeout).await?;
        }
    }

    /// Lines that are already buffered, without waiting for more
    pub(crate) fn buffered_lines(&mut self) -> Vec<String> {
        std::iter::from_fn(|| self.buffer.next_line()).collect()
    }

    /// Collect lines until the camera stays quiet for the trailing window
    pub(crate) async fn read_trailing_lines(&mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();

        loop {
            lines.extend(self.buffered_lines());

            match self.transport.receive(self.trailing_window).await {
                Ok(chunk) => self.buffer.extend(&chunk),
                Err(insightrs_transport::Error::ReadTimeout) => break,
                Err(e) => {
                    self.lost_connection(&e);
                    return Err(e.into());
                }
            }
        }

        Ok(lines)
    }

    /// Read a hex payload reply after a successful status line
    ///
    /// Layout: name line (`RF`, `RJ` only), size in bytes, hex lines until
    /// `size` bytes are collected, then the checksum line. A reply that
    /// breaks this layout drops the connection.
    pub(crate) async fn read_transfer(
        &mut self,
        command: Command,
    ) -> Result<(Option<String>, Transfer)> {
        if !command.returns_payload() {
            return Err(insightrs_core::Error::InvalidArgument(format!(
                "{command} does not return a payload"
            ))
            .into());
        }

        let named = matches!(command, Command::ReadFile | Command::ReadJob);
        let result = self.read_payload(command, named).await;
        self.settle(result).await
    }

    async fn read_payload(
        &mut self,
        command: Command,
        named: bool,
    ) -> Result<(Option<String>, Transfer)> {
        let name = match named {
            true => Some(self.read_line().await?.trim().to_string()),
            false => None,
        };

        let size_line = self.read_line().await?;
        let size: usize = size_line.trim().parse().map_err(|_| {
            insightrs_core::Error::malformed(command, format!("invalid size line {size_line:?}"))
        })?;

        if size > MAX_TRANSFER_SIZE {
            return Err(insightrs_core::Error::malformed(
                command,
                format!("announced {size} bytes, limit is {MAX_TRANSFER_SIZE}"),
            )
            .into());
        }

        let mut data = BytesMut::with_capacity(size.min(PREALLOCATE_LIMIT));
        while data.len() < size {
            let line = self.read_line().await?;
            if line.trim().is_empty() {
                continue;
            }
            data.extend_from_slice(&hexline::decode_line(&line)?);
        }

        if data.len() > size {
            return Err(insightrs_core::Error::malformed(
                command,
                format!("announced {size} bytes, received {}", data.len()),
            )
            .into());
        }

        let checksum_line = self.read_line().await?;
        let checksum = Checksum::parse(&checksum_line).map_err(|_| {
            insightrs_core::Error::malformed(command, format!("invalid checksum {checksum_line:?}"))
        })?;

        debug!(size, checksum = %checksum, "{} received payload", command);

        Ok((
            name,
            Transfer {
                size,
                data: data.freeze(),
                checksum,
            },
        ))
    }

    /// Append the size, hex data and checksum lines of an upload
    pub(crate) fn upload_request(request: Request, transfer: &Transfer) -> Result<Request> {
        if !request.command().sends_payload() {
            return Err(insightrs_core::Error::InvalidArgument(format!(
                "{} does not take a payload",
                request.command()
            ))
            .into());
        }

        transfer.validate()?;

        let request = request
            .line(transfer.size.to_string())?
            .hex_data(&transfer.data)
            .line(transfer.checksum.as_str())?;

        Ok(request)
    }

    /// Drop the connection when a reply could not be framed
    ///
    /// The rest of that reply may still be in flight and would be read as
    /// the answer to the next command.
    pub(crate) async fn settle<T>(&mut self, result: Result<T>) -> Result<T> {
        match &result {
            Err(e) if e.requires_reconnect() && self.session.is_connected() => {
                warn!("Reply out of step, dropping {}: {}", self.transport.remote_addr(), e);
                self.drop_connection().await;
            }
            _ => {}
        }
        result
    }

    /// Close the connection after the remote went away
    pub(crate) async fn drop_connection(&mut self) {
        let _ = self.transport.disconnect().await;
        self.session.close();
        self.buffer.discard();
    }

    async fn fill(&mut self, timeout: Duration) -> Result<()> {
        match self.transport.receive(timeout).await {
            Ok(chunk) => {
                self.buffer.extend(&chunk);
                Ok(())
            }
            Err(e) => {
                self.lost_connection(&e);
                Err(e.into())
            }
        }
    }

    fn lost_connection(&self, error: &insightrs_transport::Error) {
        if error.is_disconnect() && self.session.is_connected() {
            warn!("Connection to {} lost: {}", self.transport.remote_addr(), error);
            self.session.close();
        }
    }
}
