//! Session management for the native mode protocol
//!
//! A session represents a connection to a camera and tracks:
//! - Connection state (socket open, logged in)
//! - The user that logged in
//! - A request sequence number for log correlation

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::error::{Error, Result};

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Not connected
    Disconnected,

    /// Socket open and welcome banner received, not logged in yet
    Connected,

    /// Logged in and ready for commands
    LoggedIn,
}

/// Session manager
///
/// Thread-safe and can be cloned cheaply (Arc internally).
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    /// Requests issued since login
    sequence: AtomicU64,

    state: RwLock<SessionState>,

    /// Logged-in user
    user: RwLock<Option<String>>,
}

impl Session {
    /// Create a new disconnected session
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SessionInner {
                sequence: AtomicU64::new(0),
                state: RwLock::new(SessionState::Disconnected),
                user: RwLock::new(None),
            }),
        }
    }

    /// Get current state
    pub fn state(&self) -> SessionState {
        *self.inner.state.read()
    }

    /// Check if connected
    pub fn is_connected(&self) -> bool {
        !matches!(self.state(), SessionState::Disconnected)
    }

    /// Check if logged in
    pub fn is_logged_in(&self) -> bool {
        matches!(self.state(), SessionState::LoggedIn)
    }

    /// User name of the current login
    pub fn user(&self) -> Option<String> {
        self.inner.user.read().clone()
    }

    /// Mark the socket as open (welcome banner received)
    pub fn initialize(&self) -> Result<()> {
        let mut state = self.inner.state.write();

        if *state != SessionState::Disconnected {
            return Err(Error::InvalidSessionState(format!(
                "Cannot initialize from state: {:?}",
                *state
            )));
        }

        self.inner.sequence.store(0, Ordering::Release);
        *state = SessionState::Connected;

        Ok(())
    }

    /// Mark session as logged in
    pub fn login(&self, user: impl Into<String>) -> Result<()> {
        let mut state = self.inner.state.write();

        if *state != SessionState::Connected {
            return Err(Error::InvalidSessionState(format!(
                "Cannot log in from state: {:?}",
                *state
            )));
        }

        *self.inner.user.write() = Some(user.into());
        *state = SessionState::LoggedIn;
        Ok(())
    }

    /// Require a logged-in session
    pub fn ensure_logged_in(&self) -> Result<()> {
        match self.state() {
            SessionState::LoggedIn => Ok(()),
            SessionState::Disconnected => Err(Error::SessionNotInitialized),
            state => Err(Error::InvalidSessionState(format!(
                "Commands need a logged-in session, state is {state:?}"
            ))),
        }
    }

    /// Close session
    pub fn close(&self) {
        self.inner.sequence.store(0, Ordering::Release);
        *self.inner.user.write() = None;
        *self.inner.state.write() = SessionState::Disconnected;
    }

    /// Get next request sequence number (starts at 1)
    pub fn next_sequence(&self) -> u64 {
        self.inner.sequence.fetch_add(1, Ordering::AcqRel) + 1
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_new() {
        let session = Session::new();
        assert_eq!(session.state(), SessionState::Disconnected);
        assert!(!session.is_connected());
        assert!(!session.is_logged_in());
        assert_eq!(session.user(), None);
    }

    #[test]
    fn test_session_login() {
        let session = Session::new();
        session.initialize().unwrap();
        assert!(session.is_connected());
        assert!(!session.is_logged_in());

        session.login("admin").unwrap();
        assert_eq!(session.state(), SessionState::LoggedIn);
        assert_eq!(session.user().as_deref(), Some("admin"));
        assert!(session.ensure_logged_in().is_ok());
    }

    #[test]
    fn test_session_close() {
        let session = Session::new();
        session.initialize().unwrap();
        session.login("admin").unwrap();

        session.close();

        assert_eq!(session.state(), SessionState::Disconnected);
        assert_eq!(session.user(), None);
        assert!(matches!(
            session.ensure_logged_in(),
            Err(Error::SessionNotInitialized)
        ));
    }

    #[test]
    fn test_sequence() {
        let session = Session::new();
        session.initialize().unwrap();

        assert_eq!(session.next_sequence(), 1);
        assert_eq!(session.next_sequence(), 2);

        session.close();
        session.initialize().unwrap();
        assert_eq!(session.next_sequence(), 1);
    }

    #[test]
    fn test_invalid_state_transitions() {
        let session = Session::new();

        // Cannot log in without connecting
        assert!(session.login("admin").is_err());

        // Cannot initialize twice
        session.initialize().unwrap();
        assert!(session.initialize().is_err());

        // Connected but not logged in
        assert!(matches!(
            session.ensure_logged_in(),
            Err(Error::InvalidSessionState(_))
        ));
    }

    #[test]
    fn test_session_clone() {
        let session1 = Session::new();
        session1.initialize().unwrap();

        let session2 = session1.clone();

        session1.login("operator").unwrap();
        assert!(session2.is_logged_in());
        assert_eq!(session2.user().as_deref(), Some("operator"));
    }
}
