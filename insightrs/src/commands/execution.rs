//! Execution and online commands

use tracing::{debug, info, warn};

use insightrs_core::{Command, Request};
use insightrs_types::{EventCode, OnlineState};

use crate::camera::Camera;
use crate::error::{Error, Result};

impl Camera {
    /// Set the sensor Online or Offline (`SO`)
    pub async fn set_online(&mut self, state: OnlineState) -> Result<()> {
        let request = Request::new(Command::SetOnline, state.as_wire().to_string())?;
        self.execute(&request).await?;
        info!("Camera set {}", state);
        Ok(())
    }

    /// Online state of the sensor (`GO`)
    pub async fn get_online(&mut self) -> Result<OnlineState> {
        self.read_flag(Command::GetOnline, OnlineState::from_wire).await
    }

    /// Trigger a spreadsheet event (`SE`)
    ///
    /// Returns immediately after the event is accepted, without waiting for
    /// the inspection. Some jobs answer with a result line after the
    /// status; it is returned when it arrives within the trailing window.
    pub async fn set_event(&mut self, event: EventCode) -> Result<Option<String>> {
        let request = Request::new(Command::SetEvent, event.to_string())?;
        self.execute(&request).await?;

        let lines = self.read_trailing_lines().await?;
        let result = lines
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>();

        match result.is_empty() {
            true => Ok(None),
            false => Ok(Some(result.join("\n"))),
        }
    }

    /// Trigger a spreadsheet event and wait for it to complete (`SW`)
    ///
    /// With [`EventCode::ACQUIRE`] the reply comes after acquisition and
    /// inspection, so results read afterwards belong to that image. The
    /// sensor must be Online.
    pub async fn set_event_and_wait(&mut self, event: EventCode) -> Result<()> {
        let request = Request::new(Command::SetEventAndWait, event.to_string())?;
        self.execute(&request).await
    }

    /// Reboot the sensor (`RT`)
    ///
    /// The sensor drops the connection while restarting, so a closed socket
    /// or a missing reply counts as success. The session is closed either
    /// way; call [`connect`](Camera::connect) once the sensor is back.
    pub async fn reset_system(&mut self) -> Result<()> {
        let request = Request::bare(Command::ResetSystem);
        self.send_request(&request).await?;

        match self.read_status(Command::ResetSystem).await {
            Ok(()) => {}
            Err(Error::Transport(e))
                if e.is_disconnect() || matches!(e, insightrs_transport::Error::ReadTimeout) =>
            {
                debug!("No reply to reset: {}", e);
            }
            Err(e) => return Err(e),
        }

        warn!("Camera {} is rebooting", self.remote_addr());
        self.drop_connection().await;
        Ok(())
    }

    /// Send a string to the spreadsheet, optionally triggering an event (`SM`)
    pub async fn send_message(&mut self, message: &str, event: Option<EventCode>) -> Result<()> {
        if message.contains('"') {
            return Err(insightrs_core::Error::InvalidArgument(format!(
                "Message {message:?} must not contain quotation marks"
            ))
            .into());
        }

        let argument = match event {
            Some(event) => format!("\"{message}\"{event}"),
            None => format!("\"{message}\""),
        };

        let request = Request::new(Command::SendMessage, argument)?;
        self.execute(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, Step};
    use insightrs_core::Status;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[tokio::test]
    async fn test_set_online() {
        let (mut camera, server) = testing::connected_camera(vec![
            Step::reply(&["SO1"], "1\r\n"),
            Step::reply(&["SO0"], "1\r\n"),
        ])
        .await;

        camera.set_online(OnlineState::Online).await.unwrap();
        camera.set_online(OnlineState::Offline).await.unwrap();

        camera.disconnect().await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_set_online_blocked() {
        let (mut camera, server) =
            testing::connected_camera(vec![Step::reply(&["SO1"], "-5\r\n")]).await;

        let err = camera.set_online(OnlineState::Online).await.unwrap_err();
        assert_eq!(err.status(), Some(Status::OnlineBlocked));
        assert!(err.is_recoverable());
        assert!(camera.is_connected());

        camera.disconnect().await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_get_online() {
        let (mut camera, server) = testing::connected_camera(vec![
            Step::reply(&["GO"], "1\r\n"),
            Step::reply(&["GO"], "0\r\n"),
            Step::reply(&["GO"], "2\r\n"),
        ])
        .await;

        assert_eq!(camera.get_online().await.unwrap(), OnlineState::Online);
        assert_eq!(camera.get_online().await.unwrap(), OnlineState::Offline);

        let err = camera.get_online().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Core(insightrs_core::Error::UnknownStatus { command: Command::GetOnline, .. })
        ));
        assert!(!camera.is_connected());
        assert!(matches!(camera.get_online().await, Err(Error::NotConnected)));

        camera.disconnect().await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_set_event_without_result() {
        let (mut camera, server) =
            testing::connected_camera(vec![Step::reply(&["SE8"], "1\r\n")]).await;

        let result = camera.set_event(EventCode::ACQUIRE).await.unwrap();
        assert_eq!(result, None);

        camera.disconnect().await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_set_event_with_result() {
        let (mut camera, server) = testing::connected_camera(vec![Step::reply(
            &["SE3"],
            "1\r\n<result>PASS</result>\r\n",
        )])
        .await;

        let result = camera.set_event(EventCode::soft(3).unwrap()).await.unwrap();
        assert_eq!(result.as_deref(), Some("<result>PASS</result>"));

        camera.disconnect().await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_set_event_and_wait_offline() {
        let (mut camera, server) = testing::connected_camera(vec![
            Step::reply(&["SW8"], "1\r\n"),
            Step::reply(&["SW8"], "-2\r\n"),
        ])
        .await;

        camera.set_event_and_wait(EventCode::ACQUIRE).await.unwrap();

        let err = camera.set_event_and_wait(EventCode::ACQUIRE).await.unwrap_err();
        match err {
            Error::Core(insightrs_core::Error::Device { command, message, .. }) => {
                assert_eq!(command, Command::SetEventAndWait);
                assert!(message.contains("Offline"));
            }
            other => panic!("Expected device error, got {other:?}"),
        }

        camera.disconnect().await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_reset_system_connection_closed() {
        let (mut camera, server) = testing::connected_camera(vec![Step::close(&["RT"])]).await;

        camera.reset_system().await.unwrap();
        assert!(!camera.is_connected());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_reset_system_acknowledged() {
        let (mut camera, server) =
            testing::connected_camera(vec![Step::reply_then_close(&["RT"], "1\r\n")]).await;

        camera.reset_system().await.unwrap();
        assert!(!camera.is_connected());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_reset_system_without_reply() {
        let (port, server) = testing::fake_camera(vec![Step::reply(&["RT"], "")]).await;

        let mut camera = Camera::new("127.0.0.1", port).with_timeout(Duration::from_millis(100));
        camera.connect().await.unwrap();

        camera.reset_system().await.unwrap();
        assert!(!camera.is_connected());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_reset_system_access_denied() {
        let (mut camera, server) =
            testing::connected_camera(vec![Step::reply(&["RT"], "-6\r\n")]).await;

        let err = camera.reset_system().await.unwrap_err();
        assert!(err.is_access_denied());
        assert!(camera.is_connected());

        camera.disconnect().await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_send_message() {
        let (mut camera, server) = testing::connected_camera(vec![
            Step::reply(&["SM\"hello\""], "1\r\n"),
            Step::reply(&["SM\"batch 42\"5"], "1\r\n"),
        ])
        .await;

        camera.send_message("hello", None).await.unwrap();
        camera
            .send_message("batch 42", Some(EventCode::soft(5).unwrap()))
            .await
            .unwrap();

        camera.disconnect().await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_send_message_rejects_quotes() {
        let (mut camera, server) = testing::connected_camera(vec![]).await;

        let err = camera.send_message("say \"hi\"", None).await.unwrap_err();
        assert!(matches!(err, Error::Core(insightrs_core::Error::InvalidArgument(_))));

        let err = camera.send_message("two\r\nlines", None).await.unwrap_err();
        assert!(matches!(err, Error::Core(insightrs_core::Error::InvalidArgument(_))));

        camera.disconnect().await.unwrap();
        server.await.unwrap();
    }
}
