//! In-process fake camera for the command tests

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::Camera;

const BANNER: &str = "Welcome to In-Sight(R) 7802 Session 0\r\nUser: ";

/// One scripted exchange
pub(crate) enum Step {
    /// Expect these request lines, then write `reply`
    Reply {
        expect: Vec<String>,
        reply: String,
    },

    /// Expect these request lines, write `reply`, then drop the connection
    Close {
        expect: Vec<String>,
        reply: String,
    },
}

impl Step {
    pub(crate) fn reply(expect: &[&str], reply: &str) -> Self {
        Self::Reply {
            expect: expect.iter().map(|s| s.to_string()).collect(),
            reply: reply.to_string(),
        }
    }

    pub(crate) fn close(expect: &[&str]) -> Self {
        Self::reply_then_close(expect, "")
    }

    pub(crate) fn reply_then_close(expect: &[&str], reply: &str) -> Self {
        Self::Close {
            expect: expect.iter().map(|s| s.to_string()).collect(),
            reply: reply.to_string(),
        }
    }
}

/// Start a fake camera accepting `admin` with an empty password
pub(crate) async fn fake_camera(script: Vec<Step>) -> (u16, JoinHandle<()>) {
    fake_camera_with_login("admin", "", script).await
}

/// Start a fake camera that logs in `user`/`password` and then plays `script`
///
/// The handle panics (failing the test when awaited) if a request line
/// differs from the script.
pub(crate) async fn fake_camera_with_login(
    user: &'static str,
    password: &'static str,
    script: Vec<Step>,
) -> (u16, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let (read, mut write) = socket.into_split();
        let mut lines = BufReader::new(read).lines();

        write.write_all(BANNER.as_bytes()).await.unwrap();
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some(user));
        write.write_all(b"Password: ").await.unwrap();
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some(password));
        write.write_all(b"User Logged In\r\n").await.unwrap();

        for step in script {
            let (expect, reply, close) = match step {
                Step::Reply { expect, reply } => (expect, reply, false),
                Step::Close { expect, reply } => (expect, reply, true),
            };

            for expected in expect {
                let line = lines.next_line().await.unwrap();
                assert_eq!(line.as_deref(), Some(expected.as_str()));
            }

            write.write_all(reply.as_bytes()).await.unwrap();

            if close {
                return;
            }
        }

        if let Ok(Some(line)) = lines.next_line().await {
            panic!("Unexpected request line: {line:?}");
        }
    });

    (port, handle)
}

/// Connected camera talking to a fake that plays `script`
pub(crate) async fn connected_camera(script: Vec<Step>) -> (Camera, JoinHandle<()>) {
    let (port, handle) = fake_camera(script).await;

    let mut camera = Camera::new("127.0.0.1", port)
        .with_timeout(Duration::from_secs(2))
        .with_trailing_window(Duration::from_millis(50));
    camera.connect().await.unwrap();

    (camera, handle)
}
