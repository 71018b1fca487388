//! Python subprocess session.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tracing::{debug, instrument};

use skoll_nb::Output;
use skoll_session::{Session, SessionError, SessionFactory, SessionResult};

use crate::driver::DRIVER;

/// How long a closing session may take to exit on its own.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Opens sessions backed by a `python3` child process.
#[derive(Debug, Clone)]
pub struct PythonSessionFactory {
    python: String,
}

impl PythonSessionFactory {
    /// Factory using `python3` from `PATH`.
    pub fn new() -> Self {
        Self {
            python: "python3".to_string(),
        }
    }

    /// Use a specific interpreter executable.
    pub fn with_python(mut self, python: impl Into<String>) -> Self {
        self.python = python.into();
        self
    }
}

impl Default for PythonSessionFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionFactory for PythonSessionFactory {
    fn name(&self) -> &str {
        &self.python
    }

    #[instrument(skip(self), fields(python = %self.python))]
    async fn open(&self, workdir: &Path) -> SessionResult<Box<dyn Session>> {
        let mut child = Command::new(&self.python)
            .arg("-u")
            .arg("-c")
            .arg(DRIVER)
            .current_dir(workdir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| SessionError::Spawn(format!("{}: {e}", self.python)))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| SessionError::Spawn("no stdin handle".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| SessionError::Spawn("no stdout handle".to_string()))?;

        debug!(workdir = %workdir.display(), "python session started");
        Ok(Box::new(PythonSession {
            child,
            stdin,
            stdout: BufReader::new(stdout),
            closed: false,
        }))
    }
}

struct PythonSession {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    closed: bool,
}

#[async_trait]
impl Session for PythonSession {
    async fn run_cell(&mut self, source: &str) -> SessionResult<Vec<Output>> {
        if self.closed {
            return Err(SessionError::ClosedSession);
        }

        self.stdin.write_all(frame(source).as_bytes()).await?;
        self.stdin.flush().await?;

        let mut reply = String::new();
        let read = self.stdout.read_line(&mut reply).await?;
        if read == 0 {
            return Err(SessionError::Protocol(
                "interpreter exited mid-cell".to_string(),
            ));
        }
        parse_reply(&reply)
    }

    async fn close(&mut self) -> SessionResult<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        // Shutdown frame; the pipe may already be gone after a timeout, in
        // which case kill_on_drop reaps the child anyway.
        let _ = self.stdin.write_all(b"0\n").await;
        let _ = self.stdin.flush().await;
        // A cell stuck in a loop ignores the shutdown frame; kill after the
        // grace period so close() cannot hang a timed-out pass.
        match tokio::time::timeout(SHUTDOWN_GRACE, self.child.wait()).await {
            Ok(status) => {
                status?;
            }
            Err(_elapsed) => {
                self.child.start_kill()?;
                self.child.wait().await?;
            }
        }
        Ok(())
    }
}

/// Length-prefixed frame for one cell's source.
fn frame(source: &str) -> String {
    format!("{}\n{}", source.len(), source)
}

#[derive(Deserialize)]
struct CellReply {
    outputs: Vec<Output>,
}

/// Decode one reply line into nbformat outputs.
fn parse_reply(line: &str) -> SessionResult<Vec<Output>> {
    let reply: CellReply = serde_json::from_str(line)
        .map_err(|e| SessionError::Protocol(format!("bad reply: {e}; line: {line:?}")))?;
    Ok(reply.outputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_counts_bytes_not_chars() {
        assert_eq!(frame("a = 1"), "5\na = 1");
        // Multi-byte source: the header is the byte length.
        assert_eq!(frame("s = 'π'"), format!("{}\ns = 'π'", "s = 'π'".len()));
    }

    #[test]
    fn parse_reply_decodes_nbformat_outputs() {
        let outputs = parse_reply(
            r#"{"outputs": [
                {"output_type": "stream", "name": "stdout", "text": "2\n"},
                {"output_type": "error", "ename": "ValueError",
                 "evalue": "no embedding found", "traceback": []}
            ]}"#,
        )
        .unwrap();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].text().as_deref(), Some("2\n"));
        assert!(outputs[1].is_error());
    }

    #[test]
    fn parse_reply_rejects_garbage() {
        let err = parse_reply("Traceback (most recent call last):\n").unwrap_err();
        assert!(matches!(err, SessionError::Protocol(_)));
    }
}
