//! [`Compositor`] implementation backed by Sway's IPC, through the
//! [`swayipc`] client.
//!
//! Each workspace is one `RUN_COMMAND` request; Sway answers with one
//! outcome per command, and any failed outcome fails that workspace with
//! Sway's own error text.

use crate::traits::{BackendError, Compositor};
use log::debug;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;
use swayipc::Connection;

/// Sway backend holding one IPC connection for the whole run.
pub struct SwayIpc {
    socket: Option<PathBuf>,
    connection: Option<Connection>,
}

impl SwayIpc {
    /// Let [`swayipc`] find the socket (`$SWAYSOCK`, then `sway
    /// --get-socketpath`).
    pub fn new() -> Self {
        Self {
            socket: None,
            connection: None,
        }
    }

    /// Talk to the socket at `path` instead of discovering it.
    pub fn with_socket(path: impl Into<PathBuf>) -> Self {
        Self {
            socket: Some(path.into()),
            connection: None,
        }
    }
}

impl Default for SwayIpc {
    fn default() -> Self {
        Self::new()
    }
}

/// The command that makes `monitor` the home of `workspace`.
pub fn command(workspace: i64, monitor: &str) -> String {
    format!(
        "workspace number {}, move workspace to output {}",
        workspace, monitor
    )
}

/// Sway's message for a rejected command.
fn failure_text(e: swayipc::Error) -> String {
    match e {
        swayipc::Error::CommandFailed(msg) | swayipc::Error::CommandParse(msg) => msg,
        other => other.to_string(),
    }
}

impl Compositor for SwayIpc {
    fn name(&self) -> &'static str {
        "sway"
    }

    fn init(&mut self) -> Result<(), BackendError> {
        let connection = match &self.socket {
            Some(path) => {
                let stream = UnixStream::connect(path).map_err(|e| {
                    BackendError::Connection(format!(
                        "failed to connect to Sway at {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                debug!("connected to {}", path.display());
                Connection::from(stream)
            }
            None => Connection::new()
                .map_err(|e| BackendError::Connection(format!("failed to connect to Sway: {}", e)))?,
        };
        self.connection = Some(connection);
        Ok(())
    }

    fn assign_workspace_to_monitor(
        &mut self,
        workspace: i64,
        monitor: &str,
    ) -> Result<(), BackendError> {
        let connection = self
            .connection
            .as_mut()
            .ok_or_else(|| BackendError::Connection("no connection to Sway".into()))?;
        let outcomes = connection
            .run_command(command(workspace, monitor))
            .map_err(|e| BackendError::Connection(format!("failed to run Sway command: {}", e)))?;
        for outcome in outcomes {
            outcome.map_err(|e| {
                BackendError::Command(format!("Sway command failed: {}", failure_text(e)))
            })?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), BackendError> {
        self.connection = None;
        Ok(())
    }
}

//  Tests 
