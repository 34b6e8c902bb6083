//! [`Compositor`] implementation that writes straight to Hyprland's control
//! socket at `/run/user/<uid>/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket.sock`.
//!
//! The directives are fire-and-forget: each one is written as a line and no
//! reply is read back.

use super::directives;
use crate::config::Config;
use crate::traits::{BackendError, Compositor};
use log::debug;
use std::io::Write;
use std::os::unix::fs::MetadataExt;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

/// Hyprland backend holding one socket connection for the whole run.
pub struct HyprlandSocket {
    runtime_dir: Option<PathBuf>,
    signature: Option<String>,
    stream: Option<UnixStream>,
}

impl HyprlandSocket {
    /// Create a backend for the instance named by `signature`.
    ///
    /// Nothing is opened until [`init`](Compositor::init).
    pub fn new(runtime_dir: Option<PathBuf>, signature: Option<String>) -> Self {
        Self {
            runtime_dir,
            signature,
            stream: None,
        }
    }

    /// Take the instance signature from `HYPRLAND_INSTANCE_SIGNATURE` and the
    /// runtime directory override from `config`.
    pub fn from_env(config: &Config) -> Self {
        let signature = std::env::var("HYPRLAND_INSTANCE_SIGNATURE")
            .ok()
            .filter(|s| !s.is_empty());
        Self::new(config.runtime_dir.clone(), signature)
    }

    /// Resolve the command socket path.
    fn socket_path(&self) -> Result<PathBuf, BackendError> {
        let signature = self.signature.as_deref().ok_or_else(|| {
            BackendError::Precondition(
                "HYPRLAND_INSTANCE_SIGNATURE not set - are you running Hyprland?".into(),
            )
        })?;
        let runtime_dir = match &self.runtime_dir {
            Some(dir) => dir.clone(),
            None => PathBuf::from(format!("/run/user/{}", current_uid()?)),
        };
        Ok(runtime_dir.join("hypr").join(signature).join(".socket.sock"))
    }

    fn send(&mut self, message: &str) -> Result<(), BackendError> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| BackendError::Connection("no connection to Hyprland".into()))?;
        stream
            .write_all(format!("{}\n", message).as_bytes())
            .map_err(|e| BackendError::Command(format!("failed to send command '{}': {}", message, e)))
    }
}

/// Numeric id of the user running this process.
fn current_uid() -> Result<u32, BackendError> {
    std::fs::metadata("/proc/self")
        .map(|m| m.uid())
        .map_err(|e| BackendError::Precondition(format!("failed to get current user: {}", e)))
}

impl Compositor for HyprlandSocket {
    fn name(&self) -> &'static str {
        "hyprland"
    }

    fn init(&mut self) -> Result<(), BackendError> {
        let path = self.socket_path()?;
        let stream = UnixStream::connect(&path).map_err(|e| {
            BackendError::Connection(format!(
                "failed to connect to Hyprland socket at {}: {}",
                path.display(),
                e
            ))
        })?;
        debug!("connected to {}", path.display());
        self.stream = Some(stream);
        Ok(())
    }

    fn assign_workspace_to_monitor(
        &mut self,
        workspace: i64,
        monitor: &str,
    ) -> Result<(), BackendError> {
        for directive in directives(workspace, monitor) {
            self.send(&directive)?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), BackendError> {
        if let Some(stream) = self.stream.take() {
            stream
                .shutdown(std::net::Shutdown::Both)
                .map_err(|e| BackendError::Connection(format!("close: {}", e)))?;
        }
        Ok(())
    }
}

//  Tests 
