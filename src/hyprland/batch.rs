//! [`Compositor`] implementation that sends every directive in one
//! `hyprctl --batch` call.
//!
//! Assignments are only buffered; the compositor is contacted once, in
//! [`flush`](Compositor::flush).  A failing batch can't be attributed to a
//! single workspace, so its error is fatal for the run.  Its message is the
//! program's stdout followed by its stderr.

use super::directives;
use crate::config::Config;
use crate::traits::{BackendError, Compositor};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Separator between directives in a batch.
const BATCH_SEPARATOR: &str = "; ";

/// Hyprland backend that batches through the `hyprctl` program.
pub struct HyprctlBatch {
    program: String,
    resolved: Option<PathBuf>,
    batch: Vec<String>,
}

impl HyprctlBatch {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            resolved: None,
            batch: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.hyprctl.clone())
    }

    /// The batch argument as it would be passed to `hyprctl`.
    pub fn batch_argument(&self) -> String {
        self.batch.join(BATCH_SEPARATOR)
    }
}

/// Locate `program` the way a shell would: used as-is when it contains a
/// `/`, otherwise searched for in every `PATH` entry.
pub fn find_program(program: &str) -> Option<PathBuf> {
    if program.contains('/') {
        let path = PathBuf::from(program);
        return is_executable(&path).then_some(path);
    }
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

impl Compositor for HyprctlBatch {
    fn name(&self) -> &'static str {
        "hyprctl"
    }

    fn init(&mut self) -> Result<(), BackendError> {
        let resolved = find_program(&self.program).ok_or_else(|| {
            BackendError::Precondition(format!("{} not found in PATH", self.program))
        })?;
        debug!("using {}", resolved.display());
        self.resolved = Some(resolved);
        Ok(())
    }

    fn assign_workspace_to_monitor(
        &mut self,
        workspace: i64,
        monitor: &str,
    ) -> Result<(), BackendError> {
        self.batch.extend(directives(workspace, monitor));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), BackendError> {
        if self.batch.is_empty() {
            return Ok(());
        }
        let program = self
            .resolved
            .as_ref()
            .ok_or_else(|| BackendError::Precondition(format!("{} not initialized", self.program)))?;

        let batch = self.batch_argument();
        debug!("{} --batch {:?}", program.display(), batch);
        let output = Command::new(program)
            .arg("--batch")
            .arg(&batch)
            .output()
            .map_err(|e| {
                BackendError::Connection(format!("failed to run {}: {}", program.display(), e))
            })?;
        self.batch.clear();

        // Streams are captured separately: stdout then stderr, concatenated,
        // not interleaved.
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(BackendError::Command(combined));
        }
        debug!("{} replied: {}", self.program, combined.trim());
        Ok(())
    }

    fn close(&mut self) -> Result<(), BackendError> {
        self.batch.clear();
        Ok(())
    }
}

//  Tests 
