//! The backend abstraction that decouples the assigner from any specific
//! compositor or transport.
//!
//! Every concrete backend (Hyprland socket, `hyprctl --batch`, Sway IPC, a
//! test double, …) implements [`Compositor`].  The
//! [`Assigner`](crate::assigner::Assigner) only depends on this trait.

/// Errors a [`Compositor`] backend can report.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Something the backend needs from its environment is missing: a
    /// session variable, a control program, an unsupported combination of
    /// options.
    #[error("{0}")]
    Precondition(String),

    /// The control channel could not be opened or broke mid-request.
    #[error("{0}")]
    Connection(String),

    /// The compositor rejected a command, or a directive could not be
    /// delivered.
    #[error("{0}")]
    Command(String),
}

/// Abstraction over a compositor that can bind workspaces to outputs.
///
/// # Contract
///
/// * [`init`](Compositor::init) is called once before any assignment.
/// * [`assign_workspace_to_monitor`](Compositor::assign_workspace_to_monitor)
///   is called once per workspace, in ascending order.
/// * [`flush`](Compositor::flush) is called once after the last assignment.
/// * [`close`](Compositor::close) is called exactly once at the end of the
///   run, even when `init` failed, so it must tolerate never having been
///   initialized.
pub trait Compositor {
    /// Short backend name used in log messages.
    fn name(&self) -> &'static str;

    /// Open (or verify) the control channel.
    fn init(&mut self) -> Result<(), BackendError>;

    /// Make `monitor` the default output of `workspace` and move the
    /// workspace there if it currently exists elsewhere.
    fn assign_workspace_to_monitor(&mut self, workspace: i64, monitor: &str)
        -> Result<(), BackendError>;

    /// Send anything the backend has buffered.
    ///
    /// Backends that talk to the compositor on every assignment have
    /// nothing to do here.
    fn flush(&mut self) -> Result<(), BackendError> {
        Ok(())
    }

    /// Release the control channel.  Must be idempotent.
    fn close(&mut self) -> Result<(), BackendError>;
}
