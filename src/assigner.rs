//! The orchestrator that walks a [`WorkspaceRange`] and drives a
//! [`Compositor`] backend.
//!
//! [`Assigner`] owns the backend for the duration of a run.  It initializes
//! it, issues one assignment per workspace, flushes, and always closes it
//! again, whatever happened in between.

use crate::range::WorkspaceRange;
use crate::traits::{BackendError, Compositor};
use log::{debug, error, info, warn};

/// Fatal errors from a run.  Per-workspace failures are not fatal and end up
/// in [`Report::failed`] instead.
#[derive(Debug, thiserror::Error)]
pub enum AssignError {
    /// The backend could not be initialized; no workspace was touched.
    #[error("failed to initialize {backend}: {source}")]
    Init {
        backend: &'static str,
        #[source]
        source: BackendError,
    },

    /// Buffered directives could not be committed.
    #[error("{backend} batch failed: {source}")]
    Commit {
        backend: &'static str,
        #[source]
        source: BackendError,
    },
}

/// Lifecycle of an [`Assigner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Uninitialized,
    Initialized,
    Running,
    Done,
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct Report {
    /// `end - start + 1` of the requested range.  This is what the summary
    /// line reports, regardless of individual failures.
    pub requested: i64,
    /// Workspaces visited by the loop (simulated ones included).
    pub attempted: usize,
    /// Workspaces whose assignment failed, with the backend's message.
    pub failed: Vec<(i64, String)>,
}

/// Assigns workspaces to a monitor through a [`Compositor`].
///
/// # Typical usage
///
/// ```ignore
/// let mut assigner = Assigner::new(HyprlandSocket::from_env(&config), false);
/// let report = assigner.run("DP-1", "1-5".parse()?)?;
/// ```
pub struct Assigner<C: Compositor> {
    compositor: C,
    dry_run: bool,
    state: State,
}

impl<C: Compositor> Assigner<C> {
    /// Create a new assigner.  With `dry_run` set, the backend is still
    /// initialized and closed but never asked to assign anything.
    pub fn new(compositor: C, dry_run: bool) -> Self {
        Self {
            compositor,
            dry_run,
            state: State::Uninitialized,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Borrow the backend, mostly useful for inspection in tests.
    pub fn compositor(&self) -> &C {
        &self.compositor
    }

    /// Assign every workspace in `range` to `monitor`.
    ///
    /// The backend's [`close`](Compositor::close) runs exactly once before
    /// this returns, on success and on every error path.
    pub fn run(&mut self, monitor: &str, range: WorkspaceRange) -> Result<Report, AssignError> {
        let result = self.init_and_process(monitor, range);

        if let Err(e) = self.compositor.close() {
            warn!("failed to close {}: {}", self.compositor.name(), e);
        }
        self.state = State::Done;

        result
    }

    fn init_and_process(
        &mut self,
        monitor: &str,
        range: WorkspaceRange,
    ) -> Result<Report, AssignError> {
        let backend = self.compositor.name();
        self.compositor
            .init()
            .map_err(|source| AssignError::Init { backend, source })?;
        self.state = State::Initialized;
        debug!("{} initialized", backend);

        self.state = State::Running;
        let mut report = Report {
            requested: range.len(),
            ..Report::default()
        };

        for ws in range.iter() {
            report.attempted += 1;

            if self.dry_run {
                println!("Would assign workspace {} to monitor {}", ws, monitor);
                continue;
            }

            debug!("Assigning workspace {} to monitor {}", ws, monitor);
            if let Err(e) = self.compositor.assign_workspace_to_monitor(ws, monitor) {
                error!("Error assigning workspace {}: {}", ws, e);
                report.failed.push((ws, e.to_string()));
            }
        }

        if !self.dry_run {
            self.compositor
                .flush()
                .map_err(|source| AssignError::Commit { backend, source })?;
        }

        if !report.failed.is_empty() {
            info!(
                "{} of {} workspace assignment(s) failed",
                report.failed.len(),
                report.attempted
            );
        }
        debug!("Successfully configured {} workspaces", report.requested);

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Record-keeping mock backend.
    #[derive(Debug, Default)]
    struct RecorderCompositor {
        fail_init: bool,
        /// Workspaces whose assignment should fail.
        fail_on: Vec<i64>,
        fail_flush: bool,
        inits: usize,
        assigns: Vec<(i64, String)>,
        flushes: usize,
        closes: usize,
    }

    impl Compositor for RecorderCompositor {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn init(&mut self) -> Result<(), BackendError> {
            self.inits += 1;
            if self.fail_init {
                return Err(BackendError::Connection("no socket".into()));
            }
            Ok(())
        }

        fn assign_workspace_to_monitor(
            &mut self,
            workspace: i64,
            monitor: &str,
        ) -> Result<(), BackendError> {
            self.assigns.push((workspace, monitor.into()));
            if self.fail_on.contains(&workspace) {
                return Err(BackendError::Command(format!("rejected {}", workspace)));
            }
            Ok(())
        }

        fn flush(&mut self) -> Result<(), BackendError> {
            self.flushes += 1;
            if self.fail_flush {
                return Err(BackendError::Command("hyprctl: invalid dispatcher".into()));
            }
            Ok(())
        }

        fn close(&mut self) -> Result<(), BackendError> {
            self.closes += 1;
            Ok(())
        }
    }

    fn workspaces(assigner: &Assigner<RecorderCompositor>) -> Vec<i64> {
        assigner.compositor().assigns.iter().map(|(ws, _)| *ws).collect()
    }

    #[test]
    fn assigns_every_workspace_in_ascending_order() {
        let mut a = Assigner::new(RecorderCompositor::default(), false);
        assert_eq!(a.state(), State::Uninitialized);

        let report = a.run("DP-1", WorkspaceRange::new(3, 7)).unwrap();

        assert_eq!(workspaces(&a), vec![3, 4, 5, 6, 7]);
        assert!(a.compositor().assigns.iter().all(|(_, m)| m == "DP-1"));
        assert_eq!(report.requested, 5);
        assert_eq!(report.attempted, 5);
        assert!(report.failed.is_empty());
        assert_eq!(a.compositor().flushes, 1);
        assert_eq!(a.compositor().closes, 1);
        assert_eq!(a.state(), State::Done);
    }

    #[test]
    fn dry_run_makes_no_backend_calls() {
        let mut a = Assigner::new(RecorderCompositor::default(), true);
        let report = a.run("DP-1", WorkspaceRange::new(1, 3)).unwrap();

        assert_eq!(report.attempted, 3);
        assert!(a.compositor().assigns.is_empty());
        assert_eq!(a.compositor().flushes, 0);
        assert_eq!(a.compositor().closes, 1);
    }

    #[test]
    fn init_failure_processes_nothing_but_still_closes() {
        let backend = RecorderCompositor {
            fail_init: true,
            ..Default::default()
        };
        let mut a = Assigner::new(backend, false);
        let err = a.run("DP-1", WorkspaceRange::new(1, 5)).unwrap_err();

        assert!(matches!(err, AssignError::Init { backend: "recorder", .. }));
        assert_eq!(err.to_string(), "failed to initialize recorder: no socket");
        assert!(a.compositor().assigns.is_empty());
        assert_eq!(a.compositor().flushes, 0);
        assert_eq!(a.compositor().closes, 1);
        assert_eq!(a.state(), State::Done);
    }

    #[test]
    fn single_failure_does_not_stop_the_loop() {
        let backend = RecorderCompositor {
            fail_on: vec![2],
            ..Default::default()
        };
        let mut a = Assigner::new(backend, false);
        let report = a.run("HDMI-A-1", WorkspaceRange::new(1, 4)).unwrap();

        assert_eq!(workspaces(&a), vec![1, 2, 3, 4]);
        assert_eq!(report.failed, vec![(2, "rejected 2".to_string())]);
        // The summary still counts the whole range.
        assert_eq!(report.requested, 4);
    }

    #[test]
    fn flush_failure_is_fatal_and_carries_the_message() {
        let backend = RecorderCompositor {
            fail_flush: true,
            ..Default::default()
        };
        let mut a = Assigner::new(backend, false);
        let err = a.run("DP-1", WorkspaceRange::new(1, 2)).unwrap_err();

        match err {
            AssignError::Commit { source, .. } => {
                assert_eq!(source.to_string(), "hyprctl: invalid dispatcher");
            }
            other => panic!("expected commit error, got {:?}", other),
        }
        assert_eq!(a.compositor().closes, 1);
    }

    #[test]
    fn reversed_range_is_a_no_op() {
        let mut a = Assigner::new(RecorderCompositor::default(), false);
        let report = a.run("DP-1", WorkspaceRange::new(5, 1)).unwrap();

        assert!(a.compositor().assigns.is_empty());
        assert_eq!(report.attempted, 0);
        assert_eq!(a.compositor().inits, 1);
        assert_eq!(a.compositor().closes, 1);
    }
}
