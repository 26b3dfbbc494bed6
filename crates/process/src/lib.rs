//! Process control for applying profile changes.
//!
//! An application only picks up a new spoof profile when it starts, so a
//! committed assignment is followed by a request to terminate every running
//! process of that application. Termination is best-effort: callers report
//! a failure but never undo the assignment because of it.

mod system;

use appspoof_profiles::AppId;
use thiserror::Error;

pub use system::{SystemProcessController, owns_process};

/// Outcome of a successful termination request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminationReport {
	/// Processes attributed to the application.
	pub matched: usize,
	/// Processes that accepted the kill signal.
	pub terminated: usize,
}

/// Errors from a termination request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
	/// Process enumeration is not available on this platform.
	#[error("process control is not supported on this platform")]
	Unsupported,

	/// Some matched processes refused to die.
	#[error("failed to terminate {} of {} processes for {app}", .pids.len(), .report.matched)]
	KillFailed {
		app: AppId,
		/// Pids whose kill request was refused.
		pids: Vec<u32>,
		report: TerminationReport,
	},

	/// Backend-specific failure.
	#[error("process control failed for {app}: {reason}")]
	Backend { app: AppId, reason: String },
}

/// Terminates all running processes belonging to an application.
pub trait ProcessController {
	fn terminate_all(&self, app: &AppId) -> Result<TerminationReport, ProcessError>;
}

impl<P: ProcessController + ?Sized> ProcessController for &P {
	fn terminate_all(&self, app: &AppId) -> Result<TerminationReport, ProcessError> {
		(**self).terminate_all(app)
	}
}

impl<P: ProcessController + ?Sized> ProcessController for Box<P> {
	fn terminate_all(&self, app: &AppId) -> Result<TerminationReport, ProcessError> {
		(**self).terminate_all(app)
	}
}

/// Controller that never touches running processes.
///
/// Assignments still persist; they take effect on the app's next start.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl ProcessController for NoTermination {
	fn terminate_all(&self, _app: &AppId) -> Result<TerminationReport, ProcessError> {
		Ok(TerminationReport::default())
	}
}
