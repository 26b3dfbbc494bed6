use std::ffi::OsStr;
use std::path::Path;

use appspoof_profiles::{AppId, FIELD_SEP};
use sysinfo::{Pid, Process, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};
use tracing::{debug, warn};

use crate::{ProcessController, ProcessError, TerminationReport};


/// Returns whether a process named `name` belongs to `app`.
///
/// Matches the package name itself and its secondary processes, which are
/// named `<package>:<suffix>` (e.g. `com.app.x:remote`).
pub fn owns_process(app: &str, name: &str) -> bool {
	match name.strip_prefix(app) {
		Some("") => true,
		Some(rest) => rest.starts_with(FIELD_SEP),
		None => false,
	}
}

/// Names a process can be recognized by: its short name, `argv[0]` and
/// executable file name. Kernel short names are truncated, so `argv[0]`
/// carries the full package name for app processes.
fn process_names(process: &Process) -> impl Iterator<Item = &OsStr> {
	let argv0 = process.cmd().first().map(|arg| {
		let arg: &OsStr = arg.as_ref();
		Path::new(arg).file_name().unwrap_or(arg)
	});
	let exe = process.exe().and_then(Path::file_name);
	std::iter::once(process.name()).chain(argv0).chain(exe)
}

/// Terminates processes found through the operating system's process table.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessController;

impl SystemProcessController {
	pub fn new() -> Self {
		Self
	}
}

impl ProcessController for SystemProcessController {
	fn terminate_all(&self, app: &AppId) -> Result<TerminationReport, ProcessError> {
		if !sysinfo::IS_SUPPORTED_SYSTEM {
			return Err(ProcessError::Unsupported);
		}

		let mut system = System::new();
		// The command line is not loaded by default and `argv[0]` is the only
		// untruncated name an app process carries.
		system.refresh_processes_specifics(
			ProcessesToUpdate::All,
			true,
			ProcessRefreshKind::nothing()
				.with_cmd(UpdateKind::Always)
				.with_exe(UpdateKind::OnlyIfNotSet),
		);
		let own_pid = sysinfo::get_current_pid().ok();

		let targets: Vec<(&Pid, &Process)> = system
			.processes()
			.iter()
			.filter(|(pid, _)| Some(**pid) != own_pid)
			.filter(|(_, process)| {
				process_names(process).any(|name| name.to_str().is_some_and(|name| owns_process(app.as_str(), name)))
			})
			.collect();

		let mut report = TerminationReport {
			matched: targets.len(),
			terminated: 0,
		};
		let mut refused = Vec::new();
		for (pid, process) in targets {
			if process.kill() {
				report.terminated += 1;
				debug!(app_id = %app, pid = pid.as_u32(), "process terminated");
			} else {
				warn!(app_id = %app, pid = pid.as_u32(), "process refused termination");
				refused.push(pid.as_u32());
			}
		}

		if refused.is_empty() {
			debug!(app_id = %app, matched = report.matched, "termination complete");
			Ok(report)
		} else {
			Err(ProcessError::KillFailed {
				app: app.clone(),
				pids: refused,
				report,
			})
		}
	}
}
