use appspoof_process::{ProcessController, ProcessError, TerminationReport};
use appspoof_profiles::{AppId, DEFAULT_SETTING_KEY, ProfileCatalog, ProfileSelection, Registry, ValidationPolicy, decode, encode};
use appspoof_settings::SettingsStore;
use tracing::{debug, info, warn};

use crate::AssignError;

/// Result of asking the process controller to restart an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
	Terminated(TerminationReport),
	/// The assignment is committed but the running instance still uses the
	/// old profile until it restarts.
	Failed(ProcessError),
}

impl Termination {
	pub fn is_failed(&self) -> bool {
		matches!(self, Self::Failed(_))
	}
}

/// A committed assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignOutcome {
	pub app_id: AppId,
	pub previous: ProfileSelection,
	pub current: ProfileSelection,
	/// The registry as written.
	pub registry: Registry,
	pub termination: Termination,
}

/// Applies single profile changes against a settings store.
#[derive(Debug)]
pub struct AssignmentController<S, P> {
	store: S,
	processes: P,
	key: String,
	catalog: ProfileCatalog,
	policy: ValidationPolicy,
}

impl<S: SettingsStore, P: ProcessController> AssignmentController<S, P> {
	/// Creates a controller over [`DEFAULT_SETTING_KEY`] that accepts any
	/// well-formed profile id.
	pub fn new(store: S, processes: P) -> Self {
		Self {
			store,
			processes,
			key: DEFAULT_SETTING_KEY.to_owned(),
			catalog: ProfileCatalog::default(),
			policy: ValidationPolicy::Permissive,
		}
	}

	/// Persists under `key` instead of the default.
	pub fn with_key(mut self, key: impl Into<String>) -> Self {
		self.key = key.into();
		self
	}

	/// Validates requested profiles against `catalog` under `policy`.
	pub fn with_catalog(mut self, catalog: ProfileCatalog, policy: ValidationPolicy) -> Self {
		self.catalog = catalog;
		self.policy = policy;
		self
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn catalog(&self) -> &ProfileCatalog {
		&self.catalog
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	/// Reads and decodes the current registry.
	///
	/// # Errors
	///
	/// Returns [`AssignError::Read`] if the store cannot be read. Malformed
	/// entries are dropped, never reported.
	pub fn load(&self) -> Result<Registry, AssignError> {
		let raw = self.store.read_string(&self.key).map_err(|source| AssignError::Read {
			key: self.key.clone(),
			source,
		})?;
		Ok(decode(raw.as_deref()))
	}

	/// Assigns `selection` to `app` and restarts the app.
	///
	/// The registry is re-read immediately before mutation so that entries
	/// written since the last load are preserved. Termination is requested
	/// only after the write succeeded, and its failure does not fail the
	/// assignment.
	///
	/// # Errors
	///
	/// - [`AssignError::InvalidProfile`] if strict validation rejects the profile.
	/// - [`AssignError::Read`] or [`AssignError::Write`] on storage failure, in
	///   which case the persisted value is unchanged.
	pub fn assign(&self, app: &AppId, selection: ProfileSelection) -> Result<AssignOutcome, AssignError> {
		self.catalog.validate(&selection, self.policy)?;

		let registry = self.load()?;
		let previous = registry.get(app);
		let registry = registry.set(app.clone(), selection.clone());

		let encoded = encode(&registry);
		self.store
			.write_string(&self.key, &encoded)
			.map_err(|source| AssignError::Write {
				key: self.key.clone(),
				source,
			})?;
		info!(app_id = %app, %previous, current = %selection, entries = registry.len(), "profile assignment committed");

		let termination = match self.processes.terminate_all(app) {
			Ok(report) => {
				debug!(app_id = %app, matched = report.matched, terminated = report.terminated, "app restart requested");
				Termination::Terminated(report)
			}
			Err(error) => {
				warn!(app_id = %app, %error, "failed to terminate app; new profile applies on next start");
				Termination::Failed(error)
			}
		};

		Ok(AssignOutcome {
			app_id: app.clone(),
			previous,
			current: selection,
			registry,
			termination,
		})
	}
}
