use appspoof_profiles::CatalogError;
use appspoof_settings::SettingsError;
use thiserror::Error;

/// Errors that abort an assignment before it is committed.
///
/// Process termination failures are not errors; they are reported through
/// [`crate::Termination::Failed`] on an otherwise successful outcome.
#[derive(Debug, Error)]
pub enum AssignError {
	/// The requested profile was rejected by the catalog.
	#[error(transparent)]
	InvalidProfile(#[from] CatalogError),

	/// The current registry value could not be read.
	#[error("failed to read setting {key}")]
	Read {
		key: String,
		#[source]
		source: SettingsError,
	},

	/// The updated registry value could not be written; nothing changed.
	#[error("failed to write setting {key}")]
	Write {
		key: String,
		#[source]
		source: SettingsError,
	},
}
