//! Error types for settings storage.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading or writing a setting.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The key cannot be mapped onto the backend.
	#[error("invalid settings key {0:?}")]
	InvalidKey(String),

	/// Reading a stored value failed.
	#[error("I/O error reading {path}: {error}")]
	Read {
		/// File backing the key.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Writing a value failed; the previous value is untouched.
	#[error("I/O error writing {path}: {error}")]
	Write {
		/// File backing the key.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The stored bytes are not valid UTF-8.
	#[error("value at {0} is not valid UTF-8")]
	NotUtf8(PathBuf),

	/// The backend refused the operation.
	#[error("settings backend unavailable: {0}")]
	Unavailable(String),
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
