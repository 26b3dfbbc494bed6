//! Error types for configuration parsing.

use std::path::PathBuf;

use appspoof_profiles::CatalogError;
use thiserror::Error;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or schema.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The `[[profiles]]` list is invalid.
	#[error("invalid profile catalog: {0}")]
	Catalog(#[from] CatalogError),

	/// The settings key is empty.
	#[error("setting_key must not be empty")]
	EmptySettingKey,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
