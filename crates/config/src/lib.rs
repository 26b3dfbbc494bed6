//! Configuration system for appspoof.
//!
//! Configuration is written in TOML. Every field is optional:
//!
//! ```toml
//! # Settings key the registry value is stored under
//! setting_key = "neoteric_spoofed_apps"
//!
//! # Directory holding one file per settings key
//! store_dir = "/data/system/appspoof"
//!
//! # "permissive" persists any profile id, "strict" only listed ones
//! validation = "strict"
//!
//! # Terminate an app's processes after changing its profile
//! terminate = true
//!
//! # Label of the "no profile" choice
//! none_label = "Off"
//!
//! [[profiles]]
//! id = "Pixel9"
//! label = "Pixel 9 Pro"
//!
//! [[profiles]]
//! id = "Tablet"
//! ```
//!
//! # Configuration Files
//!
//! Without an explicit path, appspoof reads
//! `$XDG_CONFIG_HOME/appspoof/config.toml` (or the platform equivalent).
//! A missing default file yields the default configuration.

pub mod error;

use std::path::{Path, PathBuf};

use appspoof_profiles::{DEFAULT_SETTING_KEY, NONE_TOKEN, ProfileCatalog, ValidationPolicy};
pub use error::{ConfigError, Result};
use serde::Deserialize;


const APP_DIR: &str = "appspoof";

/// File-level schema, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
	setting_key: Option<String>,
	store_dir: Option<PathBuf>,
	validation: Option<ValidationPolicy>,
	terminate: Option<bool>,
	none_label: Option<String>,
	profiles: Vec<RawProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfile {
	id: String,
	/// Defaults to the id.
	label: Option<String>,
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
	/// Settings key the registry value is stored under.
	pub setting_key: String,
	/// Directory of the file-backed settings store.
	pub store_dir: PathBuf,
	/// Whether unlisted profile ids may be assigned.
	pub validation: ValidationPolicy,
	/// Whether to terminate an app's processes after a change.
	pub terminate: bool,
	/// Selectable profiles.
	pub catalog: ProfileCatalog,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			setting_key: DEFAULT_SETTING_KEY.to_owned(),
			store_dir: default_store_dir(),
			validation: ValidationPolicy::default(),
			terminate: true,
			catalog: ProfileCatalog::default(),
		}
	}
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		let raw: RawConfig = toml::from_str(input)?;
		let defaults = Self::default();

		let setting_key = raw.setting_key.unwrap_or(defaults.setting_key);
		if setting_key.is_empty() {
			return Err(ConfigError::EmptySettingKey);
		}

		let none_label = raw.none_label.unwrap_or_else(|| NONE_TOKEN.to_owned());
		let catalog = ProfileCatalog::from_pairs(
			none_label,
			raw.profiles.into_iter().map(|p| {
				let label = p.label.unwrap_or_else(|| p.id.clone());
				(p.id, label)
			}),
		)?;

		Ok(Self {
			setting_key,
			store_dir: raw.store_dir.unwrap_or(defaults.store_dir),
			validation: raw.validation.unwrap_or(defaults.validation),
			terminate: raw.terminate.unwrap_or(defaults.terminate),
			catalog,
		})
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Load from `path`, or from [`default_config_path`] when `None`.
	///
	/// Only the default location may be missing; an explicit path must exist.
	pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
		if let Some(path) = path {
			return Self::load(path);
		}
		match default_config_path() {
			Some(path) if path.is_file() => Self::load(path),
			_ => Ok(Self::default()),
		}
	}
}

/// `<config_dir>/appspoof/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// `<data_dir>/appspoof`, falling back to a relative `.appspoof`.
pub fn default_store_dir() -> PathBuf {
	dirs::data_dir().map_or_else(|| PathBuf::from(".appspoof"), |dir| dir.join(APP_DIR))
}
