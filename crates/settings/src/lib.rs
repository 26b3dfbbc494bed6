//! Settings storage backing the spoof profile registry.
//!
//! A [`SettingsStore`] holds string values under string keys and replaces a
//! value as a whole on every write. Two backends are provided:
//!
//! - [`MemoryStore`]: shared in-process map for tests and dry runs.
//! - [`FileStore`]: one file per key in a directory, written atomically.

pub mod error;
mod file;
mod memory;

pub use error::{Result, SettingsError};
pub use file::FileStore;
pub use memory::MemoryStore;

/// A string-valued key-value store with whole-value writes.
pub trait SettingsStore {
	/// Reads the value under `key`. `Ok(None)` means the key was never written.
	fn read_string(&self, key: &str) -> Result<Option<String>>;

	/// Replaces the value under `key`.
	///
	/// On failure the previous value must remain readable unchanged.
	fn write_string(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: SettingsStore + ?Sized> SettingsStore for &S {
	fn read_string(&self, key: &str) -> Result<Option<String>> {
		(**self).read_string(key)
	}

	fn write_string(&self, key: &str, value: &str) -> Result<()> {
		(**self).write_string(key, value)
	}
}

impl<S: SettingsStore + ?Sized> SettingsStore for Box<S> {
	fn read_string(&self, key: &str) -> Result<Option<String>> {
		(**self).read_string(key)
	}

	fn write_string(&self, key: &str, value: &str) -> Result<()> {
		(**self).write_string(key, value)
	}
}
