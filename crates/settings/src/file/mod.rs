use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::{Result, SettingsError, SettingsStore};


/// Directory-backed settings store with one file per key.
///
/// Writes go to a temporary file in the same directory which is then
/// renamed over the target, so a reader sees either the old or the new
/// value and a failed write leaves the old value in place.
#[derive(Debug, Clone)]
pub struct FileStore {
	root: PathBuf,
}

impl FileStore {
	/// Creates a store rooted at `root`. The directory is created on first write.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Maps a key onto its backing file.
	///
	/// Keys become file names, so separators, leading dots (which would
	/// collide with temporary files) and NUL are rejected.
	fn path_for(&self, key: &str) -> Result<PathBuf> {
		let invalid = key.is_empty()
			|| key.starts_with('.')
			|| key.contains(['/', '\\', '\0']);
		if invalid {
			return Err(SettingsError::InvalidKey(key.to_owned()));
		}
		Ok(self.root.join(key))
	}
}

impl SettingsStore for FileStore {
	fn read_string(&self, key: &str) -> Result<Option<String>> {
		let path = self.path_for(key)?;
		match fs::read(&path) {
			Ok(bytes) => String::from_utf8(bytes)
				.map(Some)
				.map_err(|_| SettingsError::NotUtf8(path)),
			Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
			Err(error) => Err(SettingsError::Read { path, error }),
		}
	}

	fn write_string(&self, key: &str, value: &str) -> Result<()> {
		let path = self.path_for(key)?;
		let write_err = |error| SettingsError::Write {
			path: path.clone(),
			error,
		};

		fs::create_dir_all(&self.root).map_err(write_err)?;
		let mut tmp = NamedTempFile::new_in(&self.root).map_err(write_err)?;
		tmp.write_all(value.as_bytes()).map_err(write_err)?;
		tmp.as_file().sync_all().map_err(write_err)?;
		tmp.persist(&path).map_err(|e| write_err(e.error))?;

		debug!(key, path = %path.display(), len = value.len(), "setting written");
		Ok(())
	}
}
