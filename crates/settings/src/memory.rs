use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{Result, SettingsStore};

/// In-memory settings store.
///
/// Clones share the same underlying map, so a handle kept by a test observes
/// writes made through another handle.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
	inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store with one pre-seeded value.
	pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
		let store = Self::new();
		store.inner.write().insert(key.into(), value.into());
		store
	}
}

impl SettingsStore for MemoryStore {
	fn read_string(&self, key: &str) -> Result<Option<String>> {
		Ok(self.inner.read().get(key).cloned())
	}

	fn write_string(&self, key: &str, value: &str) -> Result<()> {
		self.inner.write().insert(key.to_owned(), value.to_owned());
		Ok(())
	}
}
