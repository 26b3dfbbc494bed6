use std::collections::BTreeMap;

use crate::ids::{AppId, ProfileId, ProfileSelection};

#[cfg(test)]
mod tests;

/// Mapping from application to its assigned spoof profile.
///
/// Applications without an entry have no profile. The "no profile" state
/// is represented by absence, so every stored value is a concrete
/// [`ProfileId`]. Iteration order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
	entries: BTreeMap<AppId, ProfileId>,
}

impl Registry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the registry with `app` mapped to `selection`.
	///
	/// [`ProfileSelection::None`] removes the entry.
	pub fn set(mut self, app: AppId, selection: ProfileSelection) -> Self {
		match selection {
			ProfileSelection::None => {
				self.entries.remove(&app);
			}
			ProfileSelection::Profile(profile) => {
				self.entries.insert(app, profile);
			}
		}
		self
	}

	/// Returns the registry without an entry for `app`.
	pub fn remove(mut self, app: &AppId) -> Self {
		self.entries.remove(app);
		self
	}

	/// Looks up the profile assigned to `app`.
	pub fn get(&self, app: &AppId) -> ProfileSelection {
		self.entries.get(app).cloned().into()
	}

	pub fn contains(&self, app: &AppId) -> bool {
		self.entries.contains_key(app)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// All assignments.
	pub fn iter(&self) -> impl Iterator<Item = (&AppId, &ProfileId)> {
		self.entries.iter()
	}

	/// Inserts one decoded entry, replacing any earlier one for the same app.
	pub(crate) fn insert(&mut self, app: AppId, profile: ProfileId) {
		self.entries.insert(app, profile);
	}
}

impl FromIterator<(AppId, ProfileId)> for Registry {
	fn from_iter<I: IntoIterator<Item = (AppId, ProfileId)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a Registry {
	type Item = (&'a AppId, &'a ProfileId);
	type IntoIter = std::collections::btree_map::Iter<'a, AppId, ProfileId>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
