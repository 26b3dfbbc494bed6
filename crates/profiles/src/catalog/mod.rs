//! The enumerated set of spoof profiles offered to the user.
//!
//! The catalog is ordered: the "no profile" entry always comes first,
//! followed by concrete profiles in the order they were declared. Indices
//! are stable for the lifetime of a catalog and are what a single-choice
//! picker would preselect.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::ids::{IdError, NONE_TOKEN, ProfileId, ProfileSelection};

#[cfg(test)]
mod tests;

/// Errors from building or querying a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
	/// A declared profile id is not a valid identifier.
	#[error("invalid profile id: {0}")]
	InvalidId(#[from] IdError),

	/// The same profile id was declared twice.
	#[error("profile {0} declared more than once")]
	Duplicate(ProfileId),

	/// A requested profile is not part of the catalog.
	#[error("unknown profile: {0}")]
	Unknown(ProfileId),
}

/// Whether unknown profile ids may be persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
	/// Accept any well-formed profile id.
	#[default]
	Permissive,
	/// Accept only profiles listed in the catalog.
	Strict,
}

/// One selectable profile and its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEntry {
	pub selection: ProfileSelection,
	pub label: String,
}

/// Ordered list of selectable profiles, starting with "no profile".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCatalog {
	entries: Vec<ProfileEntry>,
}

impl Default for ProfileCatalog {
	fn default() -> Self {
		Self::with_none_label(NONE_TOKEN)
	}
}

impl ProfileCatalog {
	/// Creates a catalog holding only the "no profile" entry.
	pub fn with_none_label(label: impl Into<String>) -> Self {
		Self {
			entries: vec![ProfileEntry {
				selection: ProfileSelection::None,
				label: label.into(),
			}],
		}
	}

	/// Builds a catalog from `(id, label)` pairs in declaration order.
	///
	/// # Errors
	///
	/// Returns [`CatalogError::InvalidId`] for a malformed or reserved id and
	/// [`CatalogError::Duplicate`] if an id repeats.
	pub fn from_pairs<I, S, L>(none_label: impl Into<String>, pairs: I) -> Result<Self, CatalogError>
	where
		I: IntoIterator<Item = (S, L)>,
		S: Into<String>,
		L: Into<String>,
	{
		let mut catalog = Self::with_none_label(none_label);
		let mut seen = HashSet::new();
		for (id, label) in pairs {
			let id = ProfileId::new(id)?;
			if !seen.insert(id.clone()) {
				return Err(CatalogError::Duplicate(id));
			}
			catalog.entries.push(ProfileEntry {
				selection: ProfileSelection::Profile(id),
				label: label.into(),
			});
		}
		Ok(catalog)
	}

	pub fn entries(&self) -> &[ProfileEntry] {
		&self.entries
	}

	/// Number of entries, including "no profile".
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Always false; the "no profile" entry is always present.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn contains(&self, id: &ProfileId) -> bool {
		self.entries.iter().any(|e| e.selection.profile() == Some(id))
	}

	/// Index of `selection` in picker order.
	///
	/// Ids missing from the catalog fall back to the "no profile" entry.
	pub fn index_of(&self, selection: &ProfileSelection) -> usize {
		self.entries.iter().position(|e| &e.selection == selection).unwrap_or(0)
	}

	/// Entry at a picker index.
	pub fn get(&self, index: usize) -> Option<&ProfileEntry> {
		self.entries.get(index)
	}

	/// Display label for `selection`. Unlisted ids are shown verbatim.
	pub fn label<'a>(&'a self, selection: &'a ProfileSelection) -> &'a str {
		self.entries
			.iter()
			.find(|e| &e.selection == selection)
			.map_or(selection.as_str(), |e| e.label.as_str())
	}

	/// Checks `selection` against `policy`. Clearing is always allowed.
	///
	/// # Errors
	///
	/// Returns [`CatalogError::Unknown`] under [`ValidationPolicy::Strict`]
	/// for a profile that is not listed.
	pub fn validate(&self, selection: &ProfileSelection, policy: ValidationPolicy) -> Result<(), CatalogError> {
		match (policy, selection) {
			(ValidationPolicy::Permissive, _) | (_, ProfileSelection::None) => Ok(()),
			(ValidationPolicy::Strict, ProfileSelection::Profile(id)) if self.contains(id) => Ok(()),
			(ValidationPolicy::Strict, ProfileSelection::Profile(id)) => Err(CatalogError::Unknown(id.clone())),
		}
	}
}
