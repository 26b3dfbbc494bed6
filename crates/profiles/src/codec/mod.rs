//! Encoding of a [`Registry`] into its persisted settings value.
//!
//! The value is a flat list of `app:profile` pairs joined by commas. It is
//! always produced from the full mapping; callers never edit it textually.
//!
//! Decoding is total. Entries that do not split into exactly two non-empty,
//! valid fields are dropped so that one corrupt entry never hides the rest.

use tracing::debug;

use crate::ids::{AppId, ProfileId};
use crate::registry::Registry;


/// Settings key the registry is persisted under.
pub const DEFAULT_SETTING_KEY: &str = "neoteric_spoofed_apps";

/// Separator between entries.
pub const ENTRY_SEP: char = ',';
/// Separator between the app id and profile id of one entry.
pub const FIELD_SEP: char = ':';

/// Decodes a persisted value. `None` and `""` both yield an empty registry.
///
/// A later entry for the same app overrides an earlier one.
pub fn decode(raw: Option<&str>) -> Registry {
	let mut registry = Registry::new();
	let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
		return registry;
	};

	let mut dropped = 0usize;
	for entry in raw.split(ENTRY_SEP) {
		match parse_entry(entry) {
			Some((app, profile)) => registry.insert(app, profile),
			None => {
				dropped += 1;
				debug!(entry, "dropping malformed registry entry");
			}
		}
	}
	if dropped > 0 {
		debug!(dropped, kept = registry.len(), "decoded registry with malformed entries");
	}
	registry
}

fn parse_entry(entry: &str) -> Option<(AppId, ProfileId)> {
	let mut fields = entry.split(FIELD_SEP);
	let (Some(app), Some(profile), None) = (fields.next(), fields.next(), fields.next()) else {
		return None;
	};
	if app.is_empty() || profile.is_empty() {
		return None;
	}
	Some((AppId::new(app).ok()?, ProfileId::new(profile).ok()?))
}

/// Encodes the full registry. An empty registry yields `""`.
pub fn encode(registry: &Registry) -> String {
	let mut out = String::new();
	for (app, profile) in registry {
		if !out.is_empty() {
			out.push(ENTRY_SEP);
		}
		out.push_str(app.as_str());
		out.push(FIELD_SEP);
		out.push_str(profile.as_str());
	}
	out
}
