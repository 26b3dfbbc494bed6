//! Per-application spoof profile assignments.
//!
//! The registry maps an installed application's package identifier to the
//! spoof profile it runs under. It round-trips through a single persisted
//! settings value:
//!
//! ```text
//! value = "" | entry ("," entry)*
//! entry = app-id ":" profile-id
//! ```
//!
//! Absence of an application in the mapping means no profile is assigned.
//! The "no profile" sentinel is never persisted.

/// Profile enumeration and labels.
pub mod catalog;
/// Persisted value encoding and decoding.
pub mod codec;
/// Validated identifier types.
pub mod ids;
/// The in-memory assignment mapping.
pub mod registry;

pub use catalog::{CatalogError, ProfileCatalog, ProfileEntry, ValidationPolicy};
pub use codec::{DEFAULT_SETTING_KEY, ENTRY_SEP, FIELD_SEP, decode, encode};
pub use ids::{AppId, IdError, NONE_TOKEN, ProfileId, ProfileSelection};
pub use registry::Registry;
