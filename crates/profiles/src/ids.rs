use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::{ENTRY_SEP, FIELD_SEP};

/// Token used for "no profile assigned" in APIs, catalogs and user input.
pub const NONE_TOKEN: &str = "None";

/// Errors raised when constructing an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
	/// The identifier is empty.
	#[error("{kind} must not be empty")]
	Empty {
		/// Which identifier was being built.
		kind: &'static str,
	},

	/// The identifier contains a delimiter of the persisted format.
	#[error("{kind} {value:?} contains reserved delimiter '{delimiter}'")]
	Delimiter {
		/// Which identifier was being built.
		kind: &'static str,
		/// The rejected input.
		value: String,
		/// The offending character.
		delimiter: char,
	},

	/// The profile identifier collides with the "no profile" token.
	#[error("profile id \"None\" is reserved for clearing an assignment")]
	Reserved,
}

fn check(kind: &'static str, value: &str) -> Result<(), IdError> {
	if value.is_empty() {
		return Err(IdError::Empty { kind });
	}
	if let Some(delimiter) = value.chars().find(|&c| c == ENTRY_SEP || c == FIELD_SEP) {
		return Err(IdError::Delimiter {
			kind,
			value: value.to_owned(),
			delimiter,
		});
	}
	Ok(())
}

/// Package identifier of an installed application.
///
/// Never empty and never contains `,` or `:`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AppId(String);

impl AppId {
	/// Validates and wraps a package identifier.
	pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
		let value = value.into();
		check("app id", &value)?;
		Ok(Self(value))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

/// Identifier of a concrete spoof profile.
///
/// Never empty, never contains `,` or `:`, and never equal to [`NONE_TOKEN`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfileId(String);

impl ProfileId {
	/// Validates and wraps a profile identifier.
	pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
		let value = value.into();
		check("profile id", &value)?;
		if value == NONE_TOKEN {
			return Err(IdError::Reserved);
		}
		Ok(Self(value))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

macro_rules! string_newtype_impls {
	($ty:ty) => {
		impl fmt::Display for $ty {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(&self.0)
			}
		}

		impl AsRef<str> for $ty {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}

		impl FromStr for $ty {
			type Err = IdError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}

		impl TryFrom<String> for $ty {
			type Error = IdError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				Self::new(value)
			}
		}

		impl From<$ty> for String {
			fn from(value: $ty) -> Self {
				value.0
			}
		}
	};
}

string_newtype_impls!(AppId);
string_newtype_impls!(ProfileId);

/// A requested or stored profile: either a concrete profile or none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ProfileSelection {
	/// No profile; the application runs unspoofed.
	#[default]
	None,
	/// A concrete profile.
	Profile(ProfileId),
}

impl ProfileSelection {
	/// Returns the concrete profile, if any.
	pub fn profile(&self) -> Option<&ProfileId> {
		match self {
			Self::None => None,
			Self::Profile(id) => Some(id),
		}
	}

	pub fn is_none(&self) -> bool {
		matches!(self, Self::None)
	}

	/// Token form: the profile id, or [`NONE_TOKEN`].
	pub fn as_str(&self) -> &str {
		match self {
			Self::None => NONE_TOKEN,
			Self::Profile(id) => id.as_str(),
		}
	}
}

impl From<ProfileId> for ProfileSelection {
	fn from(id: ProfileId) -> Self {
		Self::Profile(id)
	}
}

impl From<Option<ProfileId>> for ProfileSelection {
	fn from(id: Option<ProfileId>) -> Self {
		id.map_or(Self::None, Self::Profile)
	}
}

impl FromStr for ProfileSelection {
	type Err = IdError;

	/// Parses user input; [`NONE_TOKEN`] clears the assignment.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s == NONE_TOKEN {
			return Ok(Self::None);
		}
		ProfileId::new(s).map(Self::Profile)
	}
}

impl fmt::Display for ProfileSelection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case::empty("", IdError::Empty { kind: "app id" })]
	#[case::entry_sep("com.a,b", IdError::Delimiter { kind: "app id", value: "com.a,b".into(), delimiter: ',' })]
	#[case::field_sep("com.a:remote", IdError::Delimiter { kind: "app id", value: "com.a:remote".into(), delimiter: ':' })]
	fn app_id_rejects(#[case] input: &str, #[case] expected: IdError) {
		assert_eq!(AppId::new(input), Err(expected));
	}

	#[test]
	fn app_id_accepts_package_names() {
		let id = AppId::new("com.google.android.gms").unwrap();
		assert_eq!(id.as_str(), "com.google.android.gms");
		assert_eq!(id.to_string(), "com.google.android.gms");
	}

	#[test]
	fn profile_id_rejects_sentinel() {
		assert_eq!(ProfileId::new(NONE_TOKEN), Err(IdError::Reserved));
		assert!(matches!(ProfileId::new("a:b"), Err(IdError::Delimiter { delimiter: ':', .. })));
	}

	#[test]
	fn selection_parses_sentinel_as_none() {
		assert_eq!("None".parse::<ProfileSelection>(), Ok(ProfileSelection::None));
		assert_eq!(
			"Pixel9".parse::<ProfileSelection>(),
			Ok(ProfileSelection::Profile(ProfileId::new("Pixel9").unwrap()))
		);
		assert!("".parse::<ProfileSelection>().is_err());
	}

	#[test]
	fn selection_token_roundtrips() {
		let sel = ProfileSelection::from(ProfileId::new("Pixel9").unwrap());
		assert_eq!(sel.as_str().parse::<ProfileSelection>(), Ok(sel));
		assert_eq!(ProfileSelection::None.to_string(), NONE_TOKEN);
	}
}
