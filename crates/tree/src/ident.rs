use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use crate::error::IdentifierError;

/// Returns whether `value` may name a suite or case: non-empty once trimmed.
pub fn is_valid_identifier(value: &str) -> bool {
	!value.trim().is_empty()
}

/// Non-blank name of a suite or case.
///
/// The value is kept verbatim (surrounding whitespace is not stripped) and never changes after
/// construction. Maps keyed by `Identifier` can be queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(Box<str>);

impl Identifier {
	/// Validates `value` and wraps it.
	pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
		let value = value.into();
		if !is_valid_identifier(&value) {
			return Err(IdentifierError::Blank);
		}
		Ok(Self(value.into_boxed_str()))
	}

	/// Like [`Identifier::new`], but reports an absent value as [`IdentifierError::Missing`].
	pub fn from_optional<S: Into<String>>(value: Option<S>) -> Result<Self, IdentifierError> {
		value.ok_or(IdentifierError::Missing).and_then(Self::new)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Identifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Deref for Identifier {
	type Target = str;

	fn deref(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for Identifier {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for Identifier {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl TryFrom<&str> for Identifier {
	type Error = IdentifierError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl TryFrom<String> for Identifier {
	type Error = IdentifierError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl TryFrom<Option<&str>> for Identifier {
	type Error = IdentifierError;

	fn try_from(value: Option<&str>) -> Result<Self, Self::Error> {
		Self::from_optional(value)
	}
}

impl TryFrom<Option<String>> for Identifier {
	type Error = IdentifierError;

	fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
		Self::from_optional(value)
	}
}

impl PartialEq<str> for Identifier {
	fn eq(&self, other: &str) -> bool {
		&*self.0 == other
	}
}

impl PartialEq<&str> for Identifier {
	fn eq(&self, other: &&str) -> bool {
		&*self.0 == *other
	}
}
