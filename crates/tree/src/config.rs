//! Tree configuration.
//!
//! ```toml
//! duplicates = "replace"
//! ```

use serde::Deserialize;

use crate::error::ConfigError;

/// What happens when a child is added under an identifier its new parent already uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
	/// Refuse the new child with [`crate::TreeError::DuplicateChild`].
	#[default]
	Reject,
	/// Put the new child in the existing slot. A displaced suite is detached and becomes a root.
	Replace,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeConfig {
	pub duplicates: DuplicatePolicy,
}

impl TreeConfig {
	/// Parses a configuration document. Missing fields take their defaults.
	pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}

	#[must_use]
	pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
		self.duplicates = duplicates;
		self
	}
}
