//! Error types for identifiers, tree mutations and configuration.

use std::convert::Infallible;
use std::fmt;

use thiserror::Error;

use crate::ident::Identifier;
use crate::suite::SuiteKey;

/// Reasons a candidate identifier is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdentifierError {
	/// No value was provided at all.
	#[error("identifier is missing")]
	Missing,
	/// The value is empty or whitespace only.
	#[error("identifier is blank")]
	Blank,
}

/// Which child mapping of a suite an operation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
	Suite,
	Case,
}

impl fmt::Display for ChildKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Suite => write!(f, "test suite"),
			Self::Case => write!(f, "test case"),
		}
	}
}

/// Structural errors raised by tree construction.
///
/// Every variant is returned before the tree is written to, so a caller that receives one can
/// keep using the tree as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
	#[error("invalid identifier: {0}")]
	InvalidIdentifier(#[from] IdentifierError),

	/// A direct child of the same kind already uses this identifier.
	#[error("{kind} '{id}' already exists in test suite '{parent}'")]
	DuplicateChild { parent: Identifier, kind: ChildKind, id: Identifier },

	#[error("test suite '{id}' can't be its own parent")]
	SelfParent { id: Identifier },

	/// Linking `child` below `parent` would close a loop in the parent chain.
	#[error("linking test suite '{child}' below '{parent}' would create a loop")]
	CyclicStructure { parent: Identifier, child: Identifier },

	/// The key was not issued by this tree.
	#[error("unknown test suite key {0}")]
	UnknownSuite(SuiteKey),
}

impl From<Infallible> for TreeError {
	fn from(never: Infallible) -> Self {
		match never {}
	}
}

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that can occur when loading a [`crate::TreeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unknown/ill-typed field.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
}
