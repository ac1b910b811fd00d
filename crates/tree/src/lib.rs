//! Tree of test suites and test cases.
//!
//! # Mental Model
//!
//! A [`SuiteTree`] is an arena that owns every [`TestSuite`] created through it. Suites are
//! addressed by copyable [`SuiteKey`] handles; a suite's parent is a key (non-owning), and its
//! child suites are listed by identifier in insertion order. Test cases are leaves owned inline
//! by the suite they were added to.
//!
//! Readers build the tree with [`SuiteTree::create_suite`], [`SuiteTree::add_test_suite`] and
//! [`SuiteTree::add_test_case`]. Executors consume it with [`SuiteTree::walk`], the lookup
//! accessors and the counting operations.
//!
//! # Invariants
//!
//! - Must keep every identifier non-blank.
//!   - Enforced in: [`Identifier::new`]
//!   - Failure symptom: Suites or cases that cannot be addressed by name.
//!
//! - Must keep sibling identifiers unique per child kind.
//!   - Enforced in: [`SuiteTree::add_test_suite`], [`SuiteTree::add_test_case`]
//!   - Failure symptom: A later child silently shadows an earlier one and never runs.
//!
//! - Must keep the parent chain acyclic.
//!   - Enforced in: [`SuiteTree::add_test_suite`], [`SuiteTree::set_parent`]
//!   - Failure symptom: Ancestor walks and recursive counts never terminate.
//!
//! - Must leave the tree untouched when a mutation is rejected.
//!   - Enforced in: every fallible `SuiteTree` mutation validates before writing.
//!   - Failure symptom: A failed add leaves a half-registered child behind.
//!
//! # Concurrency
//!
//! Construction takes `&mut SuiteTree`. Once built the tree holds only owned data and can be
//! shared by reference across threads for reading.

/// Test case leaves and their opaque action lists.
pub mod case;
/// Tree configuration and duplicate handling policy.
pub mod config;
/// Error types for identifiers, tree mutations and configuration.
pub mod error;
/// Validated identifiers shared by suites and cases.
pub mod ident;
#[cfg(test)]
mod invariants;
/// Shared identity capability and the suite/case node variant.
pub mod node;
/// Indented text rendering of a subtree.
pub mod outline;
/// Test suite node data.
pub mod suite;
/// Arena owning the suites of one tree.
pub mod tree;
/// Depth-first walks, ancestor chains and path addressing.
pub mod walk;

pub use case::{TestAction, TestCase};
pub use config::{DuplicatePolicy, TreeConfig};
pub use error::{ChildKind, ConfigError, IdentifierError, Result, TreeError};
pub use ident::{Identifier, is_valid_identifier};
pub use node::{Identifiable, Node};
pub use outline::Outline;
pub use suite::{SuiteKey, TestSuite};
pub use tree::SuiteTree;
pub use walk::{Ancestors, Visit, Walk};
