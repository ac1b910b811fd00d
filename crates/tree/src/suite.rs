use std::fmt;

use indexmap::IndexMap;

use crate::case::TestCase;
use crate::ident::Identifier;

/// Handle to one suite of a [`crate::SuiteTree`].
///
/// Keys are issued by the tree that created the suite and stay valid for that tree's lifetime.
/// A key presented to a different tree is reported as unknown rather than aliasing a suite there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SuiteKey {
	pub(crate) tree: u32,
	pub(crate) slot: usize,
}

impl fmt::Display for SuiteKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.tree, self.slot)
	}
}

/// Container node holding child suites and test cases.
///
/// A `TestSuite` is only reachable through the tree that owns it; all structural changes go
/// through [`crate::SuiteTree`] so the tree can check its invariants first. The accessors here
/// only see direct children.
#[derive(Debug, Clone)]
pub struct TestSuite {
	pub(crate) id: Identifier,
	pub(crate) parent: Option<SuiteKey>,
	pub(crate) test_suites: IndexMap<Identifier, SuiteKey>,
	pub(crate) test_cases: IndexMap<Identifier, TestCase>,
}

impl TestSuite {
	pub(crate) fn new(id: Identifier, parent: Option<SuiteKey>) -> Self {
		Self {
			id,
			parent,
			test_suites: IndexMap::new(),
			test_cases: IndexMap::new(),
		}
	}

	pub fn id(&self) -> &Identifier {
		&self.id
	}

	pub fn parent(&self) -> Option<SuiteKey> {
		self.parent
	}

	pub fn has_parent(&self) -> bool {
		self.parent.is_some()
	}

	/// Direct child suites in insertion order.
	pub fn test_suites(&self) -> &IndexMap<Identifier, SuiteKey> {
		&self.test_suites
	}

	pub fn test_suite(&self, id: &str) -> Option<SuiteKey> {
		self.test_suites.get(id).copied()
	}

	/// Whether a direct child suite uses `id`. Deeper descendants are not searched.
	pub fn has_test_suite(&self, id: &str) -> bool {
		self.test_suites.contains_key(id)
	}

	pub fn number_of_test_suites(&self) -> usize {
		self.test_suites.len()
	}

	/// Direct test cases in insertion order.
	pub fn test_cases(&self) -> &IndexMap<Identifier, TestCase> {
		&self.test_cases
	}

	pub fn test_case(&self, id: &str) -> Option<&TestCase> {
		self.test_cases.get(id)
	}

	pub fn has_test_case(&self, id: &str) -> bool {
		self.test_cases.contains_key(id)
	}

	pub fn number_of_test_cases(&self) -> usize {
		self.test_cases.len()
	}

	/// Whether `child` is listed in this suite's child map under its own identifier.
	pub(crate) fn lists(&self, id: &str, child: SuiteKey) -> bool {
		self.test_suites.get(id) == Some(&child)
	}
}
