use indexmap::map::Values;

use crate::case::TestCase;
use crate::ident::Identifier;
use crate::suite::{SuiteKey, TestSuite};
use crate::tree::SuiteTree;

/// Iterator over the parent chain of a suite, nearest parent first.
pub struct Ancestors<'a> {
	tree: &'a SuiteTree,
	next: Option<SuiteKey>,
}

impl Iterator for Ancestors<'_> {
	type Item = SuiteKey;

	fn next(&mut self) -> Option<SuiteKey> {
		let key = self.next?;
		self.next = self.tree.get(key).and_then(TestSuite::parent);
		Some(key)
	}
}

/// One step of a depth-first [`Walk`].
#[derive(Debug, Clone, Copy)]
pub enum Visit<'a> {
	/// Entering a suite; everything until the matching `Leave` belongs to its scope.
	Enter(SuiteKey),
	/// A test case of the suite currently entered.
	Case(SuiteKey, &'a TestCase),
	Leave(SuiteKey),
}

struct Frame<'a> {
	key: SuiteKey,
	entered: bool,
	cases: Values<'a, Identifier, TestCase>,
	suites: Values<'a, Identifier, SuiteKey>,
}

impl<'a> Frame<'a> {
	fn new(key: SuiteKey, suite: &'a TestSuite) -> Self {
		Self {
			key,
			entered: false,
			cases: suite.test_cases.values(),
			suites: suite.test_suites.values(),
		}
	}
}

/// Depth-first walk over a subtree in execution order.
///
/// Each suite yields `Enter`, then its own cases in insertion order, then the walks of its child
/// suites in insertion order, then `Leave`. The walk keeps an explicit stack, so tree depth is
/// not bounded by the call stack.
pub struct Walk<'a> {
	tree: &'a SuiteTree,
	stack: Vec<Frame<'a>>,
}

impl<'a> Iterator for Walk<'a> {
	type Item = Visit<'a>;

	fn next(&mut self) -> Option<Visit<'a>> {
		loop {
			let frame = self.stack.last_mut()?;
			if !frame.entered {
				frame.entered = true;
				return Some(Visit::Enter(frame.key));
			}
			if let Some(case) = frame.cases.next() {
				return Some(Visit::Case(frame.key, case));
			}
			if let Some(&child) = frame.suites.next() {
				if let Some(suite) = self.tree.get(child) {
					self.stack.push(Frame::new(child, suite));
				}
				continue;
			}
			let key = frame.key;
			self.stack.pop();
			return Some(Visit::Leave(key));
		}
	}
}

impl SuiteTree {
	/// Parent chain of `suite`, nearest first. Empty for roots and unknown keys.
	pub fn ancestors(&self, suite: SuiteKey) -> Ancestors<'_> {
		Ancestors {
			tree: self,
			next: self.get(suite).and_then(TestSuite::parent),
		}
	}

	/// Whether `ancestor` is reached by following `of`'s parent chain.
	pub fn is_ancestor(&self, ancestor: SuiteKey, of: SuiteKey) -> bool {
		self.ancestors(of).any(|key| key == ancestor)
	}

	/// Number of suites on the parent chain of `suite`.
	pub fn depth(&self, suite: SuiteKey) -> usize {
		self.ancestors(suite).count()
	}

	/// Walks the subtree listed below `root`. Yields nothing for an unknown key.
	pub fn walk(&self, root: SuiteKey) -> Walk<'_> {
		Walk {
			tree: self,
			stack: self.get(root).map(|suite| Frame::new(root, suite)).into_iter().collect(),
		}
	}

	/// Identifiers from the top of `suite`'s parent chain down to `suite` itself.
	pub fn path(&self, suite: SuiteKey) -> Option<Vec<&Identifier>> {
		let node = self.get(suite)?;
		let mut path: Vec<&Identifier> = self
			.ancestors(suite)
			.filter_map(|key| self.get(key))
			.map(TestSuite::id)
			.collect();
		path.reverse();
		path.push(node.id());
		Some(path)
	}

	/// Follows direct child suites named by `segments`, starting at `root`.
	///
	/// An empty path resolves to `root`.
	pub fn resolve<S: AsRef<str>>(&self, root: SuiteKey, segments: &[S]) -> Option<SuiteKey> {
		segments
			.iter()
			.try_fold(root, |key, segment| self.get(key)?.test_suite(segment.as_ref()))
	}

	/// Resolves `segments` from `root`, then looks up the direct test case `case_id` there.
	pub fn find_case<S: AsRef<str>>(&self, root: SuiteKey, segments: &[S], case_id: &str) -> Option<&TestCase> {
		let suite = self.resolve(root, segments)?;
		self.test_case(suite, case_id)
	}
}
