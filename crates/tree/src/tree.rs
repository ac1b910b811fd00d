use std::ops::Index;
use std::sync::atomic::{AtomicU32, Ordering};

use slab::Slab;
use tracing::{debug, trace};

use crate::case::TestCase;
use crate::config::{DuplicatePolicy, TreeConfig};
use crate::error::{ChildKind, Result, TreeError};
use crate::ident::Identifier;
use crate::node::Node;
use crate::suite::{SuiteKey, TestSuite};

static NEXT_TREE_TAG: AtomicU32 = AtomicU32::new(0);

/// Arena owning every suite of one test tree.
///
/// Suites are created detached (as roots) or with a parent back-reference, then linked with
/// [`SuiteTree::add_test_suite`]. Nothing is ever removed, so a [`SuiteKey`] handed out by a tree
/// stays valid for as long as the tree lives.
#[derive(Debug, Clone)]
pub struct SuiteTree {
	tag: u32,
	config: TreeConfig,
	suites: Slab<TestSuite>,
}

impl Default for SuiteTree {
	fn default() -> Self {
		Self::new()
	}
}

impl SuiteTree {
	pub fn new() -> Self {
		Self::with_config(TreeConfig::default())
	}

	pub fn with_config(config: TreeConfig) -> Self {
		Self {
			tag: NEXT_TREE_TAG.fetch_add(1, Ordering::Relaxed),
			config,
			suites: Slab::new(),
		}
	}

	pub fn config(&self) -> &TreeConfig {
		&self.config
	}

	/// Number of suites created in this tree, linked or not.
	pub fn len(&self) -> usize {
		self.suites.len()
	}

	pub fn is_empty(&self) -> bool {
		self.suites.is_empty()
	}

	/// Creates a root suite with no children.
	///
	/// `id` is anything convertible into an [`Identifier`]: a string, an optional string (where
	/// `None` is reported as missing) or an already validated identifier. Nothing is allocated
	/// when the conversion fails.
	pub fn create_suite<I>(&mut self, id: I) -> Result<SuiteKey>
	where
		I: TryInto<Identifier>,
		TreeError: From<I::Error>,
	{
		let id = id.try_into()?;
		Ok(self.insert(TestSuite::new(id, None)))
	}

	/// Creates a suite whose parent back-reference points at `parent`.
	///
	/// The new suite is not listed among `parent`'s children; that only happens through
	/// [`SuiteTree::add_test_suite`].
	pub fn create_suite_with_parent<I>(&mut self, id: I, parent: SuiteKey) -> Result<SuiteKey>
	where
		I: TryInto<Identifier>,
		TreeError: From<I::Error>,
	{
		let id = id.try_into()?;
		self.node(parent)?;
		Ok(self.insert(TestSuite::new(id, Some(parent))))
	}

	fn insert(&mut self, suite: TestSuite) -> SuiteKey {
		let parent = suite.parent;
		let entry = self.suites.vacant_entry();
		let key = SuiteKey {
			tree: self.tag,
			slot: entry.key(),
		};
		let suite = entry.insert(suite);
		debug!(suite = %suite.id, %key, ?parent, "test suite created");
		key
	}

	pub fn contains(&self, key: SuiteKey) -> bool {
		self.get(key).is_some()
	}

	pub fn get(&self, key: SuiteKey) -> Option<&TestSuite> {
		if key.tree != self.tag {
			return None;
		}
		self.suites.get(key.slot)
	}

	fn node(&self, key: SuiteKey) -> Result<&TestSuite> {
		self.get(key).ok_or(TreeError::UnknownSuite(key))
	}

	/// Suites without a parent, in creation order.
	pub fn roots(&self) -> impl Iterator<Item = SuiteKey> + '_ {
		self.suites
			.iter()
			.filter(|(_, suite)| suite.parent.is_none())
			.map(|(slot, _)| SuiteKey { tree: self.tag, slot })
	}

	/// Points `suite`'s parent back-reference at `parent`.
	///
	/// Fails with [`TreeError::SelfParent`] when both keys are the same suite and with
	/// [`TreeError::CyclicStructure`] when `suite` is already an ancestor of `parent`. If `suite`
	/// was listed as a child of a different suite, it is unlisted there so a suite is only ever
	/// listed by the suite its parent reference names.
	pub fn set_parent(&mut self, suite: SuiteKey, parent: SuiteKey) -> Result<()> {
		let node = self.node(suite)?;
		let parent_node = self.node(parent)?;
		if suite == parent {
			return Err(rejected(TreeError::SelfParent { id: node.id.clone() }));
		}
		if self.is_ancestor(suite, parent) {
			return Err(rejected(TreeError::CyclicStructure {
				parent: parent_node.id.clone(),
				child: node.id.clone(),
			}));
		}

		if node.parent != Some(parent) {
			self.unlist(suite);
		}
		let node = &mut self.suites[suite.slot];
		node.parent = Some(parent);
		debug!(suite = %node.id, %parent, "test suite parent set");
		Ok(())
	}

	/// Lists `child` among `parent`'s child suites and points `child`'s parent at `parent`.
	///
	/// Rejected with [`TreeError::CyclicStructure`] when `child` is `parent` itself, when `child`
	/// is an ancestor of `parent`, or when `parent` is already on `child`'s ancestor chain. Loop
	/// checks take precedence over [`TreeError::DuplicateChild`], which is returned when another
	/// direct child suite already uses the identifier (under [`DuplicatePolicy::Reject`]). A suite
	/// listed under some other suite is moved.
	pub fn add_test_suite(&mut self, parent: SuiteKey, child: SuiteKey) -> Result<()> {
		let parent_node = self.node(parent)?;
		let child_node = self.node(child)?;

		if child == parent || self.is_ancestor(child, parent) || self.is_ancestor(parent, child) {
			return Err(rejected(TreeError::CyclicStructure {
				parent: parent_node.id.clone(),
				child: child_node.id.clone(),
			}));
		}
		let displaced = parent_node.test_suite(&child_node.id);
		if displaced.is_some() && self.config.duplicates == DuplicatePolicy::Reject {
			return Err(rejected(TreeError::DuplicateChild {
				parent: parent_node.id.clone(),
				kind: ChildKind::Suite,
				id: child_node.id.clone(),
			}));
		}

		self.unlist(child);
		if let Some(displaced) = displaced {
			self.suites[displaced.slot].parent = None;
			debug!(suite = %self.suites[displaced.slot].id, key = %displaced, "test suite displaced");
		}
		let id = self.suites[child.slot].id.clone();
		self.suites[child.slot].parent = Some(parent);
		let parent_node = &mut self.suites[parent.slot];
		debug!(parent = %parent_node.id, suite = %id, "test suite added");
		parent_node.test_suites.insert(id, child);
		Ok(())
	}

	/// Adds `case` to `suite`'s direct test cases.
	///
	/// Rejected with [`TreeError::DuplicateChild`] when a direct case already uses the identifier
	/// (under [`DuplicatePolicy::Reject`]); under [`DuplicatePolicy::Replace`] the new case takes the
	/// existing case's position.
	pub fn add_test_case(&mut self, suite: SuiteKey, case: TestCase) -> Result<()> {
		let node = self.node(suite)?;
		if node.has_test_case(case.id()) && self.config.duplicates == DuplicatePolicy::Reject {
			return Err(rejected(TreeError::DuplicateChild {
				parent: node.id.clone(),
				kind: ChildKind::Case,
				id: case.id().clone(),
			}));
		}

		let node = &mut self.suites[suite.slot];
		debug!(parent = %node.id, case = %case.id(), "test case added");
		if let Some(old) = node.test_cases.insert(case.id().clone(), case) {
			debug!(parent = %node.id, case = %old.id(), "test case displaced");
		}
		Ok(())
	}

	/// Removes `suite` from the child map of the suite its parent reference names, if listed there.
	fn unlist(&mut self, suite: SuiteKey) {
		let node = &self.suites[suite.slot];
		let Some(parent) = node.parent else {
			return;
		};
		let id = node.id.clone();
		let parent_node = &mut self.suites[parent.slot];
		if parent_node.lists(&id, suite) {
			parent_node.test_suites.shift_remove(id.as_str());
			debug!(parent = %parent_node.id, suite = %id, "test suite moved out");
		}
	}

	pub fn test_suite(&self, suite: SuiteKey, id: &str) -> Option<SuiteKey> {
		self.get(suite)?.test_suite(id)
	}

	pub fn test_case(&self, suite: SuiteKey, id: &str) -> Option<&TestCase> {
		self.get(suite)?.test_case(id)
	}

	pub fn has_test_suite(&self, suite: SuiteKey, id: &str) -> bool {
		self.get(suite).is_some_and(|node| node.has_test_suite(id))
	}

	/// Direct children of `suite`: its test cases, then its child suites, each in insertion order.
	pub fn children(&self, suite: SuiteKey) -> impl Iterator<Item = Node<'_>> + '_ {
		let node = self.get(suite);
		let cases = node.into_iter().flat_map(|node| node.test_cases.values().map(Node::Case));
		let suites = node.into_iter().flat_map(move |node| {
			node.test_suites
				.values()
				.filter_map(move |&key| self.get(key).map(|child| Node::Suite(key, child)))
		});
		cases.chain(suites)
	}

	/// Counts child suites of `suite`; with `recursive`, every descendant suite at any depth.
	///
	/// Returns `None` for a key this tree did not issue.
	pub fn number_of_test_suites(&self, suite: SuiteKey, recursive: bool) -> Option<usize> {
		let node = self.get(suite)?;
		if !recursive {
			return Some(node.number_of_test_suites());
		}
		Some(self.descendants(suite).count())
	}

	/// Counts test cases of `suite`; with `recursive`, also those of every descendant suite.
	///
	/// Returns `None` for a key this tree did not issue.
	pub fn number_of_test_cases(&self, suite: SuiteKey, recursive: bool) -> Option<usize> {
		let node = self.get(suite)?;
		if !recursive {
			return Some(node.number_of_test_cases());
		}
		let nested: usize = self
			.descendants(suite)
			.filter_map(|key| self.get(key))
			.map(TestSuite::number_of_test_cases)
			.sum();
		Some(node.number_of_test_cases() + nested)
	}

	/// Every suite listed below `suite`, depth first, excluding `suite` itself.
	fn descendants(&self, suite: SuiteKey) -> impl Iterator<Item = SuiteKey> + '_ {
		let mut stack: Vec<SuiteKey> = self
			.get(suite)
			.into_iter()
			.flat_map(|node| node.test_suites.values().rev().copied())
			.collect();
		std::iter::from_fn(move || {
			let key = stack.pop()?;
			if let Some(node) = self.get(key) {
				stack.extend(node.test_suites.values().rev().copied());
			}
			Some(key)
		})
	}

	/// Logs the outline of the subtree below `root` at trace level.
	pub fn trace_outline(&self, root: SuiteKey) {
		if let Some(node) = self.get(root) {
			trace!(root = %node.id, outline = %self.outline(root), "test suite tree");
		}
	}
}

impl Index<SuiteKey> for SuiteTree {
	type Output = TestSuite;

	/// # Panics
	///
	/// Panics if `key` was not issued by this tree.
	fn index(&self, key: SuiteKey) -> &TestSuite {
		match self.get(key) {
			Some(suite) => suite,
			None => panic!("test suite key {key} does not belong to this tree"),
		}
	}
}

fn rejected(error: TreeError) -> TreeError {
	debug!(%error, "tree mutation rejected");
	error
}
