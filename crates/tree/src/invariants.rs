//! Structural invariant catalog. Each entry names where the invariant is enforced.

use crate::{ChildKind, DuplicatePolicy, SuiteTree, TestCase, TreeConfig, TreeError};

/// Must reject blank identifiers before allocating a suite.
///
/// * Enforced in: `Identifier::new`, `SuiteTree::create_suite`, `SuiteTree::create_suite_with_parent`
/// * Failure symptom: Suites that cannot be looked up by name, or a half-built suite left in the arena.
#[test]
fn test_blank_identifier_allocates_nothing() {
	let mut tree = SuiteTree::new();
	let parent = tree.create_suite("parent").unwrap();

	assert!(matches!(tree.create_suite(" "), Err(TreeError::InvalidIdentifier(_))));
	assert!(matches!(tree.create_suite_with_parent("", parent), Err(TreeError::InvalidIdentifier(_))));
	assert_eq!(tree.len(), 1);
}

/// Must reject a suite that already names the target as its parent.
///
/// * Enforced in: `SuiteTree::add_test_suite`
/// * Failure symptom: The same suite reachable twice from one parent, running its cases twice.
#[test]
fn test_direct_parent_loop_rejected() {
	let mut tree = SuiteTree::new();
	let root = tree.create_suite("root").unwrap();
	let child = tree.create_suite_with_parent("azerty", root).unwrap();

	assert!(matches!(tree.add_test_suite(root, child), Err(TreeError::CyclicStructure { .. })));
	assert_eq!(tree[root].number_of_test_suites(), 0);
}

/// Must reject a suite whose ancestor chain already passes through the target.
///
/// * Enforced in: `SuiteTree::add_test_suite`
/// * Failure symptom: A subtree linked below one of its own descendants.
#[test]
fn test_indirect_parent_loop_rejected() {
	let mut tree = SuiteTree::new();
	let root = tree.create_suite("root").unwrap();
	let first = tree.create_suite_with_parent("azerty", root).unwrap();
	let second = tree.create_suite_with_parent("azerty", first).unwrap();

	assert!(matches!(tree.add_test_suite(root, second), Err(TreeError::CyclicStructure { .. })));
	assert_eq!(tree[root].number_of_test_suites(), 0);
}

/// Must reject linking an ancestor below one of its descendants.
///
/// * Enforced in: `SuiteTree::add_test_suite`, `SuiteTree::set_parent`
/// * Failure symptom: `ancestors`, `walk` and recursive counts loop forever.
#[test]
fn test_ancestor_below_descendant_rejected() {
	let mut tree = SuiteTree::new();
	let root = tree.create_suite("root").unwrap();
	let child = tree.create_suite("child").unwrap();
	let leaf = tree.create_suite("leaf").unwrap();
	tree.add_test_suite(root, child).unwrap();
	tree.add_test_suite(child, leaf).unwrap();

	assert!(matches!(tree.add_test_suite(leaf, root), Err(TreeError::CyclicStructure { .. })));
	assert!(matches!(tree.set_parent(root, leaf), Err(TreeError::CyclicStructure { .. })));
	assert!(!tree[root].has_parent());
	assert_eq!(tree[leaf].number_of_test_suites(), 0);
	assert_eq!(tree.number_of_test_suites(root, true), Some(2));
}

/// Must refuse a suite as its own parent or child.
///
/// * Enforced in: `SuiteTree::set_parent`, `SuiteTree::add_test_suite`
/// * Failure symptom: A one-element loop in the parent chain.
#[test]
fn test_self_parent_rejected() {
	let mut tree = SuiteTree::new();
	let root = tree.create_suite("root").unwrap();

	assert!(matches!(tree.add_test_suite(root, root), Err(TreeError::CyclicStructure { .. })));
	assert!(matches!(tree.set_parent(root, root), Err(TreeError::SelfParent { .. })));
	assert_eq!(tree[root].number_of_test_suites(), 0);
	assert!(!tree[root].has_parent());
}

/// Must report a loop even when the target already lists a suite under the same identifier.
///
/// * Enforced in: `SuiteTree::add_test_suite`
/// * Failure symptom: A loop is reported as a name clash, and the error changes with the duplicate policy.
#[test]
fn test_loop_checked_before_duplicate() {
	let mut tree = SuiteTree::new();
	let a = tree.create_suite("A").unwrap();
	let listed = tree.create_suite("B").unwrap();
	tree.add_test_suite(a, listed).unwrap();
	let fresh = tree.create_suite_with_parent("B", a).unwrap();

	assert!(matches!(tree.add_test_suite(a, fresh), Err(TreeError::CyclicStructure { .. })));
	assert_eq!(tree[a].test_suite("B"), Some(listed));

	let root = tree.create_suite("root").unwrap();
	let namesake = tree.create_suite("root").unwrap();
	tree.add_test_suite(root, namesake).unwrap();

	assert!(matches!(tree.add_test_suite(root, root), Err(TreeError::CyclicStructure { .. })));
	assert_eq!(tree[root].test_suite("root"), Some(namesake));
	assert!(!tree[root].has_parent());
}

/// Must keep sibling identifiers unique per child kind under the default policy.
///
/// * Enforced in: `SuiteTree::add_test_suite`, `SuiteTree::add_test_case`
/// * Failure symptom: A later child silently shadows an earlier one.
#[test]
fn test_duplicate_children_rejected() {
	let mut tree = SuiteTree::with_config(TreeConfig::default().with_duplicates(DuplicatePolicy::Reject));
	let root = tree.create_suite("root").unwrap();
	let first = tree.create_suite("child").unwrap();
	let second = tree.create_suite("child").unwrap();
	tree.add_test_suite(root, first).unwrap();
	tree.add_test_case(root, TestCase::new("child").unwrap()).unwrap();

	match tree.add_test_suite(root, second) {
		Err(TreeError::DuplicateChild { kind, id, .. }) => {
			assert_eq!(kind, ChildKind::Suite);
			assert_eq!(id, "child");
		}
		other => panic!("expected duplicate suite, got {other:?}"),
	}
	assert!(matches!(
		tree.add_test_case(root, TestCase::new("child").unwrap()),
		Err(TreeError::DuplicateChild { kind: ChildKind::Case, .. })
	));
	assert_eq!(tree[root].test_suite("child"), Some(first));
	assert!(!tree[second].has_parent());
	assert_eq!(tree[root].number_of_test_cases(), 1);
}

/// Must list a suite under at most one parent, the one its parent reference names.
///
/// * Enforced in: `SuiteTree::add_test_suite`, `SuiteTree::set_parent`
/// * Failure symptom: A suite runs once per parent that lists it.
#[test]
fn test_single_listing_parent() {
	let mut tree = SuiteTree::new();
	let first = tree.create_suite("first").unwrap();
	let second = tree.create_suite("second").unwrap();
	let child = tree.create_suite("child").unwrap();

	tree.add_test_suite(first, child).unwrap();
	tree.add_test_suite(second, child).unwrap();
	assert!(!tree[first].has_test_suite("child"));
	assert_eq!(tree[second].test_suite("child"), Some(child));
	assert_eq!(tree[child].parent(), Some(second));

	tree.set_parent(child, first).unwrap();
	assert!(!tree[second].has_test_suite("child"));
	assert_eq!(tree[child].parent(), Some(first));
}
