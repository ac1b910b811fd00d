//! Indented text rendering of a subtree.
//!
//! Each line is `{level}:{indent}{tag}: {id}` where `indent` is `level` spaces and `tag` is `TC`
//! for a test case or `TS` for a test suite. A suite lists its cases first, closed by an empty
//! line, then each child suite's line followed by that suite's contents one level deeper:
//!
//! ```text
//! 0:TC: Shl-00
//!
//! 0:TS: TestSuite-00
//! 1: TC: Shl-00-01
//!
//! ```

use std::fmt;

use crate::suite::SuiteKey;
use crate::tree::SuiteTree;
use crate::walk::Visit;

/// Display adapter returned by [`SuiteTree::outline`].
pub struct Outline<'a> {
	tree: &'a SuiteTree,
	root: SuiteKey,
}

impl fmt::Display for Outline<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut level = 0usize;
		// Set while the innermost entered suite is still listing its cases.
		let mut in_cases = false;
		for visit in self.tree.walk(self.root) {
			match visit {
				Visit::Enter(key) => {
					if std::mem::take(&mut in_cases) {
						f.write_str("\n")?;
					}
					if key != self.root {
						write_line(f, level, "TS", self.tree[key].id())?;
						level += 1;
					}
					in_cases = true;
				}
				Visit::Case(_, case) => write_line(f, level, "TC", case.id())?,
				Visit::Leave(key) => {
					if std::mem::take(&mut in_cases) {
						f.write_str("\n")?;
					}
					if key != self.root {
						level -= 1;
					}
				}
			}
		}
		Ok(())
	}
}

fn write_line(f: &mut fmt::Formatter<'_>, level: usize, tag: &str, id: &str) -> fmt::Result {
	writeln!(f, "{level}:{:level$}{tag}: {id}", "")
}

impl SuiteTree {
	/// Renders the subtree listed below `root`. Renders nothing for an unknown key.
	pub fn outline(&self, root: SuiteKey) -> Outline<'_> {
		Outline { tree: self, root }
	}
}
