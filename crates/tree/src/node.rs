use crate::case::TestCase;
use crate::ident::Identifier;
use crate::suite::{SuiteKey, TestSuite};

/// Anything addressed by an [`Identifier`].
pub trait Identifiable {
	fn id(&self) -> &Identifier;
}

impl Identifiable for TestSuite {
	fn id(&self) -> &Identifier {
		TestSuite::id(self)
	}
}

impl Identifiable for TestCase {
	fn id(&self) -> &Identifier {
		TestCase::id(self)
	}
}

/// Direct child of a suite, tagged by kind.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
	Suite(SuiteKey, &'a TestSuite),
	Case(&'a TestCase),
}

impl<'a> Node<'a> {
	pub fn as_identifiable(&self) -> &'a dyn Identifiable {
		match *self {
			Self::Suite(_, suite) => suite,
			Self::Case(case) => case,
		}
	}

	pub fn is_suite(&self) -> bool {
		matches!(self, Self::Suite(..))
	}
}

impl Identifiable for Node<'_> {
	fn id(&self) -> &Identifier {
		self.as_identifiable().id()
	}
}
