use crate::error::{Result, TreeError};
use crate::ident::Identifier;

/// One step of a test case.
///
/// The tree never interprets actions; it keeps them in the order the reader supplied them so
/// an executor can replay that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestAction {
	keyword: String,
	parameters: Vec<String>,
}

impl TestAction {
	pub fn new(keyword: impl Into<String>) -> Self {
		Self {
			keyword: keyword.into(),
			parameters: Vec::new(),
		}
	}

	/// Appends a positional parameter.
	#[must_use]
	pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
		self.parameters.push(parameter.into());
		self
	}

	pub fn keyword(&self) -> &str {
		&self.keyword
	}

	pub fn parameters(&self) -> &[String] {
		&self.parameters
	}
}

/// Leaf node: a named, executable scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
	id: Identifier,
	actions: Vec<TestAction>,
}

impl TestCase {
	/// Creates a case without actions.
	///
	/// Fails with [`TreeError::InvalidIdentifier`] when `id` is blank or missing.
	pub fn new<I>(id: I) -> Result<Self>
	where
		I: TryInto<Identifier>,
		TreeError: From<I::Error>,
	{
		Ok(Self {
			id: id.try_into()?,
			actions: Vec::new(),
		})
	}

	pub fn id(&self) -> &Identifier {
		&self.id
	}

	pub fn push_action(&mut self, action: TestAction) {
		self.actions.push(action);
	}

	#[must_use]
	pub fn with_actions(mut self, actions: impl IntoIterator<Item = TestAction>) -> Self {
		self.actions.extend(actions);
		self
	}

	pub fn actions(&self) -> &[TestAction] {
		&self.actions
	}

	pub fn number_of_actions(&self) -> usize {
		self.actions.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::IdentifierError;

	#[test]
	fn case_keeps_identifier() {
		let case = TestCase::new("Shl-00").unwrap();
		assert_eq!(case.id(), "Shl-00");
		assert_eq!(case.number_of_actions(), 0);
	}

	#[test]
	fn case_rejects_blank_identifier() {
		assert_eq!(TestCase::new("  "), Err(TreeError::InvalidIdentifier(IdentifierError::Blank)));
	}

	#[test]
	fn case_reports_missing_identifier() {
		assert_eq!(TestCase::new(None::<&str>), Err(TreeError::InvalidIdentifier(IdentifierError::Missing)));
		let id = Identifier::new("Web-01").unwrap();
		assert_eq!(TestCase::new(id.clone()).unwrap().id(), &id);
	}

	#[test]
	fn actions_keep_insertion_order() {
		let mut case = TestCase::new("Web-00")
			.unwrap()
			.with_actions([TestAction::new("open").with_parameter("https://example.org")]);
		case.push_action(TestAction::new("click").with_parameter("#submit"));
		case.push_action(TestAction::new("close"));

		let keywords: Vec<_> = case.actions().iter().map(TestAction::keyword).collect();
		assert_eq!(keywords, ["open", "click", "close"]);
		assert_eq!(case.actions()[0].parameters(), ["https://example.org"]);
		assert_eq!(case.number_of_actions(), 3);
	}
}
