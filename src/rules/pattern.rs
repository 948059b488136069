use crate::error::{Result, SwapError};
use regex::Regex;
use std::borrow::Cow;

/// A compiled regex rule.
#[derive(Debug, Clone)]
pub struct PatternRule {
	/// The pattern to match.
	pub pattern: Regex,

	/// The replacement string. Capture references like `$1` are expanded.
	pub replacement: String,
}

impl PatternRule {
	/// Compile a regex rule.
	pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
		let pattern = Regex::new(pattern).map_err(|source| SwapError::InvalidRegex {
			pattern: pattern.to_string(),
			source,
		})?;

		Ok(PatternRule {
			pattern,
			replacement: replacement.to_string(),
		})
	}

	/// Replace every non-overlapping match.
	///
	/// Returns the new text and the number of matches replaced. The input is
	/// borrowed back unchanged when nothing matched.
	pub fn apply<'t>(&self, input: &'t str) -> (Cow<'t, str>, usize) {
		let count = self.pattern.find_iter(input).count();
		if count == 0 {
			return (Cow::Borrowed(input), 0);
		}

		let output = self.pattern.replace_all(input, self.replacement.as_str());
		(output, count)
	}
}
