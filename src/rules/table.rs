use crate::error::{Result, SwapError};
use regex::Regex;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Literal token substitutions applied in one scan.
///
/// All tokens are combined into a single matcher. At each position the
/// longest token starting there wins, and the scan continues after it, so
/// every occurrence is replaced at most once and text produced by one
/// replacement is never matched again. Declaration order has no effect.
#[derive(Debug, Clone)]
pub struct TokenTable {
	tokens: BTreeMap<String, String>,
	matcher: Option<Regex>,
}

impl TokenTable {
	/// Build a table from `(source, destination)` pairs.
	///
	/// A later pair with the same source replaces an earlier one.
	pub fn new<I, K, V>(pairs: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let mut tokens = BTreeMap::new();
		for (from, to) in pairs {
			let from = from.into();
			let to = to.into();
			if from.is_empty() {
				return Err(SwapError::EmptyToken { replacement: to });
			}
			tokens.insert(from, to);
		}

		let matcher = build_matcher(&tokens)?;
		Ok(TokenTable { tokens, matcher })
	}

	/// Number of distinct source tokens.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Iterate over `(source, destination)` pairs in source order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Replace every token occurrence in a single left-to-right pass.
	///
	/// Returns the new text and the number of tokens replaced.
	pub fn apply<'t>(&self, input: &'t str) -> (Cow<'t, str>, usize) {
		let Some(matcher) = &self.matcher else {
			return (Cow::Borrowed(input), 0);
		};

		let mut matches = matcher.find_iter(input).peekable();
		if matches.peek().is_none() {
			return (Cow::Borrowed(input), 0);
		}

		let mut output = String::with_capacity(input.len());
		let mut last = 0;
		let mut count = 0;

		for m in matches {
			output.push_str(&input[last..m.start()]);
			match self.tokens.get(m.as_str()) {
				Some(replacement) => output.push_str(replacement),
				None => output.push_str(m.as_str()),
			}
			last = m.end();
			count += 1;
		}

		output.push_str(&input[last..]);
		(Cow::Owned(output), count)
	}
}

/// Combine all tokens into one alternation, longest first.
///
/// The regex engine uses leftmost-first semantics, so ordering alternatives
/// by descending length makes the leftmost match also the longest one.
fn build_matcher(tokens: &BTreeMap<String, String>) -> Result<Option<Regex>> {
	if tokens.is_empty() {
		return Ok(None);
	}

	let mut sources: Vec<&str> = tokens.keys().map(String::as_str).collect();
	sources.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

	let pattern = sources
		.iter()
		.map(|s| regex::escape(s))
		.collect::<Vec<_>>()
		.join("|");

	let matcher = Regex::new(&pattern).map_err(|source| SwapError::InvalidRegex {
		pattern: pattern.clone(),
		source,
	})?;

	Ok(Some(matcher))
}
