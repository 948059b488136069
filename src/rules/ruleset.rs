use crate::config::types::Config;
use crate::error::Result;
use crate::rules::pattern::PatternRule;
use crate::rules::table::TokenTable;

/// All rules for a run, compiled once and never modified afterwards.
#[derive(Debug, Clone)]
pub struct RuleSet {
	/// Regex rules, applied first and in order.
	pub patterns: Vec<PatternRule>,

	/// Literal tokens, applied in one pass after the patterns.
	pub tokens: TokenTable,
}

/// Result of transforming one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transform {
	/// The transformed text.
	pub content: String,

	/// Total replacements made by all rules.
	pub replacements: usize,
}

impl Transform {
	pub fn is_changed(&self) -> bool {
		self.replacements > 0
	}
}

impl RuleSet {
	/// Apply every pattern rule, then the token table.
	pub fn apply(&self, input: &str) -> Transform {
		let mut content = input.to_string();
		let mut replacements = 0;

		for rule in &self.patterns {
			let (output, count) = rule.apply(&content);
			if count > 0 {
				content = output.into_owned();
				replacements += count;
			}
		}

		let (output, count) = self.tokens.apply(&content);
		if count > 0 {
			content = output.into_owned();
			replacements += count;
		}

		Transform {
			content,
			replacements,
		}
	}
}

/// Compile the rules in a config.
pub fn compile_rules(config: &Config) -> Result<RuleSet> {
	let patterns = config
		.patterns
		.iter()
		.map(|spec| PatternRule::new(&spec.pattern, &spec.replacement))
		.collect::<Result<Vec<_>>>()?;

	let tokens = TokenTable::new(
		config
			.tokens
			.iter()
			.map(|(from, to)| (from.as_str(), to.as_str())),
	)?;

	Ok(RuleSet { patterns, tokens })
}
