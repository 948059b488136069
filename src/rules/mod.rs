//! Replacement rules for iconswap.
//!
//! This module handles:
//! - Regex rules applied in declaration order
//! - A literal token table applied in a single longest-match pass

pub mod pattern;
pub mod ruleset;
pub mod table;

pub use pattern::PatternRule;
pub use ruleset::{RuleSet, Transform, compile_rules};
pub use table::TokenTable;
