use crate::error::{Result, SwapError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level configuration from a `.iconswap.toml` file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	/// Files whose name ends with this suffix are rewritten.
	pub extension: String,

	/// Roots that must exist. A missing one is reported as an error.
	#[serde(default)]
	pub roots: Vec<PathBuf>,

	/// Roots that are scanned only when present.
	#[serde(default)]
	pub optional_roots: Vec<PathBuf>,

	/// Regex rules, applied in order before the token table.
	#[serde(default)]
	pub patterns: Vec<PatternSpec>,

	/// Literal token table, applied in a single longest-match pass.
	#[serde(default)]
	pub tokens: BTreeMap<String, String>,
}

/// A regex rule as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternSpec {
	/// Regex pattern (regex crate syntax).
	pub pattern: String,

	/// Replacement text. `$1` / `$name` expand capture groups.
	pub replacement: String,
}

/// A root directory to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootDir {
	pub path: PathBuf,

	/// Whether a missing directory is an error or silently skipped.
	pub required: bool,
}

/// Where the effective config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
	/// Loaded from a file on disk.
	File(PathBuf),

	/// The built-in FontAwesome to Material Icons mapping.
	BuiltIn,
}

impl std::fmt::Display for ConfigSource {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ConfigSource::File(path) => write!(f, "{}", path.display()),
			ConfigSource::BuiltIn => write!(f, "<built-in>"),
		}
	}
}

/// A loaded configuration with its source for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// Where it was loaded from.
	pub source: ConfigSource,

	/// Directory that relative roots are resolved against. `None` means the
	/// working directory.
	pub base_dir: Option<PathBuf>,
}

impl LoadedConfig {
	/// Root directories with relative paths resolved against `base_dir`.
	pub fn root_dirs(&self) -> Vec<RootDir> {
		let mut roots = self.config.root_dirs();
		if let Some(base) = &self.base_dir {
			for root in &mut roots {
				if root.path.is_relative() {
					root.path = base.join(&root.path);
				}
			}
		}
		roots
	}
}

impl Config {
	/// Root directories in scan order: required roots first, then optional ones.
	pub fn root_dirs(&self) -> Vec<RootDir> {
		let required = self.roots.iter().map(|path| RootDir {
			path: path.clone(),
			required: true,
		});
		let optional = self.optional_roots.iter().map(|path| RootDir {
			path: path.clone(),
			required: false,
		});
		required.chain(optional).collect()
	}

	/// Validate settings that serde cannot express.
	pub fn validate(&self) -> Result<()> {
		if self.extension.is_empty() {
			return Err(SwapError::InvalidConfig {
				reason: "extension must not be empty".to_string(),
			});
		}

		if self.roots.is_empty() && self.optional_roots.is_empty() {
			return Err(SwapError::InvalidConfig {
				reason: "at least one root directory is required".to_string(),
			});
		}

		if let Some(replacement) = self
			.tokens
			.iter()
			.find(|(from, _)| from.is_empty())
			.map(|(_, to)| to)
		{
			return Err(SwapError::EmptyToken {
				replacement: replacement.clone(),
			});
		}

		Ok(())
	}
}
