use crate::config::types::Config;
use crate::error::{Result, SwapError};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content = std::fs::read_to_string(path).map_err(|source| SwapError::ConfigRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	let config: Config = toml::from_str(content).map_err(|source| SwapError::ConfigParse {
		path: path.to_path_buf(),
		source,
	})?;

	config.validate()?;

	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::types::PatternSpec;
	use std::path::PathBuf;

	#[test]
	fn test_parse_minimal_config() {
		let content = r#"
extension = ".dart"
roots = ["lib"]
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.extension, ".dart");
		assert_eq!(config.roots, vec![PathBuf::from("lib")]);
		assert!(config.optional_roots.is_empty());
		assert!(config.patterns.is_empty());
		assert!(config.tokens.is_empty());
	}

	#[test]
	fn test_parse_full_config() {
		let content = r#"
extension = ".dart"
roots = ["lib"]
optional-roots = ["test"]

[[patterns]]
pattern = "import 'package:old/old\\.dart';"
replacement = "import 'package:new/new.dart';"

[tokens]
"OldIcons.star" = "Icons.star"
"OldIcons.starHalf" = "Icons.star_half"
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.optional_roots, vec![PathBuf::from("test")]);
		assert_eq!(
			config.patterns,
			vec![PatternSpec {
				pattern: r"import 'package:old/old\.dart';".to_string(),
				replacement: "import 'package:new/new.dart';".to_string(),
			}]
		);
		assert_eq!(config.tokens.len(), 2);
		assert_eq!(
			config.tokens.get("OldIcons.starHalf"),
			Some(&"Icons.star_half".to_string())
		);
	}

	#[test]
	fn test_root_dirs_order_and_flags() {
		let content = r#"
extension = ".dart"
roots = ["lib", "bin"]
optional-roots = ["test"]
"#;
		let config = parse_config_str(content, Path::new("test.toml")).unwrap();
		let roots = config.root_dirs();

		assert_eq!(roots.len(), 3);
		assert_eq!(roots[0].path, PathBuf::from("lib"));
		assert!(roots[0].required);
		assert_eq!(roots[1].path, PathBuf::from("bin"));
		assert!(roots[1].required);
		assert_eq!(roots[2].path, PathBuf::from("test"));
		assert!(!roots[2].required);
	}

	#[test]
	fn test_missing_extension_is_parse_error() {
		let content = r#"roots = ["lib"]"#;
		let result = parse_config_str(content, Path::new("test.toml"));

		assert!(matches!(result, Err(SwapError::ConfigParse { .. })));
	}

	#[test]
	fn test_unknown_key_is_parse_error() {
		let content = r#"
extension = ".dart"
roots = ["lib"]
recursive = false
"#;
		let result = parse_config_str(content, Path::new("test.toml"));

		assert!(matches!(result, Err(SwapError::ConfigParse { .. })));
	}

	#[test]
	fn test_empty_extension_rejected() {
		let content = r#"
extension = ""
roots = ["lib"]
"#;
		let result = parse_config_str(content, Path::new("test.toml"));

		match result.unwrap_err() {
			SwapError::InvalidConfig { reason } => assert!(reason.contains("extension")),
			other => panic!("Expected InvalidConfig error, got {other:?}"),
		}
	}

	#[test]
	fn test_no_roots_rejected() {
		let content = r#"extension = ".dart""#;
		let result = parse_config_str(content, Path::new("test.toml"));

		assert!(matches!(result, Err(SwapError::InvalidConfig { .. })));
	}

	#[test]
	fn test_empty_token_rejected() {
		let content = r#"
extension = ".dart"
roots = ["lib"]

[tokens]
"" = "Icons.nothing"
"#;
		let result = parse_config_str(content, Path::new("test.toml"));

		match result.unwrap_err() {
			SwapError::EmptyToken { replacement } => assert_eq!(replacement, "Icons.nothing"),
			other => panic!("Expected EmptyToken error, got {other:?}"),
		}
	}
}
