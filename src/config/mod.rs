//! Configuration loading and parsing for iconswap.
//!
//! This module handles:
//! - TOML config file parsing
//! - Config lookup (explicit path, project, user, built-in)
//! - The built-in FontAwesome mapping and `--init` template

pub mod cascade;
pub mod parser;
pub mod template;
pub mod types;

pub use cascade::{
	CONFIG_FILE_NAME, NO_USER_CONFIG_ENV, builtin_config, discover_project_config, load_config,
	user_config_path,
};
pub use parser::{parse_config_file, parse_config_str};
pub use template::{DEFAULT_CONFIG, generate_init_template};
pub use types::{Config, ConfigSource, LoadedConfig, PatternSpec, RootDir};
