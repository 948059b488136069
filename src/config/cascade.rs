use crate::config::parser::{parse_config_file, parse_config_str};
use crate::config::template::DEFAULT_CONFIG;
use crate::config::types::{ConfigSource, LoadedConfig};
use crate::error::{Result, SwapError};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".iconswap.toml";

/// Environment variable that, if truthy, skips the `~/.iconswap.toml` lookup.
pub const NO_USER_CONFIG_ENV: &str = "ICONSWAP_NO_USER_CONFIG";

/// Resolve the effective config.
///
/// The lookup order is:
/// 1. `explicit`, if given (a read or parse failure is an error)
/// 2. The nearest `.iconswap.toml` walking up from `start_dir`
/// 3. `~/.iconswap.toml` (unless disabled by `ICONSWAP_NO_USER_CONFIG`)
/// 4. The built-in FontAwesome mapping
///
/// The first hit wins; configs are not merged. Relative roots of a project
/// config found in an ancestor directory are resolved against that
/// directory; all other roots are relative to the working directory.
pub fn load_config(explicit: Option<&Path>, start_dir: &Path) -> Result<LoadedConfig> {
	if let Some(path) = explicit {
		return Ok(LoadedConfig {
			config: parse_config_file(path)?,
			source: ConfigSource::File(path.to_path_buf()),
			base_dir: None,
		});
	}

	if let Some(loaded) = discover_project_config(start_dir)? {
		return Ok(loaded);
	}

	if let Some(loaded) = load_user_config()? {
		return Ok(loaded);
	}

	builtin_config()
}

/// Find the nearest `.iconswap.toml` in `start_dir` or one of its ancestors.
pub fn discover_project_config(start_dir: &Path) -> Result<Option<LoadedConfig>> {
	for dir in start_dir.ancestors() {
		let config_path = dir.join(CONFIG_FILE_NAME);
		if config_path.is_file() {
			tracing::debug!(path = %config_path.display(), "found project config");
			return Ok(Some(LoadedConfig {
				config: parse_config_file(&config_path)?,
				source: ConfigSource::File(config_path),
				base_dir: (dir != start_dir).then(|| dir.to_path_buf()),
			}));
		}
	}

	Ok(None)
}

/// Load the user's `~/.iconswap.toml` if it exists and isn't disabled.
fn load_user_config() -> Result<Option<LoadedConfig>> {
	if is_env_truthy(NO_USER_CONFIG_ENV) {
		tracing::debug!("user config lookup disabled by {NO_USER_CONFIG_ENV}");
		return Ok(None);
	}

	let user_config_path = match user_config_path() {
		Ok(path) => path,
		Err(SwapError::HomeDirectoryNotFound) => {
			tracing::debug!("no home directory, skipping user config");
			return Ok(None);
		}
		Err(e) => return Err(e),
	};

	if user_config_path.is_file() {
		tracing::debug!(path = %user_config_path.display(), "found user config");
		let config = parse_config_file(&user_config_path)?;
		Ok(Some(LoadedConfig {
			config,
			source: ConfigSource::File(user_config_path),
			base_dir: None,
		}))
	} else {
		Ok(None)
	}
}

/// The built-in default config.
pub fn builtin_config() -> Result<LoadedConfig> {
	let config = parse_config_str(DEFAULT_CONFIG, Path::new("<built-in>"))?;
	Ok(LoadedConfig {
		config,
		source: ConfigSource::BuiltIn,
		base_dir: None,
	})
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(SwapError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}
