use std::path::PathBuf;

/// Library-level structured errors for iconswap.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum SwapError {
	#[error("failed to read {path}: {source}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("{path} is not valid UTF-8: {source}")]
	Decode {
		path: PathBuf,
		#[source]
		source: std::string::FromUtf8Error,
	},

	#[error("failed to write {path}: {source}")]
	FileWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to walk {path}: {source}")]
	Walk {
		path: PathBuf,
		#[source]
		source: walkdir::Error,
	},

	#[error("root directory not found: {path}")]
	MissingRoot { path: PathBuf },

	#[error("Failed to read config file: {path}")]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid config: {reason}")]
	InvalidConfig { reason: String },

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Token rule has an empty source token (replacement: {replacement:?})")]
	EmptyToken { replacement: String },

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

impl SwapError {
	/// Whether this error belongs to a single file and must not stop the run.
	pub fn is_per_file(&self) -> bool {
		matches!(
			self,
			SwapError::FileRead { .. }
				| SwapError::Decode { .. }
				| SwapError::FileWrite { .. }
				| SwapError::Walk { .. }
				| SwapError::MissingRoot { .. }
		)
	}
}

/// Result type alias using SwapError.
pub type Result<T> = std::result::Result<T, SwapError>;
