//! Environment probe for checking how a caller captures program output.
//!
//! `envprobe` prints a fixed sequence of sections (timestamps, non-ASCII
//! text, paced iteration markers, a stderr section, environment values and a
//! short directory listing) so a harness can verify encoding and timing of
//! captured stdout/stderr. It shares nothing with the rewriter.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Number of iteration markers printed.
pub const ITERATIONS: usize = 3;

/// Pause between iteration markers.
pub const ITERATION_PAUSE: Duration = Duration::from_millis(100);

/// Maximum characters of `PATH` shown.
pub const PATH_PREVIEW_CHARS: usize = 100;

/// Directory entries listed before summarizing the rest.
pub const LISTING_LIMIT: usize = 5;

/// Everything the probe reports, gathered up front.
#[derive(Debug, Clone)]
pub struct ProbeContext<'a> {
	pub cwd: &'a Path,
	pub args: &'a [String],
	pub path_var: Option<String>,
	pub home_var: Option<String>,
	pub user_var: Option<String>,
	pub pause: Duration,
}

/// Write the full probe report.
pub fn run<O: Write, E: Write>(ctx: &ProbeContext, out: &mut O, err: &mut E) -> io::Result<()> {
	writeln!(out, "=== iconswap envprobe ===")?;
	writeln!(out, "Timestamp: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f"))?;
	writeln!(out, "Version: {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
	writeln!(out, "Runtime: {}", runtime())?;
	writeln!(out, "Working directory: {}", ctx.cwd.display())?;
	writeln!(out, "Arguments: {:?}", ctx.args)?;

	writeln!(out, "\n=== Formatted output ===")?;
	writeln!(out, "Plain output")?;
	writeln!(out, "Special characters: áéíóú çñü")?;
	writeln!(out, "Unicode: 🚀 ✅ ❌ 🦀")?;

	writeln!(out, "\n=== Loop ===")?;
	for i in 1..=ITERATIONS {
		writeln!(out, "Iteration {i}")?;
		out.flush()?;
		if !ctx.pause.is_zero() {
			std::thread::sleep(ctx.pause);
		}
	}

	writeln!(err, "\n=== Stderr ===")?;
	writeln!(err, "Error message from envprobe")?;
	err.flush()?;

	writeln!(out, "\n=== Environment ===")?;
	writeln!(out, "PATH: {}...", preview(ctx.path_var.as_deref(), PATH_PREVIEW_CHARS))?;
	writeln!(out, "HOME: {}", ctx.home_var.as_deref().unwrap_or("N/A"))?;
	writeln!(out, "USER: {}", ctx.user_var.as_deref().unwrap_or("N/A"))?;

	writeln!(out, "\n=== Listing ===")?;
	match list_dir(ctx.cwd) {
		Ok(names) => write_listing(out, &names)?,
		Err(e) => writeln!(out, "Failed to list directory: {e}")?,
	}

	writeln!(out, "\n=== Done ===")?;
	writeln!(out, "envprobe finished successfully")?;
	out.flush()
}

/// Compiler version captured at build time, with the target platform.
fn runtime() -> String {
	format!(
		"{} ({}/{})",
		env!("ICONSWAP_RUSTC_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}

/// First `limit` characters of `value`, or `N/A` when unset.
fn preview(value: Option<&str>, limit: usize) -> String {
	match value {
		Some(value) => value.chars().take(limit).collect(),
		None => "N/A".to_string(),
	}
}

fn list_dir(dir: &Path) -> io::Result<Vec<String>> {
	std::fs::read_dir(dir)?
		.map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
		.collect()
}

fn write_listing<O: Write>(out: &mut O, names: &[String]) -> io::Result<()> {
	writeln!(out, "Found {} files/directories", names.len())?;
	for name in names.iter().take(LISTING_LIMIT) {
		writeln!(out, "  - {name}")?;
	}
	if names.len() > LISTING_LIMIT {
		writeln!(out, "  ... and {} more", names.len() - LISTING_LIMIT)?;
	}
	Ok(())
}
