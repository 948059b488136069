//! In-place rewriting of a source tree.
//!
//! This module handles:
//! - Collecting target files under each root directory
//! - Reading, transforming, and atomically writing each file
//! - Per-file error isolation: one bad file never stops the run

pub mod walker;
pub mod writer;

pub use walker::{collect_targets, has_extension};
pub use writer::write_atomic;

use crate::config::types::RootDir;
use crate::error::{Result, SwapError};
use crate::rules::RuleSet;
use std::path::{Path, PathBuf};

/// Options for a rewrite run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOptions {
	/// Transform files but never write them.
	pub dry_run: bool,
}

/// What happened to one file.
#[derive(Debug)]
pub enum FileOutcome {
	/// Content changed and was written back.
	Rewritten { replacements: usize },

	/// Content would change, but this is a dry run.
	WouldRewrite { replacements: usize },

	/// No rule matched; the file was left alone.
	Unchanged,

	/// Reading, decoding, or writing failed. The file was skipped.
	Failed(SwapError),
}

/// One processed path and its outcome.
#[derive(Debug)]
pub struct FileRecord {
	pub path: PathBuf,
	pub outcome: FileOutcome,
}

/// Summary of a whole run.
#[derive(Debug, Default)]
pub struct RunReport {
	/// Every file (and walk error) in processing order.
	pub files: Vec<FileRecord>,
}

impl RunReport {
	/// Files written, or that would be written on a dry run.
	pub fn rewritten(&self) -> usize {
		self.files
			.iter()
			.filter(|f| {
				matches!(
					f.outcome,
					FileOutcome::Rewritten { .. } | FileOutcome::WouldRewrite { .. }
				)
			})
			.count()
	}

	pub fn unchanged(&self) -> usize {
		self.files
			.iter()
			.filter(|f| matches!(f.outcome, FileOutcome::Unchanged))
			.count()
	}

	pub fn failed(&self) -> usize {
		self.files
			.iter()
			.filter(|f| matches!(f.outcome, FileOutcome::Failed(_)))
			.count()
	}

	pub fn has_failures(&self) -> bool {
		self.failed() > 0
	}
}

/// Rewrite every file under `roots` whose name ends with `extension`.
///
/// Targets for all roots are collected before the first file is edited, so
/// edits never change the set. `on_file` is called after each file (or walk
/// error) with its record, in processing order. Failures are recorded and
/// never abort the run.
pub fn process<F>(
	roots: &[RootDir],
	extension: &str,
	rules: &RuleSet,
	options: ProcessOptions,
	mut on_file: F,
) -> RunReport
where
	F: FnMut(&FileRecord),
{
	let targets: Vec<Result<PathBuf>> = roots
		.iter()
		.flat_map(|root| collect_targets(root, extension))
		.collect();

	tracing::debug!(count = targets.len(), "collected targets");

	let mut report = RunReport::default();
	for target in targets {
		let record = match target {
			Ok(path) => {
				let outcome = match rewrite_file(&path, rules, options) {
					Ok(outcome) => outcome,
					Err(e) => FileOutcome::Failed(e),
				};
				FileRecord { path, outcome }
			}
			Err(e) => FileRecord {
				path: error_path(&e),
				outcome: FileOutcome::Failed(e),
			},
		};

		on_file(&record);
		report.files.push(record);
	}

	report
}

/// Read, transform, and (if changed) write back a single file.
pub fn rewrite_file(path: &Path, rules: &RuleSet, options: ProcessOptions) -> Result<FileOutcome> {
	let bytes = std::fs::read(path).map_err(|source| SwapError::FileRead {
		path: path.to_path_buf(),
		source,
	})?;

	let content = String::from_utf8(bytes).map_err(|source| SwapError::Decode {
		path: path.to_path_buf(),
		source,
	})?;

	let transform = rules.apply(&content);
	if !transform.is_changed() || transform.content == content {
		tracing::trace!(path = %path.display(), "no matches");
		return Ok(FileOutcome::Unchanged);
	}

	let replacements = transform.replacements;
	if options.dry_run {
		tracing::debug!(path = %path.display(), replacements, "would rewrite");
		return Ok(FileOutcome::WouldRewrite { replacements });
	}

	write_atomic(path, &transform.content).map_err(|source| SwapError::FileWrite {
		path: path.to_path_buf(),
		source,
	})?;

	tracing::debug!(path = %path.display(), replacements, "rewrote file");
	Ok(FileOutcome::Rewritten { replacements })
}

fn error_path(error: &SwapError) -> PathBuf {
	match error {
		SwapError::FileRead { path, .. }
		| SwapError::Decode { path, .. }
		| SwapError::FileWrite { path, .. }
		| SwapError::Walk { path, .. }
		| SwapError::MissingRoot { path } => path.clone(),
		_ => PathBuf::new(),
	}
}
