use crate::config::types::RootDir;
use crate::error::{Result, SwapError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect the files under `root` whose name ends with `extension`.
///
/// The walk is depth-first with entries sorted by file name, so the order is
/// stable between runs. Symlinked directories are not descended into, but a
/// symlink with a matching name is returned unless it points at a directory;
/// a dangling one then fails on read and gets reported like any other file.
/// Entries the walker cannot read come back as `Err` in place, so the caller
/// can report them and keep going.
///
/// A missing optional root yields nothing; a missing required root yields a
/// single [`SwapError::MissingRoot`].
pub fn collect_targets(root: &RootDir, extension: &str) -> Vec<Result<PathBuf>> {
	if !root.path.exists() {
		if root.required {
			return vec![Err(SwapError::MissingRoot {
				path: root.path.clone(),
			})];
		}
		tracing::debug!(root = %root.path.display(), "optional root not present, skipping");
		return Vec::new();
	}

	WalkDir::new(&root.path)
		.follow_links(false)
		.sort_by_file_name()
		.into_iter()
		.filter_map(|entry| match entry {
			Ok(entry) => {
				if is_candidate(&entry) && has_extension(entry.path(), extension) {
					Some(Ok(entry.into_path()))
				} else {
					None
				}
			}
			Err(source) => Some(Err(SwapError::Walk {
				path: source
					.path()
					.map(Path::to_path_buf)
					.unwrap_or_else(|| root.path.clone()),
				source,
			})),
		})
		.collect()
}

fn is_candidate(entry: &walkdir::DirEntry) -> bool {
	let file_type = entry.file_type();
	file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

/// Whether the file name ends with `extension` (a plain suffix match).
pub fn has_extension(path: &Path, extension: &str) -> bool {
	path.file_name()
		.is_some_and(|name| name.to_string_lossy().ends_with(extension))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	fn required(path: &Path) -> RootDir {
		RootDir {
			path: path.to_path_buf(),
			required: true,
		}
	}

	#[test]
	fn test_has_extension() {
		assert!(has_extension(Path::new("lib/main.dart"), ".dart"));
		assert!(has_extension(Path::new("main.g.dart"), ".dart"));
		assert!(!has_extension(Path::new("lib/main.dart.bak"), ".dart"));
		assert!(!has_extension(Path::new("lib/README.md"), ".dart"));
		assert!(!has_extension(Path::new("/"), ".dart"));
	}

	#[test]
	fn test_collect_filters_and_recurses() {
		let temp_dir = tempfile::tempdir().unwrap();
		let lib = temp_dir.path().join("lib");
		fs::create_dir_all(lib.join("widgets").join("deep")).unwrap();
		fs::write(lib.join("main.dart"), "").unwrap();
		fs::write(lib.join("notes.txt"), "").unwrap();
		fs::write(lib.join("widgets").join("button.dart"), "").unwrap();
		fs::write(lib.join("widgets").join("deep").join("icon.dart"), "").unwrap();

		let targets: Vec<PathBuf> = collect_targets(&required(&lib), ".dart")
			.into_iter()
			.map(|r| r.unwrap())
			.collect();

		assert_eq!(
			targets,
			vec![
				lib.join("main.dart"),
				lib.join("widgets").join("button.dart"),
				lib.join("widgets").join("deep").join("icon.dart"),
			]
		);
	}

	#[test]
	fn test_directory_with_matching_name_is_skipped() {
		let temp_dir = tempfile::tempdir().unwrap();
		let lib = temp_dir.path().join("lib");
		fs::create_dir_all(lib.join("odd.dart")).unwrap();

		assert!(collect_targets(&required(&lib), ".dart").is_empty());
	}

	#[test]
	fn test_missing_required_root() {
		let temp_dir = tempfile::tempdir().unwrap();
		let missing = temp_dir.path().join("lib");

		let targets = collect_targets(&required(&missing), ".dart");

		assert_eq!(targets.len(), 1);
		match &targets[0] {
			Err(SwapError::MissingRoot { path }) => assert_eq!(path, &missing),
			other => panic!("Expected MissingRoot error, got {other:?}"),
		}
	}

	#[test]
	fn test_missing_optional_root() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = RootDir {
			path: temp_dir.path().join("test"),
			required: false,
		};

		assert!(collect_targets(&root, ".dart").is_empty());
	}

	#[cfg(unix)]
	#[test]
	fn test_symlinked_files_are_collected() {
		let temp_dir = tempfile::tempdir().unwrap();
		let lib = temp_dir.path().join("lib");
		let shared = temp_dir.path().join("shared");
		fs::create_dir_all(&lib).unwrap();
		fs::create_dir_all(shared.join("nested.dart")).unwrap();
		fs::write(shared.join("icons.dart"), "").unwrap();
		std::os::unix::fs::symlink("../shared/icons.dart", lib.join("icons.dart")).unwrap();
		std::os::unix::fs::symlink("../shared/missing.dart", lib.join("dangling.dart")).unwrap();
		std::os::unix::fs::symlink("../shared/nested.dart", lib.join("dir.dart")).unwrap();

		let targets: Vec<PathBuf> = collect_targets(&required(&lib), ".dart")
			.into_iter()
			.map(|r| r.unwrap())
			.collect();

		assert_eq!(
			targets,
			vec![lib.join("dangling.dart"), lib.join("icons.dart")]
		);
	}

	#[cfg(unix)]
	#[test]
	fn test_unreadable_subdirectory_is_reported_in_place() {
		use std::os::unix::fs::PermissionsExt;

		let temp_dir = tempfile::tempdir().unwrap();
		let lib = temp_dir.path().join("lib");
		let locked = lib.join("locked");
		fs::create_dir_all(&locked).unwrap();
		fs::write(locked.join("hidden.dart"), "").unwrap();
		fs::write(lib.join("ok.dart"), "").unwrap();
		fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

		// Privileged users can list the directory regardless of its mode.
		let privileged = fs::read_dir(&locked).is_ok();
		let targets = collect_targets(&required(&lib), ".dart");
		fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
		if privileged {
			return;
		}

		assert_eq!(targets.len(), 2);
		match &targets[0] {
			Err(SwapError::Walk { path, .. }) => assert_eq!(path, &locked),
			other => panic!("Expected Walk error, got {other:?}"),
		}
		assert_eq!(targets[1].as_ref().unwrap(), &lib.join("ok.dart"));
	}
}
