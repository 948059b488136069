use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Replace the contents of an existing file without ever leaving it truncated.
///
/// Symlinks are resolved first, so the link stays in place and its target is
/// rewritten. The destination must be writable by the caller: it is opened
/// for writing (without truncation) before anything else happens. The new
/// content goes to a temp file next to the destination, takes over its
/// permissions and ownership, is synced to disk, and is renamed over it.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
	let target = fs::canonicalize(path)?;
	let original = OpenOptions::new().write(true).open(&target)?;
	let metadata = original.metadata()?;

	let mut temp = NamedTempFile::new_in(parent_dir(&target))?;
	copy_ownership(&original, temp.as_file())?;
	temp.as_file().set_permissions(metadata.permissions())?;
	temp.write_all(content.as_bytes())?;
	temp.as_file().sync_all()?;
	drop(original);
	temp.persist(&target).map_err(|e| e.error)?;

	Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
	match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
		_ => PathBuf::from("."),
	}
}

/// Give `temp` the owner and group of `original`.
///
/// Fails when the caller may not hand the file to that owner, so a file
/// owned by someone else is never replaced by one owned by the caller.
#[cfg(unix)]
fn copy_ownership(original: &File, temp: &File) -> io::Result<()> {
	use std::os::unix::fs::MetadataExt;

	let wanted = original.metadata()?;
	let current = temp.metadata()?;
	if wanted.uid() == current.uid() && wanted.gid() == current.gid() {
		return Ok(());
	}

	std::os::unix::fs::fchown(temp, Some(wanted.uid()), Some(wanted.gid()))
}

#[cfg(not(unix))]
fn copy_ownership(_original: &File, _temp: &File) -> io::Result<()> {
	Ok(())
}
