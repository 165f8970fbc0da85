use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::blend::Result;

/// Replace `path` with `contents` via a temporary sibling and a rename.
///
/// On failure the destination is untouched and the temporary is dropped.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};

	let mut tmp = NamedTempFile::new_in(dir)?;
	tmp.write_all(contents.as_bytes())?;
	tmp.as_file().sync_all()?;
	tmp.persist(path).map_err(|err| err.error)?;

	log::debug!("wrote {} bytes to {}", contents.len(), path.display());
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::write_atomic;
	use crate::blend::BlendError;

	#[test]
	fn replaces_existing_file() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("rig.ts");
		fs::write(&path, "stale").expect("seed file");

		write_atomic(&path, "fresh\n").expect("write succeeds");
		assert_eq!(fs::read_to_string(&path).expect("read back"), "fresh\n");
		assert_eq!(fs::read_dir(dir.path()).expect("list dir").count(), 1);
	}

	#[test]
	fn missing_directory_is_io_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("absent").join("rig.ts");

		let err = write_atomic(&path, "x").expect_err("write must fail");
		assert!(matches!(err, BlendError::Io(_)));
		assert!(!path.exists());
	}
}
