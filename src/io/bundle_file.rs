//! This module provides functionality for reading byte ranges from bundle files.
//!
//! A bundle file is opened once and then read in ranges: first the fixed tile
//! index region at its head, then the individual tile payloads at the offsets
//! the index points to.

use crate::types::{Blob, ByteRange};
use anyhow::{ensure, Context, Result};
use std::{
	fs::File,
	io::{Read, Seek, SeekFrom},
	path::Path,
};

/// A struct that provides ranged reading from a single bundle file.
#[derive(Debug)]
pub struct BundleFile {
	name: String,
	file: File,
	size: u64,
}

impl BundleFile {
	/// Opens a bundle file.
	///
	/// # Errors
	/// Returns an error if the path does not exist, is not absolute or is not
	/// a regular file.
	pub fn open(path: &Path) -> Result<BundleFile> {
		ensure!(path.exists(), "file {path:?} does not exist");
		ensure!(path.is_absolute(), "path {path:?} must be absolute");
		ensure!(path.is_file(), "path {path:?} must be a file");

		let file = File::open(path).with_context(|| format!("opening {path:?}"))?;
		let size = file.metadata()?.len();

		Ok(BundleFile {
			name: path.to_string_lossy().to_string(),
			file,
			size,
		})
	}

	/// Reads a specific range of bytes from the file.
	///
	/// # Errors
	/// Returns an error if the range reaches beyond the end of the file.
	pub fn read_range(&mut self, range: &ByteRange) -> Result<Blob> {
		ensure!(
			range.offset + range.length <= self.size,
			"byte range {range:?} exceeds size ({}) of file \"{}\"",
			self.size,
			self.name
		);

		let mut buffer = vec![0; range.length as usize];
		self.file.seek(SeekFrom::Start(range.offset))?;
		self
			.file
			.read_exact(&mut buffer)
			.with_context(|| format!("reading {range:?} from file \"{}\"", self.name))?;

		Ok(Blob::from(buffer))
	}

	/// Returns the total size of the file in bytes.
	pub fn size(&self) -> u64 {
		self.size
	}

	/// Returns the file name this reader was opened with.
	pub fn name(&self) -> &str {
		&self.name
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_fs::{fixture::FileWriteBin, NamedTempFile};

	#[test]
	fn read_range() -> Result<()> {
		let file = NamedTempFile::new("test.bundle")?;
		file.write_binary(&[0, 1, 2, 3, 4, 5, 6, 7])?;

		let mut reader = BundleFile::open(file.path())?;
		assert_eq!(reader.size(), 8);
		assert_eq!(reader.read_range(&ByteRange::new(2, 3))?.as_slice(), &[2, 3, 4]);
		Ok(())
	}

	#[test]
	fn read_past_end() -> Result<()> {
		let file = NamedTempFile::new("test.bundle")?;
		file.write_binary(&[0, 1, 2, 3])?;

		let mut reader = BundleFile::open(file.path())?;
		assert!(reader.read_range(&ByteRange::new(2, 3)).is_err());
		Ok(())
	}

	#[test]
	fn missing_file() {
		assert!(BundleFile::open(Path::new("/does/not/exist.bundle")).is_err());
	}
}
