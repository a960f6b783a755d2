//! This module provides functionality for reading tile data from a bundle archive.
//!
//! ## Directory structure
//! The archive root must contain a `p12` directory with the root descriptor
//! document and one directory per zoom level, each holding the bundle files of
//! that level:
//! ```text
//! <root>/p12/root.json
//! <root>/p12/tile/L<zz>/R<rrrr>C<cccc>.bundle
//! ```
//! - `L<zz>`: zoom level (directory)
//! - `R<rrrr>C<cccc>`: the bundle's grid offset in tile units, hexadecimal
//!
//! Levels and bundles are listed in sorted order so that a conversion is
//! deterministic. Every directory entry must follow the naming convention;
//! anything else is treated as a malformed archive.

use super::types::{parse_bundle_name, parse_level_name, ArchiveRoot};
use anyhow::{ensure, Context, Result};
use itertools::Itertools;
use std::{
	fs,
	path::{Path, PathBuf},
};

/// One zoom level directory of the archive.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VtpkLevel {
	pub zoom: u8,
	pub path: PathBuf,
}

/// One bundle file, located by its grid offset in tile units.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VtpkBundle {
	pub row_base: u32,
	pub col_base: u32,
	pub path: PathBuf,
}

/// A reader for bundle archives.
///
/// Opening an archive loads the root descriptor document and discovers the
/// zoom level directories. Bundle files are listed lazily per level.
pub struct VtpkReader {
	root: ArchiveRoot,
	levels: Vec<VtpkLevel>,
}

impl VtpkReader {
	/// Opens an archive root directory and initializes a `VtpkReader`.
	///
	/// # Errors
	/// Returns an error if the directory does not exist, the root document is
	/// missing or malformed, a level directory has an invalid name, or the
	/// archive contains no zoom levels at all.
	pub fn open_path(dir: &Path) -> Result<VtpkReader> {
		log::trace!("read {dir:?}");

		ensure!(dir.exists(), "path {dir:?} does not exist");
		let dir = dir.canonicalize()?;
		ensure!(dir.is_dir(), "path {dir:?} is not a directory");

		let root = ArchiveRoot::from_path(&dir.join("p12").join("root.json"))?;

		let tile_dir = dir.join("p12").join("tile");
		ensure!(tile_dir.is_dir(), "tile directory {tile_dir:?} does not exist");

		let mut levels = Vec::new();
		for entry in fs::read_dir(&tile_dir)? {
			let entry = entry?;
			if !entry.path().is_dir() {
				continue;
			}
			let name = entry.file_name().to_string_lossy().to_string();
			let zoom =
				parse_level_name(&name).with_context(|| format!("level directory {:?}", entry.path()))?;
			levels.push(VtpkLevel {
				zoom,
				path: entry.path(),
			});
		}
		levels.sort_unstable_by_key(|level| level.zoom);

		ensure!(!levels.is_empty(), "no zoom level directories found in {tile_dir:?}");

		Ok(VtpkReader { root, levels })
	}

	/// Returns the decoded root descriptor document.
	pub fn root(&self) -> &ArchiveRoot {
		&self.root
	}

	/// Returns the discovered zoom levels, sorted by zoom.
	pub fn levels(&self) -> &[VtpkLevel] {
		&self.levels
	}

	/// Lists the bundle files of one level, sorted by file name.
	///
	/// # Errors
	/// Returns an error if a file name does not follow the bundle naming
	/// convention.
	pub fn bundles(&self, level: &VtpkLevel) -> Result<Vec<VtpkBundle>> {
		let entries = fs::read_dir(&level.path)?
			.collect::<std::io::Result<Vec<_>>>()?
			.into_iter()
			.sorted_unstable_by_key(|entry| entry.file_name());

		let mut bundles = Vec::new();
		for entry in entries {
			let path = entry.path();
			if !path.is_file() {
				continue;
			}
			let stem = path
				.file_stem()
				.and_then(|stem| stem.to_str())
				.with_context(|| format!("bundle file {path:?} has no decodable name"))?;
			let (row_base, col_base) =
				parse_bundle_name(stem).with_context(|| format!("bundle file {path:?}"))?;
			bundles.push(VtpkBundle {
				row_base,
				col_base,
				path,
			});
		}
		Ok(bundles)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_fs::{
		fixture::{FileTouch, FileWriteStr, PathChild},
		TempDir,
	};

	const ROOT_JSON: &str =
		r#"{"name": "demo", "currentVersion": 2, "initialExtent": {"xmin": 0, "ymin": 0, "xmax": 0, "ymax": 0}}"#;

	fn archive(levels: &[&str]) -> TempDir {
		let dir = TempDir::new().unwrap();
		dir.child("p12/root.json").write_str(ROOT_JSON).unwrap();
		for level in levels {
			fs::create_dir_all(dir.child("p12/tile").child(level).path()).unwrap();
		}
		dir
	}

	#[test]
	fn open_archive() -> Result<()> {
		let dir = archive(&["L10", "L02"]);
		let reader = VtpkReader::open_path(dir.path())?;

		assert_eq!(reader.root().name, "demo");
		assert_eq!(reader.root().version(), 2);
		let zooms = reader.levels().iter().map(|l| l.zoom).collect::<Vec<_>>();
		assert_eq!(zooms, vec![2, 10]);
		Ok(())
	}

	#[test]
	fn missing_directory() {
		assert!(VtpkReader::open_path(Path::new("/does/not/exist")).is_err());
	}

	#[test]
	fn missing_root_document() {
		let dir = TempDir::new().unwrap();
		fs::create_dir_all(dir.child("p12/tile/L01").path()).unwrap();
		assert!(VtpkReader::open_path(dir.path()).is_err());
	}

	#[test]
	fn no_levels() {
		let dir = TempDir::new().unwrap();
		dir.child("p12/root.json").write_str(ROOT_JSON).unwrap();
		fs::create_dir_all(dir.child("p12/tile").path()).unwrap();
		assert!(VtpkReader::open_path(dir.path()).is_err());
	}

	#[test]
	fn invalid_level_name() {
		let dir = archive(&["L03", "extra"]);
		assert!(VtpkReader::open_path(dir.path()).is_err());
	}

	#[test]
	fn lists_bundles_sorted() -> Result<()> {
		let dir = archive(&["L05"]);
		dir.child("p12/tile/L05/R0080C0100.bundle").touch().unwrap();
		dir.child("p12/tile/L05/R0000C0000.bundle").touch().unwrap();

		let reader = VtpkReader::open_path(dir.path())?;
		let bundles = reader.bundles(&reader.levels()[0])?;

		assert_eq!(bundles.len(), 2);
		assert_eq!((bundles[0].row_base, bundles[0].col_base), (0, 0));
		assert_eq!((bundles[1].row_base, bundles[1].col_base), (0x80, 0x100));
		Ok(())
	}

	#[test]
	fn invalid_bundle_name() {
		let dir = archive(&["L05"]);
		dir.child("p12/tile/L05/whatever.bundle").touch().unwrap();

		let reader = VtpkReader::open_path(dir.path()).unwrap();
		assert!(reader.bundles(&reader.levels()[0]).is_err());
	}
}
