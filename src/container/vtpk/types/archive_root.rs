//! The root descriptor document of a bundle archive.
//!
//! Every archive carries a `p12/root.json` describing the tile set. Only the
//! fields needed for the output metadata are decoded; everything else in the
//! document is ignored.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// The archive's extent in its native projected CRS (EPSG:3857).
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct ArchiveExtent {
	pub xmin: f64,
	pub ymin: f64,
	pub xmax: f64,
	pub ymax: f64,
}

/// The decoded root descriptor document.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRoot {
	pub name: String,
	#[serde(default)]
	current_version: u32,
	pub initial_extent: ArchiveExtent,
}

impl ArchiveRoot {
	/// Loads and decodes the root document at the given path.
	pub fn from_path(path: &Path) -> Result<ArchiveRoot> {
		let content =
			fs::read_to_string(path).with_context(|| format!("reading root document {path:?}"))?;
		serde_json::from_str(&content).with_context(|| format!("decoding root document {path:?}"))
	}

	/// Returns the archive version, defaulting to 1 when the document carries
	/// none or zero.
	pub fn version(&self) -> u32 {
		if self.current_version == 0 {
			1
		} else {
			self.current_version
		}
	}
}
