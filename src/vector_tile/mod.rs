//! Minimal decoding of Mapbox Vector Tile payloads.
//!
//! The converter only needs the names of the layers contained in a tile, so
//! this module scans the PBF structure instead of decoding features: the top
//! level of a tile is a sequence of embedded layer messages (field 3), and a
//! layer's name is its string field 1. Everything else is skipped by wire
//! type.

use crate::{io::ValueReaderSlice, types::Blob};
use anyhow::{bail, Context, Result};

/// Extracts the layer names from an uncompressed vector tile payload.
///
/// Names are returned in the order they appear; duplicates are not removed
/// here but by the accumulating set of the caller.
///
/// # Errors
/// Returns an error if the payload is not a valid vector tile.
pub fn scan_layer_names(blob: &Blob) -> Result<Vec<String>> {
	let mut reader = ValueReaderSlice::new(blob.as_slice());
	let mut names = Vec::new();

	while reader.has_remaining() {
		match reader.read_pbf_key().context("Failed to read PBF key")? {
			(3, 2) => {
				let mut layer = reader
					.get_pbf_sub_reader()
					.context("Failed to get PBF sub-reader for layer")?;
				names.push(read_layer_name(&mut layer).context("Failed to read layer")?);
			}
			(f, w) => bail!("Unexpected combination of field number ({f}) and wire type ({w})"),
		}
	}

	Ok(names)
}

fn read_layer_name(reader: &mut ValueReaderSlice) -> Result<String> {
	let mut name = None;

	while reader.has_remaining() {
		match reader.read_pbf_key().context("Failed to read PBF key")? {
			(1, 2) => name = Some(reader.read_pbf_string().context("Failed to read layer name")?),
			(_, w) => reader.skip_pbf_value(w).context("Failed to skip layer field")?,
		}
	}

	name.context("Layer name is required")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn encode_layer(name: &str) -> Vec<u8> {
		// layer message: name (field 1), version (field 15) = 2
		let mut layer = vec![0x0A, name.len() as u8];
		layer.extend_from_slice(name.as_bytes());
		layer.extend_from_slice(&[0x78, 0x02]);
		// tile message: layer (field 3)
		let mut tile = vec![0x1A, layer.len() as u8];
		tile.extend_from_slice(&layer);
		tile
	}

	#[test]
	fn single_layer() -> Result<()> {
		let blob = Blob::from(encode_layer("roads"));
		assert_eq!(scan_layer_names(&blob)?, vec!["roads"]);
		Ok(())
	}

	#[test]
	fn multiple_layers_with_duplicates() -> Result<()> {
		let mut bytes = encode_layer("roads");
		bytes.extend(encode_layer("water"));
		bytes.extend(encode_layer("roads"));
		assert_eq!(scan_layer_names(&Blob::from(bytes))?, vec!["roads", "water", "roads"]);
		Ok(())
	}

	#[test]
	fn skips_unknown_layer_fields() -> Result<()> {
		// extent (field 5) = 4096, then the name
		let mut layer = vec![0x28, 0x80, 0x20];
		layer.extend_from_slice(b"\x0a\x04pois");
		let mut tile = vec![0x1A, layer.len() as u8];
		tile.extend_from_slice(&layer);
		assert_eq!(scan_layer_names(&Blob::from(tile))?, vec!["pois"]);
		Ok(())
	}

	#[test]
	fn empty_tile() -> Result<()> {
		assert!(scan_layer_names(&Blob::new_empty())?.is_empty());
		Ok(())
	}

	#[test]
	fn rejects_garbage() {
		assert!(scan_layer_names(&Blob::from(&b"\xff\xff\xff"[..])).is_err());
		// a layer without a name
		assert!(scan_layer_names(&Blob::from(&b"\x1a\x02\x78\x02"[..])).is_err());
	}
}
