//! Metadata describing a converted tile set, written once into the output
//! container after all tiles have been stored.

use crate::types::GeoBBox;
use serde_json::json;

/// The metadata of a converted vector tile set.
///
/// `layers` holds the distinct layer names discovered across all tiles, in
/// sorted order. The remaining fields of the MBTiles metadata schema
/// (`format`, `type`, `scheme`) are fixed for this converter: tiles are
/// always gzipped PBF overlays addressed in the TMS row convention.
#[derive(Clone, Debug, PartialEq)]
pub struct TilesMetadata {
	pub name: String,
	pub version: u32,
	pub bounds: GeoBBox,
	pub minzoom: u8,
	pub maxzoom: u8,
	pub layers: Vec<String>,
}

impl TilesMetadata {
	/// Returns the metadata as ordered `(name, value)` pairs following the
	/// MBTiles metadata schema.
	///
	/// The `json` entry carries the layer manifest as a string-encoded
	/// `{"vector_layers": [{"id": ..., "fields": {}}, ...]}` document; field
	/// schemas are not derived from the tiles and stay empty.
	pub fn as_pairs(&self) -> Vec<(&'static str, String)> {
		let vector_layers = json!({
			"vector_layers": self
				.layers
				.iter()
				.map(|id| json!({ "id": id, "fields": {} }))
				.collect::<Vec<_>>()
		});

		vec![
			("name", self.name.clone()),
			("format", String::from("pbf")),
			("version", self.version.to_string()),
			("bounds", self.bounds.as_string()),
			("minzoom", self.minzoom.to_string()),
			("maxzoom", self.maxzoom.to_string()),
			("type", String::from("overlay")),
			("json", vector_layers.to_string()),
			("scheme", String::from("tms")),
		]
	}
}
