//! Core data types shared across the converter.

mod blob;
mod byte_range;
mod geo_bbox;
mod metadata;
mod tile_coord;

pub use blob::Blob;
pub use byte_range::ByteRange;
pub use geo_bbox::{GeoBBox, EARTH_RADIUS};
pub use metadata::TilesMetadata;
pub use tile_coord::TileCoord3;
