mod archive_root;
mod bundle_name;
mod tile_index;

pub use archive_root::{ArchiveExtent, ArchiveRoot};
pub use bundle_name::{parse_bundle_name, parse_level_name};
pub use tile_index::{
	index_offset, BundleIndexEntry, BundleTileIndex, TILE_INDEX_ARRAY_SIZE, TILE_INDEX_LENGTH,
	TILE_INDEX_OFFSET, TILE_INDEX_RECORD_SIZE,
};
