//! Decoding of the tile index at the head of a bundle file.
//!
//! Every bundle file starts with a 64 byte header followed by a fixed table of
//! 128 x 128 records, one per (row, column) pair of the bundle's tile grid.
//! Each record is 8 bytes and packs two little-endian unsigned integers at the
//! bit level: a 40-bit byte offset followed by a 24-bit byte length of the
//! tile payload within the same file. A length of zero means that there is no
//! tile at this position.

use crate::{
	io::{BundleFile, ValueReaderSlice},
	types::{Blob, ByteRange},
};
use anyhow::{ensure, Result};

/// Byte offset of the first index record within a bundle file.
pub const TILE_INDEX_OFFSET: u64 = 64;
/// Number of rows and columns covered by one bundle.
pub const TILE_INDEX_ARRAY_SIZE: u32 = 128;
/// Size of one index record in bytes.
pub const TILE_INDEX_RECORD_SIZE: u64 = 8;
/// Total size of the index region in bytes.
pub const TILE_INDEX_LENGTH: u64 =
	TILE_INDEX_ARRAY_SIZE as u64 * TILE_INDEX_ARRAY_SIZE as u64 * TILE_INDEX_RECORD_SIZE;

const TILE_OFFSET_BITS: u32 = 40;
const TILE_OFFSET_MASK: u64 = (1 << TILE_OFFSET_BITS) - 1;

/// One present tile in a bundle: its position within the bundle grid and the
/// byte range of its payload within the bundle file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BundleIndexEntry {
	pub row: u8,
	pub col: u8,
	pub range: ByteRange,
}

/// The decoded tile index of one bundle file, containing only the entries
/// whose length is not zero, in row-major order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BundleTileIndex {
	entries: Vec<BundleIndexEntry>,
}

/// Returns the byte offset of the index record for `(row, col)` within a
/// bundle file. Both coordinates wrap modulo the grid size.
pub fn index_offset(row: u32, col: u32) -> u64 {
	TILE_INDEX_OFFSET
		+ TILE_INDEX_RECORD_SIZE
			* (TILE_INDEX_ARRAY_SIZE as u64 * (row % TILE_INDEX_ARRAY_SIZE) as u64
				+ (col % TILE_INDEX_ARRAY_SIZE) as u64)
}

fn unpack_record(value: u64) -> (u64, u64) {
	(value & TILE_OFFSET_MASK, value >> TILE_OFFSET_BITS)
}

impl BundleTileIndex {
	/// Reads and decodes the tile index of the given bundle file.
	///
	/// # Errors
	/// Returns an error if the file is too small to contain a complete index.
	pub fn from_bundle_file(file: &mut BundleFile) -> Result<BundleTileIndex> {
		ensure!(
			file.size() >= TILE_INDEX_OFFSET + TILE_INDEX_LENGTH,
			"bundle file \"{}\" is too small ({} bytes) to contain a tile index",
			file.name(),
			file.size()
		);
		let blob = file.read_range(&ByteRange::new(TILE_INDEX_OFFSET, TILE_INDEX_LENGTH))?;
		BundleTileIndex::from_blob(&blob)
	}

	/// Decodes a tile index from the raw bytes of the index region.
	pub fn from_blob(blob: &Blob) -> Result<BundleTileIndex> {
		ensure!(
			blob.len() as u64 == TILE_INDEX_LENGTH,
			"tile index must be {TILE_INDEX_LENGTH} bytes, got {}",
			blob.len()
		);

		let mut reader = ValueReaderSlice::new(blob.as_slice());
		let mut entries = Vec::new();

		for row in 0..TILE_INDEX_ARRAY_SIZE {
			for col in 0..TILE_INDEX_ARRAY_SIZE {
				reader.set_position((index_offset(row, col) - TILE_INDEX_OFFSET) as usize)?;
				let (offset, length) = unpack_record(reader.read_u64()?);
				if length != 0 {
					entries.push(BundleIndexEntry {
						row: row as u8,
						col: col as u8,
						range: ByteRange::new(offset, length),
					});
				}
			}
		}

		Ok(BundleTileIndex { entries })
	}

	/// Returns the present tiles in row-major order.
	pub fn entries(&self) -> &[BundleIndexEntry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
