//! The sink side of a conversion.

use crate::types::{Blob, TileCoord3, TilesMetadata};
use anyhow::Result;
use async_trait::async_trait;

/// A sink that tiles and metadata are written into.
///
/// The call order is fixed: any number of `write_tile` calls, then
/// `set_metadata` exactly once, then `finalize` as the last call. Writing the
/// same coordinate twice is allowed; the last write wins. A sink that was
/// never finalized must not present itself as a complete tile set.
#[async_trait]
pub trait TilesWriter: Send {
	/// Stores one tile. The row of `coord` is expected in the TMS convention.
	async fn write_tile(&mut self, coord: &TileCoord3, blob: &Blob) -> Result<()>;

	/// Stores the metadata of the tile set.
	async fn set_metadata(&mut self, metadata: &TilesMetadata) -> Result<()>;

	/// Flushes all pending data and completes the tile set.
	async fn finalize(&mut self) -> Result<()>;
}
