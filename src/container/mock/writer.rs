//! Mock implementation of a tile sink for testing purposes.
//!
//! The `MockTilesWriter` records every call in memory, allowing tests to
//! verify which tiles were written, which metadata was set and whether the
//! sink was finalized, without any actual file I/O.

use crate::{
	container::TilesWriter,
	types::{Blob, TileCoord3, TilesMetadata},
};
use anyhow::{ensure, Result};
use async_trait::async_trait;

/// Mock implementation of a `TilesWriter`.
#[derive(Debug, Default)]
pub struct MockTilesWriter {
	pub tiles: Vec<(TileCoord3, Blob)>,
	pub metadata: Option<TilesMetadata>,
	pub finalized: bool,
}

impl MockTilesWriter {
	pub fn new() -> MockTilesWriter {
		MockTilesWriter::default()
	}
}

#[async_trait]
impl TilesWriter for MockTilesWriter {
	async fn write_tile(&mut self, coord: &TileCoord3, blob: &Blob) -> Result<()> {
		ensure!(!self.finalized, "write_tile after finalize");
		self.tiles.push((*coord, blob.clone()));
		Ok(())
	}

	async fn set_metadata(&mut self, metadata: &TilesMetadata) -> Result<()> {
		ensure!(!self.finalized, "set_metadata after finalize");
		ensure!(self.metadata.is_none(), "set_metadata called twice");
		self.metadata = Some(metadata.clone());
		Ok(())
	}

	async fn finalize(&mut self) -> Result<()> {
		ensure!(!self.finalized, "finalize called twice");
		self.finalized = true;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn records_calls() -> Result<()> {
		let mut writer = MockTilesWriter::new();
		writer
			.write_tile(&TileCoord3::new(1, 0, 1)?, &Blob::from(&b"x"[..]))
			.await?;
		writer.finalize().await?;

		assert_eq!(writer.tiles.len(), 1);
		assert!(writer.metadata.is_none());
		assert!(writer.finalized);
		assert!(writer.finalize().await.is_err());
		Ok(())
	}
}
