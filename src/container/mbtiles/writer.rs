//! This module provides functionality for writing tile data to an MBTiles SQLite database.
//!
//! The `MBTilesWriter` struct is the primary component of this module, offering methods to
//! write metadata and tile data to a specified MBTiles file.
//!
//! ## Features
//! - Ensures the necessary tables and indices are created in the SQLite database.
//! - Batches tile inserts into transactions.
//!
//! ## Coordinates
//! Tile rows are expected to arrive already in the TMS convention (row 0 at
//! the bottom of the grid) and are stored verbatim; the vertical flip from the
//! source archive's top-down rows happens in the conversion driver.
//!
//! ## Errors
//! - Returns errors if there are issues with the SQLite database or if there are I/O issues.

use crate::{
	container::TilesWriter,
	types::{Blob, TileCoord3, TilesMetadata},
};
use anyhow::Result;
use async_trait::async_trait;
use r2d2::Pool;
use r2d2_sqlite::{rusqlite::params, SqliteConnectionManager};
use std::{fs::remove_file, path::Path};

const TILE_BATCH_SIZE: usize = 2000;

/// A writer for creating and populating MBTiles databases.
pub struct MBTilesWriter {
	pool: Pool<SqliteConnectionManager>,
	batch: Vec<(TileCoord3, Blob)>,
}

impl MBTilesWriter {
	/// Creates a new MBTiles file at the specified path.
	///
	/// If a file already exists, it is removed first.
	///
	/// # Errors
	/// Returns an error if the SQLite connection cannot be established or if
	/// the necessary tables cannot be created.
	pub fn open_path(path: &Path) -> Result<Self> {
		if path.exists() {
			remove_file(path)?;
		}
		let manager = SqliteConnectionManager::file(path);
		let pool = Pool::builder().max_size(10).build(manager)?;

		pool.get()?.execute_batch(
			"CREATE TABLE metadata (name TEXT, value TEXT, UNIQUE (name));
			CREATE TABLE tiles (zoom_level INTEGER, tile_column INTEGER, tile_row INTEGER, tile_data BLOB, UNIQUE (zoom_level, tile_column, tile_row));
			CREATE UNIQUE INDEX tile_index on tiles (zoom_level, tile_column, tile_row);",
		)?;

		Ok(MBTilesWriter {
			pool,
			batch: Vec::new(),
		})
	}

	/// Adds multiple tiles to the MBTiles file within a single transaction.
	///
	/// # Errors
	/// Returns an error if the transaction fails.
	fn add_tiles(&mut self, tiles: &[(TileCoord3, Blob)]) -> Result<()> {
		let mut conn = self.pool.get()?;
		let transaction = conn.transaction()?;
		for (coord, blob) in tiles {
			transaction.execute(
				"INSERT OR REPLACE INTO tiles (zoom_level, tile_column, tile_row, tile_data) VALUES (?1, ?2, ?3, ?4)",
				params![coord.level, coord.x, coord.y, blob.as_slice()],
			)?;
		}
		transaction.commit()?;
		Ok(())
	}

	/// Inserts or replaces a metadata key-value pair.
	fn set_metadata_pair(&self, name: &str, value: &str) -> Result<()> {
		self.pool.get()?.execute(
			"INSERT OR REPLACE INTO metadata (name, value) VALUES (?1, ?2)",
			params![name, value],
		)?;
		Ok(())
	}

	fn flush_batch(&mut self) -> Result<()> {
		if self.batch.is_empty() {
			return Ok(());
		}
		let batch = std::mem::take(&mut self.batch);
		self.add_tiles(&batch)
	}
}

#[async_trait]
impl TilesWriter for MBTilesWriter {
	async fn write_tile(&mut self, coord: &TileCoord3, blob: &Blob) -> Result<()> {
		self.batch.push((*coord, blob.clone()));
		if self.batch.len() >= TILE_BATCH_SIZE {
			self.flush_batch()?;
		}
		Ok(())
	}

	async fn set_metadata(&mut self, metadata: &TilesMetadata) -> Result<()> {
		self.flush_batch()?;
		for (name, value) in metadata.as_pairs() {
			self.set_metadata_pair(name, &value)?;
		}
		Ok(())
	}

	async fn finalize(&mut self) -> Result<()> {
		self.flush_batch()
	}
}
