//! Converts ESRI vector tile packages (VTPK bundle archives) into MBTiles containers.
//!
//! A bundle archive stores gzipped vector tiles in fixed-layout bundle files,
//! organized in a directory tree by zoom level. Each bundle file starts with a
//! 128 x 128 tile index mapping (row, column) to the byte range of a tile
//! payload within the file; the bundle's position in the global tile grid is
//! encoded in its file name. This crate decodes that layout, flips the rows
//! into the TMS convention, discovers the vector layers present across all
//! tiles, and writes everything into a single MBTiles database.
//!
//! ```no_run
//! use vtpk2mbtiles::{MBTilesWriter, VtpkReader, convert};
//! use anyhow::Result;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let reader = VtpkReader::open_path(Path::new("/path/to/archive"))?;
//!     let mut writer = MBTilesWriter::open_path(Path::new("/path/to/output.mbtiles"))?;
//!     convert(&reader, &mut writer).await?;
//!     Ok(())
//! }
//! ```

pub mod container;
pub mod io;
pub mod tools;
pub mod types;
pub mod utils;
pub mod vector_tile;

pub use container::{MBTilesWriter, MockTilesWriter, TilesWriter, VtpkReader};
pub use tools::convert::convert;
pub use types::{Blob, ByteRange, GeoBBox, TileCoord3, TilesMetadata};
