//! Container implementations: the bundle archive source, the MBTiles sink and
//! a mock sink for testing.

pub mod mbtiles;
pub mod mock;
pub mod vtpk;
mod writer;

pub use mbtiles::MBTilesWriter;
pub use mock::MockTilesWriter;
pub use vtpk::{VtpkBundle, VtpkLevel, VtpkReader};
pub use writer::TilesWriter;
