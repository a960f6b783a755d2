//! Converting a bundle archive into a tile sink.
//!
//! The conversion streams every tile of the archive into the sink, collects
//! the distinct layer names on the way, and writes the metadata as the very
//! last step: a sink is only finalized after the whole archive decoded
//! cleanly, so an aborted run never leaves a container that claims to be
//! complete.

use crate::{
	container::{vtpk::types::BundleTileIndex, MBTilesWriter, TilesWriter, VtpkReader},
	io::BundleFile,
	types::{GeoBBox, TileCoord3, TilesMetadata},
	utils::decompress_gzip,
	vector_tile::scan_layer_names,
};
use anyhow::{ensure, Context, Result};
use std::{
	collections::BTreeSet,
	path::{Path, PathBuf},
};

/// Runs a full conversion from an archive root directory to an MBTiles file.
///
/// When no output file is given, the file is named after the archive
/// (`<name>.mbtiles`) in the current directory.
#[tokio::main]
pub async fn run(input_folder: &Path, output_file: Option<&Path>) -> Result<()> {
	let reader = VtpkReader::open_path(input_folder)?;

	let output_file = match output_file {
		Some(path) => path.to_path_buf(),
		None => PathBuf::from(format!("{}.mbtiles", reader.root().name)),
	};

	eprintln!("convert from {input_folder:?} to {output_file:?}");

	let mut writer = MBTilesWriter::open_path(&output_file)?;
	convert(&reader, &mut writer).await?;

	eprintln!("finished converting tiles");

	Ok(())
}

/// Converts all tiles of the archive into the given sink and completes it.
///
/// Metadata is assembled from the root document, the reprojected extent, the
/// discovered zoom levels and the accumulated layer names. Any failure
/// propagates before metadata is written or the sink is finalized.
pub async fn convert(reader: &VtpkReader, writer: &mut dyn TilesWriter) -> Result<()> {
	let mut layer_names = BTreeSet::new();
	write_archive_tiles(reader, writer, &mut layer_names).await?;

	let root = reader.root();
	let extent = &root.initial_extent;
	let bounds = GeoBBox::from_mercator(extent.xmin, extent.ymin, extent.xmax, extent.ymax)
		.context("reprojecting archive extent")?;

	let maxzoom = reader
		.levels()
		.iter()
		.map(|level| level.zoom)
		.max()
		.context("archive contains no zoom levels")?;

	let metadata = TilesMetadata {
		name: root.name.clone(),
		version: root.version(),
		bounds,
		// always published as 0, independent of the lowest level present
		minzoom: 0,
		maxzoom,
		layers: layer_names.into_iter().collect(),
	};

	writer.set_metadata(&metadata).await?;
	writer.finalize().await
}

/// Walks all levels and bundles of the archive, writing every present tile to
/// the sink and folding its layer names into `layer_names`.
async fn write_archive_tiles(
	reader: &VtpkReader,
	writer: &mut dyn TilesWriter,
	layer_names: &mut BTreeSet<String>,
) -> Result<()> {
	for level in reader.levels() {
		log::info!("processing level {}", level.zoom);

		for bundle in reader.bundles(level)? {
			log::debug!("processing {:?}", bundle.path);

			let mut file = BundleFile::open(&bundle.path)?;
			let index = BundleTileIndex::from_bundle_file(&mut file)?;

			for entry in index.entries() {
				let blob = file.read_range(&entry.range)?;

				let mut coord = TileCoord3::new(
					level.zoom,
					bundle.col_base + entry.col as u32,
					bundle.row_base + entry.row as u32,
				)?;
				ensure!(
					coord.is_valid(),
					"tile {coord:?} from bundle {:?} lies outside the grid of level {}",
					bundle.path,
					level.zoom
				);
				coord.flip_y();

				writer.write_tile(&coord, &blob).await?;

				let tile = decompress_gzip(&blob)
					.with_context(|| format!("decompressing tile {coord:?} from bundle {:?}", bundle.path))?;
				layer_names.extend(
					scan_layer_names(&tile)
						.with_context(|| format!("scanning tile {coord:?} from bundle {:?}", bundle.path))?,
				);
			}
		}
	}
	Ok(())
}
