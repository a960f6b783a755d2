//! A geographical bounding box (`GeoBBox`) in EPSG:4326, built by reprojecting
//! the source archive's Web Mercator (EPSG:3857) extent.

use anyhow::{ensure, Result};
use std::f64::consts::FRAC_PI_2;
use std::fmt::Debug;

/// WGS84 semi-major axis (equatorial radius) in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Largest valid Web Mercator x coordinate (half the world size in meters).
const MAX_MERCATOR_X: f64 = std::f64::consts::PI * EARTH_RADIUS;

/// A geographical bounding box defined by its minimum and maximum
/// longitude (x) and latitude (y) coordinates:
/// - `x_min` (west), `y_min` (south), `x_max` (east), `y_max` (north).
#[derive(Clone, Copy, PartialEq)]
pub struct GeoBBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl GeoBBox {
	/// Creates a new `GeoBBox` from `west, south, east, north`.
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<GeoBBox> {
		GeoBBox {
			x_min,
			y_min,
			x_max,
			y_max,
		}
		.checked()
	}

	/// Reprojects a Web Mercator (EPSG:3857) extent into geographic coordinates.
	///
	/// Uses the spherical mercator inverse: `lon = degrees(x / R)` and
	/// `lat = degrees(2 * atan(exp(y / R)) - pi/2)` with `R = 6378137`.
	///
	/// # Errors
	/// Fails if the input is not finite or the reprojected corners leave the
	/// valid geographic domain.
	pub fn from_mercator(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<GeoBBox> {
		for v in [x_min, y_min, x_max, y_max] {
			ensure!(v.is_finite(), "mercator coordinate ({v}) must be finite");
		}
		for x in [x_min, x_max] {
			ensure!(
				x.abs() <= MAX_MERCATOR_X,
				"mercator x coordinate ({x}) is outside the valid domain (|x| <= {MAX_MERCATOR_X})"
			);
		}
		GeoBBox::new(
			mercator_x_to_lon(x_min),
			mercator_y_to_lat(y_min),
			mercator_x_to_lon(x_max),
			mercator_y_to_lat(y_max),
		)
	}

	/// Formats the bounding box as `west,south,east,north`.
	pub fn as_string(&self) -> String {
		format!("{},{},{},{}", self.x_min, self.y_min, self.x_max, self.y_max)
	}

	fn checked(self) -> Result<GeoBBox> {
		ensure!(self.x_min >= -180.0, "x_min ({}) must be >= -180", self.x_min);
		ensure!(self.y_min >= -90.0, "y_min ({}) must be >= -90", self.y_min);
		ensure!(self.x_max <= 180.0, "x_max ({}) must be <= 180", self.x_max);
		ensure!(self.y_max <= 90.0, "y_max ({}) must be <= 90", self.y_max);
		ensure!(
			self.x_min <= self.x_max,
			"x_min ({}) must be <= x_max ({})",
			self.x_min,
			self.x_max
		);
		ensure!(
			self.y_min <= self.y_max,
			"y_min ({}) must be <= y_max ({})",
			self.y_min,
			self.y_max
		);
		Ok(self)
	}
}

// results are clamped because converting the extreme valid inputs can land a
// rounding error beyond the geographic range
fn mercator_x_to_lon(x: f64) -> f64 {
	(x / EARTH_RADIUS).to_degrees().clamp(-180.0, 180.0)
}

fn mercator_y_to_lat(y: f64) -> f64 {
	(2.0 * (y / EARTH_RADIUS).exp().atan() - FRAC_PI_2)
		.to_degrees()
		.clamp(-90.0, 90.0)
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(
			f,
			"GeoBBox({}, {}, {}, {})",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}
