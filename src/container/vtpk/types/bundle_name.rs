//! Parsing of the naming conventions inside a bundle archive.
//!
//! Zoom levels are stored as directories named `L<digits>` (e.g. `L03`). Each
//! bundle file inside a level is named after its grid offset in tile units:
//! `R<4 hex digits><separator><4 hex digits>`, row first, column second, e.g.
//! `R0080C0100.bundle`. The separator character is not interpreted.

use anyhow::{ensure, Context, Result};

/// Parses a bundle file stem into its `(row_base, col_base)` grid offset.
///
/// # Errors
/// Returns an error if the stem does not follow the fixed character layout.
pub fn parse_bundle_name(stem: &str) -> Result<(u32, u32)> {
	ensure!(
		stem.len() >= 10 && stem.is_char_boundary(5) && stem.is_char_boundary(6) && stem.is_char_boundary(10),
		"bundle name \"{stem}\" is too short, expected \"R<4 hex><sep><4 hex>\""
	);
	ensure!(
		stem.starts_with('R'),
		"bundle name \"{stem}\" must start with 'R'"
	);

	let parse_hex = |range: std::ops::Range<usize>, what: &str| -> Result<u32> {
		let digits = &stem[range];
		ensure!(
			digits.chars().all(|c| c.is_ascii_hexdigit()),
			"{what} (\"{digits}\") of bundle name \"{stem}\" must be 4 hex digits"
		);
		u32::from_str_radix(digits, 16).with_context(|| format!("parsing {what} of bundle name \"{stem}\""))
	};

	let row_base = parse_hex(1..5, "row offset")?;
	let col_base = parse_hex(6..10, "column offset")?;

	Ok((row_base, col_base))
}

/// Parses a level directory name (`L<digits>`) into its zoom level.
///
/// # Errors
/// Returns an error if the name does not start with 'L' followed by digits.
pub fn parse_level_name(name: &str) -> Result<u8> {
	ensure!(
		name.starts_with('L') && name.len() > 1 && name[1..].chars().all(|c| c.is_ascii_digit()),
		"level directory name \"{name}\" must be \"L<digits>\""
	);
	name[1..]
		.parse::<u8>()
		.with_context(|| format!("parsing zoom level of directory name \"{name}\""))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundle_names() -> Result<()> {
		assert_eq!(parse_bundle_name("R0001_0002")?, (1, 2));
		assert_eq!(parse_bundle_name("R0080C0100")?, (0x80, 0x100));
		assert_eq!(parse_bundle_name("R0000C0000")?, (0, 0));
		assert_eq!(parse_bundle_name("RffffCffff")?, (0xFFFF, 0xFFFF));
		Ok(())
	}

	#[test]
	fn invalid_bundle_names() {
		assert!(parse_bundle_name("").is_err());
		assert!(parse_bundle_name("R0001").is_err());
		assert!(parse_bundle_name("C0001R0002").is_err());
		assert!(parse_bundle_name("R00x1C0002").is_err());
		assert!(parse_bundle_name("R0001C00x2").is_err());
		assert!(parse_bundle_name("Rämmm_0002").is_err());
	}

	#[test]
	fn rejects_sign_prefixes() {
		// a leading '+' would be accepted by from_str_radix
		assert!(parse_bundle_name("R+001C0002").is_err());
	}

	#[test]
	fn level_names() -> Result<()> {
		assert_eq!(parse_level_name("L0")?, 0);
		assert_eq!(parse_level_name("L03")?, 3);
		assert_eq!(parse_level_name("L16")?, 16);
		Ok(())
	}

	#[test]
	fn invalid_level_names() {
		assert!(parse_level_name("").is_err());
		assert!(parse_level_name("L").is_err());
		assert!(parse_level_name("Lxx").is_err());
		assert!(parse_level_name("03").is_err());
		assert!(parse_level_name("L256").is_err());
	}
}
