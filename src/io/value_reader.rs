//! A reader for decoding little-endian values and Protocol Buffer fields from
//! byte slices.
//!
//! This is used in two places: unpacking the fixed-size records of a bundle
//! tile index, and scanning the PBF payload of a vector tile for its layer
//! names.

use anyhow::{bail, ensure, Context, Result};
use byteorder::{ByteOrder, LittleEndian};

/// A reader over a byte slice with little-endian byte order and PBF helpers.
pub struct ValueReaderSlice<'a> {
	slice: &'a [u8],
	position: usize,
}

impl<'a> ValueReaderSlice<'a> {
	pub fn new(slice: &'a [u8]) -> ValueReaderSlice<'a> {
		ValueReaderSlice { slice, position: 0 }
	}

	/// Returns the total length of the readable data.
	pub fn len(&self) -> usize {
		self.slice.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slice.is_empty()
	}

	/// Returns the current position within the readable data.
	pub fn position(&self) -> usize {
		self.position
	}

	/// Sets the current position within the readable data.
	pub fn set_position(&mut self, position: usize) -> Result<()> {
		ensure!(
			position <= self.slice.len(),
			"position ({position}) must be <= length ({})",
			self.slice.len()
		);
		self.position = position;
		Ok(())
	}

	/// Returns the number of bytes remaining to be read.
	pub fn remaining(&self) -> usize {
		self.slice.len() - self.position
	}

	/// Checks if there are any bytes remaining to be read.
	pub fn has_remaining(&self) -> bool {
		self.remaining() > 0
	}

	fn read_slice(&mut self, length: usize) -> Result<&'a [u8]> {
		ensure!(
			self.remaining() >= length,
			"reading {length} bytes at position {} exceeds length ({})",
			self.position,
			self.slice.len()
		);
		let slice = &self.slice[self.position..self.position + length];
		self.position += length;
		Ok(slice)
	}

	/// Reads an unsigned 8-bit integer.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_slice(1)?[0])
	}

	/// Reads an unsigned little-endian 64-bit integer.
	pub fn read_u64(&mut self) -> Result<u64> {
		Ok(LittleEndian::read_u64(self.read_slice(8)?))
	}

	/// Reads a variable-length unsigned integer (varint).
	///
	/// # Errors
	/// Returns an error if reading fails or the varint is too long (more than 70 bits).
	pub fn read_varint(&mut self) -> Result<u64> {
		let mut value = 0;
		let mut shift = 0;
		loop {
			let byte = self.read_u8()?;
			value |= (u64::from(byte) & 0x7F) << shift;
			if byte & 0x80 == 0 {
				break;
			}
			shift += 7;
			if shift >= 70 {
				bail!("varint too long");
			}
		}
		Ok(value)
	}

	/// Reads a PBF key and splits it into field number and wire type.
	pub fn read_pbf_key(&mut self) -> Result<(u64, u8)> {
		let value = self.read_varint().context("Failed to read PBF key")?;
		Ok((value >> 3, (value & 0x07) as u8))
	}

	/// Reads a length-delimited PBF string.
	pub fn read_pbf_string(&mut self) -> Result<String> {
		let length = self.read_varint().context("Failed to read string length")? as usize;
		let bytes = self.read_slice(length)?;
		String::from_utf8(bytes.to_vec()).context("Failed to decode PBF string as UTF-8")
	}

	/// Reads a length-delimited PBF message and returns a sub-reader over it.
	pub fn get_pbf_sub_reader(&mut self) -> Result<ValueReaderSlice<'a>> {
		let length = self.read_varint().context("Failed to read message length")? as usize;
		Ok(ValueReaderSlice::new(self.read_slice(length)?))
	}

	/// Skips over a PBF value of the given wire type.
	pub fn skip_pbf_value(&mut self, wire_type: u8) -> Result<()> {
		match wire_type {
			0 => {
				self.read_varint()?;
			}
			1 => {
				self.read_slice(8)?;
			}
			2 => {
				let length = self.read_varint()? as usize;
				self.read_slice(length)?;
			}
			5 => {
				self.read_slice(4)?;
			}
			w => bail!("unsupported wire type ({w})"),
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn read_u64_le() -> Result<()> {
		let mut reader = ValueReaderSlice::new(&[1, 0, 0, 0, 0, 0, 0, 0x80]);
		assert_eq!(reader.read_u64()?, 0x8000_0000_0000_0001);
		assert!(!reader.has_remaining());
		Ok(())
	}

	#[test]
	fn read_varint() -> Result<()> {
		let mut reader = ValueReaderSlice::new(&[0xAC, 0x02, 0x05]);
		assert_eq!(reader.read_varint()?, 300);
		assert_eq!(reader.read_varint()?, 5);
		Ok(())
	}

	#[test]
	fn varint_too_long() {
		let mut reader = ValueReaderSlice::new(&[0xFF; 11]);
		assert!(reader.read_varint().is_err());
	}

	#[test]
	fn read_pbf_key_and_string() -> Result<()> {
		// field 1, wire type 2, "roads"
		let mut reader = ValueReaderSlice::new(b"\x0a\x05roads");
		assert_eq!(reader.read_pbf_key()?, (1, 2));
		assert_eq!(reader.read_pbf_string()?, "roads");
		Ok(())
	}

	#[test]
	fn sub_reader() -> Result<()> {
		let mut reader = ValueReaderSlice::new(&[0x03, 0x01, 0x02, 0x03, 0x09]);
		let mut sub = reader.get_pbf_sub_reader()?;
		assert_eq!(sub.len(), 3);
		assert_eq!(sub.read_u8()?, 1);
		assert_eq!(reader.read_u8()?, 0x09);
		Ok(())
	}

	#[test]
	fn skip_values() -> Result<()> {
		let mut reader = ValueReaderSlice::new(&[
			0xAC, 0x02, // varint
			0, 1, 2, 3, 4, 5, 6, 7, // 64-bit
			0x02, 0xAA, 0xBB, // length-delimited
			0, 1, 2, 3, // 32-bit
		]);
		reader.skip_pbf_value(0)?;
		reader.skip_pbf_value(1)?;
		reader.skip_pbf_value(2)?;
		reader.skip_pbf_value(5)?;
		assert!(!reader.has_remaining());
		assert!(reader.skip_pbf_value(3).is_err());
		Ok(())
	}

	#[test]
	fn read_past_end() {
		let mut reader = ValueReaderSlice::new(&[0x01]);
		assert!(reader.read_u64().is_err());
	}
}
