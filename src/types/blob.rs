//! This module provides the [`Blob`] struct, a wrapper around [`Vec<u8>`] used for
//! passing tile payloads and other byte data between readers, scanners and writers.

use std::fmt::Debug;

/// A simple wrapper around [`Vec<u8>`] that provides additional methods for working with byte data.
///
/// # Examples
///
/// ```rust
/// use vtpk2mbtiles::Blob;
///
/// let blob = Blob::from(vec![0, 1, 2, 3]);
/// assert_eq!(blob.len(), 4);
/// assert_eq!(blob.as_slice(), &[0, 1, 2, 3]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Returns the underlying bytes as a slice.
	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	/// Consumes the `Blob` and returns the underlying vector.
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns the length of the underlying data in bytes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if the underlying data is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Self {
		Blob(item.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Blob {
	fn from(item: &[u8; N]) -> Self {
		Blob(item.to_vec())
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.debug_struct("Blob").field("len", &self.0.len()).finish()
	}
}
