//! Reading bytes and values from bundle files and tile payloads.

mod bundle_file;
mod value_reader;

pub use bundle_file::BundleFile;
pub use value_reader::ValueReaderSlice;
