//! Byte buffers and field encodings for hand-written binary codecs.
//!
//! - [`ByteReader`] - bounded, forward-only cursor over a byte slice
//! - [`ByteWriter`] - append-only buffer that doubles on demand
//! - [`IoInput`] / [`IoOutput`] - the same seams over `std::io` streams
//! - [`FieldWriter`] / [`FieldReader`] - integers, booleans, ordinals,
//!   strings, optional strings and sequence lengths
//!
//! # Example
//!
//! ```
//! use wirebuf::{ByteReader, ByteWriter, FieldReader, FieldWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_i32(-7).unwrap();
//! writer.write_opt_str(Some("hello")).unwrap();
//! let bytes = writer.snapshot();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_i32().unwrap(), -7);
//! assert_eq!(reader.read_opt_string().unwrap().as_deref(), Some("hello"));
//! assert_eq!(reader.remaining(), 0);
//! ```

extern crate alloc;

mod error;
mod field;
mod io;
mod reader;
mod traits;
mod writer;

pub use error::{BytesError, Result};
pub use field::{FieldReader, FieldWriter, MAX_PREALLOC};
pub use io::{IoInput, IoOutput};
pub use reader::ByteReader;
pub use traits::{ByteInput, ByteOutput, Ordinal};
pub use writer::{ByteWriter, DEFAULT_CAPACITY};

#[cfg(test)]
mod tests;
