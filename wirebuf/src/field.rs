//! Field-level encodings shared by every record codec.
//!
//! | field        | encoding                                         |
//! |--------------|--------------------------------------------------|
//! | `u8`         | 1 byte                                           |
//! | `bool`       | 1 byte, `0` or `1`                               |
//! | `i32`/`i64`  | 4/8 bytes, little-endian                         |
//! | ordinal      | 1 byte, position in [`Ordinal::VARIANTS`]        |
//! | string       | `u32` little-endian byte length, UTF-8 bytes     |
//! | option       | `bool` presence flag, value if present           |
//! | length       | `i32` little-endian, never negative              |

use alloc::{string::String, vec};

use zerocopy::byteorder::little_endian::{I32, I64, U32};
use zerocopy::{FromBytes, IntoBytes};

use crate::{ByteInput, ByteOutput, BytesError, Ordinal, Result};

/// Field encoders, available on every [`ByteOutput`].
///
/// All writes go through [`ByteOutput::write_bytes`].
pub trait FieldWriter: ByteOutput {
    #[inline]
    fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_bytes(&[value])
    }

    #[inline]
    fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u8(value as u8)
    }

    #[inline]
    fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_bytes(I32::new(value).as_bytes())
    }

    #[inline]
    fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write_bytes(I64::new(value).as_bytes())
    }

    #[inline]
    fn write_ordinal<E: Ordinal>(&mut self, value: E) -> Result<()> {
        self.write_u8(value.ordinal())
    }

    fn write_str(&mut self, value: &str) -> Result<()> {
        let len = u32::try_from(value.len()).map_err(|_| BytesError::InvalidData {
            message: "string longer than u32::MAX bytes",
        })?;
        self.write_bytes(U32::new(len).as_bytes())?;
        self.write_bytes(value.as_bytes())
    }

    fn write_opt_str(&mut self, value: Option<&str>) -> Result<()> {
        match value {
            Some(s) => {
                self.write_bool(true)?;
                self.write_str(s)
            }
            None => self.write_bool(false),
        }
    }

    /// Write a sequence length as a non-negative `i32`.
    fn write_len(&mut self, len: usize) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| BytesError::InvalidData {
            message: "sequence longer than i32::MAX elements",
        })?;
        self.write_i32(len)
    }
}

impl<T: ByteOutput + ?Sized> FieldWriter for T {}

/// Upper bound on elements reserved up front for a decoded sequence.
///
/// Lengths come from untrusted input; the vector still grows to the full
/// count as elements actually decode.
pub const MAX_PREALLOC: usize = 4096;

/// Field decoders, available on every [`ByteInput`].
pub trait FieldReader: ByteInput {
    /// Fill `buf` completely or fail with [`BytesError::UnexpectedEof`].
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.read_bytes(&mut buf[filled..])? {
                Some(n) if n > 0 => filled += n,
                _ => {
                    return Err(BytesError::UnexpectedEof {
                        needed: buf.len(),
                        available: filled,
                    });
                }
            }
        }
        Ok(())
    }

    #[inline]
    fn read_u8(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.read_exact(&mut byte)?;
        Ok(byte[0])
    }

    fn read_bool(&mut self) -> Result<bool> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(BytesError::InvalidData {
                message: "bool must be 0 or 1",
            }),
        }
    }

    fn read_i32(&mut self) -> Result<i32> {
        let mut raw = [0u8; 4];
        self.read_exact(&mut raw)?;
        let value = I32::read_from_bytes(&raw[..]).map_err(|_| BytesError::InvalidData {
            message: "i32 layout",
        })?;
        Ok(value.get())
    }

    fn read_i64(&mut self) -> Result<i64> {
        let mut raw = [0u8; 8];
        self.read_exact(&mut raw)?;
        let value = I64::read_from_bytes(&raw[..]).map_err(|_| BytesError::InvalidData {
            message: "i64 layout",
        })?;
        Ok(value.get())
    }

    fn read_ordinal<E: Ordinal>(&mut self) -> Result<E> {
        let ordinal = self.read_u8()?;
        E::from_ordinal(ordinal).ok_or(BytesError::UnknownOrdinal {
            name: E::NAME,
            ordinal,
        })
    }

    fn read_string(&mut self) -> Result<String> {
        let mut raw = [0u8; 4];
        self.read_exact(&mut raw)?;
        let len = U32::read_from_bytes(&raw[..])
            .map_err(|_| BytesError::InvalidData {
                message: "u32 layout",
            })?
            .get() as usize;

        let mut bytes = vec![0u8; len.min(self.available().max(MAX_PREALLOC))];
        self.read_exact(&mut bytes)?;
        while bytes.len() < len {
            let start = bytes.len();
            let end = len.min(start.saturating_mul(2));
            bytes.resize(end, 0);
            self.read_exact(&mut bytes[start..])?;
        }

        String::from_utf8(bytes).map_err(|_| BytesError::InvalidData {
            message: "invalid UTF-8",
        })
    }

    fn read_opt_string(&mut self) -> Result<Option<String>> {
        if self.read_bool()? {
            self.read_string().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Read a sequence length written by [`FieldWriter::write_len`].
    fn read_len(&mut self) -> Result<usize> {
        let len = self.read_i32()?;
        usize::try_from(len).map_err(|_| BytesError::InvalidData {
            message: "negative sequence length",
        })
    }
}

impl<T: ByteInput + ?Sized> FieldReader for T {}
