use alloc::{boxed::Box, vec, vec::Vec};

use crate::{ByteOutput, BytesError, Result};

/// Initial capacity of a [`ByteWriter`] created with [`ByteWriter::new`].
pub const DEFAULT_CAPACITY: usize = 1024;

/// Append-only byte buffer that doubles its capacity on demand.
///
/// Only bulk writes are accepted. [`snapshot`](Self::snapshot) hands out an
/// independent copy of the written bytes and rewinds the cursor, so one
/// writer can serve many encodes without reallocating.
///
/// ```
/// use wirebuf::ByteWriter;
///
/// let mut writer = ByteWriter::with_capacity(2);
/// writer.write_bytes(&[1, 2, 3]).unwrap();
/// assert_eq!(writer.capacity(), 4);
///
/// let bytes = writer.snapshot();
/// assert_eq!(bytes, [1, 2, 3]);
/// assert!(writer.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ByteWriter {
    buf: Box<[u8]>,
    pos: usize,
}

impl ByteWriter {
    /// Create a writer with [`DEFAULT_CAPACITY`].
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a writer with the given initial capacity (at least one byte).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0u8; capacity.max(1)].into_boxed_slice(),
            pos: 0,
        }
    }

    /// Bytes the buffer can hold before the next doubling.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes written since the last snapshot.
    #[inline]
    pub fn len(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// View of the bytes written so far.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Append `bytes`, doubling the capacity until they fit.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let needed = self
            .pos
            .checked_add(bytes.len())
            .ok_or(BytesError::InvalidData {
                message: "write exceeds addressable size",
            })?;
        if needed > self.buf.len() {
            self.grow(needed)?;
        }
        self.buf[self.pos..needed].copy_from_slice(bytes);
        self.pos = needed;
        Ok(())
    }

    /// Always fails: callers write through [`write_bytes`](Self::write_bytes).
    #[inline]
    pub fn write_byte(&mut self, _byte: u8) -> Result<()> {
        Err(BytesError::Unsupported {
            operation: "single-byte write",
        })
    }

    /// Discard the written bytes, keeping the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.pos = 0;
    }

    /// Copy out exactly the written bytes and rewind, keeping the capacity.
    pub fn snapshot(&mut self) -> Vec<u8> {
        let out = self.buf[..self.pos].to_vec();
        self.pos = 0;
        out
    }

    fn grow(&mut self, needed: usize) -> Result<()> {
        let mut capacity = self.buf.len();
        while capacity < needed {
            capacity = capacity.checked_mul(2).ok_or(BytesError::InvalidData {
                message: "write exceeds addressable size",
            })?;
        }
        let mut grown = vec![0u8; capacity].into_boxed_slice();
        grown[..self.pos].copy_from_slice(&self.buf[..self.pos]);
        self.buf = grown;
        Ok(())
    }
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteOutput for ByteWriter {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        ByteWriter::write_byte(self, byte)
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        ByteWriter::write_bytes(self, bytes)
    }
}
