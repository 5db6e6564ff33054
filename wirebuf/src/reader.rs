use crate::{ByteInput, BytesError, Result};

/// Position-tracked reader over a borrowed byte slice.
///
/// Forward-only: there is no seek and [`skip`](Self::skip) is rejected.
///
/// ```
/// use wirebuf::ByteReader;
///
/// let mut reader = ByteReader::new(&[1, 2, 3]);
/// assert_eq!(reader.read_byte(), Some(1));
///
/// let mut buf = [0u8; 4];
/// assert_eq!(reader.read_bytes(&mut buf), Some(2));
/// assert_eq!(&buf[..2], &[2, 3]);
/// assert_eq!(reader.read_bytes(&mut buf), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at the start of `buf`.
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Point the reader at a new slice and rewind to its start.
    #[inline]
    pub fn rebind(&mut self, buf: &'a [u8]) {
        self.buf = buf;
        self.pos = 0;
    }

    /// Current cursor position.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left before end of input.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Read one byte, `None` at end of input.
    #[inline]
    pub fn read_byte(&mut self) -> Option<u8> {
        let byte = *self.buf.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    /// Copy up to `out.len()` bytes into `out`.
    ///
    /// Returns `None` when the cursor is already at the end, otherwise the
    /// number of bytes copied.
    pub fn read_bytes(&mut self, out: &mut [u8]) -> Option<usize> {
        if self.pos >= self.buf.len() {
            return None;
        }
        let n = out.len().min(self.remaining());
        out[..n].copy_from_slice(&self.buf[self.pos..self.pos + n]);
        self.pos += n;
        Some(n)
    }

    /// Always fails: the formats read through this type never skip.
    #[inline]
    pub fn skip(&mut self, _n: u64) -> Result<u64> {
        Err(BytesError::Unsupported { operation: "skip" })
    }
}

impl ByteInput for ByteReader<'_> {
    #[inline]
    fn read_byte(&mut self) -> Result<Option<u8>> {
        Ok(ByteReader::read_byte(self))
    }

    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<Option<usize>> {
        Ok(ByteReader::read_bytes(self, buf))
    }

    #[inline]
    fn available(&self) -> usize {
        self.remaining()
    }

    #[inline]
    fn skip(&mut self, n: u64) -> Result<u64> {
        ByteReader::skip(self, n)
    }
}
