//! Adapters from `std::io` streams to the byte seams.

use std::io::{ErrorKind, Read, Write};

use crate::{ByteInput, ByteOutput, Result};

/// Writes into any [`std::io::Write`].
#[derive(Debug)]
pub struct IoOutput<W> {
    inner: W,
}

impl<W: Write> IoOutput<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Get a reference to the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consume the adapter and return the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteOutput for IoOutput<W> {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.inner.write_all(&[byte])?;
        Ok(())
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        Ok(())
    }

    #[inline]
    fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

/// Reads from any [`std::io::Read`] without read-ahead.
///
/// Every request goes straight to the wrapped reader, so a decode never
/// consumes bytes past the last field it needs. Wrap the source in a
/// `BufReader` first if it is expensive to read in small pieces and
/// over-reading is acceptable.
#[derive(Debug)]
pub struct IoInput<R> {
    inner: R,
}

impl<R: Read> IoInput<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Get a reference to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consume the adapter and return the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteInput for IoInput<R> {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        Ok(self.read_bytes(&mut byte)?.map(|_| byte[0]))
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<Option<usize>> {
        if buf.is_empty() {
            return Ok(Some(0));
        }
        loop {
            match self.inner.read(buf) {
                Ok(0) => return Ok(None),
                Ok(n) => return Ok(Some(n)),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
