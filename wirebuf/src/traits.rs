//! Byte sink/source seams and the closed-enum ordinal contract.

use crate::{BytesError, Result};

/// Destination for encoded bytes.
///
/// Everything above this trait writes through [`write_bytes`](Self::write_bytes);
/// implementors may refuse single-byte writes.
pub trait ByteOutput {
    /// Append one byte.
    fn write_byte(&mut self, byte: u8) -> Result<()>;

    /// Append a slice of bytes.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;

    /// Push buffered bytes to the underlying destination.
    #[inline]
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Source of encoded bytes.
pub trait ByteInput {
    /// Read one byte. `None` at end of input.
    fn read_byte(&mut self) -> Result<Option<u8>>;

    /// Read up to `buf.len()` bytes.
    ///
    /// Returns `None` once the input is exhausted, otherwise the number of
    /// bytes copied. In-memory inputs only return a short count at end of
    /// input; stream-backed inputs may return one at any time.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<Option<usize>>;

    /// Bytes that can be read without blocking. Zero when unknown.
    #[inline]
    fn available(&self) -> usize {
        0
    }

    /// Skip forward. Not supported by any fixed-layout reader.
    #[inline]
    fn skip(&mut self, _n: u64) -> Result<u64> {
        Err(BytesError::Unsupported { operation: "skip" })
    }
}

impl<T: ByteOutput + ?Sized> ByteOutput for &mut T {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        (**self).write_byte(byte)
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write_bytes(bytes)
    }

    #[inline]
    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

impl<T: ByteInput + ?Sized> ByteInput for &mut T {
    #[inline]
    fn read_byte(&mut self) -> Result<Option<u8>> {
        (**self).read_byte()
    }

    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<Option<usize>> {
        (**self).read_bytes(buf)
    }

    #[inline]
    fn available(&self) -> usize {
        (**self).available()
    }

    #[inline]
    fn skip(&mut self, n: u64) -> Result<u64> {
        (**self).skip(n)
    }
}

/// A closed enum encoded as its position in one fixed declaration order.
///
/// The order of [`VARIANTS`](Self::VARIANTS) is part of the wire format.
/// Reordering it silently changes the meaning of every encoded value.
///
/// # Example
///
/// ```
/// use wirebuf::Ordinal;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Shape { Circle, Square }
///
/// impl Ordinal for Shape {
///     const NAME: &'static str = "Shape";
///     const VARIANTS: &'static [Self] = &[Shape::Circle, Shape::Square];
/// }
///
/// assert_eq!(Shape::Square.ordinal(), 1);
/// assert_eq!(Shape::from_ordinal(0), Some(Shape::Circle));
/// assert_eq!(Shape::from_ordinal(2), None);
/// ```
pub trait Ordinal: Copy + PartialEq + 'static {
    /// Name used in error messages.
    const NAME: &'static str;

    /// Every variant, in wire order. At most 256 entries.
    const VARIANTS: &'static [Self];

    /// Position of `self` in [`VARIANTS`](Self::VARIANTS).
    fn ordinal(self) -> u8 {
        Self::VARIANTS
            .iter()
            .position(|v| *v == self)
            .map_or(u8::MAX, |i| i as u8)
    }

    /// Variant at position `ordinal`, if any.
    #[inline]
    fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::VARIANTS.get(ordinal as usize).copied()
    }
}
