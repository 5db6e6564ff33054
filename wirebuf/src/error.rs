use core::fmt;

/// Error raised by the buffer primitives and the field codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BytesError {
    /// Input ended in the middle of a field.
    UnexpectedEof { needed: usize, available: usize },
    /// Bytes were present but do not form a valid field.
    InvalidData { message: &'static str },
    /// An enum ordinal outside the declared variants.
    UnknownOrdinal { name: &'static str, ordinal: u8 },
    /// A primitive that is deliberately not implemented.
    Unsupported { operation: &'static str },
    /// The external sink or source failed.
    Io { kind: std::io::ErrorKind },
}

impl BytesError {
    /// True for errors caused by the bytes themselves rather than by the caller
    /// or the transport.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedEof { .. } | Self::InvalidData { .. } | Self::UnknownOrdinal { .. }
        )
    }
}

impl fmt::Display for BytesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof { needed, available } => {
                write!(
                    f,
                    "unexpected end of input: needed {needed} bytes, only {available} available"
                )
            }
            Self::InvalidData { message } => write!(f, "invalid data: {message}"),
            Self::UnknownOrdinal { name, ordinal } => {
                write!(f, "unknown ordinal {ordinal} for {name}")
            }
            Self::Unsupported { operation } => write!(f, "unsupported operation: {operation}"),
            Self::Io { kind } => write!(f, "i/o error: {kind}"),
        }
    }
}

impl core::error::Error for BytesError {}

impl From<std::io::Error> for BytesError {
    fn from(err: std::io::Error) -> Self {
        Self::Io { kind: err.kind() }
    }
}

pub type Result<T> = core::result::Result<T, BytesError>;
