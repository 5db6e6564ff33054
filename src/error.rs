//! Marshalling errors.

use alloc::string::String;

use snafu::Snafu;
use wirebuf::BytesError;

use crate::ClassId;

/// Error raised by a marshalling session.
///
/// Every variant aborts the call that produced it; nothing is retried.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum MarshalError {
    /// Buffer, field or transport failure.
    #[snafu(context(false), display("{source}"))]
    Bytes { source: BytesError },

    /// A class tag outside the class table.
    #[snafu(display("unexpected class tag {tag}"))]
    UnknownTag { tag: u8 },

    /// A class descriptor name that matches no known class.
    #[snafu(display("unexpected class name {name:?}"))]
    UnknownClassName { name: String },

    /// The class table in use has no tag for this class.
    #[snafu(display("class {class} is not in the class table"))]
    UnregisteredClass { class: ClassId },

    /// Codec identity resolution failed.
    #[snafu(display("unknown codec class {class}"))]
    UnknownCodec { class: ClassId },

    /// A known class showed up where a different one was required.
    #[snafu(display("expected class {expected}, found {found}"))]
    UnexpectedClass { expected: ClassId, found: ClassId },
}

/// Coarse classification of a [`MarshalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Truncated input, invalid field bytes or an unknown enum ordinal.
    MalformedInput,
    /// A deliberately unimplemented primitive was invoked.
    UnsupportedOperation,
    /// A class or codec could not be identified.
    UnknownType,
    /// The external sink or source failed.
    Io,
}

impl MarshalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MarshalError::Bytes { source } => match source {
                BytesError::Unsupported { .. } => ErrorKind::UnsupportedOperation,
                BytesError::Io { .. } => ErrorKind::Io,
                BytesError::UnexpectedEof { .. }
                | BytesError::InvalidData { .. }
                | BytesError::UnknownOrdinal { .. } => ErrorKind::MalformedInput,
            },
            MarshalError::UnknownTag { .. }
            | MarshalError::UnknownClassName { .. }
            | MarshalError::UnregisteredClass { .. }
            | MarshalError::UnknownCodec { .. }
            | MarshalError::UnexpectedClass { .. } => ErrorKind::UnknownType,
        }
    }
}

pub type Result<T, E = MarshalError> = core::result::Result<T, E>;
