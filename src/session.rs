//! Marshalling sessions.
//!
//! A session binds one byte sink or source to a [`MarshalConfig`] and
//! writes or reads whole objects. Object layout:
//!
//! ```text
//! object   := class [codec-class fields | generic-fields]
//! class    := tag:u8                  (class table on)
//!           | name:string             (class table off)
//! ```
//!
//! With externalizers on, an entity is followed by the class of the codec
//! that wrote it and the codec's flat fields. Otherwise the generic layout
//! applies: record fields in order, with nested entities written as full
//! objects, enums prefixed by their class, and sequences prefixed by the
//! list class.

use core::mem;

use wirebuf::{ByteInput, ByteOutput, FieldReader, FieldWriter};

use crate::codec::{ObjectInput, ObjectOutput, Record, WireEnum};
use crate::error::{Result, UnexpectedClassSnafu, UnknownClassNameSnafu};
use crate::{ClassId, EntityExternalizer, MarshalConfig};

fn entity_externalizer(config: &MarshalConfig, class: ClassId) -> Option<EntityExternalizer> {
    config.externalizers()?.entity_externalizer(class)
}

/// Encoding session over a [`ByteOutput`].
#[derive(Debug)]
pub struct Marshaller<'c, O> {
    config: &'c MarshalConfig,
    out: O,
    generic: bool,
}

impl<'c, O: ByteOutput> Marshaller<'c, O> {
    pub fn start(config: &'c MarshalConfig, out: O) -> Self {
        log::trace!(
            "media-marshal: marshaller start (class table: {}, externalizers: {})",
            config.class_table().is_some(),
            config.externalizers().is_some()
        );
        Self {
            config,
            out,
            generic: false,
        }
    }

    /// Write `value` as a complete object.
    pub fn write_object<R: Record>(&mut self, value: &R) -> Result<()> {
        self.write_class(R::CLASS)?;
        match entity_externalizer(self.config, R::CLASS) {
            Some(codec) => {
                self.write_class(codec.class())?;
                let generic = mem::replace(&mut self.generic, false);
                let written = codec.write_external(value.as_entity(), self);
                self.generic = generic;
                written
            }
            None => {
                let generic = mem::replace(&mut self.generic, true);
                let written = value.write_fields(self);
                self.generic = generic;
                written
            }
        }
    }

    /// Write a class descriptor.
    pub fn write_class(&mut self, class: ClassId) -> Result<()> {
        match self.config.class_table() {
            Some(table) => {
                let tag = table.tag_of(class)?;
                self.out.write_u8(tag)?;
            }
            None => self.out.write_str(class.name())?,
        }
        Ok(())
    }

    /// Flush and hand back the output.
    pub fn finish(mut self) -> Result<O> {
        self.out.flush()?;
        log::trace!("media-marshal: marshaller finish");
        Ok(self.out)
    }
}

impl<O: ByteOutput> ByteOutput for Marshaller<'_, O> {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> wirebuf::Result<()> {
        self.out.write_byte(byte)
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> wirebuf::Result<()> {
        self.out.write_bytes(bytes)
    }

    #[inline]
    fn flush(&mut self) -> wirebuf::Result<()> {
        self.out.flush()
    }
}

impl<O: ByteOutput> ObjectOutput for Marshaller<'_, O> {
    fn write_enum<E: WireEnum>(&mut self, value: E) -> Result<()> {
        if self.generic {
            self.write_class(E::CLASS)?;
        }
        self.write_ordinal(value)?;
        Ok(())
    }

    fn write_seq_len(&mut self, len: usize) -> Result<()> {
        if self.generic {
            self.write_class(ClassId::List)?;
        }
        self.write_len(len)?;
        Ok(())
    }

    fn write_record<R: Record>(&mut self, value: &R) -> Result<()> {
        if self.generic {
            self.write_object(value)
        } else {
            value.write_fields(self)
        }
    }
}

/// Decoding session over a [`ByteInput`].
#[derive(Debug)]
pub struct Unmarshaller<'c, I> {
    config: &'c MarshalConfig,
    input: I,
    generic: bool,
}

impl<'c, I: ByteInput> Unmarshaller<'c, I> {
    pub fn start(config: &'c MarshalConfig, input: I) -> Self {
        log::trace!(
            "media-marshal: unmarshaller start (class table: {}, externalizers: {})",
            config.class_table().is_some(),
            config.externalizers().is_some()
        );
        Self {
            config,
            input,
            generic: false,
        }
    }

    /// Read one complete object of type `R`.
    pub fn read_object<R: Record>(&mut self) -> Result<R> {
        self.expect_class(R::CLASS)?;
        let config = self.config;
        if let Some(registry) = config.externalizers() {
            if let Some(expected) = registry.entity_externalizer(R::CLASS) {
                let codec_class = self.read_class()?;
                let codec = *registry.resolve(codec_class)?;
                if codec != expected {
                    return UnexpectedClassSnafu {
                        expected: expected.class(),
                        found: codec.class(),
                    }
                    .fail();
                }
                let generic = mem::replace(&mut self.generic, false);
                let entity = codec.read_external(self);
                self.generic = generic;
                return R::from_entity(entity?).or_else(|other| {
                    UnexpectedClassSnafu {
                        expected: R::CLASS,
                        found: other.class(),
                    }
                    .fail()
                });
            }
        }

        let generic = mem::replace(&mut self.generic, true);
        let value = R::read_fields(self);
        self.generic = generic;
        value
    }

    /// Read a class descriptor.
    pub fn read_class(&mut self) -> Result<ClassId> {
        match self.config.class_table() {
            Some(table) => {
                let tag = self.input.read_u8()?;
                table.class_of(tag)
            }
            None => {
                let name = self.input.read_string()?;
                match ClassId::from_name(&name) {
                    Some(class) => Ok(class),
                    None => UnknownClassNameSnafu { name }.fail(),
                }
            }
        }
    }

    fn expect_class(&mut self, expected: ClassId) -> Result<()> {
        let found = self.read_class()?;
        if found != expected {
            return UnexpectedClassSnafu { expected, found }.fail();
        }
        Ok(())
    }

    /// End the session and hand back the input.
    pub fn finish(self) -> I {
        log::trace!("media-marshal: unmarshaller finish");
        self.input
    }
}

impl<I: ByteInput> ByteInput for Unmarshaller<'_, I> {
    #[inline]
    fn read_byte(&mut self) -> wirebuf::Result<Option<u8>> {
        self.input.read_byte()
    }

    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> wirebuf::Result<Option<usize>> {
        self.input.read_bytes(buf)
    }

    #[inline]
    fn available(&self) -> usize {
        self.input.available()
    }

    #[inline]
    fn skip(&mut self, n: u64) -> wirebuf::Result<u64> {
        self.input.skip(n)
    }
}

impl<I: ByteInput> ObjectInput for Unmarshaller<'_, I> {
    fn read_enum<E: WireEnum>(&mut self) -> Result<E> {
        if self.generic {
            self.expect_class(E::CLASS)?;
        }
        Ok(self.read_ordinal::<E>()?)
    }

    fn read_seq_len(&mut self) -> Result<usize> {
        if self.generic {
            self.expect_class(ClassId::List)?;
        }
        Ok(self.read_len()?)
    }

    fn read_record<R: Record>(&mut self) -> Result<R> {
        if self.generic {
            self.read_object()
        } else {
            R::read_fields(self)
        }
    }
}
