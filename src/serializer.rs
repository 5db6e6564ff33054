//! Single-value and batch entry points.

use alloc::{string::String, vec::Vec};
use core::marker::PhantomData;
use std::io::{BufWriter, Read, Write};

use wirebuf::{ByteReader, ByteWriter, IoInput, IoOutput, MAX_PREALLOC};

use crate::codec::Record;
use crate::error::Result;
use crate::session::{Marshaller, Unmarshaller};
use crate::MarshalConfig;

/// A named codec for values of type `T`.
pub trait Serializer<T> {
    /// Name the serializer is registered under.
    fn name(&self) -> &str;

    /// Encode one value.
    fn serialize(&mut self, value: &T) -> Result<Vec<u8>>;

    /// Decode one value. Bytes after it are ignored.
    fn deserialize(&mut self, bytes: &[u8]) -> Result<T>;

    /// Encode `items` in order into `sink`, in one session.
    ///
    /// On error the sink holds whatever was written before the failure.
    fn serialize_items<W: Write>(&mut self, items: &[T], sink: W) -> Result<()>;

    /// Decode exactly `count` values from `source`, in one session.
    fn deserialize_items<R: Read>(&mut self, source: R, count: usize) -> Result<Vec<T>>;
}

/// [`Serializer`] backed by a marshalling session.
///
/// Owns one reusable [`ByteWriter`]. Every call takes `&mut self`, so an
/// instance serves one caller at a time; create one per worker.
///
/// ```
/// use media_marshal::{MediaContent, Serializer, Variant, sample};
///
/// let mut serializer = Variant::ClassTableManual.serializer::<MediaContent>();
/// let bytes = serializer.serialize(&sample()).unwrap();
/// assert_eq!(serializer.deserialize(&bytes).unwrap(), sample());
/// ```
#[derive(Debug)]
pub struct MarshalSerializer<T> {
    name: String,
    config: MarshalConfig,
    output: ByteWriter,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> MarshalSerializer<T> {
    pub fn new(name: impl Into<String>, config: MarshalConfig) -> Self {
        let output = ByteWriter::with_capacity(config.buffer_size());
        Self {
            name: name.into(),
            config,
            output,
            _record: PhantomData,
        }
    }

    pub fn config(&self) -> &MarshalConfig {
        &self.config
    }
}

impl<T: Record> Serializer<T> for MarshalSerializer<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn serialize(&mut self, value: &T) -> Result<Vec<u8>> {
        self.output.clear();
        let mut session = Marshaller::start(&self.config, &mut self.output);
        session.write_object(value)?;
        session.finish()?;
        Ok(self.output.snapshot())
    }

    fn deserialize(&mut self, bytes: &[u8]) -> Result<T> {
        let mut session = Unmarshaller::start(&self.config, ByteReader::new(bytes));
        let value = session.read_object()?;
        session.finish();
        Ok(value)
    }

    fn serialize_items<W: Write>(&mut self, items: &[T], sink: W) -> Result<()> {
        log::debug!("media-marshal: {} writing {} items", self.name, items.len());
        let out = IoOutput::new(BufWriter::with_capacity(self.config.buffer_size(), sink));
        let mut session = Marshaller::start(&self.config, out);
        for item in items {
            session.write_object(item)?;
        }
        session.finish()?;
        Ok(())
    }

    fn deserialize_items<R: Read>(&mut self, source: R, count: usize) -> Result<Vec<T>> {
        log::debug!("media-marshal: {} reading {} items", self.name, count);
        let mut session = Unmarshaller::start(&self.config, IoInput::new(source));
        let mut items = Vec::with_capacity(count.min(MAX_PREALLOC));
        for _ in 0..count {
            items.push(session.read_object()?);
        }
        session.finish();
        Ok(items)
    }
}
