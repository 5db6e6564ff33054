//! Fixed-order record codecs for the media object graph.
//!
//! The field order below is the format. Writers and readers must agree on
//! it exactly; names never reach the wire.
//!
//! - `Image`: uri, title?, width, height, size
//! - `Media`: uri, title?, width, height, format, duration, size,
//!   bitrate flag, bitrate (if flagged), persons, player, copyright?
//! - `MediaContent`: media, images

use alloc::vec::Vec;

use wirebuf::{ByteReader, ByteWriter, FieldReader, FieldWriter, MAX_PREALLOC, Ordinal};

use crate::error::Result;
use crate::{ClassId, Image, Media, MediaContent, Player, Size};

/// A closed enum that carries its own class descriptor.
pub trait WireEnum: Ordinal {
    const CLASS: ClassId;
}

impl WireEnum for Size {
    const CLASS: ClassId = ClassId::Size;
}

impl WireEnum for Player {
    const CLASS: ClassId = ClassId::Player;
}

/// Output a record codec writes into.
///
/// The hooks default to the bare field encodings. A marshalling session
/// overrides them to add class descriptors on the generic path.
pub trait ObjectOutput: FieldWriter {
    #[inline]
    fn write_enum<E: WireEnum>(&mut self, value: E) -> Result<()> {
        self.write_ordinal(value)?;
        Ok(())
    }

    #[inline]
    fn write_seq_len(&mut self, len: usize) -> Result<()> {
        self.write_len(len)?;
        Ok(())
    }

    #[inline]
    fn write_record<R: Record>(&mut self, value: &R) -> Result<()> {
        value.write_fields(self)
    }
}

/// Input a record codec reads from. Mirrors [`ObjectOutput`].
pub trait ObjectInput: FieldReader {
    #[inline]
    fn read_enum<E: WireEnum>(&mut self) -> Result<E> {
        Ok(self.read_ordinal::<E>()?)
    }

    #[inline]
    fn read_seq_len(&mut self) -> Result<usize> {
        Ok(self.read_len()?)
    }

    #[inline]
    fn read_record<R: Record>(&mut self) -> Result<R> {
        R::read_fields(self)
    }
}

impl ObjectOutput for ByteWriter {}

impl ObjectInput for ByteReader<'_> {}

/// One of the three top-level entities.
pub trait Record: Sized {
    const CLASS: ClassId;

    fn write_fields<O: ObjectOutput + ?Sized>(&self, out: &mut O) -> Result<()>;

    fn read_fields<I: ObjectInput + ?Sized>(input: &mut I) -> Result<Self>;

    fn as_entity(&self) -> EntityRef<'_>;

    /// Unwrap an owned entity, handing it back if it is another type.
    fn from_entity(entity: Entity) -> Result<Self, Entity>;
}

/// An owned entity of any of the three types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    MediaContent(MediaContent),
    Media(Media),
    Image(Image),
}

impl Entity {
    pub fn class(&self) -> ClassId {
        match self {
            Entity::MediaContent(_) => ClassId::MediaContent,
            Entity::Media(_) => ClassId::Media,
            Entity::Image(_) => ClassId::Image,
        }
    }
}

/// A borrowed entity of any of the three types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef<'a> {
    MediaContent(&'a MediaContent),
    Media(&'a Media),
    Image(&'a Image),
}

impl EntityRef<'_> {
    pub fn class(&self) -> ClassId {
        match self {
            EntityRef::MediaContent(_) => ClassId::MediaContent,
            EntityRef::Media(_) => ClassId::Media,
            EntityRef::Image(_) => ClassId::Image,
        }
    }
}

impl Record for Image {
    const CLASS: ClassId = ClassId::Image;

    fn write_fields<O: ObjectOutput + ?Sized>(&self, out: &mut O) -> Result<()> {
        out.write_str(&self.uri)?;
        out.write_opt_str(self.title.as_deref())?;
        out.write_i32(self.width)?;
        out.write_i32(self.height)?;
        out.write_enum(self.size)
    }

    fn read_fields<I: ObjectInput + ?Sized>(input: &mut I) -> Result<Self> {
        Ok(Image {
            uri: input.read_string()?,
            title: input.read_opt_string()?,
            width: input.read_i32()?,
            height: input.read_i32()?,
            size: input.read_enum()?,
        })
    }

    fn as_entity(&self) -> EntityRef<'_> {
        EntityRef::Image(self)
    }

    fn from_entity(entity: Entity) -> Result<Self, Entity> {
        match entity {
            Entity::Image(image) => Ok(image),
            other => Err(other),
        }
    }
}

impl Record for Media {
    const CLASS: ClassId = ClassId::Media;

    fn write_fields<O: ObjectOutput + ?Sized>(&self, out: &mut O) -> Result<()> {
        out.write_str(&self.uri)?;
        out.write_opt_str(self.title.as_deref())?;
        out.write_i32(self.width)?;
        out.write_i32(self.height)?;
        out.write_str(&self.format)?;
        out.write_i64(self.duration)?;
        out.write_i64(self.size)?;
        out.write_bool(self.bitrate.is_some())?;
        if let Some(bitrate) = self.bitrate {
            out.write_i32(bitrate)?;
        }
        out.write_seq_len(self.persons.len())?;
        for person in &self.persons {
            out.write_str(person)?;
        }
        out.write_enum(self.player)?;
        out.write_opt_str(self.copyright.as_deref())?;
        Ok(())
    }

    fn read_fields<I: ObjectInput + ?Sized>(input: &mut I) -> Result<Self> {
        let uri = input.read_string()?;
        let title = input.read_opt_string()?;
        let width = input.read_i32()?;
        let height = input.read_i32()?;
        let format = input.read_string()?;
        let duration = input.read_i64()?;
        let size = input.read_i64()?;
        let bitrate = if input.read_bool()? {
            Some(input.read_i32()?)
        } else {
            None
        };
        let count = input.read_seq_len()?;
        let mut persons = Vec::with_capacity(count.min(MAX_PREALLOC));
        for _ in 0..count {
            persons.push(input.read_string()?);
        }
        let player: Player = input.read_enum()?;
        let copyright = input.read_opt_string()?;

        Ok(Media {
            uri,
            title,
            width,
            height,
            format,
            duration,
            size,
            bitrate,
            persons,
            player,
            copyright,
        })
    }

    fn as_entity(&self) -> EntityRef<'_> {
        EntityRef::Media(self)
    }

    fn from_entity(entity: Entity) -> Result<Self, Entity> {
        match entity {
            Entity::Media(media) => Ok(media),
            other => Err(other),
        }
    }
}

impl Record for MediaContent {
    const CLASS: ClassId = ClassId::MediaContent;

    fn write_fields<O: ObjectOutput + ?Sized>(&self, out: &mut O) -> Result<()> {
        out.write_record(&self.media)?;
        out.write_seq_len(self.images.len())?;
        for image in &self.images {
            out.write_record(image)?;
        }
        Ok(())
    }

    fn read_fields<I: ObjectInput + ?Sized>(input: &mut I) -> Result<Self> {
        let media: Media = input.read_record()?;
        let count = input.read_seq_len()?;
        let mut images = Vec::with_capacity(count.min(MAX_PREALLOC));
        for _ in 0..count {
            images.push(input.read_record::<Image>()?);
        }
        Ok(MediaContent { media, images })
    }

    fn as_entity(&self) -> EntityRef<'_> {
        EntityRef::MediaContent(self)
    }

    fn from_entity(entity: Entity) -> Result<Self, Entity> {
        match entity {
            Entity::MediaContent(content) => Ok(content),
            other => Err(other),
        }
    }
}
