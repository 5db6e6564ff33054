//! Per-type manual codecs and the registry that hands them out.
//!
//! When externalizers are enabled, each encoded entity names the codec that
//! wrote it. The reader never constructs codecs: it asks the registry to
//! resolve the codec class, and the [`ExternalizerResolver`] returns the one
//! instance the registry already owns.

use crate::codec::{Entity, EntityRef, ObjectInput, ObjectOutput, Record};
use crate::error::{Result, UnexpectedClassSnafu, UnknownCodecSnafu};
use crate::{ClassId, Image, Media, MediaContent};

/// Stateless codec for one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EntityExternalizer {
    Media = 0,
    MediaContent = 1,
    Image = 2,
}

impl EntityExternalizer {
    pub const ALL: [EntityExternalizer; 3] = [
        EntityExternalizer::Media,
        EntityExternalizer::MediaContent,
        EntityExternalizer::Image,
    ];

    /// Class id of the codec itself, as written on the wire.
    pub const fn class(self) -> ClassId {
        match self {
            EntityExternalizer::Media => ClassId::MediaExternalizer,
            EntityExternalizer::MediaContent => ClassId::MediaContentExternalizer,
            EntityExternalizer::Image => ClassId::ImageExternalizer,
        }
    }

    /// Class id of the entity this codec handles.
    pub const fn subject(self) -> ClassId {
        match self {
            EntityExternalizer::Media => ClassId::Media,
            EntityExternalizer::MediaContent => ClassId::MediaContent,
            EntityExternalizer::Image => ClassId::Image,
        }
    }

    /// Write `subject`'s fields in record order.
    pub fn write_external<O: ObjectOutput + ?Sized>(
        self,
        subject: EntityRef<'_>,
        out: &mut O,
    ) -> Result<()> {
        match (self, subject) {
            (EntityExternalizer::Media, EntityRef::Media(media)) => media.write_fields(out),
            (EntityExternalizer::MediaContent, EntityRef::MediaContent(content)) => {
                content.write_fields(out)
            }
            (EntityExternalizer::Image, EntityRef::Image(image)) => image.write_fields(out),
            (codec, other) => UnexpectedClassSnafu {
                expected: codec.subject(),
                found: other.class(),
            }
            .fail(),
        }
    }

    /// Create a fresh entity and fill it from `input`.
    pub fn read_external<I: ObjectInput + ?Sized>(self, input: &mut I) -> Result<Entity> {
        let entity = match self {
            EntityExternalizer::Media => Entity::Media(Media::read_fields(input)?),
            EntityExternalizer::MediaContent => {
                Entity::MediaContent(MediaContent::read_fields(input)?)
            }
            EntityExternalizer::Image => Entity::Image(Image::read_fields(input)?),
        };
        Ok(entity)
    }
}

/// Externalizer for the codecs themselves.
///
/// Carries no state, so nothing follows a codec's class descriptor on the
/// wire. Reconstruction is a lookup among instances that already exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExternalizerResolver;

impl ExternalizerResolver {
    pub const CLASS: ClassId = ClassId::ExternalizerResolver;

    /// Return the instance in `known` whose class is `codec_class`.
    pub fn create_external<'r>(
        &self,
        codec_class: ClassId,
        known: &'r [EntityExternalizer],
    ) -> Result<&'r EntityExternalizer> {
        match known.iter().find(|codec| codec.class() == codec_class) {
            Some(codec) => Ok(codec),
            None => UnknownCodecSnafu { class: codec_class }.fail(),
        }
    }
}

/// Result of an [`ExternalizerRegistry`] lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Externalizer<'r> {
    /// Codec for an entity type.
    Entity(&'r EntityExternalizer),
    /// Codec for codec types.
    Resolver(&'r ExternalizerResolver),
}

/// Fixed class → externalizer table.
///
/// All codec instances are built once here and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalizerRegistry {
    codecs: [EntityExternalizer; 3],
    resolver: ExternalizerResolver,
}

impl ExternalizerRegistry {
    pub fn standard() -> Self {
        Self {
            codecs: EntityExternalizer::ALL,
            resolver: ExternalizerResolver,
        }
    }

    /// The entity codecs this registry owns.
    #[inline]
    pub fn codecs(&self) -> &[EntityExternalizer] {
        &self.codecs
    }

    #[inline]
    fn codec(&self, which: EntityExternalizer) -> &EntityExternalizer {
        &self.codecs[which as usize]
    }

    /// Externalizer responsible for `class`, if any.
    pub fn externalizer_for(&self, class: ClassId) -> Option<Externalizer<'_>> {
        match class {
            ClassId::Media => Some(Externalizer::Entity(self.codec(EntityExternalizer::Media))),
            ClassId::MediaContent => Some(Externalizer::Entity(
                self.codec(EntityExternalizer::MediaContent),
            )),
            ClassId::Image => Some(Externalizer::Entity(self.codec(EntityExternalizer::Image))),
            ClassId::MediaExternalizer
            | ClassId::MediaContentExternalizer
            | ClassId::ImageExternalizer => Some(Externalizer::Resolver(&self.resolver)),
            ClassId::ExternalizerResolver => None,
            ClassId::Player | ClassId::Size | ClassId::List | ClassId::ExternalizerRegistry => {
                log::debug!("media-marshal: no externalizer for type {class}");
                None
            }
        }
    }

    /// Entity codec for `class`, if `class` is an entity type.
    pub fn entity_externalizer(&self, class: ClassId) -> Option<EntityExternalizer> {
        match self.externalizer_for(class)? {
            Externalizer::Entity(codec) => Some(*codec),
            Externalizer::Resolver(_) => None,
        }
    }

    /// Map a codec class read off the wire to the shared codec instance.
    pub fn resolve(&self, codec_class: ClassId) -> Result<&EntityExternalizer> {
        match self.externalizer_for(codec_class) {
            Some(Externalizer::Resolver(resolver)) => {
                resolver.create_external(codec_class, &self.codecs)
            }
            _ => UnknownCodecSnafu { class: codec_class }.fail(),
        }
    }
}

impl Default for ExternalizerRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
