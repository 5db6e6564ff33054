//! Closed set of wire-visible classes and the compact tag table.

use core::fmt;

use crate::error::{MarshalError, UnknownTagSnafu, UnregisteredClassSnafu};

/// Every class that can appear in a class descriptor.
///
/// The declaration order is the order of [`ClassTable::standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassId {
    MediaContent,
    Player,
    Media,
    Size,
    Image,
    ExternalizerRegistry,
    MediaExternalizer,
    MediaContentExternalizer,
    ImageExternalizer,
    ExternalizerResolver,
    List,
}

impl ClassId {
    /// Number of known classes.
    pub const COUNT: usize = 11;

    /// All classes in declaration order.
    pub const ALL: [ClassId; Self::COUNT] = [
        ClassId::MediaContent,
        ClassId::Player,
        ClassId::Media,
        ClassId::Size,
        ClassId::Image,
        ClassId::ExternalizerRegistry,
        ClassId::MediaExternalizer,
        ClassId::MediaContentExternalizer,
        ClassId::ImageExternalizer,
        ClassId::ExternalizerResolver,
        ClassId::List,
    ];

    /// Name written as the class descriptor when no class table is in use.
    pub const fn name(self) -> &'static str {
        match self {
            ClassId::MediaContent => "media.MediaContent",
            ClassId::Player => "media.Player",
            ClassId::Media => "media.Media",
            ClassId::Size => "media.Size",
            ClassId::Image => "media.Image",
            ClassId::ExternalizerRegistry => "marshal.ExternalizerRegistry",
            ClassId::MediaExternalizer => "marshal.MediaExternalizer",
            ClassId::MediaContentExternalizer => "marshal.MediaContentExternalizer",
            ClassId::ImageExternalizer => "marshal.ImageExternalizer",
            ClassId::ExternalizerResolver => "marshal.ExternalizerResolver",
            ClassId::List => "list",
        }
    }

    /// Inverse of [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<ClassId> {
        let class = match name {
            "media.MediaContent" => ClassId::MediaContent,
            "media.Player" => ClassId::Player,
            "media.Media" => ClassId::Media,
            "media.Size" => ClassId::Size,
            "media.Image" => ClassId::Image,
            "marshal.ExternalizerRegistry" => ClassId::ExternalizerRegistry,
            "marshal.MediaExternalizer" => ClassId::MediaExternalizer,
            "marshal.MediaContentExternalizer" => ClassId::MediaContentExternalizer,
            "marshal.ImageExternalizer" => ClassId::ImageExternalizer,
            "marshal.ExternalizerResolver" => ClassId::ExternalizerResolver,
            "list" => ClassId::List,
            _ => return None,
        };
        Some(class)
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bidirectional class ↔ single-byte tag mapping.
///
/// A class's tag is its position in the table. Both directions are resolved
/// through indexes built once at construction.
///
/// ```
/// use media_marshal::{ClassId, ClassTable};
///
/// let table = ClassTable::standard();
/// assert_eq!(table.tag_of(ClassId::Image).unwrap(), 4);
/// assert_eq!(table.class_of(10).unwrap(), ClassId::List);
/// assert!(table.class_of(11).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTable {
    classes: alloc::vec::Vec<ClassId>,
    tags: [Option<u8>; ClassId::COUNT],
}

impl ClassTable {
    /// Every known class, tagged by declaration order.
    pub fn standard() -> Self {
        Self::with_classes(&ClassId::ALL)
    }

    /// A table over `classes`, tagged by position.
    ///
    /// A class listed twice keeps its first tag; the later slot still decodes.
    pub fn with_classes(classes: &[ClassId]) -> Self {
        let mut tags = [None; ClassId::COUNT];
        let classes: alloc::vec::Vec<ClassId> =
            classes.iter().copied().take(u8::MAX as usize + 1).collect();
        for (tag, class) in classes.iter().enumerate() {
            let slot = &mut tags[class.index()];
            if slot.is_none() {
                *slot = Some(tag as u8);
            }
        }
        Self { classes, tags }
    }

    /// Classes in tag order.
    #[inline]
    pub fn classes(&self) -> &[ClassId] {
        &self.classes
    }

    /// Tag written for `class`.
    pub fn tag_of(&self, class: ClassId) -> Result<u8, MarshalError> {
        self.tags[class.index()].ok_or_else(|| UnregisteredClassSnafu { class }.build())
    }

    /// Class named by `tag`.
    pub fn class_of(&self, tag: u8) -> Result<ClassId, MarshalError> {
        self.classes
            .get(tag as usize)
            .copied()
            .ok_or_else(|| UnknownTagSnafu { tag }.build())
    }
}

impl Default for ClassTable {
    fn default() -> Self {
        Self::standard()
    }
}
