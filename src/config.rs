//! Session configuration and the registered wire variants.

use alloc::string::String;

use crate::serializer::MarshalSerializer;
use crate::{ClassTable, ExternalizerRegistry, Record};

/// Default staging size for writers and buffered sinks.
pub const BUFFER_SIZE: usize = 1024;

/// Selects the wire variant a session reads and writes.
///
/// The class table and the externalizer registry are independent toggles.
/// Each of the four combinations is its own format; bytes written under one
/// do not decode under another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarshalConfig {
    buffer_size: usize,
    class_table: Option<ClassTable>,
    externalizers: Option<ExternalizerRegistry>,
}

impl MarshalConfig {
    pub fn new() -> Self {
        Self {
            buffer_size: BUFFER_SIZE,
            class_table: None,
            externalizers: None,
        }
    }

    /// Initial writer capacity and sink buffer size, at least one byte.
    #[must_use]
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    /// Write class descriptors as single-byte tags from `table`.
    #[must_use]
    pub fn with_class_table(mut self, table: ClassTable) -> Self {
        self.class_table = Some(table);
        self
    }

    /// Encode entities through the externalizers in `registry`.
    #[must_use]
    pub fn with_externalizers(mut self, registry: ExternalizerRegistry) -> Self {
        self.externalizers = Some(registry);
        self
    }

    #[inline]
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    #[inline]
    pub fn class_table(&self) -> Option<&ClassTable> {
        self.class_table.as_ref()
    }

    #[inline]
    pub fn externalizers(&self) -> Option<&ExternalizerRegistry> {
        self.externalizers.as_ref()
    }
}

impl Default for MarshalConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The four registered combinations of the two toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Class names, generic field layout.
    Plain,
    /// Class names, externalizers.
    Manual,
    /// Class tags, generic field layout.
    ClassTable,
    /// Class tags, externalizers.
    ClassTableManual,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Plain,
        Variant::Manual,
        Variant::ClassTable,
        Variant::ClassTableManual,
    ];

    /// Name the variant is registered under.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Plain => "media-marshal",
            Variant::Manual => "media-marshal-manual",
            Variant::ClassTable => "media-marshal-ct",
            Variant::ClassTableManual => "media-marshal-ct-manual",
        }
    }

    pub const fn uses_class_table(self) -> bool {
        matches!(self, Variant::ClassTable | Variant::ClassTableManual)
    }

    pub const fn uses_externalizers(self) -> bool {
        matches!(self, Variant::Manual | Variant::ClassTableManual)
    }

    pub fn config(self) -> MarshalConfig {
        let mut config = MarshalConfig::new();
        if self.uses_class_table() {
            config = config.with_class_table(ClassTable::standard());
        }
        if self.uses_externalizers() {
            config = config.with_externalizers(ExternalizerRegistry::standard());
        }
        config
    }

    /// A serializer for `T` named after this variant.
    pub fn serializer<T: Record>(self) -> MarshalSerializer<T> {
        MarshalSerializer::new(String::from(self.name()), self.config())
    }
}
