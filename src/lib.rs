//! Hand-written binary codec for the media benchmark object graph.
//!
//! Values are [`Image`], [`Media`] and [`MediaContent`]. Each
//! [`Variant`] combines two optional mechanisms into its own wire format:
//!
//! - a [`ClassTable`] that writes class descriptors as single-byte tags
//!   instead of names,
//! - an [`ExternalizerRegistry`] that encodes entities through per-type
//!   codecs and names the codec on the wire.
//!
//! # Example
//!
//! ```
//! use media_marshal::{Image, Serializer, Size, Variant};
//!
//! let image = Image {
//!     uri: "http://x".into(),
//!     title: None,
//!     width: 1,
//!     height: 1,
//!     size: Size::Small,
//! };
//!
//! for variant in Variant::ALL {
//!     let mut serializer = variant.serializer::<Image>();
//!     let bytes = serializer.serialize(&image).unwrap();
//!     assert_eq!(serializer.deserialize(&bytes).unwrap(), image);
//! }
//! ```

extern crate alloc;

mod class_table;
mod codec;
mod config;
mod error;
mod externalizer;
mod model;
mod serializer;
mod session;

pub use class_table::{ClassId, ClassTable};
pub use codec::{Entity, EntityRef, ObjectInput, ObjectOutput, Record, WireEnum};
pub use config::{BUFFER_SIZE, MarshalConfig, Variant};
pub use error::{ErrorKind, MarshalError, Result};
pub use externalizer::{
    EntityExternalizer, Externalizer, ExternalizerRegistry, ExternalizerResolver,
};
pub use model::{Image, Media, MediaContent, Player, Size, sample};
pub use serializer::{MarshalSerializer, Serializer};
pub use session::{Marshaller, Unmarshaller};

#[cfg(test)]
mod tests;
