use alloc::{string::String, vec::Vec};
use std::io;

use super::{images, minimal_media, scenario_image, strings};
use crate::{
    ErrorKind, Image, MarshalConfig, MarshalError, MarshalSerializer, Media, MediaContent,
    Serializer, Variant, sample,
};

#[test]
fn variant_names() {
    let names: Vec<_> = Variant::ALL.iter().map(|v| v.name()).collect();
    assert_eq!(
        names,
        [
            "media-marshal",
            "media-marshal-manual",
            "media-marshal-ct",
            "media-marshal-ct-manual"
        ]
    );
    for variant in Variant::ALL {
        let serializer = variant.serializer::<Image>();
        assert_eq!(serializer.name(), variant.name());
        assert_eq!(
            serializer.config().class_table().is_some(),
            variant.uses_class_table()
        );
        assert_eq!(
            serializer.config().externalizers().is_some(),
            variant.uses_externalizers()
        );
    }
}

#[test]
fn image_round_trip() {
    for variant in Variant::ALL {
        let mut serializer = variant.serializer::<Image>();
        let bytes = serializer.serialize(&scenario_image()).unwrap();
        assert_eq!(serializer.deserialize(&bytes).unwrap(), scenario_image());
    }
}

#[test]
fn minimal_media_round_trip() {
    for variant in Variant::ALL {
        let mut serializer = variant.serializer::<Media>();
        let bytes = serializer.serialize(&minimal_media()).unwrap();
        let decoded = serializer.deserialize(&bytes).unwrap();
        assert!(decoded.persons.is_empty());
        assert_eq!(decoded.bitrate, None);
        assert_eq!(decoded, minimal_media());
    }
}

#[test]
fn sample_round_trip() {
    for variant in Variant::ALL {
        let mut serializer = variant.serializer::<MediaContent>();
        let bytes = serializer.serialize(&sample()).unwrap();
        assert_eq!(serializer.deserialize(&bytes).unwrap(), sample());
    }
}

#[test]
fn optional_fields_survive() {
    let present = Media {
        title: Some(String::new()),
        bitrate: Some(0),
        copyright: Some("c".into()),
        persons: strings(&[""]),
        ..minimal_media()
    };
    for variant in Variant::ALL {
        let mut serializer = variant.serializer::<Media>();
        let absent = serializer.serialize(&minimal_media()).unwrap();
        let bytes = serializer.serialize(&present).unwrap();
        assert_ne!(bytes, absent);
        assert_eq!(serializer.deserialize(&bytes).unwrap(), present);
    }
}

#[test]
fn serializer_is_reusable() {
    let mut serializer = Variant::ClassTableManual.serializer::<MediaContent>();
    let first = serializer.serialize(&sample()).unwrap();
    let small = MediaContent {
        media: minimal_media(),
        images: Vec::new(),
    };
    let second = serializer.serialize(&small).unwrap();
    let third = serializer.serialize(&sample()).unwrap();
    assert_eq!(first, third);
    assert!(second.len() < first.len());
    assert_eq!(serializer.deserialize(&second).unwrap(), small);
}

#[test]
fn tiny_buffer_grows() {
    let config = Variant::Plain.config().with_buffer_size(1);
    let mut serializer = MarshalSerializer::<MediaContent>::new("tiny", config);
    let bytes = serializer.serialize(&sample()).unwrap();
    let expected = Variant::Plain
        .serializer::<MediaContent>()
        .serialize(&sample())
        .unwrap();
    assert_eq!(bytes, expected);
    assert_eq!(serializer.deserialize(&bytes).unwrap(), sample());
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut serializer = Variant::ClassTable.serializer::<Image>();
    let mut bytes = serializer.serialize(&scenario_image()).unwrap();
    bytes.extend_from_slice(&[0xAA, 0xBB]);
    assert_eq!(serializer.deserialize(&bytes).unwrap(), scenario_image());
}

#[test]
fn truncated_input_is_malformed() {
    for variant in Variant::ALL {
        let mut serializer = variant.serializer::<MediaContent>();
        let bytes = serializer.serialize(&sample()).unwrap();
        for cut in [0, 1, bytes.len() / 2, bytes.len() - 1] {
            let err = serializer.deserialize(&bytes[..cut]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedInput, "{variant:?} cut at {cut}");
        }
    }
}

#[test]
fn batch_round_trip_preserves_order() {
    for variant in Variant::ALL {
        let mut serializer = variant.serializer::<Image>();
        let items = images();
        let mut sink = Vec::new();
        serializer.serialize_items(&items, &mut sink).unwrap();

        let decoded = serializer.deserialize_items(&sink[..], items.len()).unwrap();
        assert_eq!(decoded, items);
    }
}

#[test]
fn batch_is_concatenation_of_single_encodes() {
    for variant in Variant::ALL {
        let mut serializer = variant.serializer::<Image>();
        let items = images();
        let mut sink = Vec::new();
        serializer.serialize_items(&items, &mut sink).unwrap();

        let mut expected = Vec::new();
        for item in &items {
            expected.extend(serializer.serialize(item).unwrap());
        }
        assert_eq!(sink, expected);
    }
}

#[test]
fn batch_decode_stops_after_count() {
    let mut serializer = Variant::Manual.serializer::<Media>();
    let items = [minimal_media(), sample().media, minimal_media()];
    let mut sink = Vec::new();
    serializer.serialize_items(&items, &mut sink).unwrap();

    let mut source = &sink[..];
    let decoded = serializer.deserialize_items(&mut source, 2).unwrap();
    assert_eq!(decoded, items[..2]);
    assert_eq!(source, &serializer.serialize(&items[2]).unwrap()[..]);
}

#[test]
fn batch_of_zero() {
    let mut serializer = Variant::ClassTable.serializer::<MediaContent>();
    let mut sink = Vec::new();
    serializer.serialize_items(&[], &mut sink).unwrap();
    assert!(sink.is_empty());

    let source = [1u8, 2, 3];
    let mut reader = &source[..];
    assert!(serializer.deserialize_items(&mut reader, 0).unwrap().is_empty());
    assert_eq!(reader.len(), 3);
}

#[test]
fn batch_count_past_end_is_malformed() {
    let mut serializer = Variant::ClassTableManual.serializer::<Image>();
    let mut sink = Vec::new();
    serializer.serialize_items(&images(), &mut sink).unwrap();

    let err = serializer.deserialize_items(&sink[..], 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

struct FailingSink;

impl io::Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::ErrorKind::BrokenPipe.into())
    }
}

#[test]
fn failing_sink_is_io_error() {
    let mut serializer = Variant::Plain.serializer::<Image>();
    let err = serializer
        .serialize_items(&images(), FailingSink)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(matches!(err, MarshalError::Bytes { .. }));
}

struct FailingSource;

impl io::Read for FailingSource {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::ErrorKind::ConnectionReset.into())
    }
}

#[test]
fn failing_source_is_io_error() {
    let mut serializer = MarshalSerializer::<Image>::new("plain", MarshalConfig::new());
    let err = serializer.deserialize_items(FailingSource, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}
