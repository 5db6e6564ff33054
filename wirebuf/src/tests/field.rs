use alloc::string::String;

use crate::{ByteReader, ByteWriter, BytesError, FieldReader, FieldWriter, Ordinal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Light {
    Red,
    Amber,
    Green,
}

impl Ordinal for Light {
    const NAME: &'static str = "Light";
    const VARIANTS: &'static [Self] = &[Light::Red, Light::Amber, Light::Green];
}

fn encode(f: impl FnOnce(&mut ByteWriter)) -> alloc::vec::Vec<u8> {
    let mut writer = ByteWriter::new();
    f(&mut writer);
    writer.snapshot()
}

#[test]
fn integers_are_little_endian() {
    let bytes = encode(|w| {
        w.write_i32(0x0102_0304).unwrap();
        w.write_i64(-2).unwrap();
    });
    assert_eq!(&bytes[..4], &[0x04, 0x03, 0x02, 0x01]);
    assert_eq!(&bytes[4..], &[0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);

    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_i32().unwrap(), 0x0102_0304);
    assert_eq!(reader.read_i64().unwrap(), -2);
}

#[test]
fn integer_extremes() {
    let bytes = encode(|w| {
        w.write_i32(i32::MIN).unwrap();
        w.write_i32(i32::MAX).unwrap();
        w.write_i64(i64::MIN).unwrap();
        w.write_i64(i64::MAX).unwrap();
    });
    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_i32().unwrap(), i32::MIN);
    assert_eq!(reader.read_i32().unwrap(), i32::MAX);
    assert_eq!(reader.read_i64().unwrap(), i64::MIN);
    assert_eq!(reader.read_i64().unwrap(), i64::MAX);
}

#[test]
fn bool_rejects_other_bytes() {
    let mut reader = ByteReader::new(&[1, 0, 2]);
    assert!(reader.read_bool().unwrap());
    assert!(!reader.read_bool().unwrap());
    assert_eq!(
        reader.read_bool(),
        Err(BytesError::InvalidData {
            message: "bool must be 0 or 1"
        })
    );
}

#[test]
fn ordinals_follow_declaration_order() {
    assert_eq!(Light::Red.ordinal(), 0);
    assert_eq!(Light::Amber.ordinal(), 1);
    assert_eq!(Light::Green.ordinal(), 2);

    let bytes = encode(|w| w.write_ordinal(Light::Green).unwrap());
    assert_eq!(bytes, [2]);
    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_ordinal::<Light>().unwrap(), Light::Green);
}

#[test]
fn out_of_range_ordinal_is_rejected() {
    let mut reader = ByteReader::new(&[3]);
    let err = reader.read_ordinal::<Light>().unwrap_err();
    assert_eq!(
        err,
        BytesError::UnknownOrdinal {
            name: "Light",
            ordinal: 3
        }
    );
    assert!(err.is_malformed());
}

#[test]
fn string_layout() {
    let bytes = encode(|w| w.write_str("héllo").unwrap());
    assert_eq!(&bytes[..4], &[6, 0, 0, 0]);
    assert_eq!(&bytes[4..], "héllo".as_bytes());

    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_string().unwrap(), "héllo");
}

#[test]
fn empty_string() {
    let bytes = encode(|w| w.write_str("").unwrap());
    assert_eq!(bytes, [0, 0, 0, 0]);
    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_string().unwrap(), "");
}

#[test]
fn long_string_round_trip() {
    let long: String = core::iter::repeat('x').take(crate::MAX_PREALLOC * 3 + 5).collect();
    let bytes = encode(|w| w.write_str(&long).unwrap());
    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_string().unwrap(), long);
}

#[test]
fn invalid_utf8_is_rejected() {
    let mut reader = ByteReader::new(&[2, 0, 0, 0, 0xC3, 0x28]);
    assert_eq!(
        reader.read_string(),
        Err(BytesError::InvalidData {
            message: "invalid UTF-8"
        })
    );
}

#[test]
fn optional_string_presence_flag() {
    let bytes = encode(|w| {
        w.write_opt_str(None).unwrap();
        w.write_opt_str(Some("")).unwrap();
    });
    assert_eq!(bytes, [0, 1, 0, 0, 0, 0]);

    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_opt_string().unwrap(), None);
    assert_eq!(reader.read_opt_string().unwrap(), Some(String::new()));
}

#[test]
fn negative_length_is_rejected() {
    let bytes = encode(|w| w.write_i32(-1).unwrap());
    let mut reader = ByteReader::new(&bytes);
    assert_eq!(
        reader.read_len(),
        Err(BytesError::InvalidData {
            message: "negative sequence length"
        })
    );
}

#[test]
fn truncated_field_reports_eof() {
    let mut reader = ByteReader::new(&[1, 2]);
    assert_eq!(
        reader.read_i32(),
        Err(BytesError::UnexpectedEof {
            needed: 4,
            available: 2
        })
    );
}

#[test]
fn truncated_string_body_reports_eof() {
    let mut reader = ByteReader::new(&[5, 0, 0, 0, b'a', b'b']);
    let err = reader.read_string().unwrap_err();
    assert!(matches!(err, BytesError::UnexpectedEof { .. }));
}
