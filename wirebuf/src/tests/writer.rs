use alloc::vec::Vec;

use proptest::prelude::*;

use crate::{ByteOutput, ByteWriter, BytesError, DEFAULT_CAPACITY};

#[test]
fn new_writer_is_empty() {
    let writer = ByteWriter::new();
    assert!(writer.is_empty());
    assert_eq!(writer.len(), 0);
    assert_eq!(writer.capacity(), DEFAULT_CAPACITY);
}

#[test]
fn single_byte_write_is_unsupported() {
    let mut writer = ByteWriter::new();
    assert_eq!(
        writer.write_byte(1),
        Err(BytesError::Unsupported {
            operation: "single-byte write"
        })
    );
    assert_eq!(
        ByteOutput::write_byte(&mut writer, 1),
        Err(BytesError::Unsupported {
            operation: "single-byte write"
        })
    );
    assert!(writer.is_empty());
}

#[test]
fn grows_by_doubling() {
    let mut writer = ByteWriter::with_capacity(4);
    writer.write_bytes(&[1, 2, 3]).unwrap();
    assert_eq!(writer.capacity(), 4);

    writer.write_bytes(&[4, 5]).unwrap();
    assert_eq!(writer.capacity(), 8);
    assert_eq!(writer.as_slice(), &[1, 2, 3, 4, 5]);
}

#[test]
fn large_write_doubles_repeatedly() {
    let mut writer = ByteWriter::with_capacity(2);
    writer.write_bytes(&[0xAA; 9]).unwrap();
    assert_eq!(writer.capacity(), 16);
    assert_eq!(writer.len(), 9);
}

#[test]
fn zero_capacity_is_clamped() {
    let mut writer = ByteWriter::with_capacity(0);
    assert_eq!(writer.capacity(), 1);
    writer.write_bytes(&[1, 2, 3]).unwrap();
    assert_eq!(writer.capacity(), 4);
}

#[test]
fn snapshot_rewinds_and_keeps_capacity() {
    let mut writer = ByteWriter::with_capacity(2);
    writer.write_bytes(&[1, 2, 3, 4, 5]).unwrap();
    let capacity = writer.capacity();

    let first = writer.snapshot();
    assert_eq!(first, [1, 2, 3, 4, 5]);
    assert!(writer.is_empty());
    assert_eq!(writer.capacity(), capacity);

    writer.write_bytes(&[9]).unwrap();
    let second = writer.snapshot();
    assert_eq!(second, [9]);
    // Earlier snapshot is unaffected by reuse.
    assert_eq!(first, [1, 2, 3, 4, 5]);
}

#[test]
fn empty_snapshot() {
    let mut writer = ByteWriter::new();
    assert!(writer.snapshot().is_empty());
}

proptest! {
    #[test]
    fn snapshot_is_concatenation_of_writes(
        initial in 1usize..16,
        chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 0..32),
    ) {
        let mut writer = ByteWriter::with_capacity(initial);
        let mut expected = Vec::new();
        for chunk in &chunks {
            writer.write_bytes(chunk).unwrap();
            expected.extend_from_slice(chunk);
        }
        prop_assert!(writer.capacity() >= expected.len());
        prop_assert_eq!(writer.snapshot(), expected);
    }
}

#[test]
fn clear_discards_without_shrinking() {
    let mut writer = ByteWriter::with_capacity(1);
    writer.write_bytes(&[1, 2, 3]).unwrap();
    writer.clear();
    assert!(writer.is_empty());
    assert_eq!(writer.capacity(), 4);
    writer.write_bytes(&[7]).unwrap();
    assert_eq!(writer.snapshot(), [7]);
}
