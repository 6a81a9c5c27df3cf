// Copyright (c) 2017 Martijn Rijkeboer <mrr@sru-systems.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use kdbx2::{
    BinaryKey, BinaryValue, CompositeKey, Compression, Database, Entry, Error, Group, KeyFile,
    KeyFileType, StreamCipher, TransformRounds, Version,
};
use std::io::Cursor;

const PASSWORD: &str = "secret";

fn new_test_database(key: &CompositeKey) -> Database {
    let mut db = Database::new(key);
    db.transform_rounds = TransformRounds(6000);

    let mut entry = Entry::new();
    entry.set_title("A");
    entry.set_username("u");
    entry.set_password("p");

    let mut group = Group::new("Test");
    group.entries.push(entry);
    db.root_group.groups.push(group);
    db
}

fn save_to_vec(db: &Database) -> Vec<u8> {
    let mut buffer = Vec::new();
    db.save(&mut buffer).unwrap();
    buffer
}

#[test]
fn test_database_roundtrip_with_password() {
    let key = CompositeKey::from_password(PASSWORD);
    let expected = new_test_database(&key);
    let bytes = save_to_vec(&expected);

    let actual = Database::open(&mut Cursor::new(bytes), &key).unwrap();
    assert_eq!(actual, expected);

    let entry = actual.find_entry_by_title("A").unwrap();
    assert_eq!(entry.username(), Some("u"));
    assert_eq!(entry.password(), Some("p"));
}

#[test]
fn test_database_open_with_wrong_password_fails() {
    let key = CompositeKey::from_password(PASSWORD);
    let bytes = save_to_vec(&new_test_database(&key));

    let wrong = CompositeKey::from_password("wrong");
    match Database::open(&mut Cursor::new(bytes), &wrong) {
        Err(Error::InvalidKey) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_database_roundtrip_with_password_and_key_file() {
    let key_file = KeyFile::new_xml().unwrap();
    let mut key_file_bytes = Vec::new();
    key_file.save(&mut key_file_bytes).unwrap();

    let key_file = KeyFile::open(&mut Cursor::new(key_file_bytes)).unwrap();
    let key = CompositeKey::from_both(PASSWORD, key_file);

    let expected = new_test_database(&key);
    let bytes = save_to_vec(&expected);
    let actual = Database::open(&mut Cursor::new(bytes), &key).unwrap();
    assert_eq!(actual, expected);

    // The password alone must not open the database.
    let partial = CompositeKey::from_password(PASSWORD);
    assert!(Database::open(&mut Cursor::new(save_to_vec(&expected)), &partial).is_err());
}

#[test]
fn test_database_roundtrip_with_key_file_only() {
    let raw = vec![0x01u8; 64];
    let key_file = KeyFile::open(&mut Cursor::new(raw)).unwrap();
    let key = CompositeKey::from_key_file(key_file);

    let expected = new_test_database(&key);
    let bytes = save_to_vec(&expected);
    let actual = Database::open(&mut Cursor::new(bytes), &key).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn test_database_open_after_tampering_never_succeeds() {
    let key = CompositeKey::from_password(PASSWORD);
    let bytes = save_to_vec(&new_test_database(&key));

    // The header of a comment-less database ends at offset 218; flip
    // bytes at the start, in the middle and at the end of the
    // ciphertext.
    let offsets = [225, (218 + bytes.len()) / 2, bytes.len() - 1];
    for &offset in &offsets {
        let mut tampered = bytes.clone();
        tampered[offset] ^= 0x01;
        let result = Database::open(&mut Cursor::new(tampered), &key);
        assert!(result.is_err(), "tampering at offset {} went unnoticed", offset);
    }
}

#[test]
fn test_database_open_tampered_first_block_reports_invalid_key() {
    let key = CompositeKey::from_password(PASSWORD);
    let mut bytes = save_to_vec(&new_test_database(&key));

    // Corrupting the first ciphertext block garbles the stream start
    // bytes, which is indistinguishable from a wrong password.
    bytes[225] ^= 0x01;
    match Database::open(&mut Cursor::new(bytes), &key) {
        Err(Error::InvalidKey) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_database_open_with_unsupported_version_fails() {
    let key = CompositeKey::from_password(PASSWORD);
    let mut bytes = save_to_vec(&new_test_database(&key));

    // The major version is the little-endian u16 at offset 10.
    bytes[10] = 4;
    bytes[11] = 0;
    match Database::open(&mut Cursor::new(bytes), &key) {
        Err(Error::UnsupportedVersion(version)) => assert_eq!(version.major, 4),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_database_roundtrip_preserves_header_settings() {
    let key = CompositeKey::from_password(PASSWORD);
    let bytes = save_to_vec(&new_test_database(&key));

    let db = Database::open(&mut Cursor::new(bytes), &key).unwrap();
    assert_eq!(db.version, Version::new_kdb2());
    assert_eq!(db.compression, Compression::GZip);
    assert_eq!(db.stream_cipher, StreamCipher::Salsa20);
    assert_eq!(db.transform_rounds, TransformRounds(6000));
}

#[test]
fn test_database_roundtrip_preserves_history() {
    let key = CompositeKey::from_password(PASSWORD);
    let mut db = new_test_database(&key);

    let mut entry = Entry::new();
    entry.set_title("History");
    entry.set_password("current");
    for (i, password) in ["one", "two", "three"].iter().enumerate() {
        let mut version = Entry {
            uuid: entry.uuid,
            ..Entry::default()
        };
        version.set_title(format!("version {}", i));
        version.set_password(*password);
        entry.history.push(version);
    }
    db.root_group.entries.push(entry);

    let bytes = save_to_vec(&db);
    let actual = Database::open(&mut Cursor::new(bytes), &key).unwrap();
    assert_eq!(actual, db);

    let entry = actual.find_entry_by_title("History").unwrap();
    assert_eq!(entry.password(), Some("current"));
    let history: Vec<_> = entry
        .history
        .iter()
        .map(|e| e.password().unwrap().to_string())
        .collect();
    assert_eq!(history, vec!["one", "two", "three"]);
}

#[test]
fn test_database_roundtrip_without_compression() {
    let key = CompositeKey::from_password(PASSWORD);
    let mut expected = new_test_database(&key);
    expected.compression = Compression::None;

    let bytes = save_to_vec(&expected);
    let actual = Database::open(&mut Cursor::new(bytes), &key).unwrap();
    assert_eq!(actual, expected);
    assert_eq!(actual.compression, Compression::None);
}

#[test]
fn test_database_roundtrip_with_multiple_payload_blocks() {
    let key = CompositeKey::from_password(PASSWORD);
    let mut db = new_test_database(&key);
    db.compression = Compression::None;

    // Uncompressed payload over 1 MiB forces several hashed blocks; the
    // base64 encoding of 2 MiB comfortably exceeds that.
    let blob: Vec<u8> = (0..2 * 1024 * 1024u32)
        .map(|i| (i.wrapping_mul(2654435761) >> 24) as u8)
        .collect();
    let mut entry = Entry::new();
    entry.set_title("Attachment");
    entry
        .binaries
        .insert(BinaryKey(String::from("blob.bin")), BinaryValue::Plain(blob.clone()));
    db.root_group.entries.push(entry);

    let bytes = save_to_vec(&db);
    let actual = Database::open(&mut Cursor::new(bytes), &key).unwrap();
    assert_eq!(actual, db);

    let entry = actual.find_entry_by_title("Attachment").unwrap();
    match entry.binaries.get(&BinaryKey(String::from("blob.bin"))) {
        Some(BinaryValue::Plain(data)) => assert_eq!(data, &blob),
        other => panic!("unexpected value: {:?}", other),
    }
}

#[test]
fn test_database_roundtrip_with_protected_binary() {
    let key = CompositeKey::from_password(PASSWORD);
    let mut db = new_test_database(&key);

    let mut entry = Entry::new();
    entry.set_title("Protected blob");
    entry.binaries.insert(
        BinaryKey(String::from("secret.bin")),
        BinaryValue::Protected(secstr::SecStr::new(vec![0x42u8; 64])),
    );
    db.root_group.entries.push(entry);

    let bytes = save_to_vec(&db);
    let actual = Database::open(&mut Cursor::new(bytes), &key).unwrap();
    assert_eq!(actual, db);
}

#[test]
fn test_key_file_open_can_read_saved_binary_key_file() {
    let expected = KeyFile::new_binary().unwrap();
    let mut writer = Vec::new();
    expected.save(&mut writer).unwrap();
    let actual = KeyFile::open(&mut Cursor::new(writer)).unwrap();
    assert_eq!(expected, actual);
}

#[test]
fn test_key_file_open_can_read_saved_hex_key_file() {
    let expected = KeyFile::new_hex().unwrap();
    let mut writer = Vec::new();
    expected.save(&mut writer).unwrap();
    let actual = KeyFile::open(&mut Cursor::new(writer)).unwrap();
    assert_eq!(expected, actual);
}

#[test]
fn test_key_file_open_can_read_saved_xml_key_file() {
    let expected = KeyFile::new_xml().unwrap();
    let mut writer = Vec::new();
    expected.save(&mut writer).unwrap();
    let actual = KeyFile::open(&mut Cursor::new(writer)).unwrap();
    assert_eq!(expected, actual);
    assert_eq!(actual.file_type, KeyFileType::Xml);
}

#[test]
fn test_every_save_produces_different_bytes() {
    let key = CompositeKey::from_password(PASSWORD);
    let db = new_test_database(&key);
    let a = save_to_vec(&db);
    let b = save_to_vec(&db);
    // Fresh seeds and IVs are drawn for every save.
    assert!(a != b);
}
