// Copyright (c) 2016-2017 Martijn Rijkeboer <mrr@sru-systems.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The database reader for KeePass 2 databases.

use crate::common;
use crate::compression::gzip;
use crate::crypto::aes256;
use crate::crypto::sha256;
use crate::io::Log;
use byteorder::{LittleEndian, ReadBytesExt};
use rust_crypto::util::fixed_time_eq;
use secstr::SecStr;
use std::io::{Cursor, Read};

use super::hashed_block;
use super::kdb2;
use super::kdb2_xml_reader;
use crate::types::Comment;
use crate::types::CompositeKey;
use crate::types::Compression;
use crate::types::Error;
use crate::types::Header;
use crate::types::HeaderHash;
use crate::types::MasterCipher;
use crate::types::MasterIV;
use crate::types::MasterKey;
use crate::types::MasterSeed;
use crate::types::ProtectedStreamKey;
use crate::types::Result;
use crate::types::StreamCipher;
use crate::types::StreamKey;
use crate::types::StreamStartBytes;
use crate::types::TransformRounds;
use crate::types::TransformSeed;
use crate::types::TransformedKey;
use crate::types::Version;
use crate::types::XmlData;

/// Attempts to read the database content from the reader.
///
/// The reader must be positioned directly after the database signature.
pub fn read<R>(reader: &mut R, composite_key: &CompositeKey) -> Result<(Header, HeaderHash, XmlData)>
where
    R: Log + Read,
{
    let header = read_header(reader)?;

    // The hash covers every raw byte up to and including the end header.
    let header_hash = HeaderHash(sha256::hash(&[reader.logged()]).to_vec());
    reader.stop();
    reader.clear();

    let transformed_key =
        TransformedKey::new(composite_key, &header.transform_seed, &header.transform_rounds);
    let master_key = MasterKey::new(&header.master_seed, &transformed_key);
    let stream_key = StreamKey::new(&header.protected_stream_key);

    let encrypted = read_enc_payload(reader)?;
    let payload = SecStr::new(
        aes256::decrypt(&master_key, &header.master_iv, &encrypted).map_err(|_| Error::InvalidKey)?,
    );
    let payload = payload.unsecure();

    // A wrong key and a tampered file are indistinguishable here, both
    // surface as the same error.
    if payload.len() < 32 || !fixed_time_eq(&payload[0..32], &header.stream_start_bytes.0) {
        return Err(Error::InvalidKey);
    }

    let blocks = SecStr::new(hashed_block::decode(&payload[32..])?);
    let xml_bytes = SecStr::new(decompress(&header.compression, blocks.unsecure())?);
    let xml_data = kdb2_xml_reader::read(&mut Cursor::new(xml_bytes.unsecure()), &stream_key)?;

    Ok((header, header_hash, xml_data))
}

fn read_header<R: Read>(reader: &mut R) -> Result<Header> {
    let version = read_version(reader)?;
    if version.major != common::KDB2_MAJOR_VERSION {
        return Err(Error::UnsupportedVersion(version));
    }

    let mut comment: Option<Comment> = None;
    let mut compression: Option<Compression> = None;
    let mut master_cipher: Option<MasterCipher> = None;
    let mut master_iv: Option<MasterIV> = None;
    let mut master_seed: Option<MasterSeed> = None;
    let mut protected_stream_key: Option<ProtectedStreamKey> = None;
    let mut stream_cipher: Option<StreamCipher> = None;
    let mut stream_start_bytes: Option<StreamStartBytes> = None;
    let mut transform_rounds: Option<TransformRounds> = None;
    let mut transform_seed: Option<TransformSeed> = None;

    loop {
        let header_id = reader.read_u8()?;
        match header_id {
            kdb2::COMMENT_HID => {
                set_header(&mut comment, read_comment(reader)?, header_id)?;
            }

            kdb2::COMPRESSION_HID => {
                set_header(&mut compression, read_compression(reader)?, header_id)?;
            }

            kdb2::END_HID => {
                read_end_header(reader)?;
                break;
            }

            kdb2::MASTER_CIPHER_HID => {
                set_header(&mut master_cipher, read_master_cipher(reader)?, header_id)?;
            }

            kdb2::MASTER_IV_HID => {
                set_header(&mut master_iv, read_master_iv(reader)?, header_id)?;
            }

            kdb2::MASTER_SEED_HID => {
                set_header(&mut master_seed, read_master_seed(reader)?, header_id)?;
            }

            kdb2::PROTECTED_STREAM_KEY_HID => {
                set_header(
                    &mut protected_stream_key,
                    read_protected_stream_key(reader)?,
                    header_id,
                )?;
            }

            kdb2::STREAM_CIPHER_HID => {
                set_header(&mut stream_cipher, read_stream_cipher(reader)?, header_id)?;
            }

            kdb2::STREAM_START_BYTES_HID => {
                set_header(
                    &mut stream_start_bytes,
                    read_stream_start_bytes(reader)?,
                    header_id,
                )?;
            }

            kdb2::TRANSFORM_ROUNDS_HID => {
                set_header(&mut transform_rounds, read_transform_rounds(reader)?, header_id)?;
            }

            kdb2::TRANSFORM_SEED_HID => {
                set_header(&mut transform_seed, read_transform_seed(reader)?, header_id)?;
            }

            _ => return Err(Error::UnhandledHeader(header_id)),
        }
    }

    Ok(Header {
        comment,
        compression: get_header(compression, kdb2::COMPRESSION_HID)?,
        master_cipher: get_header(master_cipher, kdb2::MASTER_CIPHER_HID)?,
        master_iv: get_header(master_iv, kdb2::MASTER_IV_HID)?,
        master_seed: get_header(master_seed, kdb2::MASTER_SEED_HID)?,
        protected_stream_key: get_header(protected_stream_key, kdb2::PROTECTED_STREAM_KEY_HID)?,
        stream_cipher: get_header(stream_cipher, kdb2::STREAM_CIPHER_HID)?,
        stream_start_bytes: get_header(stream_start_bytes, kdb2::STREAM_START_BYTES_HID)?,
        transform_rounds: get_header(transform_rounds, kdb2::TRANSFORM_ROUNDS_HID)?,
        transform_seed: get_header(transform_seed, kdb2::TRANSFORM_SEED_HID)?,
        version,
    })
}

fn read_comment<R: Read>(reader: &mut R) -> Result<Comment> {
    let size = reader.read_u16::<LittleEndian>()? as usize;
    let data = read_bytes_size(reader, size)?;
    Ok(Comment(data))
}

fn read_compression<R: Read>(reader: &mut R) -> Result<Compression> {
    let size = reader.read_u16::<LittleEndian>()?;
    if size == kdb2::COMPRESSION_SIZE {
        let data = reader.read_u32::<LittleEndian>()?;
        match Compression::from_u32(data) {
            Some(compression) => Ok(compression),
            None => Err(Error::UnhandledCompression(data)),
        }
    } else {
        Err(Error::InvalidHeaderSize {
            id: kdb2::COMPRESSION_HID,
            expected: kdb2::COMPRESSION_SIZE,
            actual: size,
        })
    }
}

fn read_end_header<R: Read>(reader: &mut R) -> Result<()> {
    let size = reader.read_u16::<LittleEndian>()? as usize;
    read_bytes_size(reader, size)?;
    Ok(())
}

fn read_enc_payload<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(data)
}

fn read_master_cipher<R: Read>(reader: &mut R) -> Result<MasterCipher> {
    let size = reader.read_u16::<LittleEndian>()?;
    if size == kdb2::MASTER_CIPHER_SIZE {
        let data = read_bytes_16(reader)?;
        if data == kdb2::AES_CIPHER_ID {
            Ok(MasterCipher::Aes256)
        } else {
            Err(Error::UnhandledMasterCipher(data))
        }
    } else {
        Err(Error::InvalidHeaderSize {
            id: kdb2::MASTER_CIPHER_HID,
            expected: kdb2::MASTER_CIPHER_SIZE,
            actual: size,
        })
    }
}

fn read_master_iv<R: Read>(reader: &mut R) -> Result<MasterIV> {
    let size = reader.read_u16::<LittleEndian>()?;
    if size == kdb2::MASTER_IV_SIZE {
        let data = read_bytes_16(reader)?;
        Ok(MasterIV(data))
    } else {
        Err(Error::InvalidHeaderSize {
            id: kdb2::MASTER_IV_HID,
            expected: kdb2::MASTER_IV_SIZE,
            actual: size,
        })
    }
}

fn read_master_seed<R: Read>(reader: &mut R) -> Result<MasterSeed> {
    let size = reader.read_u16::<LittleEndian>()?;
    if size == kdb2::MASTER_SEED_SIZE {
        let data = read_bytes_32(reader)?;
        Ok(MasterSeed(data))
    } else {
        Err(Error::InvalidHeaderSize {
            id: kdb2::MASTER_SEED_HID,
            expected: kdb2::MASTER_SEED_SIZE,
            actual: size,
        })
    }
}

fn read_protected_stream_key<R: Read>(reader: &mut R) -> Result<ProtectedStreamKey> {
    let size = reader.read_u16::<LittleEndian>()?;
    if size == kdb2::PROTECTED_STREAM_KEY_SIZE {
        let data = read_bytes_32(reader)?;
        Ok(ProtectedStreamKey(data))
    } else {
        Err(Error::InvalidHeaderSize {
            id: kdb2::PROTECTED_STREAM_KEY_HID,
            expected: kdb2::PROTECTED_STREAM_KEY_SIZE,
            actual: size,
        })
    }
}

fn read_stream_cipher<R: Read>(reader: &mut R) -> Result<StreamCipher> {
    let size = reader.read_u16::<LittleEndian>()?;
    if size == kdb2::STREAM_CIPHER_SIZE {
        let data = reader.read_u32::<LittleEndian>()?;
        match data {
            2 => Ok(StreamCipher::Salsa20),
            _ => Err(Error::UnhandledStreamCipher(data)),
        }
    } else {
        Err(Error::InvalidHeaderSize {
            id: kdb2::STREAM_CIPHER_HID,
            expected: kdb2::STREAM_CIPHER_SIZE,
            actual: size,
        })
    }
}

fn read_stream_start_bytes<R: Read>(reader: &mut R) -> Result<StreamStartBytes> {
    let size = reader.read_u16::<LittleEndian>()?;
    if size == kdb2::STREAM_START_BYTES_SIZE {
        let data = read_bytes_32(reader)?;
        Ok(StreamStartBytes(data))
    } else {
        Err(Error::InvalidHeaderSize {
            id: kdb2::STREAM_START_BYTES_HID,
            expected: kdb2::STREAM_START_BYTES_SIZE,
            actual: size,
        })
    }
}

fn read_transform_rounds<R: Read>(reader: &mut R) -> Result<TransformRounds> {
    let size = reader.read_u16::<LittleEndian>()?;
    if size == kdb2::TRANSFORM_ROUNDS_SIZE {
        let data = reader.read_u64::<LittleEndian>()?;
        if data < 1 {
            return Err(Error::InvalidTransformRounds(data));
        }
        Ok(TransformRounds(data))
    } else {
        Err(Error::InvalidHeaderSize {
            id: kdb2::TRANSFORM_ROUNDS_HID,
            expected: kdb2::TRANSFORM_ROUNDS_SIZE,
            actual: size,
        })
    }
}

fn read_transform_seed<R: Read>(reader: &mut R) -> Result<TransformSeed> {
    let size = reader.read_u16::<LittleEndian>()?;
    if size == kdb2::TRANSFORM_SEED_SIZE {
        let data = read_bytes_32(reader)?;
        Ok(TransformSeed(data))
    } else {
        Err(Error::InvalidHeaderSize {
            id: kdb2::TRANSFORM_SEED_HID,
            expected: kdb2::TRANSFORM_SEED_SIZE,
            actual: size,
        })
    }
}

fn read_version<R: Read>(reader: &mut R) -> Result<Version> {
    let minor = reader.read_u16::<LittleEndian>()?;
    let major = reader.read_u16::<LittleEndian>()?;
    Ok(Version { major, minor })
}

fn read_bytes_16<R: Read>(reader: &mut R) -> Result<[u8; 16]> {
    let mut data = [0; 16];
    reader.read_exact(&mut data)?;
    Ok(data)
}

fn read_bytes_32<R: Read>(reader: &mut R) -> Result<[u8; 32]> {
    let mut data = [0; 32];
    reader.read_exact(&mut data)?;
    Ok(data)
}

fn read_bytes_size<R: Read>(reader: &mut R, size: usize) -> Result<Vec<u8>> {
    let mut data = vec![0; size];
    reader.read_exact(&mut data)?;
    Ok(data)
}

fn set_header<T>(slot: &mut Option<T>, value: T, header_id: u8) -> Result<()> {
    if slot.is_some() {
        return Err(Error::DuplicateHeader(header_id));
    }
    *slot = Some(value);
    Ok(())
}

fn get_header<T>(header: Option<T>, header_id: u8) -> Result<T> {
    header.ok_or(Error::MissingHeader(header_id))
}

fn decompress(compression: &Compression, data: &[u8]) -> Result<Vec<u8>> {
    match *compression {
        Compression::None => Ok(data.to_vec()),
        Compression::GZip => gzip::decode(data),
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use byteorder::WriteBytesExt;
    use std::io::Write;

    fn version_bytes(major: u16, minor: u16) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.write_u16::<LittleEndian>(minor).unwrap();
        bytes.write_u16::<LittleEndian>(major).unwrap();
        bytes
    }

    fn header_field(id: u8, data: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.write_u8(id).unwrap();
        bytes.write_u16::<LittleEndian>(data.len() as u16).unwrap();
        bytes.write_all(data).unwrap();
        bytes
    }

    #[test]
    fn test_read_header_with_unsupported_version_returns_error() {
        let bytes = version_bytes(4, 0);
        match read_header(&mut Cursor::new(bytes)) {
            Err(Error::UnsupportedVersion(version)) => assert_eq!(version.major, 4),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_header_with_duplicate_field_returns_error() {
        let mut bytes = version_bytes(3, 1);
        bytes.extend(header_field(kdb2::MASTER_SEED_HID, &[0u8; 32]));
        bytes.extend(header_field(kdb2::MASTER_SEED_HID, &[0u8; 32]));
        match read_header(&mut Cursor::new(bytes)) {
            Err(Error::DuplicateHeader(id)) => assert_eq!(id, kdb2::MASTER_SEED_HID),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_header_with_missing_field_returns_error() {
        let mut bytes = version_bytes(3, 1);
        bytes.extend(header_field(kdb2::END_HID, &[]));
        match read_header(&mut Cursor::new(bytes)) {
            Err(Error::MissingHeader(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_header_with_unknown_field_returns_error() {
        let mut bytes = version_bytes(3, 1);
        bytes.extend(header_field(42, &[1, 2, 3]));
        match read_header(&mut Cursor::new(bytes)) {
            Err(Error::UnhandledHeader(42)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_header_with_wrong_field_size_returns_error() {
        let mut bytes = version_bytes(3, 1);
        bytes.extend(header_field(kdb2::MASTER_SEED_HID, &[0u8; 16]));
        match read_header(&mut Cursor::new(bytes)) {
            Err(Error::InvalidHeaderSize { id, expected, actual }) => {
                assert_eq!(id, kdb2::MASTER_SEED_HID);
                assert_eq!(expected, 32);
                assert_eq!(actual, 16);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_header_with_zero_rounds_returns_error() {
        let mut bytes = version_bytes(3, 1);
        bytes.extend(header_field(kdb2::TRANSFORM_ROUNDS_HID, &[0u8; 8]));
        match read_header(&mut Cursor::new(bytes)) {
            Err(Error::InvalidTransformRounds(0)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_header_with_truncated_input_returns_error() {
        let mut bytes = version_bytes(3, 1);
        bytes.extend(header_field(kdb2::MASTER_SEED_HID, &[0u8; 32]));
        bytes.truncate(bytes.len() - 8);
        assert!(read_header(&mut Cursor::new(bytes)).is_err());
    }

    #[test]
    fn test_read_header_with_unknown_cipher_returns_error() {
        let mut bytes = version_bytes(3, 1);
        bytes.extend(header_field(kdb2::MASTER_CIPHER_HID, &[9u8; 16]));
        match read_header(&mut Cursor::new(bytes)) {
            Err(Error::UnhandledMasterCipher(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_header_with_unknown_stream_cipher_returns_error() {
        let mut bytes = version_bytes(3, 1);
        bytes.extend(header_field(kdb2::STREAM_CIPHER_HID, &[3, 0, 0, 0]));
        match read_header(&mut Cursor::new(bytes)) {
            Err(Error::UnhandledStreamCipher(3)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
