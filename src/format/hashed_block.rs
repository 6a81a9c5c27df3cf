// Copyright (c) 2016-2017 Martijn Rijkeboer <mrr@sru-systems.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The hashed-block framing codec.
//!
//! The decrypted payload is a sequence of blocks, each carrying its own
//! SHA256 hash: `(u32 id, 32-byte hash, u32 size, size bytes data)`. A
//! block with size zero and an all-zero hash terminates the stream.

use crate::crypto::sha256;
use crate::types::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Read, Write};

use super::kdb2;

/// Attempts to decode a hashed-block stream into the joined block data.
///
/// Block identifiers must count up from zero and every hash must match
/// before the block's data is accepted.
pub fn decode(input: &[u8]) -> Result<Vec<u8>> {
    let mut reader = Cursor::new(input);
    let mut output = Vec::new();

    for expected_id in 0..u32::max_value() {
        let id = reader.read_u32::<LittleEndian>()?;
        let hash = read_hash(&mut reader)?;
        let size = reader.read_u32::<LittleEndian>()?;

        if id != expected_id {
            return Err(Error::InvalidBlockId(id));
        }

        if size == 0 {
            if hash == kdb2::FINAL_BLOCK_HASH {
                break;
            } else {
                return Err(Error::InvalidFinalBlockHash(hash));
            }
        }

        if size > kdb2::MAX_BLOCK_SIZE {
            return Err(Error::InvalidBlockSize(size));
        }

        let mut data = vec![0; size as usize];
        reader.read_exact(&mut data)?;

        if sha256::hash(&[&data]) != hash {
            return Err(Error::InvalidBlockHash);
        }

        output.append(&mut data);
    }

    Ok(output)
}

/// Attempts to encode the data as a hashed-block stream.
pub fn encode<W: Write>(writer: &mut W, data: &[u8]) -> Result<()> {
    let mut id = 0;
    for chunk in data.chunks(kdb2::WRITE_BLOCK_SIZE) {
        write_block(writer, id, chunk)?;
        id += 1;
    }
    write_final_block(writer, id)
}

fn read_hash<R: Read>(reader: &mut R) -> Result<[u8; 32]> {
    let mut hash = [0; 32];
    reader.read_exact(&mut hash)?;
    Ok(hash)
}

fn write_block<W: Write>(writer: &mut W, id: u32, data: &[u8]) -> Result<()> {
    writer.write_u32::<LittleEndian>(id)?;
    writer.write_all(&sha256::hash(&[data]))?;
    writer.write_u32::<LittleEndian>(data.len() as u32)?;
    writer.write_all(data)?;
    Ok(())
}

fn write_final_block<W: Write>(writer: &mut W, id: u32) -> Result<()> {
    writer.write_u32::<LittleEndian>(id)?;
    writer.write_all(&kdb2::FINAL_BLOCK_HASH)?;
    writer.write_u32::<LittleEndian>(0)?;
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::types::Error;
    use byteorder::{LittleEndian, WriteBytesExt};

    quickcheck! {
        fn test_decode_inverses_encode(data: Vec<u8>) -> bool {
            let mut encoded = Vec::new();
            encode(&mut encoded, &data).unwrap();
            decode(&encoded).unwrap() == data
        }
    }

    #[test]
    fn test_encode_splits_large_data_into_blocks() {
        let data = vec![0x5au8; kdb2::WRITE_BLOCK_SIZE + 1];
        let mut encoded = Vec::new();
        encode(&mut encoded, &data).unwrap();

        // two data blocks plus the terminator
        let overhead = 3 * (4 + 32 + 4);
        assert_eq!(encoded.len(), data.len() + overhead);
        assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_decode_with_corrupted_data_returns_error() {
        let mut encoded = Vec::new();
        encode(&mut encoded, b"some block data").unwrap();
        encoded[4 + 32 + 4] ^= 0xff;
        match decode(&encoded) {
            Err(Error::InvalidBlockHash) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_with_wrong_block_id_returns_error() {
        let mut encoded = Vec::new();
        encode(&mut encoded, b"some block data").unwrap();
        encoded[0] = 7;
        match decode(&encoded) {
            Err(Error::InvalidBlockId(7)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_with_oversized_block_returns_error() {
        let mut encoded = Vec::new();
        encoded.write_u32::<LittleEndian>(0).unwrap();
        encoded.extend_from_slice(&[1u8; 32]);
        encoded
            .write_u32::<LittleEndian>(kdb2::MAX_BLOCK_SIZE + 1)
            .unwrap();
        match decode(&encoded) {
            Err(Error::InvalidBlockSize(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_with_invalid_final_block_hash_returns_error() {
        let mut encoded = Vec::new();
        encoded.write_u32::<LittleEndian>(0).unwrap();
        encoded.extend_from_slice(&[1u8; 32]);
        encoded.write_u32::<LittleEndian>(0).unwrap();
        match decode(&encoded) {
            Err(Error::InvalidFinalBlockHash(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_with_truncated_data_returns_error() {
        let mut encoded = Vec::new();
        encode(&mut encoded, b"some block data").unwrap();
        encoded.truncate(encoded.len() - 1);
        assert!(decode(&encoded).is_err());
    }
}
