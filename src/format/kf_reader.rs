// Copyright (c) 2016-2017 Martijn Rijkeboer <mrr@sru-systems.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The reader for key files.
//!
//! Four forms are recognized: a 32-byte binary file (used verbatim), a
//! 64-character hexadecimal file, an XML key file, and as a fallback
//! any other file whose contents are hashed to 32 bytes. Key material
//! that is not exactly 32 bytes is always hashed, so every form yields
//! a 32-byte key.

use crate::crypto::sha256;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use secstr::SecStr;
use std::io::{Cursor, Read};
use ::xml::reader::{EventReader, XmlEvent};

use super::kf;
use crate::types::{Error, KeyFile, KeyFileType, Result};

/// Attempts to read a key file from the reader.
pub fn read<R: Read>(reader: &mut R) -> Result<KeyFile> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    match data.len() {
        kf::BINARY_KEY_FILE_LEN => read_binary(data),
        kf::HEX_KEY_FILE_LEN => read_hex(data),
        _ => read_xml_or_raw(data),
    }
}

fn read_binary(data: Vec<u8>) -> Result<KeyFile> {
    Ok(KeyFile {
        key: SecStr::new(data),
        file_type: KeyFileType::Binary,
    })
}

fn read_hex(data: Vec<u8>) -> Result<KeyFile> {
    match hex::decode(&data) {
        Ok(key) => Ok(KeyFile {
            key: SecStr::new(key),
            file_type: KeyFileType::Hex,
        }),
        // Not hexadecimal after all, hash it like any other raw file.
        Err(_) => read_raw(data),
    }
}

fn read_raw(data: Vec<u8>) -> Result<KeyFile> {
    Ok(KeyFile {
        key: SecStr::new(sha256::hash(&[&data]).to_vec()),
        file_type: KeyFileType::Binary,
    })
}

fn read_xml_or_raw(data: Vec<u8>) -> Result<KeyFile> {
    match read_xml(&mut Cursor::new(&data))? {
        Some(key) => Ok(KeyFile {
            key: normalize(key),
            file_type: KeyFileType::Xml,
        }),
        None => read_raw(data),
    }
}

/// Hash the key material to 32 bytes unless it already is 32 bytes.
fn normalize(key: Vec<u8>) -> SecStr {
    if key.len() == kf::BINARY_KEY_FILE_LEN {
        SecStr::new(key)
    } else {
        SecStr::new(sha256::hash(&[&key]).to_vec())
    }
}

/// Attempts to parse an XML key file, returning `None` when the data is
/// no XML key file at all.
fn read_xml<R: Read>(reader: &mut R) -> Result<Option<Vec<u8>>> {
    let mut reader = EventReader::new(reader);
    loop {
        match reader.next() {
            Ok(XmlEvent::StartElement { name, .. }) => {
                return if name.local_name == kf::KEY_FILE_TAG {
                    read_xml_key_file(&mut reader).map(Some)
                } else {
                    Ok(None)
                };
            }
            Ok(XmlEvent::EndDocument { .. }) => return Ok(None),
            Ok(_) => {}
            Err(_) => return Ok(None),
        }
    }
}

fn read_xml_key_file<R: Read>(reader: &mut EventReader<R>) -> Result<Vec<u8>> {
    let mut opt_key: Option<Vec<u8>> = None;
    loop {
        let event = reader.next().map_err(|_| Error::InvalidKeyFile)?;
        match event {
            XmlEvent::StartElement { name, .. } => {
                if name.local_name == kf::KEY_TAG {
                    opt_key = Some(read_xml_key(reader)?);
                } else if name.local_name == kf::META_TAG {
                    read_xml_meta(reader)?;
                }
            }
            XmlEvent::EndElement { name, .. } => {
                if name.local_name == kf::KEY_FILE_TAG {
                    break;
                }
            }
            XmlEvent::EndDocument { .. } => break,
            _ => {}
        }
    }

    opt_key.ok_or(Error::InvalidKeyFile)
}

fn read_xml_meta<R: Read>(reader: &mut EventReader<R>) -> Result<()> {
    loop {
        let event = reader.next().map_err(|_| Error::InvalidKeyFile)?;
        match event {
            XmlEvent::StartElement { name, .. } => {
                if name.local_name == kf::VERSION_TAG {
                    let version = read_xml_text(reader)?;
                    if version != kf::XML_KEY_FILE_VERSION {
                        return Err(Error::InvalidKeyFile);
                    }
                }
            }
            XmlEvent::EndElement { name, .. } => {
                if name.local_name == kf::META_TAG {
                    break;
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn read_xml_key<R: Read>(reader: &mut EventReader<R>) -> Result<Vec<u8>> {
    let mut opt_key: Option<Vec<u8>> = None;
    loop {
        let event = reader.next().map_err(|_| Error::InvalidKeyFile)?;
        match event {
            XmlEvent::StartElement { name, .. } => {
                if name.local_name == kf::DATA_TAG {
                    let text = read_xml_text(reader)?;
                    let decoded = BASE64
                        .decode(text.trim())
                        .map_err(|_| Error::InvalidKeyFile)?;
                    opt_key = Some(decoded);
                }
            }
            XmlEvent::EndElement { name, .. } => {
                if name.local_name == kf::KEY_TAG {
                    break;
                }
            }
            _ => {}
        }
    }

    opt_key.ok_or(Error::InvalidKeyFile)
}

fn read_xml_text<R: Read>(reader: &mut EventReader<R>) -> Result<String> {
    let event = reader.next().map_err(|_| Error::InvalidKeyFile)?;
    match event {
        XmlEvent::Characters(val) => Ok(val),
        XmlEvent::CData(val) => Ok(val),
        XmlEvent::Whitespace(val) => Ok(val),
        XmlEvent::EndElement { .. } => Ok(String::new()),
        _ => Err(Error::InvalidKeyFile),
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::types::Error;

    fn xml_key_file(data_base64: &str) -> Vec<u8> {
        format!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <KeyFile>\n\
             \t<Meta>\n\
             \t\t<Version>1.00</Version>\n\
             \t</Meta>\n\
             \t<Key>\n\
             \t\t<Data>{}</Data>\n\
             \t</Key>\n\
             </KeyFile>",
            data_base64
        )
        .into_bytes()
    }

    #[test]
    fn test_read_with_32_byte_file_returns_binary_key() {
        let data = vec![0xabu8; 32];
        let key_file = read(&mut Cursor::new(data.clone())).unwrap();
        assert_eq!(key_file.file_type, KeyFileType::Binary);
        assert_eq!(key_file.key.unsecure(), &data[..]);
    }

    #[test]
    fn test_read_with_hex_file_returns_decoded_key() {
        let data = b"31a8aad9d677c6dc853934b0a2e3a5c5930329ac533eaec23816aff11a63be18";
        let key_file = read(&mut Cursor::new(data.to_vec())).unwrap();
        assert_eq!(key_file.file_type, KeyFileType::Hex);
        assert_eq!(key_file.key.unsecure(), &hex::decode(&data[..]).unwrap()[..]);
    }

    #[test]
    fn test_read_with_64_byte_non_hex_file_hashes_contents() {
        let data = vec![0x01u8; 64];
        let key_file = read(&mut Cursor::new(data.clone())).unwrap();
        assert_eq!(key_file.file_type, KeyFileType::Binary);
        assert_eq!(key_file.key.unsecure(), &sha256::hash(&[&data])[..]);
    }

    #[test]
    fn test_read_with_xml_file_returns_decoded_key() {
        let key = [0xabu8; 32];
        let data = xml_key_file(&BASE64.encode(key));
        let key_file = read(&mut Cursor::new(data)).unwrap();
        assert_eq!(key_file.file_type, KeyFileType::Xml);
        assert_eq!(key_file.key.unsecure(), &key[..]);
    }

    #[test]
    fn test_read_with_xml_file_hashes_short_key() {
        let key = b"password";
        let data = xml_key_file(&BASE64.encode(key));
        let key_file = read(&mut Cursor::new(data)).unwrap();
        assert_eq!(key_file.file_type, KeyFileType::Xml);
        assert_eq!(key_file.key.unsecure(), &sha256::hash(&[key])[..]);
    }

    #[test]
    fn test_read_with_xml_file_without_data_returns_error() {
        let data = b"<KeyFile><Key></Key></KeyFile>".to_vec();
        match read(&mut Cursor::new(data)) {
            Err(Error::InvalidKeyFile) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_with_xml_file_with_invalid_base64_returns_error() {
        let data = xml_key_file("@@not base64@@");
        match read(&mut Cursor::new(data)) {
            Err(Error::InvalidKeyFile) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_with_arbitrary_file_hashes_contents() {
        let data = b"just some bytes that are neither XML nor a key".to_vec();
        let key_file = read(&mut Cursor::new(data.clone())).unwrap();
        assert_eq!(key_file.file_type, KeyFileType::Binary);
        assert_eq!(key_file.key.unsecure(), &sha256::hash(&[&data])[..]);
    }

    #[test]
    fn test_read_with_other_xml_document_hashes_contents() {
        let data = b"<Foo><Bar>baz</Bar></Foo>".to_vec();
        let key_file = read(&mut Cursor::new(data.clone())).unwrap();
        assert_eq!(key_file.file_type, KeyFileType::Binary);
        assert_eq!(key_file.key.unsecure(), &sha256::hash(&[&data])[..]);
    }
}
