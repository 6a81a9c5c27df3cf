// Copyright (c) 2016-2017 Martijn Rijkeboer <mrr@sru-systems.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::crypto::random_gen::RandomGen;

use super::comment::Comment;
use super::compression::Compression;
use super::error::Error;
use super::master_cipher::MasterCipher;
use super::master_iv::MasterIV;
use super::master_seed::MasterSeed;
use super::protected_stream_key::ProtectedStreamKey;
use super::result::Result;
use super::stream_cipher::StreamCipher;
use super::stream_start_bytes::StreamStartBytes;
use super::transform_rounds::TransformRounds;
use super::transform_seed::TransformSeed;
use super::version::Version;

/// The parsed header of a kdb2 database file.
///
/// A value of this type only exists after every required header field
/// has been seen exactly once, so accessing a field can never fail.
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    /// Content of the comment header.
    pub comment: Option<Comment>,

    /// Compression algorithm.
    pub compression: Compression,

    /// Master encryption algorithm.
    pub master_cipher: MasterCipher,

    /// Initialization vector for the master cipher.
    pub master_iv: MasterIV,

    /// Seed used for generating the master key.
    pub master_seed: MasterSeed,

    /// Key material for the stream cipher.
    pub protected_stream_key: ProtectedStreamKey,

    /// Stream encryption algorithm (e.g. passwords).
    pub stream_cipher: StreamCipher,

    /// Random bytes that must prefix the decrypted payload.
    pub stream_start_bytes: StreamStartBytes,

    /// Number of times the composite key must be transformed.
    pub transform_rounds: TransformRounds,

    /// Seed used for the key transformation rounds.
    pub transform_seed: TransformSeed,

    /// The database version.
    pub version: Version,
}

impl Header {
    /// Attempts to generate a fresh header for saving a database.
    ///
    /// Every save draws new random seeds, stream key, start bytes and
    /// initialization vector; only the comment, the compression
    /// algorithm, the number of rounds and the version carry over.
    pub fn generate(
        comment: Option<Comment>,
        compression: Compression,
        transform_rounds: TransformRounds,
        version: Version,
    ) -> Result<Header> {
        if transform_rounds.0 < 1 {
            return Err(Error::InvalidTransformRounds(transform_rounds.0));
        }

        let mut random = RandomGen::new()?;
        Ok(Header {
            comment,
            compression,
            master_cipher: MasterCipher::Aes256,
            master_iv: MasterIV(random.next_16_bytes()),
            master_seed: MasterSeed(random.next_32_bytes()),
            protected_stream_key: ProtectedStreamKey(random.next_32_bytes()),
            stream_cipher: StreamCipher::Salsa20,
            stream_start_bytes: StreamStartBytes(random.next_32_bytes()),
            transform_rounds,
            transform_seed: TransformSeed(random.next_32_bytes()),
            version,
        })
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::types::Error;

    #[test]
    fn test_generate_returns_fresh_random_material() {
        let a = Header::generate(
            None,
            Compression::GZip,
            TransformRounds(100),
            Version::new_kdb2(),
        )
        .unwrap();
        let b = Header::generate(
            None,
            Compression::GZip,
            TransformRounds(100),
            Version::new_kdb2(),
        )
        .unwrap();
        assert!(a.master_iv != b.master_iv);
        assert!(a.master_seed != b.master_seed);
        assert!(a.protected_stream_key != b.protected_stream_key);
        assert!(a.stream_start_bytes != b.stream_start_bytes);
        assert!(a.transform_seed != b.transform_seed);
    }

    #[test]
    fn test_generate_with_zero_rounds_returns_error() {
        let result = Header::generate(
            None,
            Compression::GZip,
            TransformRounds(0),
            Version::new_kdb2(),
        );
        match result {
            Err(Error::InvalidTransformRounds(0)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_generate_keeps_caller_settings() {
        let header = Header::generate(
            Some(Comment(vec![1, 2, 3])),
            Compression::None,
            TransformRounds(42),
            Version::new_kdb2(),
        )
        .unwrap();
        assert_eq!(header.comment, Some(Comment(vec![1, 2, 3])));
        assert_eq!(header.compression, Compression::None);
        assert_eq!(header.master_cipher, MasterCipher::Aes256);
        assert_eq!(header.stream_cipher, StreamCipher::Salsa20);
        assert_eq!(header.transform_rounds, TransformRounds(42));
    }
}
