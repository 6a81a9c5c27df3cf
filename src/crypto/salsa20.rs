// Copyright (c) 2016-2017 Martijn Rijkeboer <mrr@sru-systems.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::types::StreamKey;
use rust_crypto::symmetriccipher::SynchronousStreamCipher;

pub use rust_crypto::salsa20::Salsa20;

/// The fixed nonce KeePass 2 uses for the inner stream cipher.
const SALSA20_NONCE: [u8; 8] = [0xe8, 0x30, 0x09, 0x4b, 0x97, 0x20, 0x5d, 0x2a];

/// Decrypt the input using the Salsa20 stream cipher.
///
/// The cipher state advances with every call, so protected values must
/// be processed in the order they occur in the document.
pub fn decrypt(cipher: &mut Salsa20, input: &[u8]) -> Vec<u8> {
    process(cipher, input)
}

/// Encrypt the input using the Salsa20 stream cipher.
pub fn encrypt(cipher: &mut Salsa20, input: &[u8]) -> Vec<u8> {
    process(cipher, input)
}

/// Create a new Salsa20 stream cipher using the specified key.
pub fn new_cipher(key: &StreamKey) -> Salsa20 {
    Salsa20::new(&key.unpack(), &SALSA20_NONCE)
}

fn process(cipher: &mut Salsa20, input: &[u8]) -> Vec<u8> {
    let mut output = vec![0; input.len()];
    cipher.process(input, &mut output);
    output
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::types::ProtectedStreamKey;
    use crate::types::StreamKey;

    quickcheck! {
        fn test_decrypt_inverses_encrypt(data: Vec<u8>) -> bool {
            let stream_key = StreamKey::new(&ProtectedStreamKey([1u8; 32]));
            let mut encryptor = new_cipher(&stream_key);
            let mut decryptor = new_cipher(&stream_key);
            let encrypted = encrypt(&mut encryptor, &data);
            let decrypted = decrypt(&mut decryptor, &encrypted);
            decrypted == data
        }
    }

    #[test]
    fn test_decrypt_in_swapped_order_scrambles_values() {
        let stream_key = StreamKey::new(&ProtectedStreamKey([1u8; 32]));
        let mut encryptor = new_cipher(&stream_key);
        let first = encrypt(&mut encryptor, b"first secret");
        let second = encrypt(&mut encryptor, b"other secret");

        let mut decryptor = new_cipher(&stream_key);
        let scrambled = decrypt(&mut decryptor, &second);
        assert!(scrambled != b"other secret");
        assert!(decrypt(&mut decryptor, &first) != b"first secret");
    }

    #[test]
    fn test_empty_input_consumes_no_keystream() {
        let stream_key = StreamKey::new(&ProtectedStreamKey([1u8; 32]));
        let mut plain = new_cipher(&stream_key);
        let mut with_empty = new_cipher(&stream_key);
        let _ = encrypt(&mut with_empty, b"");
        assert_eq!(encrypt(&mut plain, b"data"), encrypt(&mut with_empty, b"data"));
    }
}
