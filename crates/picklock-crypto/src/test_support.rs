//! Fixture helpers: the sealing (encryption) direction.
//!
//! The search only ever decrypts; this module exists so tests can build
//! cipher images from a known plaintext and password. Available to this
//! crate's own tests and, through the `test-util` feature, to downstream
//! test suites.

use cbc::cipher::{BlockEncryptMut, KeyIvInit, block_padding::NoPadding};
use md5::Digest;
use sha2::Sha256;

use crate::{
    image::{CipherImage, IV_SIZE},
    keys::derive_key,
};

type TdesCbcEncryptor = cbc::Encryptor<des::TdesEde3>;

/// Seal `plaintext` under `password`, producing a well-formed cipher image.
///
/// `plaintext.len()` must be a positive multiple of the 8-byte DES block;
/// the format stores raw unpadded blocks.
pub fn seal(plaintext: &[u8], password: &str, iv: [u8; IV_SIZE]) -> CipherImage {
    let key = derive_key(password);
    let Ok(encryptor) = TdesCbcEncryptor::new_from_slices(&key, &iv) else {
        unreachable!("key and IV lengths are fixed by construction");
    };
    let ciphertext = encryptor.encrypt_padded_vec_mut::<NoPadding>(plaintext);
    let checksum = Sha256::digest(plaintext).into();
    CipherImage::new(iv, ciphertext, checksum)
}
