//! EDE2 key schedule: MD5 digest widened to a 24-byte 3DES key.
//!
//! MD5 outputs 16 bytes but triple DES wants a 24-byte key. The cipher-file
//! format closes the gap with the EDE2 convention: the third 8-byte subkey
//! repeats the first, so encryption rounds one and three share key
//! material. This is a fixed property of the format; it is preserved
//! exactly and never generalized to other key lengths.

use md5::{Digest, Md5};

/// MD5 digest length.
pub const MD5_DIGEST_SIZE: usize = 16;

/// Triple-DES key length.
pub const TDES_KEY_SIZE: usize = 24;

/// Widen a 16-byte digest into a 24-byte EDE2 key.
///
/// Layout: `key[0..16) = digest`, `key[16..24) = digest[0..8)`.
pub fn expand_ede2(digest: [u8; MD5_DIGEST_SIZE]) -> [u8; TDES_KEY_SIZE] {
    let mut key = [0u8; TDES_KEY_SIZE];
    key[..MD5_DIGEST_SIZE].copy_from_slice(&digest);
    key[MD5_DIGEST_SIZE..].copy_from_slice(&digest[..TDES_KEY_SIZE - MD5_DIGEST_SIZE]);
    key
}

/// Derive the 3DES key for a candidate password.
pub fn derive_key(password: &str) -> [u8; TDES_KEY_SIZE] {
    expand_ede2(Md5::digest(password.as_bytes()).into())
}

#[cfg(test)]
mod tests {
    use des::{
        TdesEde2, TdesEde3,
        cipher::{BlockEncrypt, KeyInit, generic_array::GenericArray},
    };

    use super::*;

    #[test]
    fn expansion_repeats_the_first_eight_digest_bytes() {
        let digest: [u8; MD5_DIGEST_SIZE] =
            [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

        let key = expand_ede2(digest);

        assert_eq!(&key[..16], &digest);
        assert_eq!(&key[16..], &digest[..8]);
    }

    #[test]
    fn derive_key_is_deterministic() {
        assert_eq!(derive_key("abc"), derive_key("abc"));
        assert_ne!(derive_key("abc"), derive_key("abd"));
    }

    #[test]
    fn derive_key_matches_known_md5_vector() {
        // MD5("abc") = 900150983cd24fb0d6963f7d28e17f72
        let digest = hex::decode("900150983cd24fb0d6963f7d28e17f72").unwrap();

        let key = derive_key("abc");

        assert_eq!(&key[..16], digest.as_slice());
        assert_eq!(&key[16..], &digest[..8]);
    }

    #[test]
    fn expanded_key_is_equivalent_to_two_key_triple_des() {
        // The whole point of the EDE2 layout: TdesEde3 under the widened
        // key must agree with TdesEde2 under the raw digest.
        let digest: [u8; MD5_DIGEST_SIZE] = Md5::digest(b"pw7").into();
        let ede3 = TdesEde3::new(GenericArray::from_slice(&expand_ede2(digest)));
        let ede2 = TdesEde2::new(GenericArray::from_slice(&digest));

        let mut block_ede3 = GenericArray::clone_from_slice(b"8 bytes!");
        let mut block_ede2 = block_ede3;
        ede3.encrypt_block(&mut block_ede3);
        ede2.encrypt_block(&mut block_ede2);

        assert_eq!(block_ede3, block_ede2);
    }
}
