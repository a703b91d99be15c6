//! Cipher-file loading.
//!
//! A cipher file is three fields back to back: an 8-byte CBC initialization
//! vector, the ciphertext, and a 32-byte SHA-256 checksum. The two outer
//! fields are fixed-size; the ciphertext takes whatever is between them,
//! and must be non-empty for the file to mean anything.

use std::{fs, io, path::Path};

use picklock_crypto::{CHECKSUM_SIZE, CipherImage, IV_SIZE};
use thiserror::Error;

/// Failures while loading a cipher file. All are fatal to the run.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The file is too small to hold all three fields.
    #[error(
        "file is {len} bytes; it needs more than {min} bytes to hold an \
         {IV_SIZE}-byte initialization vector, a non-empty ciphertext, and a \
         {CHECKSUM_SIZE}-byte checksum"
    )]
    TooShort {
        /// Actual file size.
        len: usize,
        /// Minimum size the format requires (exclusive).
        min: usize,
    },

    /// Reading the file failed.
    #[error("failed reading cipher file: {0}")]
    Io(#[from] io::Error),
}

/// Read and split a cipher file into its three fields.
///
/// # Errors
///
/// [`LoaderError::TooShort`] unless the file is strictly larger than
/// `IV_SIZE + CHECKSUM_SIZE` bytes; [`LoaderError::Io`] on any read
/// failure.
pub fn load_cipher_image(path: &Path) -> Result<CipherImage, LoaderError> {
    let bytes = fs::read(path)?;

    let min = IV_SIZE + CHECKSUM_SIZE;
    if bytes.len() <= min {
        return Err(LoaderError::TooShort { len: bytes.len(), min });
    }

    let mut iv = [0u8; IV_SIZE];
    iv.copy_from_slice(&bytes[..IV_SIZE]);

    let checksum_start = bytes.len() - CHECKSUM_SIZE;
    let mut checksum = [0u8; CHECKSUM_SIZE];
    checksum.copy_from_slice(&bytes[checksum_start..]);

    Ok(CipherImage::new(iv, bytes[IV_SIZE..checksum_start].to_vec(), checksum))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn temp_file_with(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn splits_a_valid_file_into_byte_exact_fields() {
        // 8-byte IV, 16-byte ciphertext, 32-byte checksum.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&[0xAA; IV_SIZE]);
        bytes.extend_from_slice(&[0xBB; 16]);
        bytes.extend_from_slice(&[0xCC; CHECKSUM_SIZE]);
        let file = temp_file_with(&bytes);

        let image = load_cipher_image(file.path()).unwrap();

        assert_eq!(image.iv(), &[0xAA; IV_SIZE]);
        assert_eq!(image.ciphertext(), &[0xBB; 16]);
        assert_eq!(image.checksum(), &[0xCC; CHECKSUM_SIZE]);
    }

    #[test]
    fn single_content_byte_is_enough() {
        let file = temp_file_with(&[0x11; IV_SIZE + 1 + CHECKSUM_SIZE]);

        let image = load_cipher_image(file.path()).unwrap();

        assert_eq!(image.ciphertext(), &[0x11]);
    }

    #[test]
    fn file_of_exactly_the_two_fixed_fields_is_too_short() {
        let file = temp_file_with(&[0u8; IV_SIZE + CHECKSUM_SIZE]);

        let result = load_cipher_image(file.path());

        assert!(matches!(result, Err(LoaderError::TooShort { len: 40, min: 40 })));
    }

    #[test]
    fn smaller_files_are_too_short() {
        let file = temp_file_with(&[0u8; 5]);

        let result = load_cipher_image(file.path());

        assert!(matches!(result, Err(LoaderError::TooShort { len: 5, .. })));
    }

    #[test]
    fn empty_file_is_too_short() {
        let file = temp_file_with(&[]);

        assert!(matches!(load_cipher_image(file.path()), Err(LoaderError::TooShort { len: 0, .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = load_cipher_image(&dir.path().join("absent.bin"));

        assert!(matches!(result, Err(LoaderError::Io(_))));
    }
}
