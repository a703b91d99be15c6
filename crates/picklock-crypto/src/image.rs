//! The immutable ciphertext context shared by every worker.

/// Size of the CBC initialization vector field (one DES block).
pub const IV_SIZE: usize = 8;

/// Size of the SHA-256 checksum field.
pub const CHECKSUM_SIZE: usize = 32;

/// The three fields of a loaded cipher file.
///
/// Built once at load time and shared read-only (via `Arc`) by every
/// worker's oracle for the duration of the search; nothing mutates it after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherImage {
    iv: [u8; IV_SIZE],
    ciphertext: Vec<u8>,
    checksum: [u8; CHECKSUM_SIZE],
}

impl CipherImage {
    /// Assemble an image from its three fields.
    pub fn new(iv: [u8; IV_SIZE], ciphertext: Vec<u8>, checksum: [u8; CHECKSUM_SIZE]) -> Self {
        Self { iv, ciphertext, checksum }
    }

    /// CBC initialization vector.
    pub fn iv(&self) -> &[u8; IV_SIZE] {
        &self.iv
    }

    /// Encrypted content.
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// SHA-256 of the original plaintext.
    pub fn checksum(&self) -> &[u8; CHECKSUM_SIZE] {
        &self.checksum
    }
}
