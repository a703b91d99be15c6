//! Picklock Cipher Oracle
//!
//! The decrypt-and-check side of the search: given a candidate password,
//! derive a 3DES key from it, decrypt the cipher file's content in CBC mode,
//! and compare the SHA-256 of the result against the checksum embedded in
//! the file.
//!
//! # Format
//!
//! A cipher file carries three fields, in order:
//!
//! ```text
//! ┌───────────────┬──────────────────────────┬────────────────────┐
//! │ IV (8 bytes)  │ 3DES-CBC ciphertext      │ SHA-256 (32 bytes) │
//! └───────────────┴──────────────────────────┴────────────────────┘
//! ```
//!
//! The 3DES key is the MD5 digest of the password, widened to 24 bytes with
//! the EDE2 convention (see [`keys`]). The checksum is over the decrypted
//! plaintext, which is how a candidate password is accepted or rejected.
//!
//! # Security
//!
//! This crate implements a fixed legacy protocol, not a recommendation:
//! MD5 key derivation and EDE2 keying are intentional weaknesses of the
//! target format, preserved exactly for compatibility. Checksum comparison
//! is not constant-time; the oracle's whole purpose is to distinguish
//! matches as fast as possible.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod image;
pub mod keys;
pub mod oracle;
#[cfg(any(test, feature = "test-util"))]
pub mod test_support;

pub use image::{CHECKSUM_SIZE, CipherImage, IV_SIZE};
pub use keys::{MD5_DIGEST_SIZE, TDES_KEY_SIZE, derive_key, expand_ede2};
pub use oracle::{OracleError, TripleDesOracle};
