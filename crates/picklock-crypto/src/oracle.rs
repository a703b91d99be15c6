//! The decrypt-and-check password oracle.
//!
//! One oracle instance is bound to one worker for the worker's lifetime.
//! It owns the mutable scratch an evaluation needs (derived key, plaintext
//! buffer), allocated once and overwritten on every call, so no allocation
//! or locking happens on the hot path. The cipher image itself is shared
//! read-only across all oracles.

use std::sync::Arc;

use cbc::cipher::{BlockDecryptMut, KeyIvInit, block_padding::NoPadding};
use picklock_core::{CandidateOracle, Verdict};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::{
    image::{CipherImage, IV_SIZE},
    keys::{TDES_KEY_SIZE, derive_key},
};

/// DES block size; the ciphertext must be a positive multiple of it.
const BLOCK_SIZE: usize = IV_SIZE;

type TdesCbcDecryptor = cbc::Decryptor<des::TdesEde3>;

/// Failures raised by the cipher engine.
///
/// `MisalignedCiphertext` is structural and caught at construction, before
/// the search starts. `Engine` is the per-candidate recoverable case: the
/// scheduler logs it, counts the candidate as faulted, and moves on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// The ciphertext cannot be CBC-decrypted at all.
    #[error(
        "ciphertext is {len} bytes; it must be a positive multiple of the {BLOCK_SIZE}-byte cipher block"
    )]
    MisalignedCiphertext {
        /// Offending ciphertext length.
        len: usize,
    },

    /// The cipher engine rejected its parameters mid-evaluation.
    #[error("cipher engine fault: {reason}")]
    Engine {
        /// Engine-reported reason.
        reason: String,
    },
}

/// Judges candidate passwords against a [`CipherImage`].
///
/// Evaluation derives a 3DES key from the candidate (MD5 + EDE2 widening),
/// decrypts the whole ciphertext in CBC mode, and compares the SHA-256 of
/// the result with the image's checksum.
///
/// Not safe for concurrent use: every call overwrites the scratch buffers.
/// Construct one instance per worker.
pub struct TripleDesOracle {
    image: Arc<CipherImage>,
    key: [u8; TDES_KEY_SIZE],
    plaintext: Vec<u8>,
}

impl TripleDesOracle {
    /// Bind an oracle to a cipher image and allocate its scratch buffers.
    ///
    /// # Errors
    ///
    /// [`OracleError::MisalignedCiphertext`] if the image's ciphertext is
    /// empty or not block-aligned; no candidate could ever decrypt it, so
    /// this is a setup failure rather than a per-candidate one.
    pub fn new(image: Arc<CipherImage>) -> Result<Self, OracleError> {
        let len = image.ciphertext().len();
        if len == 0 || len % BLOCK_SIZE != 0 {
            return Err(OracleError::MisalignedCiphertext { len });
        }
        Ok(Self { key: [0u8; TDES_KEY_SIZE], plaintext: vec![0u8; len], image })
    }
}

impl CandidateOracle for TripleDesOracle {
    type Fault = OracleError;

    fn evaluate(&mut self, candidate: &str) -> Result<Verdict, OracleError> {
        self.key = derive_key(candidate);

        // A fresh decryptor per call re-initializes the chaining state from
        // the image's IV. Without this, CBC would treat consecutive
        // evaluations as one long message and decrypt every candidate after
        // the first against the previous candidate's final block.
        let decryptor = TdesCbcDecryptor::new_from_slices(&self.key, self.image.iv())
            .map_err(|err| OracleError::Engine { reason: err.to_string() })?;
        decryptor
            .decrypt_padded_b2b_mut::<NoPadding>(self.image.ciphertext(), &mut self.plaintext)
            .map_err(|err| OracleError::Engine { reason: err.to_string() })?;

        let digest = Sha256::digest(&self.plaintext);
        if digest.as_slice() == self.image.checksum().as_slice() {
            Ok(Verdict::Accepted)
        } else {
            Ok(Verdict::Rejected)
        }
    }

    fn plaintext(&self) -> &[u8] {
        &self.plaintext
    }
}
