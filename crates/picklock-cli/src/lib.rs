//! Picklock application layer.
//!
//! Wires the pieces together for the `picklock` binary: load a cipher file,
//! build one oracle per worker, and run the exhaustive search. The binary
//! itself only parses arguments, initializes logging, and maps the result
//! to an exit code.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod loader;

use std::{io, num::NonZeroUsize, path::Path, sync::Arc};

use picklock_core::{Alphabet, KeyspaceCursor, ReportSink, SearchError, SearchReport, run_search};
use picklock_crypto::{OracleError, TripleDesOracle};
use thiserror::Error;

use crate::loader::LoaderError;

/// Password length fixed by the cipher-file format.
pub const PASSWORD_LENGTH: usize = 3;

/// Fatal failures of one search invocation.
///
/// All of these abort before or during the search and map to a non-zero
/// process exit; per-candidate engine faults are not represented here
/// because the search absorbs them.
#[derive(Debug, Error)]
pub enum CliError {
    /// The cipher file could not be loaded.
    #[error("cipher file error: {0}")]
    Load(#[from] LoaderError),

    /// The oracle arena could not be built.
    #[error("cipher engine setup error: {0}")]
    Setup(#[from] OracleError),

    /// The search itself aborted.
    #[error("search error: {0}")]
    Search(#[from] SearchError),
}

/// Options for one search invocation.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Also print the decrypted text for every accepted password.
    pub print_decrypted: bool,
    /// Size of the worker pool.
    pub workers: NonZeroUsize,
}

/// Load `path` and search the whole `[a-zA-Z0-9]^3` keyspace against it.
///
/// Accepted passwords are written to `output` as they are confirmed; the
/// returned report carries the collected set and the traversal tallies.
///
/// # Errors
///
/// [`CliError`] on any fatal setup or search failure.
pub fn execute<W: io::Write + Send>(
    path: &Path,
    options: &SearchOptions,
    output: &ReportSink<W>,
) -> Result<SearchReport, CliError> {
    let image = Arc::new(loader::load_cipher_image(path)?);

    // One oracle per worker, built up front: a broken image fails here,
    // once, instead of once per candidate.
    let oracles = (0..options.workers.get())
        .map(|_| TripleDesOracle::new(Arc::clone(&image)))
        .collect::<Result<Vec<_>, _>>()?;

    let cursor = KeyspaceCursor::new(Alphabet::alphanumeric(), PASSWORD_LENGTH);
    Ok(run_search(cursor, oracles, output, options.print_decrypted)?)
}
