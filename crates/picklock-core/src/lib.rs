//! Picklock Search Core
//!
//! Keyspace enumeration and fork-join search scheduling. This crate knows
//! nothing about ciphers: candidates are produced by walking a combinatorial
//! keyspace and judged by a [`CandidateOracle`] implementation supplied by the
//! caller.
//!
//! # Architecture
//!
//! ```text
//! Alphabet
//!    │
//!    ▼
//! KeyspaceCursor ── candidate strings ──▶ bounded queue
//!                                            │
//!                            ┌───────────────┼───────────────┐
//!                            ▼               ▼               ▼
//!                        worker 0        worker 1        worker N
//!                       (oracle 0)      (oracle 1)      (oracle N)
//!                            │               │               │
//!                            └───────────────┼───────────────┘
//!                                            ▼
//!                                       ReportSink
//! ```
//!
//! A single producer walks the cursor in odometer order and hands each
//! candidate to a fixed pool of workers over a bounded channel. Every worker
//! exclusively owns one oracle for the lifetime of the search, so oracle
//! scratch state needs no synchronization. The traversal is always
//! exhaustive: an accepted candidate never stops the search, because the
//! acceptance criterion may admit collisions.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod alphabet;
pub mod keyspace;
pub mod oracle;
pub mod report;
pub mod search;

pub use alphabet::Alphabet;
pub use keyspace::KeyspaceCursor;
pub use oracle::{CandidateOracle, Verdict};
pub use report::ReportSink;
pub use search::{SearchError, SearchReport, run_search};
