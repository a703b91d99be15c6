//! Fork-join search scheduler.
//!
//! One producer walks a [`KeyspaceCursor`] in order and dispatches each
//! candidate over a bounded channel to a fixed pool of workers. Each worker
//! exclusively owns one oracle from the arena handed in by the caller, so
//! evaluation needs no locking; the only synchronized resources are the
//! channel and the [`ReportSink`].
//!
//! The traversal is exhaustive by design. An accepted candidate is reported
//! immediately but never stops the search: the acceptance checksum may
//! collide, so several candidates can be legitimate answers. The scheduler
//! returns only after every dispatched candidate has been judged.

use std::{io, thread};

use crate::{
    keyspace::KeyspaceCursor,
    oracle::{CandidateOracle, Verdict},
    report::ReportSink,
};

/// Bounded queue capacity per worker.
///
/// Backpressure point: a full queue blocks the producer instead of letting
/// unevaluated candidates accumulate without bound.
const QUEUE_DEPTH_PER_WORKER: usize = 32;

/// Errors that can abort a search run.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The oracle arena was empty.
    #[error("search requires at least one worker oracle")]
    NoWorkers,

    /// A worker thread panicked; the traversal cannot be trusted.
    #[error("search worker {index} panicked")]
    WorkerPanicked {
        /// Index of the worker that panicked.
        index: usize,
    },

    /// A worker failed to write an accepted-candidate report.
    #[error("failed writing an accepted-candidate report")]
    Report(#[source] io::Error),
}

/// Aggregate outcome of a completed traversal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Accepted candidates, grouped by worker; order across workers is
    /// unspecified (completion order, not enumeration order).
    pub accepted: Vec<String>,
    /// Total candidates judged.
    pub evaluated: u64,
    /// Candidates skipped after an engine fault.
    pub faulted: u64,
}

/// Per-worker tallies merged into the final [`SearchReport`].
#[derive(Default)]
struct WorkerTally {
    accepted: Vec<String>,
    evaluated: u64,
    faulted: u64,
}

/// Exhaustively judge every candidate in `cursor` against the oracle arena.
///
/// `oracles` must hold exactly one oracle per desired worker, constructed
/// before dispatch begins; each worker takes sole ownership of one. Accepted
/// candidates are reported through `sink` as they are confirmed (with the
/// oracle's plaintext when `emit_plaintext` is set) and collected into the
/// returned report. Engine faults are logged, counted, and skipped.
///
/// Blocks until the keyspace is exhausted and every worker has joined.
///
/// # Errors
///
/// [`SearchError::NoWorkers`] for an empty arena, [`SearchError::Report`] if
/// a report could not be written, [`SearchError::WorkerPanicked`] if a
/// worker died mid-traversal.
pub fn run_search<O, W>(
    mut cursor: KeyspaceCursor,
    oracles: Vec<O>,
    sink: &ReportSink<W>,
    emit_plaintext: bool,
) -> Result<SearchReport, SearchError>
where
    O: CandidateOracle + Send,
    W: io::Write + Send,
{
    if oracles.is_empty() {
        return Err(SearchError::NoWorkers);
    }
    let workers = oracles.len();
    tracing::debug!(workers, keyspace = ?cursor.keyspace_size(), "starting exhaustive search");

    let (sender, receiver) = crossbeam_channel::bounded::<String>(workers * QUEUE_DEPTH_PER_WORKER);

    let joined = thread::scope(|scope| {
        let handles: Vec<_> = oracles
            .into_iter()
            .map(|mut oracle| {
                let receiver = receiver.clone();
                scope.spawn(move || -> Result<WorkerTally, io::Error> {
                    let mut tally = WorkerTally::default();
                    for candidate in receiver {
                        tally.evaluated += 1;
                        match oracle.evaluate(&candidate) {
                            Ok(Verdict::Accepted) => {
                                let plaintext = emit_plaintext.then(|| oracle.plaintext());
                                sink.report(&candidate, plaintext)?;
                                tally.accepted.push(candidate);
                            },
                            Ok(Verdict::Rejected) => {},
                            Err(fault) => {
                                tally.faulted += 1;
                                tracing::warn!(
                                    candidate = %candidate,
                                    error = %fault,
                                    "engine fault; skipping candidate"
                                );
                            },
                        }
                    }
                    Ok(tally)
                })
            })
            .collect();
        drop(receiver);

        // Single producer: walk the keyspace in odometer order. A full
        // queue blocks here. Send fails only once every worker is gone,
        // which means a report failure already aborted the run.
        let mut buffer = String::with_capacity(cursor.power());
        while cursor.write_current(&mut buffer) {
            if sender.send(buffer.clone()).is_err() {
                break;
            }
            cursor.advance();
        }
        drop(sender);

        handles
            .into_iter()
            .enumerate()
            .map(|(index, handle)| {
                handle.join().map_err(|_| SearchError::WorkerPanicked { index })
            })
            .collect::<Vec<_>>()
    });

    let mut report = SearchReport::default();
    for outcome in joined {
        let tally = outcome?.map_err(SearchError::Report)?;
        report.accepted.extend(tally.accepted);
        report.evaluated += tally.evaluated;
        report.faulted += tally.faulted;
    }
    tracing::debug!(
        evaluated = report.evaluated,
        accepted = report.accepted.len(),
        faulted = report.faulted,
        "keyspace exhausted"
    );
    Ok(report)
}
