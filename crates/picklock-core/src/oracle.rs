//! The candidate-judging seam between search machinery and cipher logic.
//!
//! The scheduler drives any [`CandidateOracle`] implementation. Oracles are
//! stateful and thread-affine: one instance is bound to one worker for the
//! worker's entire lifetime and is never shared, so implementations are free
//! to keep private mutable scratch buffers without synchronization.

/// Outcome of judging one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The candidate satisfies the acceptance criterion.
    Accepted,
    /// The candidate does not satisfy the acceptance criterion.
    Rejected,
}

/// Judges whether a candidate satisfies a hidden acceptance criterion.
///
/// `evaluate` may overwrite all scratch state on every call regardless of
/// outcome. A recoverable engine failure is a value, not a panic: the
/// scheduler treats a `Fault` as a rejection, logs it, and continues the
/// search.
pub trait CandidateOracle {
    /// Recoverable per-candidate failure raised by the underlying engine.
    type Fault: std::error::Error + Send + 'static;

    /// Judge one candidate.
    ///
    /// # Errors
    ///
    /// Returns the engine fault for this candidate; the candidate counts as
    /// rejected and the search continues.
    fn evaluate(&mut self, candidate: &str) -> Result<Verdict, Self::Fault>;

    /// Byproduct of the most recent [`evaluate`](Self::evaluate) call.
    ///
    /// Only meaningful immediately after a call that returned
    /// [`Verdict::Accepted`], on the same instance, before any further
    /// call. The buffer is scratch state, not a durable record.
    fn plaintext(&self) -> &[u8];
}
