//! Serialized output of accepted candidates.
//!
//! Workers confirm candidates concurrently, but each multi-line report must
//! reach the output as one uninterruptible unit. [`ReportSink`] wraps any
//! writer in a mutex held for the duration of a full report, which is the
//! only cross-worker ordering guarantee the search makes.

use std::{
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

/// Mutex-serialized sink for accepted-candidate reports.
pub struct ReportSink<W> {
    inner: Mutex<W>,
}

impl<W: Write> ReportSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { inner: Mutex::new(writer) }
    }

    /// Emit one report: the candidate line, then (optionally) the decrypted
    /// text on its own line, flushed as a single locked unit.
    ///
    /// The decrypted text is written as raw bytes; it is program output,
    /// not a diagnostic, and may not be valid UTF-8.
    pub fn report(&self, candidate: &str, plaintext: Option<&[u8]>) -> io::Result<()> {
        let mut writer = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{candidate}")?;
        if let Some(text) = plaintext {
            writer.write_all(text)?;
            writeln!(writer)?;
        }
        writer.flush()
    }

    /// Unwrap the sink, returning the inner writer.
    pub fn into_inner(self) -> W {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_writes_the_candidate_line() {
        let sink = ReportSink::new(Vec::new());

        sink.report("abc", None).unwrap();

        assert_eq!(sink.into_inner(), b"abc\n");
    }

    #[test]
    fn report_appends_plaintext_when_given() {
        let sink = ReportSink::new(Vec::new());

        sink.report("abc", Some(b"secret text")).unwrap();

        assert_eq!(sink.into_inner(), b"abc\nsecret text\n");
    }

    #[test]
    fn plaintext_bytes_pass_through_unmodified() {
        let sink = ReportSink::new(Vec::new());

        sink.report("k", Some(&[0x00, 0xFF, 0x7F])).unwrap();

        assert_eq!(sink.into_inner(), [b'k', b'\n', 0x00, 0xFF, 0x7F, b'\n']);
    }

    #[test]
    fn consecutive_reports_do_not_interleave() {
        let sink = ReportSink::new(Vec::new());

        sink.report("one", Some(b"first")).unwrap();
        sink.report("two", Some(b"second")).unwrap();

        assert_eq!(sink.into_inner(), b"one\nfirst\ntwo\nsecond\n");
    }
}
