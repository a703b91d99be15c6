//! Picklock binary.
//!
//! # Usage
//!
//! ```bash
//! # Report every acceptable password
//! picklock secret.bin
//!
//! # Also print what each acceptable password decrypts to
//! picklock --print-decrypted secret.bin
//! ```

use std::{io, num::NonZeroUsize, path::PathBuf, process::ExitCode, thread};

use clap::Parser;
use picklock_cli::{SearchOptions, execute};
use picklock_core::ReportSink;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Exhaustive password search over 3DES cipher files
#[derive(Parser, Debug)]
#[command(name = "picklock")]
#[command(version)]
#[command(about = "Guess the password of a cipher file")]
#[command(long_about = "Guess the password of a cipher file by exhausting the \
keyspace [a-zA-Z0-9]{3}. Every acceptable password is reported: the embedded \
checksum can collide, so the search never stops at the first hit.")]
struct Args {
    /// Cipher file: an 8-byte CBC initialization vector, the 3DES(EDE2)
    /// ciphertext keyed by the MD5 of the password, then the 32-byte
    /// SHA-256 of the original text
    cipher_file: PathBuf,

    /// Print the decrypted text after every accepted password
    #[arg(short, long)]
    print_decrypted: bool,

    /// Worker threads (default: all available cores)
    #[arg(long)]
    threads: Option<NonZeroUsize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // Logs go to stderr: stdout is reserved for accepted passwords.
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let workers = args
        .threads
        .unwrap_or_else(|| thread::available_parallelism().unwrap_or(NonZeroUsize::MIN));

    tracing::info!(
        path = %args.cipher_file.display(),
        workers = workers.get(),
        "starting exhaustive password search"
    );

    let sink = ReportSink::new(io::stdout());
    let options = SearchOptions { print_decrypted: args.print_decrypted, workers };

    match execute(&args.cipher_file, &options, &sink) {
        Ok(report) => {
            tracing::info!(
                evaluated = report.evaluated,
                accepted = report.accepted.len(),
                faulted = report.faulted,
                "keyspace exhausted"
            );
            ExitCode::SUCCESS
        },
        Err(err) => {
            tracing::error!(error = %err, "aborting");
            ExitCode::FAILURE
        },
    }
}
