use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use secret_recovery::{
    Division, RecoveryError, RecoveryParams, TestCase, audit_shares, find_constant_term_with,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Recover the constant term of a threshold secret-sharing polynomial.
#[derive(Parser, Debug)]
#[command(name = "secret-recovery", version, about)]
struct Cli {
    /// JSON test case files, processed in order.
    #[arg(default_values = ["testcase1.json", "testcase2.json"])]
    records: Vec<PathBuf>,

    /// Division strategy for the Lagrange terms.
    #[arg(long, value_enum, default_value_t = DivisionArg::Truncating)]
    division: DivisionArg,

    /// Check shares beyond the threshold against the recovered polynomial.
    #[arg(long, default_value_t = false)]
    audit: bool,

    /// Log at debug level (overrides RUST_LOG).
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

/// Command-line spelling of [`Division`].
#[derive(Clone, Copy, Debug, ValueEnum)]
enum DivisionArg {
    /// Truncate every Lagrange term toward zero.
    Truncating,
    /// Sum exact rational terms.
    Exact,
}

impl From<DivisionArg> for Division {
    fn from(arg: DivisionArg) -> Self {
        match arg {
            DivisionArg::Truncating => Division::Truncating,
            DivisionArg::Exact => Division::Exact,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let params = RecoveryParams {
        division: cli.division.into(),
    };

    let mut failures = 0usize;

    for (id, path) in (1..).zip(&cli.records) {
        info!(id, path = %path.display(), "processing test case");

        match run_case(path, &params, cli.audit) {
            Ok(secret) => println!("Secret for Test Case {id}: {secret}"),
            Err(e) => {
                error!(id, error = %e, "test case failed");
                eprintln!("Error processing test case {id}: {e}");
                failures += 1;
            }
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_case(
    path: &Path,
    params: &RecoveryParams,
    audit: bool,
) -> Result<String, RecoveryError> {
    let record = TestCase::from_path(path)?;

    if !audit {
        return Ok(find_constant_term_with(&record, params)?.to_string());
    }

    let report = audit_shares(&record, params)?;
    for index in &report.inconsistent {
        eprintln!("Warning: share {index} is inconsistent with the recovered polynomial");
    }

    if report.truncation_mismatch() {
        eprintln!(
            "Warning: truncated secret {} differs from the exact constant term {}",
            report.secret, report.exact_secret
        );
    }

    Ok(report.secret.to_string())
}
