//! Command-line front end for override conflict scanning.
//!
//! Exit codes: 0 when clean, 1 on a scan error, 2 when conflicts were
//! found.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use overscan::{OverrideScanner, ScanConfig};

#[derive(Parser, Debug)]
#[command(
    name = "overscan",
    version,
    about = "Detect member-level conflicts between module override files"
)]
struct Args {
    /// Directory holding the candidate module's override files.
    candidate_dir: PathBuf,

    /// Path prefix of the installed overrides; must end with a path
    /// separator (each relative file path is appended to it verbatim).
    existing_prefix: String,

    /// Override file extension, without a dot.
    #[arg(long, default_value = "php")]
    extension: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match ScanConfig::new(args.existing_prefix)
        .and_then(|c| c.with_extension(args.extension))
    {
        Ok(config) => config,
        Err(err) => {
            eprintln!("overscan: {err}");
            return ExitCode::from(1);
        }
    };

    let scanner = OverrideScanner::new(config);
    match scanner.scan(&args.candidate_dir) {
        Ok(report) if report.has_conflict() => {
            for message in report.errors() {
                println!("{message}");
            }
            ExitCode::from(2)
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("overscan: {err}");
            ExitCode::from(1)
        }
    }
}
