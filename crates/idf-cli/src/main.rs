//! `idf` — identity federation mapping CLI.
//!
//! Converts a CSV of user-identity associations into a batch job of SAF
//! administrative commands for RACF, ACF2 or Top Secret.
//!
//! # Examples
//!
//! ```bash
//! # Generate a RACF mapping job from identities.csv
//! idf map identities.csv --esm RACF --registry ldap://zowe.org:1389
//!
//! # Route the job to a specific system
//! idf map identities.csv -e TSS -r ldap://zowe.org:1389 -s SYS1
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// Exit code when argument parsing itself fails.
const CLI_ERROR: u8 = 1;
/// Exit code for fatal mapping errors.
const FATAL: u8 = 16;

#[derive(Parser, Debug)]
#[command(
    name = "idf",
    version,
    about = "Identity federation mapping for z/OS security managers",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Map distributed identities to mainframe users
    Map(commands::map::MapArgs),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap prints its own message; --help and --version are not
            // failures.
            let _ = err.print();
            return ExitCode::from(if err.use_stderr() { CLI_ERROR } else { 0 });
        }
    };

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Map(args) => match commands::map::run(&args) {
            Ok(severity) => ExitCode::from(severity.exit_code() as u8),
            Err(err) => {
                eprintln!("Error: {err}");
                ExitCode::from(FATAL)
            }
        },
    }
}

/// Warnings go to stderr so stdout stays a clean JCL artifact. `--verbose`
/// or RUST_LOG widen the filter.
fn init_tracing(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
