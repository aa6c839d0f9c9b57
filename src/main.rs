// Entrypoint for the CLI: initialize logging, parse arguments, run the
// selected command, and map each failure kind to its own exit code.

use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use nozbe_cli::cli::{self, Cli};
use nozbe_cli::Error;

fn main() {
    // Logs go to stderr so stdout stays clean JSON for the commands.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("nozbe_cli=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = cli::run(cli) {
        eprintln!("error: {err:#}");
        process::exit(exit_code(&err));
    }
}

/// Distinct non-zero exit code per failure kind; clap already exits with
/// 2 on usage errors.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<Error>() {
        Some(Error::Transport(_)) => 3,
        Some(Error::Status { .. }) => 4,
        Some(Error::Decode(_)) => 5,
        None => 1,
    }
}
