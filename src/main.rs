//! mkreadme CLI entry point.
//!
//! Parses arguments, runs the generation pipeline, and handles top-level
//! errors: the message goes to standard error, the process pauses briefly
//! so in-flight async diagnostics can flush, then exits non-zero.

use anyhow::Result;
use clap::Parser;
use mkreadme::cli::Cli;
use mkreadme::core::report_error;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            report_error(&e);
            tokio::time::sleep(Duration::from_secs(2)).await;
            std::process::exit(1);
        }
    }
}
