//! # Cafe Console Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rukaab Cafe Console                              │
//! │                                                                         │
//! │  main.rs ────► parses flags, maps the result to an exit code           │
//! │                                                                         │
//! │  lib.rs ─────► logging, config, data directory, session                │
//! │                                                                         │
//! │  Exit codes: 0 after Exit or end of input, 1 if startup fails          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = cafe_console::Cli::parse();

    match cafe_console::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Console stopped");
            eprintln!("cafe: {e}");
            ExitCode::FAILURE
        }
    }
}
