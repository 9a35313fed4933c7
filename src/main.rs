//! s1prepare CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, prepare each dataset
//! directory, and exit with appropriate status.
//! For programmatic use, prefer the library API (`s1prepare::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
