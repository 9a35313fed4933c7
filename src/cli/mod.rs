//! Command Line Interface (CLI) layer for s1prepare.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the sequential loop over
//! dataset directories. It wires user-provided options to the library
//! functionality exposed via `s1prepare::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
