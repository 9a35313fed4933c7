//! Core building blocks: band discovery, time-window parsing, naming, the
//! dataset document model, and preparation parameters. These are pure
//! primitives consumed by the high-level `api` module.
pub mod bands;
pub mod constants;
pub mod document;
pub mod naming;
pub mod params;
pub mod time_window;
