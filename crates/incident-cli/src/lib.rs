//! Library surface of the incident unifier CLI.
//!
//! The binary in `main.rs` is a thin shell; the argument definitions,
//! logging bootstrap, run driver, and console summary live here so
//! integration tests can drive them directly.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
