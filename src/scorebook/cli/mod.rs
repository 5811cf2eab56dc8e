//! Binary-only plumbing: argument parsing and process setup.

pub mod args;
pub mod setup;
