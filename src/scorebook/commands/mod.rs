//! Business logic for the three record operations.
//!
//! Each command is a plain function over a [`DataStore`](crate::store::DataStore).
//! None of them touches a terminal; the session layer decides what to print.

pub mod append;
pub mod list;
pub mod modify;
