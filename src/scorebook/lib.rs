//! # Scorebook Architecture
//!
//! Scorebook keeps student records (an ID and a score) in a flat file of fixed-width
//! lines, and edits them through a small numeric-command dialog at the terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, cli/)                                     │
//! │  - Arguments, config lookup, logging setup, exit codes      │
//! │  - The ONLY place that knows about stdin/stdout/stderr      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs, input.rs)                             │
//! │  - Reads one line per prompt and normalizes it to a Command │
//! │  - State machine over main menu / ID / score prompts        │
//! │  - Generic over BufRead + Write                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API + Commands (api.rs, commands/*.rs)                     │
//! │  - list / append / modify over a DataStore                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/, codec.rs)                                 │
//! │  - 14-byte lines, position p at byte (p - 1) * 14           │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field validation ([`validation`]) gates every write: nothing reaches the store
//! unless the ID is `a`/`A` plus 8 digits and the score is 0..=100.
//!
//! ## Testing Strategy
//!
//! Every layer runs against [`store::memory::InMemoryStore`] and in-memory
//! terminals, so whole sessions are tested without a file or a TTY. The binary is
//! covered end to end in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: list, append, and modify logic
//! - [`store`]: Storage abstraction and implementations
//! - [`codec`]: Fixed-width line encoding and offsets
//! - [`model`]: Core data types (`Record`, `ListedRecord`)
//! - [`validation`]: ID and score rules
//! - [`input`]: Prompt rendering and command normalization
//! - [`session`]: The interactive state machine
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod session;
pub mod store;
pub mod validation;
