//! # API Facade
//!
//! A thin facade over the command layer and the single entry point the session
//! uses for record operations.
//!
//! The facade dispatches to `commands/*.rs` and returns structured types. It holds
//! no business logic and never writes to a terminal.
//!
//! `ScorebookApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ScorebookApi<FileStore>`
//! - Testing: `ScorebookApi<InMemoryStore>`

use crate::commands;
use crate::commands::list::Listing;
use crate::error::Result;
use crate::model::{ListedRecord, Record};
use crate::store::DataStore;

pub struct ScorebookApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> ScorebookApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_records(&mut self) -> Result<Listing<'_, S>> {
        commands::list::run(&mut self.store)
    }

    pub fn append_record(&mut self, record: &Record) -> Result<u32> {
        commands::append::run(&mut self.store, record)
    }

    pub fn find_record(&mut self, position: u32) -> Result<Option<ListedRecord>> {
        commands::modify::lookup(&mut self.store, position)
    }

    pub fn modify_record(&mut self, position: u32, record: &Record) -> Result<Record> {
        commands::modify::run(&mut self.store, position, record)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
