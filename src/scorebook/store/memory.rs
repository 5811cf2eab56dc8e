use super::{
    append_record, count_records, overwrite_record, read_record, read_record_at, DataStore,
};
use crate::error::Result;
use crate::model::Record;
use std::io::Cursor;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    buffer: Cursor<Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from existing raw bytes, e.g. a hand-written or corrupt file image.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            buffer: Cursor::new(bytes.into()),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        self.buffer.get_ref()
    }
}

impl DataStore for InMemoryStore {
    fn rewind(&mut self) -> Result<()> {
        self.buffer.set_position(0);
        Ok(())
    }

    fn read_next(&mut self) -> Result<Option<Record>> {
        read_record(&mut self.buffer)
    }

    fn read_at(&mut self, position: u32) -> Result<Option<Record>> {
        read_record_at(&mut self.buffer, position)
    }

    fn append(&mut self, record: &Record) -> Result<u32> {
        append_record(&mut self.buffer, record)
    }

    fn overwrite_at(&mut self, position: u32, record: &Record) -> Result<()> {
        overwrite_record(&mut self.buffer, position, record)
    }

    fn record_count(&mut self) -> Result<u32> {
        count_records(&mut self.buffer)
    }
}

// --- Test Fixtures ---
