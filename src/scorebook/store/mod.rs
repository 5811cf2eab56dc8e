//! # Storage Layer
//!
//! The [`DataStore`] trait is the record store abstraction: a random-access byte
//! stream holding fixed-width record lines (see [`crate::codec`]).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage over a single file handle
//!   - Opened once at startup, read/write, created if missing
//!   - Truncated on open unless configured to keep existing records
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Exposes the raw bytes so tests can assert on the exact file layout
//!
//! ## Storage Format
//!
//! ```text
//! a00000001 55 \n    <- position 1, bytes 0..14
//! a00000002 100\n    <- position 2, bytes 14..28
//! ```
//!
//! There is no header, record count, or footer. End of data ends the list.
//!
//! Both implementations share the seek/read/write helpers below, so the offset
//! arithmetic lives in exactly one place.

use crate::codec::{self, RECORD_WIDTH};
use crate::error::{Result, ScorebookError};
use crate::model::Record;
use std::io::{Read, Seek, SeekFrom, Write};

pub mod fs;
pub mod memory;

/// Abstract interface for record storage.
///
/// Reads never fail on bad data: a missing, partial, or corrupt line reads as
/// `None`. Only genuine I/O failures surface as errors.
pub trait DataStore {
    /// Move the sequential read cursor back to the first record
    fn rewind(&mut self) -> Result<()>;

    /// Read the record at the sequential read cursor and advance past it
    fn read_next(&mut self) -> Result<Option<Record>>;

    /// Read the record at a 1-based position
    fn read_at(&mut self, position: u32) -> Result<Option<Record>>;

    /// Write a record after the last one, returning its position
    fn append(&mut self, record: &Record) -> Result<u32>;

    /// Replace the record at a 1-based position
    fn overwrite_at(&mut self, position: u32, record: &Record) -> Result<()>;

    /// Number of complete record lines in the store
    fn record_count(&mut self) -> Result<u32>;
}

/// Reads up to one record width from the current position and decodes it.
pub(crate) fn read_record<F: Read>(stream: &mut F) -> Result<Option<Record>> {
    let mut line = Vec::with_capacity(RECORD_WIDTH);
    stream
        .by_ref()
        .take(RECORD_WIDTH as u64)
        .read_to_end(&mut line)?;

    if line.is_empty() {
        return Ok(None);
    }

    match codec::decode(&line) {
        Ok(record) => Ok(Some(record)),
        Err(e) => {
            tracing::debug!(error = %e, "unreadable record line");
            Ok(None)
        }
    }
}

pub(crate) fn read_record_at<F: Read + Seek>(
    stream: &mut F,
    position: u32,
) -> Result<Option<Record>> {
    let Some(offset) = codec::offset_of(position) else {
        return Ok(None);
    };
    if offset >= stream_len(stream)? {
        return Ok(None);
    }
    stream.seek(SeekFrom::Start(offset))?;
    read_record(stream)
}

pub(crate) fn append_record<F: Write + Seek>(stream: &mut F, record: &Record) -> Result<u32> {
    let line = codec::encode(record)?;
    let end = stream.seek(SeekFrom::End(0))?;

    // A partial trailing line is unreadable; the new record replaces it so every
    // line stays aligned.
    let width = RECORD_WIDTH as u64;
    let start = end - end % width;
    if start != end {
        tracing::warn!(dropped = end - start, "replacing partial trailing line");
        stream.seek(SeekFrom::Start(start))?;
    }
    stream.write_all(line.as_bytes())?;
    stream.flush()?;

    let position = (start / width + 1) as u32;
    tracing::info!(position, id = %record.id, score = record.score, "record appended");
    Ok(position)
}

pub(crate) fn overwrite_record<F: Write + Seek>(
    stream: &mut F,
    position: u32,
    record: &Record,
) -> Result<()> {
    let offset = codec::offset_of(position).ok_or(ScorebookError::RecordNotFound(position))?;
    if offset + RECORD_WIDTH as u64 > stream_len(stream)? {
        return Err(ScorebookError::RecordNotFound(position));
    }

    let line = codec::encode(record)?;
    stream.seek(SeekFrom::Start(offset))?;
    stream.write_all(line.as_bytes())?;
    stream.flush()?;

    tracing::info!(position, id = %record.id, score = record.score, "record overwritten");
    Ok(())
}

pub(crate) fn count_records<F: Seek>(stream: &mut F) -> Result<u32> {
    let len = stream_len(stream)?;
    Ok((len / RECORD_WIDTH as u64) as u32)
}

/// Length of the stream, leaving the cursor where it was.
fn stream_len<F: Seek>(stream: &mut F) -> Result<u64> {
    let current = stream.stream_position()?;
    let end = stream.seek(SeekFrom::End(0))?;
    if current != end {
        stream.seek(SeekFrom::Start(current))?;
    }
    Ok(end)
}
