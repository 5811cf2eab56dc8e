use crate::error::{Result, ScorebookError};
use crate::model::{ListedRecord, Record};
use crate::store::DataStore;

/// Reads the record a modify would replace, if there is one.
pub fn lookup<S: DataStore>(store: &mut S, position: u32) -> Result<Option<ListedRecord>> {
    Ok(store
        .read_at(position)?
        .map(|record| ListedRecord { position, record }))
}

/// Replaces the record at `position`, returning the one it replaced.
pub fn run<S: DataStore>(store: &mut S, position: u32, record: &Record) -> Result<Record> {
    let previous = store
        .read_at(position)?
        .ok_or(ScorebookError::RecordNotFound(position))?;
    store.overwrite_at(position, record)?;
    Ok(previous)
}
