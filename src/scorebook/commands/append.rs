use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;

/// Writes a record after the last one and returns its position.
pub fn run<S: DataStore>(store: &mut S, record: &Record) -> Result<u32> {
    store.append(record)
}
