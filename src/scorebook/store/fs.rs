use super::{
    append_record, count_records, overwrite_record, read_record, read_record_at, DataStore,
};
use crate::error::{Result, ScorebookError};
use crate::model::Record;
use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};

pub struct FileStore {
    file: File,
    path: PathBuf,
}

impl FileStore {
    /// Opens the data file for reading and writing, creating it if needed.
    ///
    /// With `truncate` set, any existing records are discarded.
    pub fn open<P: AsRef<Path>>(path: P, truncate: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(truncate)
            .open(&path)
            .map_err(|source| ScorebookError::Open {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), truncate, "opened record file");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for FileStore {
    fn rewind(&mut self) -> Result<()> {
        self.file.seek(SeekFrom::Start(0))?;
        Ok(())
    }

    fn read_next(&mut self) -> Result<Option<Record>> {
        read_record(&mut self.file)
    }

    fn read_at(&mut self, position: u32) -> Result<Option<Record>> {
        read_record_at(&mut self.file, position)
    }

    fn append(&mut self, record: &Record) -> Result<u32> {
        append_record(&mut self.file, record)
    }

    fn overwrite_at(&mut self, position: u32, record: &Record) -> Result<()> {
        overwrite_record(&mut self.file, position, record)
    }

    fn record_count(&mut self) -> Result<u32> {
        count_records(&mut self.file)
    }
}
