//! File-backed record storage.
//!
//! A [`FileStore`] owns one JSON file holding an array of records and offers
//! three operations: fetch everything, append a record, and update a record
//! by id. Every operation initializes the backing file on demand, so the
//! store is safe to use before any file or directory exists. Mutations
//! return the full updated list so callers can refresh their own state
//! without re-reading the file.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Initial contents of a fresh store file.
const EMPTY_ARRAY: &str = "[]";

/// A persistable record with a stable string identity.
///
/// The store matches records by [`Record::id`] and uses [`Record::set_id`]
/// to pin the stored id when applying a replacement.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// The record's unique identifier.
    fn id(&self) -> &str;

    /// Overwrite the record's identifier.
    fn set_id(&mut self, id: String);
}

/// A JSON-file-backed collection of records of a single type.
///
/// The store holds no in-memory state: every operation is an independent
/// read-modify-write of the whole file. Append performs NO uniqueness check
/// on ids; keeping ids unique is the caller's contract.
#[derive(Debug, Clone)]
pub struct FileStore<T> {
    /// Directory containing the store file.
    directory: PathBuf,
    /// Name of the JSON file within the directory.
    file_name: String,
    marker: PhantomData<T>,
}

impl<T: Record> FileStore<T> {
    /// Create a store for the given directory and file name.
    ///
    /// Nothing is touched on disk until the first operation; empty strings
    /// are accepted here and rejected with [`Error::Configuration`] when an
    /// operation runs.
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self { directory: directory.into(), file_name: file_name.into(), marker: PhantomData }
    }

    /// Directory containing the store file.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Full path of the store file.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Read the full record list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the directory or file name is
    /// empty, [`Error::CorruptData`] if the file is not valid JSON, or an
    /// I/O error from the filesystem.
    pub fn fetch_all(&self) -> Result<Vec<T>> {
        self.ensure_ready()?;
        self.read_records()
    }

    /// Append a record and return the updated list.
    ///
    /// The record is added unconditionally; a duplicate id is not detected
    /// here and will make every matching record the target of later updates.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`FileStore::fetch_all`], plus write errors.
    pub fn append(&self, record: T) -> Result<Vec<T>> {
        self.ensure_ready()?;
        let mut records = self.read_records()?;
        records.push(record);
        self.write_records(&records)?;
        Ok(records)
    }

    /// Replace every record whose id matches `record` and return the
    /// updated list.
    ///
    /// The stored id is preserved on each replaced record. An id that
    /// matches nothing leaves the list unchanged (no error).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`FileStore::fetch_all`], plus write errors.
    pub fn update(&self, record: T) -> Result<Vec<T>> {
        self.ensure_ready()?;
        let mut records = self.read_records()?;
        for existing in &mut records {
            if existing.id() == record.id() {
                let mut replacement = record.clone();
                replacement.set_id(existing.id().to_string());
                *existing = replacement;
            }
        }
        self.write_records(&records)?;
        Ok(records)
    }

    /// Validate configuration and initialize the backing file if needed.
    fn ensure_ready(&self) -> Result<()> {
        if self.directory.as_os_str().is_empty() || self.file_name.is_empty() {
            return Err(Error::Configuration);
        }
        self.initialize()
    }

    /// Create the directory and seed the file with an empty array.
    ///
    /// A missing file and a zero-length file are both seeded; anything else
    /// (including whitespace-only content) is left for the JSON parser to
    /// judge.
    fn initialize(&self) -> Result<()> {
        if !self.directory.exists() {
            std::fs::create_dir_all(&self.directory)?;
        }

        let path = self.file_path();
        if !path.exists() {
            std::fs::write(&path, EMPTY_ARRAY)?;
            return Ok(());
        }

        if std::fs::read_to_string(&path)?.is_empty() {
            std::fs::write(&path, EMPTY_ARRAY)?;
        }
        Ok(())
    }

    fn read_records(&self) -> Result<Vec<T>> {
        let path = self.file_path();
        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|source| Error::CorruptData { path, source })
    }

    fn write_records(&self, records: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        std::fs::write(self.file_path(), json)?;
        Ok(())
    }
}
