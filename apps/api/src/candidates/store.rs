//! Candidate store: the CSV sheet every candidate operation reads and appends to.
//!
//! The store is the single owner of the sheet. Callers never read-then-write:
//! duplicate detection, serial assignment and the append all happen inside
//! [`CandidateStore::insert_if_absent`].
//!
//! `AppState` holds an `Arc<dyn CandidateStore>`.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

use crate::models::candidate::CandidateRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Permission denied for file: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result of an insert attempt. A duplicate leaves the sheet untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted { serial_no: u64 },
    DuplicateEmail,
}

#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Every record, in sheet order.
    async fn all(&self) -> Result<Vec<CandidateRecord>, StoreError>;

    /// Appends `record` unless its primary email is already present.
    /// `record.serial_no` is ignored and replaced with the next free serial.
    async fn insert_if_absent(&self, record: CandidateRecord)
        -> Result<InsertOutcome, StoreError>;
}

/// Next serial number: `max + 1`, or 1 for an empty sheet.
pub fn next_serial(records: &[CandidateRecord]) -> u64 {
    records
        .iter()
        .map(|r| r.serial_no)
        .max()
        .map_or(1, |max| max + 1)
}

/// Flat-file store. Readers and writers share `sheet_lock`, so a read never
/// sees a half-appended row.
pub struct CsvCandidateStore {
    path: PathBuf,
    sheet_lock: Mutex<()>,
}

impl CsvCandidateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CandidateStore for CsvCandidateStore {
    async fn all(&self) -> Result<Vec<CandidateRecord>, StoreError> {
        let _guard = self.sheet_lock.lock().await;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || read_records(&path)).await?
    }

    async fn insert_if_absent(
        &self,
        mut record: CandidateRecord,
    ) -> Result<InsertOutcome, StoreError> {
        let _guard = self.sheet_lock.lock().await;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || -> Result<InsertOutcome, StoreError> {
            let existing = read_records(&path)?;

            if let Some(email) = record.primary_email.as_deref() {
                if existing
                    .iter()
                    .any(|r| r.primary_email.as_deref() == Some(email))
                {
                    return Ok(InsertOutcome::DuplicateEmail);
                }
            }

            record.serial_no = next_serial(&existing);
            append_record(&path, &record)?;
            debug!(
                "Appended S.No {} to {} ({} rows before)",
                record.serial_no,
                path.display(),
                existing.len()
            );
            Ok(InsertOutcome::Inserted {
                serial_no: record.serial_no,
            })
        })
        .await?
    }
}

/// A missing or zero-length file has no header yet.
fn sheet_is_empty(path: &Path) -> Result<bool, StoreError> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(meta.len() == 0),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(io_error(path, e)),
    }
}

fn read_records(path: &Path) -> Result<Vec<CandidateRecord>, StoreError> {
    if sheet_is_empty(path)? {
        return Ok(Vec::new());
    }

    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let mut reader = csv::ReaderBuilder::new().from_reader(file);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

fn append_record(path: &Path, record: &CandidateRecord) -> Result<(), StoreError> {
    let write_header = sheet_is_empty(path)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| io_error(path, e))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(file);
    writer.serialize(record)?;
    writer.flush().map_err(|e| io_error(path, e))?;
    Ok(())
}

fn io_error(path: &Path, err: io::Error) -> StoreError {
    if err.kind() == io::ErrorKind::PermissionDenied {
        StoreError::PermissionDenied(path.to_path_buf())
    } else {
        StoreError::Io(err)
    }
}
