//! # Reminder Store
//!
//! Durable, ordered collection of date-stamped reminders backed by a single
//! two-column CSV file (`date,reminder`, header row, one row per record,
//! insertion order).
//!
//! Every operation is a full load-mutate-persist cycle: there is no cached
//! in-memory state, so each call observes the latest committed state of any
//! other thread or process using the same file. Each cycle runs under an
//! advisory lock on a sidecar `.lock` file, and every rewrite goes through a
//! temp file in the same directory followed by a rename, so readers never
//! observe a partially written table.
//!
//! Deletion is keyed by display position. Positions shift down after every
//! delete, so an index taken from a stale listing deletes a different record.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod error;

pub use error::{StoreError, StoreResult};

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use log::debug;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

/// Column names of the backing table, in order
const COLUMNS: [&str; 2] = ["date", "reminder"];

/// A single date-stamped reminder
///
/// `date` is the textual `YYYY-MM-DD` form exactly as entered; it is shape
/// checked by the command parser, never interpreted as a calendar value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub date: String,
    #[serde(rename = "reminder")]
    pub text: String,
}

/// Store for reminder records, addressed by 0-based display position
pub struct ReminderStore {
    path: PathBuf,
    lock_path: PathBuf,
}

impl ReminderStore {
    /// Create a store handle for the given CSV file path
    ///
    /// No filesystem access happens here; the file is touched per operation.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let mut lock_os = path.clone().into_os_string();
        lock_os.push(".lock");
        ReminderStore {
            path,
            lock_path: PathBuf::from(lock_os),
        }
    }

    /// Path of the backing CSV file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with the header row and no records
    ///
    /// Idempotent: an existing file is left untouched. `load` also tolerates
    /// an absent file, so calling this at startup is optional.
    pub fn init(&self) -> StoreResult<()> {
        let _guard = StoreLock::exclusive(&self.lock_path)?;
        if self.path.exists() {
            return Ok(());
        }
        debug!("creating reminder file at {}", self.path.display());
        self.persist(&[])
    }

    /// Read all reminders in stored order
    ///
    /// An absent file yields an empty list. A file that exists but does not
    /// parse as the two-column table yields [`StoreError::Corrupt`].
    pub fn load(&self) -> StoreResult<Vec<Reminder>> {
        let _guard = StoreLock::shared(&self.lock_path)?;
        self.read_records()
    }

    /// Enumerate all reminders in stored order
    ///
    /// The empty store produces an empty sequence, not an error.
    pub fn list(&self) -> StoreResult<Vec<Reminder>> {
        self.load()
    }

    /// Append a reminder at the end and persist the full list
    pub fn append(&self, date: &str, text: &str) -> StoreResult<()> {
        let _guard = StoreLock::exclusive(&self.lock_path)?;
        let mut records = self.read_records()?;
        records.push(Reminder {
            date: date.to_string(),
            text: text.to_string(),
        });
        self.persist(&records)?;
        debug!("appended reminder {} to {}", records.len() - 1, self.path.display());
        Ok(())
    }

    /// Remove the reminder at `index` and persist the shortened list
    ///
    /// Fails with [`StoreError::IndexOutOfRange`] without touching the file
    /// when `index >= len`. Records after `index` shift down by one.
    pub fn delete_at(&self, index: usize) -> StoreResult<()> {
        let _guard = StoreLock::exclusive(&self.lock_path)?;
        let mut records = self.read_records()?;
        if index >= records.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: records.len(),
            });
        }
        records.remove(index);
        self.persist(&records)?;
        debug!("deleted reminder {} from {}", index, self.path.display());
        Ok(())
    }

    fn read_records(&self) -> StoreResult<Vec<Reminder>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };

        let mut reader = csv::Reader::from_reader(file);
        let headers = reader.headers()?.clone();
        if !headers.iter().eq(COLUMNS) {
            return Err(StoreError::Corrupt(format!(
                "expected columns {COLUMNS:?}, found {headers:?}"
            )));
        }

        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }

    /// Rewrite the whole table atomically: temp file in the same directory,
    /// fsync, rename over the target.
    fn persist(&self, records: &[Reminder]) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file());
            // Header is written explicitly so an empty table still carries
            // the schema row.
            writer.write_record(COLUMNS)?;
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}

/// RAII advisory lock on the store's sidecar lock file
///
/// The sidecar (not the data file) is locked because the atomic rename in
/// `persist` replaces the data file's inode. Dropping the guard releases the
/// lock on every exit path, error paths included.
struct StoreLock {
    file: File,
}

impl StoreLock {
    fn exclusive(path: &Path) -> StoreResult<Self> {
        let file = Self::open(path)?;
        file.lock_exclusive()?;
        Ok(StoreLock { file })
    }

    fn shared(path: &Path) -> StoreResult<Self> {
        let file = Self::open(path)?;
        file.lock_shared()?;
        Ok(StoreLock { file })
    }

    fn open(path: &Path) -> StoreResult<File> {
        Ok(OpenOptions::new()
            .create(true)
            .write(true)
            .open(path)?)
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> ReminderStore {
        ReminderStore::new(dir.path().join("reminders.csv"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_init_writes_header_only_table() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.init().unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, "date,reminder\n");
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_init_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.init().unwrap();
        store.append("2024-01-01", "Pay rent").unwrap();
        store.init().unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_append_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.append("2024-01-01", "Pay rent").unwrap();

        let records = store.load().unwrap();
        assert_eq!(
            records.last().unwrap(),
            &Reminder {
                date: "2024-01-01".into(),
                text: "Pay rent".into(),
            }
        );
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.append("2024-01-01", "Pay rent").unwrap();
        store.append("2024-06-15", "Call Bob").unwrap();
        store.append("2024-12-31", "File taxes").unwrap();

        let texts: Vec<_> = store.list().unwrap().into_iter().map(|r| r.text).collect();
        assert_eq!(texts, ["Pay rent", "Call Bob", "File taxes"]);
    }

    #[test]
    fn test_body_with_commas_and_quotes_round_trips() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.append("2024-03-03", "buy milk, eggs, and \"good\" bread").unwrap();

        let records = store.load().unwrap();
        assert_eq!(records[0].text, "buy milk, eggs, and \"good\" bread");
    }

    #[test]
    fn test_delete_at_shifts_following_records_down() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.append("2024-01-01", "a").unwrap();
        store.append("2024-01-02", "b").unwrap();
        store.append("2024-01-03", "c").unwrap();

        store.delete_at(1).unwrap();

        let texts: Vec<_> = store.list().unwrap().into_iter().map(|r| r.text).collect();
        assert_eq!(texts, ["a", "c"]);
    }

    #[test]
    fn test_delete_at_out_of_range_leaves_file_unchanged() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.append("2024-01-01", "a").unwrap();
        let before = fs::read(store.path()).unwrap();

        let err = store.delete_at(1).unwrap_err();
        assert!(matches!(err, StoreError::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn test_delete_at_on_empty_store_is_out_of_range() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.init().unwrap();

        let err = store.delete_at(0).unwrap_err();
        assert!(matches!(err, StoreError::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_wrong_header_is_corrupt() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "when,what\n2024-01-01,Pay rent\n").unwrap();

        assert!(matches!(store.load().unwrap_err(), StoreError::Corrupt(_)));
    }

    #[test]
    fn test_short_row_is_corrupt() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "date,reminder\n2024-01-01\n").unwrap();

        assert!(matches!(store.load().unwrap_err(), StoreError::Corrupt(_)));
    }

    #[test]
    fn test_empty_file_is_corrupt() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "").unwrap();

        assert!(matches!(store.load().unwrap_err(), StoreError::Corrupt(_)));
    }

    #[test]
    fn test_concurrent_appends_both_survive() {
        let dir = tempdir().unwrap();
        let path = Arc::new(dir.path().join("reminders.csv"));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let path = Arc::clone(&path);
                std::thread::spawn(move || {
                    let store = ReminderStore::new(path.as_path());
                    store.append("2024-01-01", &format!("task {i}")).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let store = ReminderStore::new(path.as_path());
        assert_eq!(store.list().unwrap().len(), 8);
    }
}
