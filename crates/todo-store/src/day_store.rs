use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use todo_core::{DocumentSource, collect_memories, compose_day_document, format_day};

use crate::error::{Result, StoreError};

/// Day documents stored as plain files.
///
/// Layout:
/// ```text
/// <root>/
/// ├── 2019-05-14.md
/// ├── 2019-05-15.md
/// └── ...
/// ```
pub struct DayStore {
    root: PathBuf,
}

/// Outcome of [`DayStore::open_or_create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDocument {
    pub day: NaiveDate,
    pub path: PathBuf,
    /// Whether this call wrote the document.
    pub created: bool,
}

impl DayStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, day: NaiveDate) -> PathBuf {
        self.root.join(format!("{}.md", format_day(day)))
    }

    /// Create the root directory (and parents) if missing.
    pub fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| StoreError::io(&self.root, e))
    }

    /// Full text of the day's document, `None` if it doesn't exist.
    pub fn read_day(&self, day: NaiveDate) -> Result<Option<String>> {
        let path = self.path_for(day);
        match fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!("read {}", path.display());
                Ok(Some(text))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no document for {day}");
                Ok(None)
            }
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    /// Return the day's document, writing it first if it doesn't exist yet.
    ///
    /// A new document gets the memories of the previous `lookback_days - 1`
    /// days. An existing document is never rewritten.
    pub fn open_or_create(&self, day: NaiveDate, lookback_days: u32) -> Result<DayDocument> {
        let path = self.path_for(day);
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {
                return Ok(DayDocument {
                    day,
                    path,
                    created: false,
                });
            }
            Ok(_) => {
                return Err(StoreError::InvalidData(format!(
                    "{} exists but is not a file",
                    path.display()
                )));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(StoreError::io(path, e)),
        }

        let memories = collect_memories(day, lookback_days, self)?;
        let content = compose_day_document(&memories);

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                tracing::warn!("{} appeared while composing; leaving it as is", path.display());
                return Ok(DayDocument {
                    day,
                    path,
                    created: false,
                });
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };
        file.write_all(content.as_bytes())
            .map_err(|e| StoreError::io(&path, e))?;

        tracing::info!("created {}", path.display());
        Ok(DayDocument {
            day,
            path,
            created: true,
        })
    }
}

impl DocumentSource for DayStore {
    type Error = StoreError;

    fn read_day(&self, day: NaiveDate) -> Result<Option<String>> {
        DayStore::read_day(self, day)
    }
}
