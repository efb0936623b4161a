use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::store::TaskStore;

/// Error type for task file I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreIoError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not serialize tasks: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Read the task file. `Ok(None)` when the file does not exist.
pub fn read_tasks(path: &Path) -> Result<Option<TaskStore>, StoreIoError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read(path).map_err(|e| StoreIoError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    // Bad UTF-8 surfaces as a ParseError, not a ReadError.
    let store = serde_json::from_slice(&content).map_err(|e| StoreIoError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(Some(store))
}

/// Load the task file for a new session.
///
/// Never fails: a missing file gives an empty store, and an unreadable or
/// corrupt one gives an empty store plus a warning on stderr. A corrupt file
/// is copied to `<file>.bak` first, since the next save replaces it.
pub fn load_tasks(path: &Path) -> TaskStore {
    match read_tasks(path) {
        Ok(Some(store)) => store,
        Ok(None) => TaskStore::new(),
        Err(e @ StoreIoError::ParseError { .. }) => {
            let bak = backup_path(path);
            match fs::copy(path, &bak) {
                Ok(_) => eprintln!(
                    "warning: {} (backed up as {}), starting with an empty task list",
                    e,
                    bak.display()
                ),
                Err(copy_err) => eprintln!(
                    "warning: {} (backup to {} failed: {}), starting with an empty task list",
                    e,
                    bak.display(),
                    copy_err
                ),
            }
            TaskStore::new()
        }
        Err(e) => {
            eprintln!("warning: {}, starting with an empty task list", e);
            TaskStore::new()
        }
    }
}

/// Overwrite the task file with the whole store.
pub fn save_tasks(path: &Path, store: &TaskStore) -> Result<(), StoreIoError> {
    let content = serde_json::to_string_pretty(store)?;
    atomic_write(path, content.as_bytes()).map_err(|e| StoreIoError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// `tasklist.json` -> `tasklist.json.bak`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
