//! Durable key/value storage backing the session
//!
//! The session's string entries live in a small JSON file. Batched writes
//! keep related keys consistent for concurrent readers.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Error, Result};

/// Environment variable overriding the session file location
pub const SESSION_PATH_VAR: &str = "KITCHEN_SESSION_PATH";

/// String key/value storage with all-or-nothing batch operations
pub trait KeyValueStorage: Send + Sync {
    /// Read a single entry
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `set` and drop `remove` as one step; missing keys are ignored
    fn update(&self, set: &[(&str, &str)], remove: &[&str]) -> Result<()>;

    fn set_entries(&self, entries: &[(&str, &str)]) -> Result<()> {
        self.update(entries, &[])
    }

    fn remove_entries(&self, keys: &[&str]) -> Result<()> {
        self.update(&[], keys)
    }
}

fn apply(entries: &mut HashMap<String, String>, set: &[(&str, &str)], remove: &[&str]) {
    for key in remove {
        entries.remove(*key);
    }
    for (key, value) in set {
        entries.insert((*key).to_string(), (*value).to_string());
    }
}

fn lock_poisoned() -> Error {
    Error::storage("storage lock poisoned")
}

// ============================================================================
// MemoryStorage
// ============================================================================

/// In-process storage, lost on exit
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| lock_poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn update(&self, set: &[(&str, &str)], remove: &[&str]) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| lock_poisoned())?;
        apply(&mut entries, set, remove);
        Ok(())
    }
}

// ============================================================================
// FileStorage
// ============================================================================

/// JSON file storage: `{"authToken": "...", "user": "{...}"}`
///
/// The whole map is cached in memory and rewritten on every change through a
/// temp file + rename, so a crash never leaves a half-written file behind.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open (or lazily create) the storage file at `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let entries = load_entries(&path);
        log::debug!(
            "[session:storage] Opened {} ({} entries)",
            path.display(),
            entries.len()
        );

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Open the storage at the default location
    pub fn open_default() -> Result<Self> {
        Self::open(default_session_path()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn load_entries(path: &Path) -> HashMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
        Err(e) => {
            log::warn!("[session:storage] Cannot read {}: {}", path.display(), e);
            return HashMap::new();
        }
    };

    if content.trim().is_empty() {
        return HashMap::new();
    }

    serde_json::from_str(&content).unwrap_or_else(|e| {
        log::warn!(
            "[session:storage] Ignoring unreadable session file {}: {}",
            path.display(),
            e
        );
        HashMap::new()
    })
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| lock_poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn update(&self, set: &[(&str, &str)], remove: &[&str]) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| lock_poisoned())?;
        let mut next = entries.clone();
        apply(&mut next, set, remove);
        if next == *entries {
            return Ok(());
        }
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}

/// Session file location: `$KITCHEN_SESSION_PATH`, else the platform data dir
pub fn default_session_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(SESSION_PATH_VAR) {
        return Ok(PathBuf::from(path));
    }

    let dirs = directories::ProjectDirs::from("com", "softwarecancook", "Kitchen")
        .ok_or_else(|| Error::config("Could not determine project directories"))?;

    Ok(dirs.data_dir().join("session.json"))
}
