//! Local Settings Storage
//!
//! Device-local key/value storage plus the settings codec on top of it.
//! Settings are kept under one key as a flat JSON object; a missing or
//! unreadable entry yields default settings instead of an error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use adapt_a11y::AccessibilitySettings;

use crate::EngineError;

/// String key/value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, EngineError>;

    fn set(&mut self, key: &str, value: String) -> Result<(), EngineError>;

    fn remove(&mut self, key: &str) -> Result<(), EngineError>;
}

/// Volatile storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, EngineError> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), EngineError> {
        self.items.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), EngineError> {
        self.items.remove(key);
        Ok(())
    }
}

/// Storage backed by one JSON object file, rewritten on every change.
///
/// Memory only changes after the file write succeeds.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: HashMap<String, String>,
}

impl FileStore {
    /// Open `path`. A missing file starts empty. An unparsable one is copied
    /// to [`FileStore::backup_path`] first and then also starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, EngineError> {
        let path = path.into();
        let items = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(e) => {
                    let backup = Self::backup_path(&path);
                    std::fs::write(&backup, &raw)?;
                    tracing::warn!(
                        path = %path.display(),
                        backup = %backup.display(),
                        error = %e,
                        "storage file unreadable; kept a copy and starting empty"
                    );
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unparsable file is preserved: `<path>.bak`
    pub fn backup_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }

    fn write(&self, items: &HashMap<String, String>) -> Result<(), EngineError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let raw = serde_json::to_string_pretty(items)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, EngineError> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), EngineError> {
        let mut next = self.items.clone();
        next.insert(key.to_string(), value);
        self.write(&next)?;
        self.items = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), EngineError> {
        if !self.items.contains_key(key) {
            return Ok(());
        }
        let mut next = self.items.clone();
        next.remove(key);
        self.write(&next)?;
        self.items = next;
        Ok(())
    }
}

/// Settings codec over a [`KeyValueStore`]
#[derive(Debug)]
pub struct SettingsStorage<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SettingsStorage<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Restore settings; absent or malformed entries give the defaults
    pub fn load(&self) -> AccessibilitySettings {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return AccessibilitySettings::default(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "settings storage unavailable; using defaults");
                return AccessibilitySettings::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(key = %self.key, error = %e, "malformed stored settings; using defaults");
            AccessibilitySettings::default()
        })
    }

    pub fn save(&mut self, settings: &AccessibilitySettings) -> Result<(), EngineError> {
        let raw = serde_json::to_string(settings)?;
        self.store.set(&self.key, raw)
    }

    pub fn clear(&mut self) -> Result<(), EngineError> {
        self.store.remove(&self.key)
    }
}
