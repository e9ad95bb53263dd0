//! Persisted preferences — the key-value boundary.
//!
//! The SDK persists exactly one value: the selected display currency. The
//! store itself is an external collaborator behind [`PreferenceStore`]; the
//! crate ships an in-memory implementation for apps that keep the preference
//! per-session and a whole-file JSON implementation for apps that keep it
//! across launches.

use crate::shared::TickerSymbol;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key under which the selected display currency is stored.
pub const SELECTED_CURRENCY_KEY: &str = "selected_currency";

/// Default display currency when no preference has been persisted.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Preference store errors.
#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A string key-value store holding persisted preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// Read the selected display currency, falling back to [`DEFAULT_CURRENCY`]
/// when no value has been persisted.
///
/// The default is resolved here, at load time — callers never observe an
/// unset preference.
pub fn load_selected_currency(store: &impl PreferenceStore) -> Result<TickerSymbol, PrefsError> {
    Ok(store
        .get(SELECTED_CURRENCY_KEY)?
        .map(TickerSymbol::from)
        .unwrap_or_else(|| TickerSymbol::from(DEFAULT_CURRENCY)))
}

/// Persist the selected display currency.
pub fn store_selected_currency(
    store: &mut impl PreferenceStore,
    currency: &TickerSymbol,
) -> Result<(), PrefsError> {
    store.set(SELECTED_CURRENCY_KEY, currency.as_str())
}

// ─── MemoryPrefs ─────────────────────────────────────────────────────────────

/// In-memory preference store. Values live for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    values: HashMap<String, String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ─── JsonFilePrefs ───────────────────────────────────────────────────────────

/// File-backed preference store: one JSON object, rewritten on every `set`.
///
/// The file holds so little data (a single currency code) that whole-file
/// rewrites are the simplest correct option.
#[derive(Debug)]
pub struct JsonFilePrefs {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonFilePrefs {
    /// Open the store at `path`, loading any existing values. A missing file
    /// is an empty store, not an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PrefsError> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, values })
    }

    fn flush(&self) -> Result<(), PrefsError> {
        let mut file = fs::File::create(&self.path)?;
        let contents = serde_json::to_string_pretty(&self.values)?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }
}

impl PreferenceStore for JsonFilePrefs {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_prefs_path(tag: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("coinwatch-prefs-{}-{}.json", tag, std::process::id()));
        path
    }

    #[test]
    fn test_load_defaults_to_usd_when_unset() {
        let prefs = MemoryPrefs::new();
        let currency = load_selected_currency(&prefs).unwrap();
        assert_eq!(currency.as_str(), "USD");
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut prefs = MemoryPrefs::new();
        store_selected_currency(&mut prefs, &TickerSymbol::from("EUR")).unwrap();
        let currency = load_selected_currency(&prefs).unwrap();
        assert_eq!(currency.as_str(), "EUR");
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let path = temp_prefs_path("reopen");
        let _ = fs::remove_file(&path);

        {
            let mut prefs = JsonFilePrefs::open(&path).unwrap();
            store_selected_currency(&mut prefs, &TickerSymbol::from("EUR")).unwrap();
        }

        // A fresh store load reads back the same value.
        let reopened = JsonFilePrefs::open(&path).unwrap();
        let currency = load_selected_currency(&reopened).unwrap();
        assert_eq!(currency.as_str(), "EUR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let path = temp_prefs_path("missing");
        let _ = fs::remove_file(&path);

        let prefs = JsonFilePrefs::open(&path).unwrap();
        assert!(prefs.get(SELECTED_CURRENCY_KEY).unwrap().is_none());
        let currency = load_selected_currency(&prefs).unwrap();
        assert_eq!(currency.as_str(), "USD");
    }
}
