//! File-backed key/value preferences. The only key in use today is the
//! interface language.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::BookingError;
use crate::i18n::Language;

pub const LANGUAGE_KEY: &str = "language";
pub const PREFS_ENV: &str = "SKYVOYAGE_PREFS";

/// Resolves the preference file: explicit path, then `SKYVOYAGE_PREFS`,
/// then [`default_path`].
pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = std::env::var_os(PREFS_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    default_path()
}

/// `skyvoyage/prefs.json` under the platform config directory, or the
/// working directory when the platform has none.
pub fn default_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("skyvoyage").join("prefs.json"),
        None => PathBuf::from("skyvoyage-prefs.json"),
    }
}

#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PreferenceStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, BookingError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|e| {
                BookingError::Preferences(format!("{} is not valid JSON ({e})", path.display()))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no preference file yet");
                BTreeMap::new()
            }
            Err(e) => {
                return Err(BookingError::Preferences(format!(
                    "cannot read {} ({e})",
                    path.display()
                )))
            }
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Stores `value` under `key` and writes the whole store back to disk.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), BookingError> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn save(&self) -> Result<(), BookingError> {
        let io_err = |e: std::io::Error| {
            BookingError::Preferences(format!("cannot write {} ({e})", self.path.display()))
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json).map_err(io_err)?;
        info!(path = %self.path.display(), "preferences saved");
        Ok(())
    }

    /// Saved language, falling back to English when unset or unrecognised.
    pub fn language(&self) -> Language {
        match self.get(LANGUAGE_KEY) {
            Some(code) => Language::from_code(code).unwrap_or_else(|_| {
                warn!(code, "ignoring unknown saved language");
                Language::default()
            }),
            None => Language::default(),
        }
    }

    pub fn set_language(&mut self, language: Language) -> Result<(), BookingError> {
        self.set(LANGUAGE_KEY, language.code())
    }
}
