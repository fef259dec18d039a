//! Settings file (`~/.config/rom-index/settings.toml`).
//!
//! Every key is optional; a missing file means defaults. Writes go through
//! `toml::Value` so keys this version doesn't know about survive a save.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SettingsError;
use crate::options::{CollisionPolicy, ScanOptions};

/// Folder name the indexer looks for in the working directory when no root
/// is configured.
pub const DEFAULT_ROOT_NAME: &str = "ROMs";

/// Parsed settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub index: IndexSettings,
}

/// The `[index]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IndexSettings {
    /// ROMs root to scan when `--root` is not given.
    pub root: Option<PathBuf>,
    /// Archive extensions; replaces the built-in set when present.
    pub extensions: Option<Vec<String>>,
    pub collision: CollisionPolicy,
}

/// Canonical path to the settings file: `~/.config/rom-index/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("rom-index").join("settings.toml")
}

impl Settings {
    /// Load from the canonical settings path.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }

    /// Load from `path`. A missing file yields defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Scan options derived from the `[index]` table.
    pub fn scan_options(&self) -> ScanOptions {
        let options = ScanOptions::new().collision(self.index.collision);
        match &self.index.extensions {
            Some(exts) => options.extensions(exts),
            None => options,
        }
    }

    /// Resolve the ROMs root relative to the current working directory.
    pub fn resolve_root(&self, cli_override: Option<PathBuf>) -> PathBuf {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        self.resolve_root_in(&cwd, cli_override)
    }

    /// Resolve the ROMs root using a priority chain:
    ///
    /// 1. CLI override (if `Some`)
    /// 2. `index.root` from the settings file
    /// 3. `<cwd>/ROMs`, if it is a directory
    /// 4. `cwd` itself
    pub fn resolve_root_in(&self, cwd: &Path, cli_override: Option<PathBuf>) -> PathBuf {
        if let Some(p) = cli_override {
            return p;
        }
        if let Some(p) = &self.index.root {
            return cwd.join(p);
        }
        let conventional = cwd.join(DEFAULT_ROOT_NAME);
        if conventional.is_dir() {
            return conventional;
        }
        cwd.to_path_buf()
    }
}

/// Save (or clear) `index.root` in the canonical settings file.
pub fn save_root(root: Option<&Path>) -> Result<(), SettingsError> {
    save_root_to(&settings_path(), root)
}

/// Save (or clear) `index.root` in `settings`, preserving every other key.
pub fn save_root_to(settings: &Path, root: Option<&Path>) -> Result<(), SettingsError> {
    let mut doc: toml::Value = match std::fs::read_to_string(settings) {
        Ok(contents) => toml::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: settings.to_path_buf(),
            source,
        })?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            toml::Value::Table(Default::default())
        }
        Err(e) => return Err(e.into()),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| SettingsError::other("settings.toml root is not a table"))?;
    let index = table
        .entry("index")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let index_table = index
        .as_table_mut()
        .ok_or_else(|| SettingsError::other("[index] is not a table"))?;

    match root {
        Some(p) => {
            index_table.insert(
                "root".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            index_table.remove("root");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load a settings file as a pretty-printed TOML string for display.
pub fn load_settings_string(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    let doc: toml::Value = toml::from_str(&contents).ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
