use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScanError;
use crate::media::ImageKind;

/// One ROM archive and its companion images.
///
/// Image paths are relative to the scanned folder, so they can be written
/// into listings as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomEntry {
    /// Archive file name without its last extension; the join key.
    pub base_name: String,
    /// Archive file name with extension.
    pub file_name: String,
    /// Archive size on disk in bytes.
    pub size: u64,
    pub screenshot: Option<PathBuf>,
    pub cover: Option<PathBuf>,
}

impl RomEntry {
    pub fn new(base_name: impl Into<String>, file_name: impl Into<String>, size: u64) -> Self {
        Self {
            base_name: base_name.into(),
            file_name: file_name.into(),
            size,
            screenshot: None,
            cover: None,
        }
    }

    pub fn with_image(mut self, kind: ImageKind, path: impl Into<PathBuf>) -> Self {
        let path = Some(path.into());
        match kind {
            ImageKind::Screenshot => self.screenshot = path,
            ImageKind::Cover => self.cover = path,
        }
        self
    }

    /// Human-readable name: underscores become spaces.
    pub fn display_name(&self) -> String {
        self.base_name.replace('_', " ").trim().to_string()
    }

    pub fn image(&self, kind: ImageKind) -> Option<&Path> {
        match kind {
            ImageKind::Screenshot => self.screenshot.as_deref(),
            ImageKind::Cover => self.cover.as_deref(),
        }
    }

    pub fn has_artwork(&self) -> bool {
        self.screenshot.is_some() || self.cover.is_some()
    }
}

/// All ROM entries found in one flat folder, ordered by base name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    root: PathBuf,
    entries: Vec<RomEntry>,
}

impl Index {
    /// Build an index, sorting entries by base name.
    ///
    /// Fails with [`ScanError::Ambiguous`] if two entries share a base name.
    pub fn from_entries(root: impl Into<PathBuf>, mut entries: Vec<RomEntry>) -> Result<Self, ScanError> {
        entries.sort_by(|a, b| {
            a.base_name
                .cmp(&b.base_name)
                .then_with(|| a.file_name.cmp(&b.file_name))
        });
        if let Some(pair) = entries
            .windows(2)
            .find(|w| w[0].base_name == w[1].base_name)
        {
            let base = &pair[0].base_name;
            let files = entries
                .iter()
                .filter(|e| &e.base_name == base)
                .map(|e| e.file_name.clone())
                .collect();
            return Err(ScanError::ambiguous(base.clone(), files));
        }
        Ok(Self {
            root: root.into(),
            entries,
        })
    }

    /// The folder that was scanned.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Folder name of the root, used as the system name for flat scans.
    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string())
    }

    pub fn entries(&self) -> &[RomEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RomEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by exact base name.
    pub fn get(&self, base_name: &str) -> Option<&RomEntry> {
        self.entries
            .binary_search_by(|e| e.base_name.as_str().cmp(base_name))
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Number of entries with at least one companion image.
    pub fn artwork_count(&self) -> usize {
        self.entries.iter().filter(|e| e.has_artwork()).count()
    }
}

impl<'a> IntoIterator for &'a Index {
    type Item = &'a RomEntry;
    type IntoIter = std::slice::Iter<'a, RomEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The index of one system folder inside a library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemIndex {
    /// Folder name (e.g., "Sega - Mega Drive - Genesis").
    pub name: String,
    pub index: Index,
}

/// Per-system indexes for a ROMs root, ordered by system name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    systems: Vec<SystemIndex>,
}

impl Library {
    pub fn new(mut systems: Vec<SystemIndex>) -> Self {
        systems.sort_by(|a, b| a.name.cmp(&b.name));
        Self { systems }
    }

    /// Wrap a flat index as a one-system library named after its folder.
    pub fn single(index: Index) -> Self {
        Self {
            systems: vec![SystemIndex {
                name: index.name(),
                index,
            }],
        }
    }

    pub fn systems(&self) -> &[SystemIndex] {
        &self.systems
    }

    pub fn system(&self, name: &str) -> Option<&Index> {
        self.systems
            .iter()
            .find(|s| s.name == name)
            .map(|s| &s.index)
    }

    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    pub fn rom_count(&self) -> usize {
        self.systems.iter().map(|s| s.index.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/entry_tests.rs"]
mod tests;
