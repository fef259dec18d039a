//! Directory scanner for ROM collections.
//!
//! A folder is scanned flat: archives are the files whose extension is in
//! the configured set, and companion images are attached by exact base-name
//! equality. A library root is scanned one level deep, one system per
//! subfolder.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rom_index_core::media::parse_companion;
use rom_index_core::util::split_extension;
use rom_index_core::{ImageKind, Index, Library, RomEntry, ScanError, SystemIndex};

use crate::options::{CollisionPolicy, ScanOptions};

/// A regular file directly under the scanned folder.
struct FileInfo {
    name: String,
    size: u64,
}

/// A companion image candidate for one (base, kind) slot.
struct ImageCandidate {
    rank: usize,
    name: String,
}

/// Scan a folder with the default options.
pub fn scan(root: &Path) -> Result<Index, ScanError> {
    scan_with(root, &ScanOptions::default())
}

/// Scan a single flat folder and pair each archive with its companion images.
pub fn scan_with(root: &Path, options: &ScanOptions) -> Result<Index, ScanError> {
    ensure_dir(root)?;
    let files = list_files(root)?;

    let mut archives: BTreeMap<&str, Vec<&FileInfo>> = BTreeMap::new();
    let mut images: BTreeMap<(&str, ImageKind), Vec<ImageCandidate>> = BTreeMap::new();

    for file in &files {
        if let Some(companion) = parse_companion(&file.name) {
            let rank = companion.rank();
            images
                .entry((companion.base, companion.kind))
                .or_default()
                .push(ImageCandidate {
                    rank,
                    name: file.name.clone(),
                });
            continue;
        }
        if let Some((stem, ext)) = split_extension(&file.name) {
            if options.is_archive_extension(ext) {
                archives.entry(stem).or_default().push(file);
            }
        }
    }

    let mut entries = Vec::with_capacity(archives.len());
    for (base, candidates) in &archives {
        let Some(archive) = pick_archive(base, candidates, options.collision)? else {
            continue;
        };
        let mut entry = RomEntry::new(*base, archive.name.clone(), archive.size);

        for kind in ImageKind::ALL {
            let chosen = images
                .remove(&(*base, kind))
                .and_then(|found| pick_image(base, kind, found));
            if let Some(path) = chosen {
                entry = entry.with_image(kind, path);
            }
        }
        entries.push(entry);
    }

    for ((base, kind), orphans) in &images {
        for orphan in orphans {
            log::debug!(
                "Ignoring {} '{}': no archive named '{}'",
                kind,
                orphan.name,
                base
            );
        }
    }

    let index = Index::from_entries(root, entries)?;
    log::debug!(
        "Scanned {}: {} ROMs, {} with artwork",
        root.display(),
        index.len(),
        index.artwork_count()
    );
    Ok(index)
}

/// Scan a ROMs root whose immediate subfolders are systems.
///
/// Subfolders without any archive are left out of the library.
pub fn scan_library(root: &Path, options: &ScanOptions) -> Result<Library, ScanError> {
    ensure_dir(root)?;

    let mut folders: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| ScanError::io(root, e))? {
        let entry = entry.map_err(|e| ScanError::io(root, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        folders.push((name, path));
    }
    folders.sort();

    let mut systems = Vec::new();
    for (name, path) in folders {
        let index = scan_with(&path, options)?;
        if index.is_empty() {
            log::debug!("Skipping {}: no ROMs", name);
            continue;
        }
        systems.push(SystemIndex { name, index });
    }

    let library = Library::new(systems);
    log::debug!(
        "Scanned library {}: {} ROMs across {} systems",
        root.display(),
        library.rom_count(),
        library.system_count()
    );
    Ok(library)
}

fn ensure_dir(root: &Path) -> Result<(), ScanError> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ScanError::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ScanError::NotFound(root.to_path_buf())),
        Err(e) => Err(ScanError::io(root, e)),
    }
}

/// List regular files (following symlinks) directly under `dir`, sorted by name.
fn list_files(dir: &Path) -> Result<Vec<FileInfo>, ScanError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ScanError::io(dir, e))? {
        let entry = entry.map_err(|e| ScanError::io(dir, e))?;
        let path = entry.path();
        let meta = match fs::metadata(&path) {
            Ok(m) => m,
            Err(e) => {
                // Dangling symlinks and races with deletion
                log::debug!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };
        if !meta.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            log::debug!("Skipping non-UTF-8 file name: {}", path.display());
            continue;
        };
        files.push(FileInfo {
            name,
            size: meta.len(),
        });
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// Apply the collision policy to the archives sharing one base name.
///
/// `candidates` is in file-name order, so "first" is deterministic.
fn pick_archive<'a>(
    base: &str,
    candidates: &[&'a FileInfo],
    policy: CollisionPolicy,
) -> Result<Option<&'a FileInfo>, ScanError> {
    let Some((&first, rest)) = candidates.split_first() else {
        return Ok(None);
    };
    if rest.is_empty() {
        return Ok(Some(first));
    }
    match policy {
        CollisionPolicy::Fail => Err(ScanError::ambiguous(
            base,
            candidates.iter().map(|f| f.name.clone()).collect(),
        )),
        CollisionPolicy::FirstWins => {
            for skipped in rest {
                log::warn!(
                    "Duplicate base name '{}': keeping '{}', skipping '{}'",
                    base,
                    first.name,
                    skipped.name
                );
            }
            Ok(Some(first))
        }
    }
}

/// Choose one image among several of the same kind: best extension, then name.
fn pick_image(base: &str, kind: ImageKind, mut found: Vec<ImageCandidate>) -> Option<PathBuf> {
    found.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.name.cmp(&b.name)));
    let mut found = found.into_iter();
    let chosen = found.next()?.name;
    for shadowed in found {
        log::debug!(
            "'{}' has several {} images; using '{}', ignoring '{}'",
            base,
            kind,
            chosen,
            shadowed.name
        );
    }
    Some(PathBuf::from(chosen))
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
