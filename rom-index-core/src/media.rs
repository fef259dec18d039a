//! Companion image naming.
//!
//! A companion image sits next to its archive and is named
//! `<base>-screenshot.<ext>` or `<base>-cover.<ext>`. The suffix and the
//! extension are matched case-insensitively; the base is returned untouched
//! so callers can join on it exactly.

use serde::{Deserialize, Serialize};

use crate::util::split_extension;

/// Image extensions accepted for companion images, in preference order.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Kind of companion image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    /// In-game screenshot
    Screenshot,
    /// Box or title art
    Cover,
}

impl ImageKind {
    pub const ALL: [ImageKind; 2] = [ImageKind::Screenshot, ImageKind::Cover];

    /// File name suffix that follows the base name (without extension).
    pub fn suffix(&self) -> &'static str {
        match self {
            ImageKind::Screenshot => "-screenshot",
            ImageKind::Cover => "-cover",
        }
    }

    /// Lowercase label used in listings and JSON keys.
    pub fn label(&self) -> &'static str {
        match self {
            ImageKind::Screenshot => "screenshot",
            ImageKind::Cover => "cover",
        }
    }
}

impl std::fmt::Display for ImageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A file name recognized as a companion image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionName<'a> {
    /// Base name of the archive this image belongs to (case preserved).
    pub base: &'a str,
    pub kind: ImageKind,
    /// Lowercased image extension.
    pub extension: String,
}

impl CompanionName<'_> {
    /// Position of this image's extension in [`IMAGE_EXTENSIONS`]; lower wins.
    pub fn rank(&self) -> usize {
        extension_rank(&self.extension)
    }
}

/// Whether `ext` (any case, no leading dot) is an accepted image extension.
pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

/// Preference rank of an image extension. Unknown extensions sort last.
pub fn extension_rank(ext: &str) -> usize {
    IMAGE_EXTENSIONS
        .iter()
        .position(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(IMAGE_EXTENSIONS.len())
}

/// Parse a file name as a companion image.
///
/// Returns `None` if the extension is not an image extension, the stem does
/// not end with a known suffix, or nothing precedes the suffix.
pub fn parse_companion(file_name: &str) -> Option<CompanionName<'_>> {
    let (stem, ext) = split_extension(file_name)?;
    if !is_image_extension(ext) {
        return None;
    }

    ImageKind::ALL.into_iter().find_map(|kind| {
        let suffix = kind.suffix();
        let cut = stem.len().checked_sub(suffix.len())?;
        if cut == 0 || !stem.is_char_boundary(cut) {
            return None;
        }
        let (base, tail) = stem.split_at(cut);
        tail.eq_ignore_ascii_case(suffix).then(|| CompanionName {
            base,
            kind,
            extension: ext.to_ascii_lowercase(),
        })
    })
}

#[cfg(test)]
#[path = "tests/media_tests.rs"]
mod tests;
