use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use rom_index_core::media::is_image_extension;

/// Archive extensions indexed when no override is configured.
///
/// `md` (Mega Drive) is left out so `README.md` and a written `INDEX.md` are
/// never picked up; add it through settings or `-e` when needed.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "zip", "dosz", "7z", "bin", "gen", "smd", "sms", "gg", "nes", "sfc", "smc", "gb", "gbc",
    "gba", "n64", "z64", "v64", "pce", "a26", "ch8", "ws", "wsc", "ngp", "ngc", "col", "int",
    "vec", "lnx", "tic", "wasm",
];

/// What to do when two archives in one folder share a base name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Abort the scan with [`ScanError::Ambiguous`](rom_index_core::ScanError::Ambiguous).
    #[default]
    Fail,
    /// Keep the archive whose file name sorts first and warn about the rest.
    FirstWins,
}

impl CollisionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionPolicy::Fail => "fail",
            CollisionPolicy::FirstWins => "first-wins",
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "fail" => Ok(CollisionPolicy::Fail),
            "first-wins" | "first" => Ok(CollisionPolicy::FirstWins),
            other => Err(format!(
                "unknown collision policy '{other}' (expected 'fail' or 'first-wins')"
            )),
        }
    }
}

/// Options that control how a folder is scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Lowercase archive extensions, without a leading dot.
    pub extensions: HashSet<String>,
    pub collision: CollisionPolicy,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: extension_set(DEFAULT_EXTENSIONS),
            collision: CollisionPolicy::default(),
        }
    }
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the archive extension set. Image extensions are dropped so a
    /// companion can never be mistaken for an archive.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extension_set(extensions);
        self
    }

    pub fn collision(mut self, collision: CollisionPolicy) -> Self {
        self.collision = collision;
        self
    }

    /// Whether `ext` (any case) names an archive.
    pub fn is_archive_extension(&self, ext: &str) -> bool {
        self.extensions.contains(&ext.to_lowercase())
    }
}

/// Normalize extensions: lowercase, strip a leading dot, skip blanks and images.
fn extension_set<I, S>(extensions: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extensions
        .into_iter()
        .map(|e| e.as_ref().trim().trim_start_matches('.').to_lowercase())
        .filter(|e| !e.is_empty() && !is_image_extension(e))
        .collect()
}
