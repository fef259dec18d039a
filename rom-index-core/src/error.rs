use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning a ROM folder.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root does not exist
    #[error("Directory not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The scan root exists but is a file or something else
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Two or more archives share a base name
    #[error("Ambiguous base name '{base_name}': {}", .files.join(", "))]
    Ambiguous {
        base_name: String,
        files: Vec<String>,
    },

    /// Listing or reading metadata failed
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn ambiguous(base_name: impl Into<String>, mut files: Vec<String>) -> Self {
        files.sort();
        Self::Ambiguous {
            base_name: base_name.into(),
            files,
        }
    }
}
