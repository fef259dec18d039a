use thiserror::Error;

use rom_index_emit::EmitError;
use rom_index_lib::{ScanError, SettingsError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Scanning the ROMs root failed (missing root, ambiguous base names, I/O)
    #[error("{0}")]
    Scan(#[from] ScanError),

    /// Settings file could not be read or written
    #[error("Config error: {0}")]
    Settings(#[from] SettingsError),

    /// Writing an index file failed
    #[error("Output error: {0}")]
    Emit(#[from] EmitError),

    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
