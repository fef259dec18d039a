pub mod error;
pub mod options;
pub mod scanner;
pub mod settings;

pub use error::SettingsError;
pub use options::{CollisionPolicy, DEFAULT_EXTENSIONS, ScanOptions};
pub use scanner::{scan, scan_library, scan_with};
pub use settings::Settings;

// Re-export core types so frontends only need this crate.
pub use rom_index_core::{ImageKind, Index, Library, RomEntry, ScanError, SystemIndex};
