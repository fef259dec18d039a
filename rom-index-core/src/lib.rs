//! Core data model for ROM collection indexes.
//!
//! A scan produces an [`Index`] of [`RomEntry`] values for one flat folder,
//! or a [`Library`] of per-system indexes for a ROMs root. Companion image
//! naming lives in [`media`].

pub mod entry;
pub mod error;
pub mod media;
pub mod util;

pub use entry::{Index, Library, RomEntry, SystemIndex};
pub use error::ScanError;
pub use media::{CompanionName, IMAGE_EXTENSIONS, ImageKind};
