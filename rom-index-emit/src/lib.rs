//! Listing generators for scanned ROM collections.
//!
//! Each [`Emitter`] renders a [`Library`] into one text file. A flat scan is
//! emitted by wrapping its index with [`Library::single`].

pub mod error;
pub mod html;
pub mod json;
pub mod links;
pub mod markdown;

pub use error::EmitError;
pub use html::HtmlEmitter;
pub use json::JsonEmitter;
pub use markdown::MarkdownEmitter;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rom_index_core::Library;

/// Trait for index listing generators.
pub trait Emitter {
    fn name(&self) -> &'static str;

    /// File name written when the caller doesn't pick one.
    fn default_file_name(&self) -> &'static str;

    /// Render the whole listing.
    fn render(&self, library: &Library) -> Result<String, EmitError>;

    /// Render and write to `path`, replacing any existing file atomically.
    fn write(&self, library: &Library, path: &Path) -> Result<(), EmitError> {
        let contents = self.render(library)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}

/// Options shared by the emitters that produce links.
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    /// Directory the listing will be written to; links are made relative to it.
    pub base_dir: Option<PathBuf>,
    /// Include a "Generated on" line (HTML only).
    pub timestamp: bool,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmitFormat {
    Json,
    Html,
    Markdown,
}

impl EmitFormat {
    pub const ALL: [EmitFormat; 3] = [EmitFormat::Json, EmitFormat::Html, EmitFormat::Markdown];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmitFormat::Json => "json",
            EmitFormat::Html => "html",
            EmitFormat::Markdown => "markdown",
        }
    }

    pub fn emitter(&self, options: &EmitOptions) -> Box<dyn Emitter> {
        match self {
            EmitFormat::Json => Box::new(JsonEmitter::new()),
            EmitFormat::Html => Box::new(
                HtmlEmitter::new()
                    .base_dir(options.base_dir.clone())
                    .timestamp(options.timestamp),
            ),
            EmitFormat::Markdown => {
                Box::new(MarkdownEmitter::new().base_dir(options.base_dir.clone()))
            }
        }
    }
}

impl fmt::Display for EmitFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmitFormat {
    type Err = EmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(EmitFormat::Json),
            "html" | "htm" => Ok(EmitFormat::Html),
            "markdown" | "md" => Ok(EmitFormat::Markdown),
            _ => Err(EmitError::UnknownFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<EmitFormat>().unwrap(), EmitFormat::Json);
        assert_eq!("md".parse::<EmitFormat>().unwrap(), EmitFormat::Markdown);
        assert_eq!(" html ".parse::<EmitFormat>().unwrap(), EmitFormat::Html);
        assert!(matches!(
            "xml".parse::<EmitFormat>(),
            Err(EmitError::UnknownFormat(s)) if s == "xml"
        ));
    }

    #[test]
    fn test_emitter_file_names() {
        let opts = EmitOptions::default();
        let names: Vec<_> = EmitFormat::ALL
            .iter()
            .map(|f| f.emitter(&opts).default_file_name())
            .collect();
        assert_eq!(names, vec!["roms_mapping.json", "index.html", "INDEX.md"]);
    }
}
