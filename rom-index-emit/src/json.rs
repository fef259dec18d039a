use std::collections::BTreeMap;

use serde::Serialize;

use rom_index_core::{Library, RomEntry};

use crate::{EmitError, Emitter};

/// `roms_mapping.json`: systems keyed by name, each with a count and ROM list.
pub struct JsonEmitter;

impl JsonEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonEmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct SystemMapping<'a> {
    count: usize,
    roms: Vec<RomMapping<'a>>,
}

#[derive(Serialize)]
struct RomMapping<'a> {
    file: &'a str,
    size: u64,
    #[serde(skip_serializing_if = "Artwork::is_empty")]
    artwork: Artwork,
}

#[derive(Serialize)]
struct Artwork {
    #[serde(skip_serializing_if = "Option::is_none")]
    cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    screenshot: Option<String>,
}

impl Artwork {
    fn is_empty(&self) -> bool {
        self.cover.is_none() && self.screenshot.is_none()
    }
}

impl<'a> From<&'a RomEntry> for RomMapping<'a> {
    fn from(entry: &'a RomEntry) -> Self {
        let as_string = |p: &std::path::PathBuf| p.to_string_lossy().into_owned();
        Self {
            file: &entry.file_name,
            size: entry.size,
            artwork: Artwork {
                cover: entry.cover.as_ref().map(as_string),
                screenshot: entry.screenshot.as_ref().map(as_string),
            },
        }
    }
}

impl Emitter for JsonEmitter {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn default_file_name(&self) -> &'static str {
        "roms_mapping.json"
    }

    fn render(&self, library: &Library) -> Result<String, EmitError> {
        let mapping: BTreeMap<&str, SystemMapping<'_>> = library
            .systems()
            .iter()
            .map(|system| {
                let mapping = SystemMapping {
                    count: system.index.len(),
                    roms: system.index.iter().map(RomMapping::from).collect(),
                };
                (system.name.as_str(), mapping)
            })
            .collect();
        let mut json = serde_json::to_string_pretty(&mapping)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "tests/json_tests.rs"]
mod tests;
