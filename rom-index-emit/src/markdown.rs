use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use rom_index_core::util::format_size;
use rom_index_core::{ImageKind, Library, RomEntry};

use crate::links::{href, link_root};
use crate::{EmitError, Emitter};

/// `INDEX.md`: a heading and table per system.
pub struct MarkdownEmitter {
    base_dir: Option<PathBuf>,
}

impl MarkdownEmitter {
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    pub fn base_dir(mut self, base_dir: Option<PathBuf>) -> Self {
        self.base_dir = base_dir;
        self
    }
}

impl Default for MarkdownEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for MarkdownEmitter {
    fn name(&self) -> &'static str {
        "Markdown"
    }

    fn default_file_name(&self) -> &'static str {
        "INDEX.md"
    }

    fn render(&self, library: &Library) -> Result<String, EmitError> {
        let mut md = String::from("# ROMs Index\n");
        if library.is_empty() {
            md.push_str("\nNo ROMs found.\n");
        }

        for system in library.systems() {
            let dir = link_root(system.index.root(), self.base_dir.as_deref());
            let _ = writeln!(
                md,
                "\n## {} ({} ROMs)\n",
                escape_markdown(&system.name),
                system.index.len()
            );
            md.push_str("| ROM | Size | Screenshot | Cover |\n");
            md.push_str("|---|---:|---|---|\n");
            for entry in system.index.iter() {
                let _ = writeln!(
                    md,
                    "| {} | {} | {} | {} |",
                    link(&dir, Path::new(&entry.file_name)),
                    format_size(entry.size),
                    image_cell(entry, ImageKind::Screenshot, &dir),
                    image_cell(entry, ImageKind::Cover, &dir),
                );
            }
        }
        Ok(md)
    }
}

fn image_cell(entry: &RomEntry, kind: ImageKind, dir: &Path) -> String {
    entry
        .image(kind)
        .map(|path| link(dir, path))
        .unwrap_or_else(|| "-".to_string())
}

fn link(dir: &Path, file: &Path) -> String {
    format!(
        "[{}]({})",
        escape_markdown(&file.to_string_lossy()),
        href(dir, file)
    )
}

/// Escape characters that would end a table cell or a link label.
fn escape_markdown(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '|' | '[' | ']' | '\\' | '*' | '_' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
