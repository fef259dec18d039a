use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use rom_index_core::util::format_size;
use rom_index_core::{ImageKind, Library, RomEntry};

use crate::links::{href, link_root};
use crate::{EmitError, Emitter};

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; margin: 20px; }
        .system { margin-bottom: 20px; }
        .system-header {
            background: #f0f0f0;
            padding: 10px;
            cursor: pointer;
            user-select: none;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }
        .system-header:hover { background: #e0e0e0; }
        .system-content { display: block; margin-left: 20px; overflow-x: auto; }
        .caret { transition: transform 0.2s; font-size: 20px; }
        .collapsed .caret { transform: rotate(-90deg); }
        .collapsed + .system-content { display: none; }
        .artwork { max-width: 100px; max-height: 100px; margin: 0 10px; }
        table { border-collapse: collapse; width: 100%; }
        th, td { padding: 8px; text-align: left; border-bottom: 1px solid #ddd; }
        th { background-color: #f5f5f5; }
        .size { color: #666; }
        .timestamp { color: #999; font-size: 0.8em; }
"#;

const SCRIPT: &str = r#"        function toggleSystem(systemId) {
            const header = document.querySelector(`[data-system="${systemId}"]`);
            header.classList.toggle('collapsed');
        }
"#;

/// `index.html`: one collapsible table per system with artwork thumbnails.
pub struct HtmlEmitter {
    base_dir: Option<PathBuf>,
    timestamp: bool,
}

impl HtmlEmitter {
    pub fn new() -> Self {
        Self {
            base_dir: None,
            timestamp: true,
        }
    }

    /// Make links relative to the directory the page will be written to.
    pub fn base_dir(mut self, base_dir: Option<PathBuf>) -> Self {
        self.base_dir = base_dir;
        self
    }

    /// Include a "Generated on" line. Disable for reproducible output.
    pub fn timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }
}

impl Default for HtmlEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for HtmlEmitter {
    fn name(&self) -> &'static str {
        "HTML"
    }

    fn default_file_name(&self) -> &'static str {
        "index.html"
    }

    fn render(&self, library: &Library) -> Result<String, EmitError> {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("    <title>ROMs Index</title>\n");
        html.push_str("    <meta charset=\"utf-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        html.push_str("    <style>\n");
        html.push_str(STYLE);
        html.push_str("    </style>\n    <script>\n");
        html.push_str(SCRIPT);
        html.push_str("    </script>\n</head>\n<body>\n");
        html.push_str("    <h1>ROMs Index</h1>\n");
        if self.timestamp {
            let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            let _ = writeln!(html, "    <p class=\"timestamp\">Generated on {}</p>", now);
        }

        for (position, system) in library.systems().iter().enumerate() {
            let id = system_id(position, &system.name);
            let dir = link_root(system.index.root(), self.base_dir.as_deref());
            let _ = write!(
                html,
                concat!(
                    "    <div class=\"system\">\n",
                    "        <div class=\"system-header\" data-system=\"{id}\" onclick=\"toggleSystem('{id}')\">\n",
                    "            <span>&#128193; {name} ({count} ROMs)</span>\n",
                    "            <span class=\"caret\">&#9660;</span>\n",
                    "        </div>\n",
                    "        <div class=\"system-content\" id=\"{id}\">\n",
                    "            <table>\n",
                    "                <tr><th>ROM</th><th>Size</th><th>Artwork</th></tr>\n",
                ),
                id = id,
                name = escape_html(&system.name),
                count = system.index.len(),
            );
            for entry in system.index.iter() {
                write_row(&mut html, entry, &dir);
            }
            html.push_str("            </table>\n        </div>\n    </div>\n");
        }

        html.push_str("</body>\n</html>\n");
        Ok(html)
    }
}

fn write_row(html: &mut String, entry: &RomEntry, dir: &Path) {
    let rom_href = href(dir, Path::new(&entry.file_name));
    let mut artwork = String::new();
    // Cover first, then screenshot
    for kind in [ImageKind::Cover, ImageKind::Screenshot] {
        if let Some(image) = entry.image(kind) {
            let src = escape_html(&href(dir, image));
            let title = match kind {
                ImageKind::Cover => "Cover",
                ImageKind::Screenshot => "Screenshot",
            };
            let _ = write!(
                artwork,
                "<a href=\"{src}\"><img src=\"{src}\" class=\"artwork\" alt=\"{title}\" title=\"{title}\"></a>"
            );
        }
    }
    let _ = writeln!(
        html,
        "                <tr><td><a href=\"{}\">{}</a></td><td class=\"size\">{}</td><td>{}</td></tr>",
        escape_html(&rom_href),
        escape_html(&entry.file_name),
        format_size(entry.size),
        artwork,
    );
}

/// Element id for a system section: its position, then the name with anything
/// outside `[A-Za-z0-9-]` replaced by `_`.
fn system_id(position: usize, name: &str) -> String {
    let id: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("sys-{position}-{id}")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "tests/html_tests.rs"]
mod tests;
