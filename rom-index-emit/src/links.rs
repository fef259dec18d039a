//! Link targets for HTML and Markdown listings.

use std::path::{Component, Path, PathBuf};

/// Directory prefix for links into `root`, as seen from `base_dir`.
///
/// Falls back to `root` itself when no base is given or no relative path
/// exists (e.g., different drive letters).
pub fn link_root(root: &Path, base_dir: Option<&Path>) -> PathBuf {
    base_dir
        .and_then(|base| pathdiff::diff_paths(root, base))
        .unwrap_or_else(|| root.to_path_buf())
}

/// URL for `file` inside `dir`: `/`-separated, with the characters that
/// would break an href percent-encoded.
pub fn href(dir: &Path, file: &Path) -> String {
    let joined = dir.join(file);
    let mut parts: Vec<String> = Vec::new();
    let mut absolute = false;
    for component in joined.components() {
        match component {
            Component::RootDir => absolute = true,
            Component::CurDir => {}
            Component::Prefix(p) => parts.push(p.as_os_str().to_string_lossy().into_owned()),
            Component::ParentDir => parts.push("..".to_string()),
            Component::Normal(s) => parts.push(encode(&s.to_string_lossy())),
        }
    }
    let path = parts.join("/");
    if absolute { format!("/{path}") } else { path }
}

fn encode(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for c in segment.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '"' => out.push_str("%22"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            '[' => out.push_str("%5B"),
            ']' => out.push_str("%5D"),
            '\\' => out.push_str("%5C"),
            '|' => out.push_str("%7C"),
            _ => out.push(c),
        }
    }
    out
}
