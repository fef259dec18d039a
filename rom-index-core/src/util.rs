/// Format a byte count the way the HTML and Markdown listings show it
/// (e.g., "12.00 KB", "1.50 MB").
///
/// Anything under one megabyte is shown in KB, so tiny files read "0.50 KB"
/// rather than switching to bytes.
pub fn format_size(bytes: u64) -> String {
    let kb = bytes as f64 / 1024.0;
    let mb = kb / 1024.0;
    if mb >= 1.0 {
        format!("{:.2} MB", mb)
    } else {
        format!("{:.2} KB", kb)
    }
}

/// Split a file name into `(stem, extension)` at the last dot.
///
/// Returns `None` for hidden files (`.foo`), names without a dot, and names
/// ending in a dot, since none of those have a usable base name.
pub fn split_extension(file_name: &str) -> Option<(&str, &str)> {
    if file_name.starts_with('.') {
        return None;
    }
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some((stem, ext))
}
