use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_index_emit::{EmitFormat, EmitOptions};

use crate::CliError;
use crate::cli_types::ScanArgs;

use super::{Context, scan_root};

/// Formats written when `--format` is not given.
const DEFAULT_FORMATS: &[EmitFormat] = &[EmitFormat::Json, EmitFormat::Html];

/// Run the index command: scan, then write one file per requested format.
pub(crate) fn run_index(
    ctx: &Context,
    scan: &ScanArgs,
    formats: Option<Vec<EmitFormat>>,
    out_dir: Option<PathBuf>,
    no_timestamp: bool,
) -> Result<(), CliError> {
    let result = scan_root(ctx, scan)?;

    let out_dir = match out_dir {
        Some(dir) => std::path::absolute(dir)?,
        None => default_out_dir(&result.root),
    };
    let options = EmitOptions {
        base_dir: Some(out_dir.clone()),
        timestamp: !no_timestamp,
    };

    crate::log_blank();
    log::info!(
        "Found {} ROMs across {} systems",
        result.library.rom_count().if_supports_color(Stdout, |t| t.bold()),
        result.library.system_count().if_supports_color(Stdout, |t| t.bold()),
    );

    for format in dedup_formats(formats) {
        let emitter = format.emitter(&options);
        let path = out_dir.join(emitter.default_file_name());
        emitter.write(&result.library, &path)?;
        log::info!(
            "{} {} index written to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            emitter.name(),
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    }

    Ok(())
}

/// Index files go next to the ROMs folder, not inside it.
fn default_out_dir(root: &Path) -> PathBuf {
    match root.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => root.to_path_buf(),
    }
}

/// Requested formats in order, without repeats; the defaults when none were given.
fn dedup_formats(formats: Option<Vec<EmitFormat>>) -> Vec<EmitFormat> {
    let requested = formats
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| DEFAULT_FORMATS.to_vec());
    let mut seen = Vec::with_capacity(requested.len());
    for format in requested {
        if !seen.contains(&format) {
            seen.push(format);
        }
    }
    seen
}
