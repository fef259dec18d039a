use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_index_core::util::format_size;
use rom_index_lib::{ImageKind, RomEntry};

use crate::CliError;
use crate::cli_types::ScanArgs;

use super::{Context, scan_root};

/// Scan and print each system's ROMs with their artwork status.
pub(crate) fn run_list(ctx: &Context, scan: &ScanArgs) -> Result<(), CliError> {
    let result = scan_root(ctx, scan)?;

    for system in result.library.systems() {
        crate::log_blank();
        log::info!(
            "{} ({} ROMs, {} with artwork)",
            system.name.if_supports_color(Stdout, |t| t.bold()),
            system.index.len(),
            system.index.artwork_count(),
        );
        for entry in system.index.iter() {
            log::info!(
                "  {} [{}]  {}  {}  {}",
                entry.display_name(),
                entry.file_name.if_supports_color(Stdout, |t| t.cyan()),
                format_size(entry.size).if_supports_color(Stdout, |t| t.dimmed()),
                artwork_marker(entry, ImageKind::Screenshot),
                artwork_marker(entry, ImageKind::Cover),
            );
        }
    }

    crate::log_blank();
    log::info!(
        "Found {} ROMs across {} systems",
        result.library.rom_count(),
        result.library.system_count()
    );
    Ok(())
}

fn artwork_marker(entry: &RomEntry, kind: ImageKind) -> String {
    if entry.image(kind).is_some() {
        format!(
            "{} {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            kind
        )
    } else {
        format!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            kind
        )
    }
}
