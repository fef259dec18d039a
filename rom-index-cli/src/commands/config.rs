use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_index_lib::settings::{load_settings_string, save_root_to};

use crate::CliError;

use super::Context;

/// Show the settings file and the values a scan would use.
pub(crate) fn run_config_show(ctx: &Context) -> Result<(), CliError> {
    let path = &ctx.settings_file;
    log::info!(
        "{}",
        "rom-index Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let settings = ctx.settings()?;
    let options = settings.scan_options();
    let mut extensions: Vec<_> = options.extensions.iter().map(String::as_str).collect();
    extensions.sort_unstable();

    crate::log_blank();
    log::info!(
        "  Root:       {}",
        settings.resolve_root(ctx.root_override.clone()).display()
    );
    log::info!("  Collision:  {}", options.collision);
    log::info!("  Extensions: {}", extensions.join(", "));

    if let Some(contents) = load_settings_string(path) {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(ctx: &Context) -> Result<(), CliError> {
    log::info!("{}", ctx.settings_file.display());
    Ok(())
}

/// Save a default ROMs root (stored as an absolute path).
pub(crate) fn run_config_set_root(ctx: &Context, root: &Path) -> Result<(), CliError> {
    let root = std::path::absolute(root)?;
    if !root.is_dir() {
        log::warn!("{} does not exist yet", root.display());
    }
    save_root_to(&ctx.settings_file, Some(&root))?;
    log::info!(
        "{} Root set to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        root.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Remove the saved ROMs root.
pub(crate) fn run_config_clear_root(ctx: &Context) -> Result<(), CliError> {
    save_root_to(&ctx.settings_file, None)?;
    log::info!(
        "{} Root cleared",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}
