pub(crate) mod config;
pub(crate) mod index;
pub(crate) mod list;

use std::path::{Path, PathBuf};

use rom_index_lib::{CollisionPolicy, Library, Settings, scan_library, scan_with};

use crate::CliError;
use crate::cli_types::ScanArgs;

/// Global options shared by every command.
pub(crate) struct Context {
    pub settings_file: PathBuf,
    pub root_override: Option<PathBuf>,
}

impl Context {
    pub(crate) fn new(settings_file: PathBuf, root_override: Option<PathBuf>) -> Self {
        Self {
            settings_file,
            root_override,
        }
    }

    pub(crate) fn settings(&self) -> Result<Settings, CliError> {
        Ok(Settings::load_from(&self.settings_file)?)
    }
}

/// A finished scan and the absolute root it was taken from.
pub(crate) struct ScanResult {
    pub root: PathBuf,
    pub library: Library,
}

/// Resolve the root, build scan options from settings plus flags, and scan.
pub(crate) fn scan_root(ctx: &Context, args: &ScanArgs) -> Result<ScanResult, CliError> {
    let settings = ctx.settings()?;

    let mut options = settings.scan_options();
    if args.first_wins {
        options = options.collision(CollisionPolicy::FirstWins);
    }
    if let Some(exts) = &args.extensions {
        options = options.extensions(exts);
    }

    let root = absolute_root(&settings.resolve_root(ctx.root_override.clone()))?;
    log::info!("Scanning {}...", root.display());
    log::debug!(
        "Collision policy: {}, {} archive extensions",
        options.collision,
        options.extensions.len()
    );

    let library = if args.flat {
        Library::single(scan_with(&root, &options)?)
    } else {
        let library = scan_library(&root, &options)?;
        if library.is_empty() && scan_with(&root, &options).is_ok_and(|i| !i.is_empty()) {
            log::warn!(
                "No system folders with ROMs in {}; pass --flat to index the folder itself",
                root.display()
            );
        }
        library
    };

    Ok(ScanResult { root, library })
}

/// Absolute root with `.` and `..` resolved, so the folder name and its
/// parent are the real ones. A missing path is left for the scanner to report.
fn absolute_root(path: &Path) -> Result<PathBuf, CliError> {
    match std::fs::canonicalize(path) {
        Ok(root) => Ok(root),
        Err(_) => Ok(std::path::absolute(path)?),
    }
}
