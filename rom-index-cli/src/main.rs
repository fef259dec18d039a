//! rom-index CLI
//!
//! Scans a ROMs folder, pairs each archive with its screenshot and cover
//! images, and writes the result as JSON, HTML or Markdown listings.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use rom_index_lib::settings::settings_path;

use crate::cli_types::{Cli, Commands, ConfigAction};
pub(crate) use crate::error::CliError;
pub(crate) use crate::logger::log_blank;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e
        );
        log::logger().flush();
        std::process::exit(1);
    }
    log::logger().flush();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings_file = cli.config.unwrap_or_else(settings_path);
    let ctx = commands::Context::new(settings_file, cli.root);

    match cli.command.unwrap_or_default() {
        Commands::Index {
            scan,
            format,
            out_dir,
            no_timestamp,
        } => commands::index::run_index(&ctx, &scan, format, out_dir, no_timestamp),
        Commands::List { scan } => commands::list::run_list(&ctx, &scan),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&ctx),
            ConfigAction::Path => commands::config::run_config_path(&ctx),
            ConfigAction::SetRoot { path } => commands::config::run_config_set_root(&ctx, &path),
            ConfigAction::ClearRoot => commands::config::run_config_clear_root(&ctx),
        },
    }
}
