//! Console logger for the CLI.
//!
//! Info goes to stdout as plain lines so command output reads like normal
//! program output; warnings and errors go to stderr. `--verbose` adds
//! timestamps and level tags, and `--logfile` mirrors everything to a file
//! with ANSI color codes stripped.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;

struct CliLogger {
    level: LevelFilter,
    verbose: bool,
    logfile: Option<Mutex<File>>,
}

impl CliLogger {
    fn format_record(&self, record: &Record) -> String {
        if !self.verbose {
            return record.args().to_string();
        }
        let time = chrono::Local::now().format("%H:%M:%S");
        format!("[{} {:<5}] {}", time, record.level(), record.args())
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Dependencies only get a say at warn and above
        metadata.level() <= Level::Warn || metadata.target().starts_with("rom_index")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_record(record);

        match record.level() {
            Level::Error => eprintln!("{}", line.if_supports_color(Stderr, |t| t.red())),
            Level::Warn => eprintln!("{}", line.if_supports_color(Stderr, |t| t.yellow())),
            Level::Info => println!("{}", line),
            Level::Debug | Level::Trace => {
                eprintln!("{}", line.if_supports_color(Stderr, |t| t.dimmed()))
            }
        }

        if let Some(file) = &self.logfile {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "{}", strip_ansi_escapes::strip_str(&line));
            }
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.logfile {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Level implied by the `--quiet` / `--verbose` flags. Quiet wins.
pub(crate) fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the CLI logger. Call once, before any command runs.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let logfile = match logfile {
        Some(path) => Some(Mutex::new(File::create(path)?)),
        None => None,
    };
    let level = level_for(quiet, verbose);
    let logger = CliLogger {
        level,
        verbose,
        logfile,
    };
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| CliError::other(format!("Failed to install logger: {}", e)))?;
    log::set_max_level(level);
    Ok(())
}

/// Print an empty info line.
pub(crate) fn log_blank() {
    log::info!("");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false, false), LevelFilter::Info);
        assert_eq!(level_for(false, true), LevelFilter::Debug);
        assert_eq!(level_for(true, false), LevelFilter::Warn);
        assert_eq!(level_for(true, true), LevelFilter::Warn);
    }

    #[test]
    fn test_enabled_filters_foreign_debug() {
        let logger = CliLogger {
            level: LevelFilter::Debug,
            verbose: true,
            logfile: None,
        };
        let ours = Metadata::builder()
            .level(Level::Debug)
            .target("rom_index_lib::scanner")
            .build();
        let theirs = Metadata::builder().level(Level::Debug).target("toml").build();
        let warn = Metadata::builder().level(Level::Warn).target("toml").build();
        assert!(logger.enabled(&ours));
        assert!(!logger.enabled(&theirs));
        assert!(logger.enabled(&warn));
    }

    #[test]
    fn test_verbose_format_has_level_tag() {
        let logger = CliLogger {
            level: LevelFilter::Info,
            verbose: true,
            logfile: None,
        };
        let line = logger.format_record(
            &Record::builder()
                .args(format_args!("hello"))
                .level(Level::Info)
                .build(),
        );
        assert!(line.ends_with("INFO ] hello"));
    }
}
