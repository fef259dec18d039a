//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use rom_index_emit::EmitFormat;

#[derive(Parser)]
#[command(name = "rom-index")]
#[command(about = "Index ROM archives and their screenshot/cover artwork", long_about = None)]
pub(crate) struct Cli {
    /// ROMs root to scan (defaults to settings, then ./ROMs, then the current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Settings file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Defaults to `index` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Common arguments for commands that scan the ROMs root.
#[derive(Args, Clone, Default)]
pub(crate) struct ScanArgs {
    /// Treat the root as a single flat folder instead of one folder per system
    #[arg(long)]
    pub flat: bool,

    /// Keep the first archive (by file name) when base names collide, instead of failing
    #[arg(long)]
    pub first_wins: bool,

    /// Archive extensions to index (e.g., zip,dosz,nes), replacing the configured set
    #[arg(short, long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Scan the ROMs root and write index files
    Index {
        #[command(flatten)]
        scan: ScanArgs,

        /// Output formats (json, html, markdown); default: json,html
        #[arg(short, long, value_delimiter = ',')]
        format: Option<Vec<EmitFormat>>,

        /// Directory for index files (default: the parent of the ROMs root)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Leave the "Generated on" line out of the HTML index
        #[arg(long)]
        no_timestamp: bool,
    },

    /// Scan the ROMs root and print what was found
    List {
        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Inspect or edit the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Index {
            scan: ScanArgs::default(),
            format: None,
            out_dir: None,
            no_timestamp: false,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the effective values
    Show,

    /// Print the settings file path
    Path,

    /// Save a default ROMs root
    SetRoot {
        /// Directory to use when --root is not given
        path: PathBuf,
    },

    /// Remove the saved ROMs root
    ClearRoot,
}
