use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;
use crate::pipeline::ReadErrorPolicy;

#[derive(Parser, Debug)]
#[command(name = "classmap")]
#[command(about = "Find repeated element and class-set patterns across HTML templates", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan markup and report recurring (element, class set) combinations
    Analyze {
        /// File or directory to analyze
        path: PathBuf,

        /// Report destination (default: template_analysis.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Minimum number of distinct classes an element needs to be counted
        #[arg(long = "min-classes", visible_alias = "mc")]
        min_classes: Option<usize>,

        /// Minimum number of occurrences a pattern needs to be reported
        #[arg(long = "min-occurrences", visible_alias = "mo")]
        min_occurrences: Option<usize>,

        /// Report file names instead of full paths
        #[arg(short, long)]
        short: bool,

        /// Element names to extract (default: div)
        #[arg(long, value_delimiter = ',')]
        elements: Option<Vec<String>>,

        /// File extensions treated as documents when walking a directory (default: html)
        #[arg(long, value_delimiter = ',')]
        extensions: Option<Vec<String>>,

        /// Glob patterns to exclude from the walk
        #[arg(long, value_delimiter = ',')]
        ignore: Option<Vec<String>>,

        /// Honour .gitignore files while walking
        #[arg(long)]
        gitignore: bool,

        /// What to do when a document cannot be read
        #[arg(long = "on-read-error", value_enum)]
        on_read_error: Option<ReadErrorPolicy>,

        /// Configuration file (default: nearest .classmap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Extract documents sequentially
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Number of worker threads (default: one per CPU)
        #[arg(short = 'j', long = "jobs")]
        jobs: Option<usize>,

        /// Suppress progress and informational output
        #[arg(short, long)]
        quiet: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Logging settings for the command.
    pub fn logging(&self) -> (u8, bool) {
        match self {
            Commands::Analyze {
                verbosity, quiet, ..
            } => (*verbosity, *quiet),
            Commands::Init { .. } => (0, false),
        }
    }
}
