use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tradeoff")]
#[command(
    author,
    version,
    about = "Browse scored trade-off comparisons and export plain-text reports"
)]
pub struct Cli {
    /// Load a TOML dataset file instead of the built-in comparisons
    #[clap(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse comparisons interactively (default)
    Browse {
        /// Topic to open initially (defaults to the first topic)
        #[clap(short, long)]
        topic: Option<String>,

        /// Directory where saved reports land
        #[clap(short, long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Print one topic's comparison card to the terminal
    Show {
        /// Topic key, e.g. "api"
        topic: String,

        /// Skip the per-option metrics tables
        #[clap(long, default_value_t = false)]
        no_metrics: bool,
    },

    /// List available topic keys and titles
    Topics {
        /// Emit machine-readable JSON instead of a plain listing
        #[clap(long, default_value_t = false)]
        json: bool,
    },

    /// Export a topic as a plain-text report file
    Report {
        /// Topic key to export (defaults to the first topic)
        topic: Option<String>,

        /// Export every topic
        #[clap(long, default_value_t = false)]
        all: bool,

        /// Directory to write reports into
        #[clap(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Print the report to stdout instead of writing a file
        #[clap(long, default_value_t = false)]
        stdout: bool,
    },
}
