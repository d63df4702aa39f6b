use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "autoreplace")]
#[command(about = "Ordered literal find-and-replace patterns for text files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json (defaults to the user config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a pattern at the end of the list
    #[command(alias = "a")]
    Add {
        /// Text to search for (literal, case-sensitive)
        source: String,

        /// Text to insert in its place
        replacement: String,
    },

    /// Replace the pattern at an index, keeping its position
    #[command(alias = "u")]
    Update {
        /// Position in the list, as shown by `list`
        index: usize,

        source: String,

        replacement: String,
    },

    /// Remove the pattern at an index
    #[command(alias = "rm")]
    Remove {
        /// Position in the list, as shown by `list`
        index: usize,
    },

    /// List patterns in application order
    #[command(alias = "ls")]
    List,

    /// Apply the pattern list to files in place, or stdin to stdout
    Apply {
        /// Files to rewrite; reads stdin when omitted
        #[arg(num_args = 0..)]
        files: Vec<PathBuf>,

        /// Advance the scan cursor past the replacement instead of by the
        /// source length (diverges from historical behavior)
        #[arg(long)]
        intuitive_cursor: bool,
    },
}
