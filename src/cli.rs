use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "splitforge")]
#[command(author, version, about = "Split-file to JSON conversion tool")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a split file and print the result as indented JSON
    Convert {
        /// Input split file (.lss)
        #[arg(required = true)]
        input: PathBuf,
    },

    /// Parse a split file and display a summary
    Probe {
        /// File to probe
        #[arg(required = true)]
        file: PathBuf,
    },
}
