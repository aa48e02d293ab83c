//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autostacker")]
#[command(version, about = "Preprocess @-interpolated stack templates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ./autostacker.toml when present)
    #[arg(long, global = true, env = "AUTOSTACKER_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interpolate a single string and print the result as JSON
    Interpolate {
        /// Text containing @ expressions
        text: String,

        /// Print the expression tree instead of template functions
        #[arg(long)]
        ast: bool,

        /// Directory that relative file:// inclusions resolve against
        #[arg(long)]
        base_dir: Option<PathBuf>,
    },

    /// Preprocess a JSON template document
    Preprocess {
        /// Template file
        file: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact JSON
        #[arg(long)]
        compact: bool,
    },
}
