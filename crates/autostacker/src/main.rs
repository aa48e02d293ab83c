mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Interpolate {
            text,
            ast,
            base_dir,
        } => commands::interpolate::run(text, ast, base_dir, cli.config, cli.verbose),
        Commands::Preprocess {
            file,
            output,
            compact,
        } => commands::preprocess::run(file, output, compact, cli.config, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
