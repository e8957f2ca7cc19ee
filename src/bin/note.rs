//! Note CLI Binary
//!
//! Command-line interface for the note tool.

use clap::Parser;
use note::config::ConfigLoader;
use note::logging::init_logging;
use note::tooling::cli::{Cli, CliContext};
use std::io::IsTerminal;
use std::process;

fn main() {
    let cli = Cli::parse();

    let mut config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };
    cli.apply_logging_overrides(&mut config.logging);
    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let context = CliContext::new(config).with_color(color);

    match context.execute(&cli.resolved_command()) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
