//! Shafolder CLI Binary
//!
//! Prints the fingerprint of one file or folder. Any error is fatal: the
//! message goes to stderr and the process exits with status 1.

use clap::Parser;
use shafolder::cli::{Cli, RunContext, RunOptions};
use shafolder::config::ConfigLoader;
use shafolder::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Shafolder starting");

    let options = RunOptions::from(&cli);

    let context = match RunContext::new(cli.config.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", shafolder::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&options) {
        Ok(output) => {
            info!("Fingerprint completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Fingerprint failed: {}", e);
            eprintln!("{}", shafolder::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and the config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = ConfigLoader::load(cli.config.as_deref())
        .map(|c| c.logging)
        .unwrap_or_default();

    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
        if cli.log_output.is_none() {
            config.output = "file".to_string();
        }
    }

    config
}
