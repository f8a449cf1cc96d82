//! `stagesplit` CLI - Command-line interface for split-screen staging
//!
//! Provides commands for computing split layout pane shares, listing the
//! configured split menu entries, validating task to stage assignments
//! and managing the settings file.

mod cli;
mod commands;
mod error;
mod util;

use clap::Parser;
use cli::Cli;
use stagesplit_core::tracing::{TracingConfig, TracingLevel, init_tracing};

/// Sets up logging from the settings file and `-v`/`-q` flags.
///
/// A settings file that cannot be loaded falls back to defaults here; the
/// command itself reports the error.
fn init_logging(cli: &Cli) {
    let config = util::load_settings(cli.config.as_deref())
        .map(|settings| settings.logging.to_tracing_config())
        .unwrap_or_else(|_| TracingConfig::new());

    let config = if cli.quiet {
        TracingConfig {
            level: TracingLevel::Error,
            filter: None,
            ..config
        }
    } else if cli.verbose > 0 {
        TracingConfig {
            level: config.level.raised_by(cli.verbose),
            filter: None,
            ..config
        }
    } else {
        config
    };

    if let Err(e) = init_tracing(&config) {
        eprintln!("Warning: {e}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let config_path = cli.config.as_deref();
    let result = commands::dispatch(config_path, cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}
