//! Packaging tool for the Block Paper Scissors mobile shell.
//!
//! Resolves the app-identity configuration (defaults, optional JSON file,
//! CLI/env overrides), validates it, and renders the JSON document the native
//! shell reads at build time.

mod config;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::config::{AndroidScheme, AppConfig, ConfigError, Overrides};

const DEFAULT_OUT: &str = "capacitor.config.json";

#[derive(Debug, thiserror::Error)]
enum PackageError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Parser, Debug)]
#[command(name = "bps-package", about = "Block Paper Scissors mobile shell packaging")]
struct Cli {
    /// JSON file to start from instead of the built-in defaults.
    #[arg(long, env = "BPS_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, env = "BPS_APP_ID")]
    app_id: Option<String>,

    #[arg(long, env = "BPS_APP_NAME")]
    app_name: Option<String>,

    #[arg(long, env = "BPS_WEB_DIR")]
    web_dir: Option<String>,

    #[arg(long, env = "BPS_ANDROID_SCHEME", value_enum)]
    android_scheme: Option<AndroidScheme>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the resolved configuration.
    Check,
    /// Print the resolved configuration as JSON.
    Print,
    /// Write the resolved configuration for the shell tooling.
    Write {
        #[arg(long, default_value = DEFAULT_OUT)]
        out: PathBuf,
    },
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            app_id: self.app_id.clone(),
            app_name: self.app_name.clone(),
            web_dir: self.web_dir.clone(),
            android_scheme: self.android_scheme,
        }
    }

    fn resolve(&self) -> Result<AppConfig, PackageError> {
        let config = AppConfig::load(self.config.as_deref())?.with_overrides(self.overrides());
        config.validate()?;
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<(), PackageError> {
    let config = cli.resolve()?;
    match &cli.command {
        Command::Check => {
            tracing::info!(
                app_id = %config.app_id,
                app_name = %config.app_name,
                web_dir = %config.web_dir,
                "configuration ok"
            );
        }
        Command::Print => {
            println!("{}", config.to_json_pretty()?);
        }
        Command::Write { out } => {
            let json = config.to_json_pretty()?;
            std::fs::write(out, json + "\n").map_err(|source| PackageError::Write { path: out.clone(), source })?;
            tracing::info!(path = %out.display(), app_id = %config.app_id, "wrote shell config");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "packaging failed");
            ExitCode::FAILURE
        }
    }
}
