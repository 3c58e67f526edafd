use std::path::Path;
use std::process::ExitCode;

use anyhow::{ Context, Result };
use clap::Parser;
use log::{ debug, info };
use membprobe::ProbeConfig;

mod cli;
use cli::{ Commands, ProbeCli };

fn main() -> Result<ExitCode> {
    // Parse the command line arguments
    let cli = ProbeCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    if dotenv::dotenv().is_ok() {
        debug!("Loaded environment variables from .env file");
    }

    let format = cli::parse_output_format(&cli.output_format)?;
    let config = load_config(cli.config.as_deref())?;

    let passed = match cli.command {
        Commands::Generate { output, length } => {
            cli::commands::generate::execute(&config, &output, length)?;
            true
        }

        Commands::Verify { artifact, pattern, literal, min_matches } => {
            cli::commands::verify::execute(
                &config,
                &artifact,
                pattern.as_deref(),
                literal,
                min_matches,
                format
            )?
        }

        Commands::Run { length, obj_dir, verilator, flags } => {
            cli::commands::run::execute(config, length, obj_dir, verilator, flags, format)?
        }

        Commands::Config => {
            cli::commands::config::execute(&config, format)?;
            true
        }
    };

    Ok(if passed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Defaults, then the YAML file if given, then `MEMBPROBE_*` variables
fn load_config(path: Option<&Path>) -> Result<ProbeConfig> {
    let mut config = match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ProbeConfig::from_file(path).with_context(||
                format!("Failed to load config {}", path.display())
            )?
        }
        None => ProbeConfig::default(),
    };
    config.apply_env_overrides()?;
    Ok(config)
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
