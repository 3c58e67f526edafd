use anyhow::{ anyhow, Result };
use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "membprobe",
    about = "Stress Verilator's struct member limit with a generated shift-register design",
    version,
    author,
    long_about = None
)]
pub struct ProbeCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write an N-stage shift-register design
    Generate {
        /// Output file for the design
        #[arg(short, long)]
        output: PathBuf,

        /// Chain length (defaults to the configured value)
        #[arg(short = 'n', long)]
        length: Option<usize>,
    },

    /// Check a build artifact for a pattern
    Verify {
        /// Artifact to inspect, e.g. obj_dir/Vt___024root.h
        #[arg(short, long)]
        artifact: PathBuf,

        /// Regex to search for (defaults to the configured pattern)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Treat the pattern as a fixed string
        #[arg(long, default_value = "false")]
        literal: bool,

        /// Minimum number of matching lines
        #[arg(long)]
        min_matches: Option<usize>,
    },

    /// Generate, compile, execute and verify in one go
    Run {
        /// Chain length (defaults to the configured value)
        #[arg(short = 'n', long)]
        length: Option<usize>,

        /// Directory for the generated design and the compiled model
        #[arg(long)]
        obj_dir: Option<PathBuf>,

        /// Verilator executable
        #[arg(long)]
        verilator: Option<String>,

        /// Compiler flag, repeatable; replaces the configured flags
        #[arg(long = "flag", allow_hyphen_values = true)]
        flags: Vec<String>,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn parse_output_format(format: &str) -> Result<OutputFormat> {
    match format.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(anyhow!("Unsupported output format: {}", format)),
    }
}
