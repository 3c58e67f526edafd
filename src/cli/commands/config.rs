use anyhow::Result;

use membprobe::ProbeConfig;

use crate::cli::ui;
use crate::cli::OutputFormat;

/// Print the effective configuration
pub fn execute(config: &ProbeConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Text => {
            ui::print_header("Effective Configuration");
            print!("{}", config.to_yaml()?);
            ui::print_result("Expected splits", &config.expected_splits().to_string());
        }
    }
    Ok(())
}
