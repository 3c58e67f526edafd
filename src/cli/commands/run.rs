use anyhow::Result;
use std::path::PathBuf;

use membprobe::{ MembLimitProbe, ProbeConfig, ProbeError, ShiftChainGenerator, VerilatorHarness };

use crate::cli::ui;
use crate::cli::OutputFormat;

/// Full probe command: generate, compile, execute, verify; returns whether it passed
pub fn execute(
    mut config: ProbeConfig,
    length: Option<usize>,
    obj_dir: Option<PathBuf>,
    verilator: Option<String>,
    flags: Vec<String>,
    format: OutputFormat
) -> Result<bool> {
    if let Some(length) = length {
        config.chain_length = length;
    }
    if let Some(obj_dir) = obj_dir {
        config.obj_dir = obj_dir;
    }
    if let Some(binary) = verilator {
        config.verilator.binary = binary;
    }
    if !flags.is_empty() {
        config.verilator.flags = flags;
    }
    config.validate()?;

    let text = format == OutputFormat::Text;
    if text {
        ui::print_header("Member Limit Probe");
        ui::print_result("Chain length", &config.chain_length.to_string());
        ui::print_result("Member limit", &config.member_limit.to_string());
        ui::print_result("Expected splits", &format!("~{}", config.expected_splits()));
        ui::print_result("Object directory", &config.obj_dir.display().to_string());
        ui::print_result("Flags", &config.verilator.flags.join(" "));
    }

    let generator = ShiftChainGenerator::new(&config.top_module);
    let harness = VerilatorHarness::new(config.clone());
    let probe = MembLimitProbe::new(generator, harness, config);

    let spinner = text.then(|| ui::spinner_with_message("Generating, compiling and running design..."));
    let result = probe.run();
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(ProbeError::CompileError(stderr)) => {
            if text {
                ui::print_error("Verilator failed to compile the design:");
                ui::print_text(&stderr);
            }
            return Err(ProbeError::CompileError(stderr).into());
        }
        Err(e) => return Err(e.into()),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Text => {
            ui::print_outcome(&outcome);
            if outcome.is_passed() {
                ui::print_success("Member limit splitting was exercised");
            } else {
                ui::print_warning("Member limit splitting was not confirmed");
            }
        }
    }

    Ok(outcome.is_passed())
}
