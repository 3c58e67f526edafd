use anyhow::{ Context, Result };
use std::path::Path;

use membprobe::{ ChainSpec, DesignGenerator, ProbeConfig, ShiftChainGenerator };

use crate::cli::ui;

/// Design generation command
pub fn execute(config: &ProbeConfig, output_path: &Path, length: Option<usize>) -> Result<()> {
    ui::print_header("Generating Shift-Register Design");

    let length = length.unwrap_or(config.chain_length);
    let chain = ChainSpec::new(length)?;
    let generator = ShiftChainGenerator::new(&config.top_module);
    ui::print_info(&format!("Rendering {}-stage chain as module {}", length, generator.module_name()));

    let artifact = generator
        .generate(output_path, length)
        .with_context(|| format!("Failed to generate design at {}", output_path.display()))?;

    ui::print_result("Chain length", &length.to_string());
    ui::print_result("Declared signals", &chain.declared_signal_count().to_string());
    ui::print_result("Assignments", &chain.assignment_count().to_string());
    ui::print_result("Lines", &artifact.line_count.to_string());
    ui::print_success(&format!("Design written to {}", artifact.path.display()));

    Ok(())
}
