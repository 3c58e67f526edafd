use anyhow::Result;
use std::path::Path;

use membprobe::{ ProbeConfig, RegexVerifier, StructuralVerifier, VerificationQuery };

use crate::cli::ui;
use crate::cli::OutputFormat;

/// Artifact verification command; returns whether the check was satisfied
pub fn execute(
    config: &ProbeConfig,
    artifact_path: &Path,
    pattern: Option<&str>,
    literal: bool,
    min_matches: Option<usize>,
    format: OutputFormat
) -> Result<bool> {
    let pattern = pattern.unwrap_or(config.pattern.as_str());
    let min_matches = min_matches.unwrap_or(config.min_matches);
    let query = VerificationQuery::new(artifact_path, pattern)
        .literal(literal)
        .min_matches(min_matches);

    let report = RegexVerifier::new().evaluate(&query)?;

    match format {
        OutputFormat::Json => {
            let value =
                serde_json::json!({
                "artifact": artifact_path.display().to_string(),
                "pattern": pattern,
                "match_count": report.match_count,
                "first_match_line": report.first_match_line,
                "min_matches": min_matches,
                "satisfied": report.satisfied,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            ui::print_header("Verifying Build Artifact");
            ui::print_result("Artifact", &artifact_path.display().to_string());
            ui::print_result("Pattern", pattern);
            ui::print_report(&report, min_matches);
        }
    }

    Ok(report.satisfied)
}
