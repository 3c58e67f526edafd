use std::io::ErrorKind;
use std::path::Path;
use std::process::{ Command, Output };

use log::{ debug, error, info, warn };

use crate::config::ProbeConfig;
use crate::errors::{ ProbeError, ProbeResult };
use crate::implementations::pattern_verifier::RegexVerifier;
use crate::models::artifact::BuildArtifact;
use crate::models::outcome::{ ExecResult, Outcome, OutcomeStatus };
use crate::traits::harness::Harness;
use crate::traits::structural_verifier::StructuralVerifier;

/// Lines of compiler stderr kept in a compile error
const STDERR_TAIL_LINES: usize = 20;

/// Harness driving a local Verilator installation
#[derive(Debug, Clone)]
pub struct VerilatorHarness {
    config: ProbeConfig,
    verifier: RegexVerifier,
}

impl VerilatorHarness {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config, verifier: RegexVerifier::new() }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Build the `verilator --binary` invocation for `source`
    pub fn compile_command(&self, source: &Path, flags: &[String]) -> Command {
        let mut cmd = Command::new(&self.config.verilator.binary);
        cmd.arg("--binary")
            .arg("--Mdir")
            .arg(&self.config.obj_dir)
            .arg("--prefix")
            .arg(&self.config.vm_prefix)
            .arg("--top-module")
            .arg(&self.config.top_module)
            .args(split_flags(flags))
            .arg(source);
        cmd
    }

    fn run(&self, mut cmd: Command, tool: &str) -> ProbeResult<Output> {
        debug!("Running {:?}", cmd);
        cmd.output().map_err(|e| {
            let message = if e.kind() == ErrorKind::NotFound {
                format!("executable not found ({})", e)
            } else {
                e.to_string()
            };
            ProbeError::ExternalTool { tool: tool.to_string(), message }
        })
    }
}

impl Harness for VerilatorHarness {
    fn compile(&self, source: &Path, flags: &[String]) -> ProbeResult<BuildArtifact> {
        info!("Compiling {} with {}", source.display(), self.config.verilator.binary);
        let cmd = self.compile_command(source, flags);
        let output = self.run(cmd, &self.config.verilator.binary)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("Verilator exited with {}", output.status);
            return Err(ProbeError::CompileError(tail(&stderr, STDERR_TAIL_LINES)));
        }

        let artifact = BuildArtifact::new(&self.config.obj_dir, &self.config.vm_prefix);
        info!("Built model {}", artifact.executable.display());
        Ok(artifact)
    }

    fn execute(&self, artifact: &BuildArtifact) -> ProbeResult<ExecResult> {
        info!("Executing {}", artifact.executable.display());
        let cmd = Command::new(&artifact.executable);
        let output = self.run(cmd, &artifact.executable.display().to_string())?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let completion_seen = stdout.contains(&self.config.completion_marker);
        if !completion_seen {
            warn!("Completion marker '{}' not found in model output", self.config.completion_marker);
        }

        Ok(ExecResult {
            exit_code: output.status.code(),
            stdout,
            stderr,
            completion_seen,
        })
    }

    fn grep(&self, file: &Path, pattern: &str) -> ProbeResult<bool> {
        self.verifier.verify(file, pattern)
    }

    fn report(&self, outcome: &Outcome) {
        let elapsed = outcome.elapsed().num_milliseconds();
        match &outcome.status {
            OutcomeStatus::Passed => {
                info!("PASSED: chain length {} ({} ms)", outcome.chain_length, elapsed);
            }
            OutcomeStatus::Failed { stage, reason } => {
                error!("FAILED at {}: {} ({} ms)", stage, reason, elapsed);
            }
        }
    }
}

/// Split each flag string on whitespace into individual arguments
pub fn split_flags(flags: &[String]) -> Vec<String> {
    flags
        .iter()
        .flat_map(|flag| flag.split_whitespace())
        .map(str::to_string)
        .collect()
}

/// Last `lines` lines of `text`
fn tail(text: &str, lines: usize) -> String {
    let all: Vec<&str> = text.lines().collect();
    let start = all.len().saturating_sub(lines);
    all[start..].join("\n")
}
