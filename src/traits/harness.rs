use std::path::Path;

use crate::errors::ProbeResult;
use crate::models::artifact::BuildArtifact;
use crate::models::outcome::{ ExecResult, Outcome };

/// Capabilities of the external compile/execute pipeline
pub trait Harness {
    /// Compile the design at `source`, forwarding `flags` to the compiler verbatim
    fn compile(&self, source: &Path, flags: &[String]) -> ProbeResult<BuildArtifact>;

    /// Run a compiled model
    fn execute(&self, artifact: &BuildArtifact) -> ProbeResult<ExecResult>;

    /// Report whether any line of `file` matches `pattern`
    fn grep(&self, file: &Path, pattern: &str) -> ProbeResult<bool>;

    /// Signal the final result of a run
    fn report(&self, outcome: &Outcome);
}
