use std::path::Path;

use crate::errors::ProbeResult;
use crate::models::verification::{ VerificationQuery, VerificationReport };

/// Trait for checking a build artifact for a structural pattern
pub trait StructuralVerifier {
    /// Evaluate a query, counting matching lines
    ///
    /// A missing or unreadable artifact is an error; zero matches is not.
    fn evaluate(&self, query: &VerificationQuery) -> ProbeResult<VerificationReport>;

    /// True iff at least one line of the artifact matches `pattern`
    fn verify(&self, artifact_path: &Path, pattern: &str) -> ProbeResult<bool> {
        let report = self.evaluate(&VerificationQuery::new(artifact_path, pattern))?;
        Ok(report.satisfied)
    }
}
