use std::path::{ Path, PathBuf };

use crate::errors::{ ProbeError, ProbeResult };

/// A pattern check against one artifact file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationQuery {
    pub artifact_path: PathBuf,
    pub pattern: String,
    /// Match `pattern` as a fixed string instead of a regex
    pub literal: bool,
    pub min_matches: usize,
}

impl VerificationQuery {
    /// Presence check: at least one line matching `pattern`
    pub fn new(artifact_path: &Path, pattern: &str) -> Self {
        VerificationQuery {
            artifact_path: artifact_path.to_path_buf(),
            pattern: pattern.to_string(),
            literal: false,
            min_matches: 1,
        }
    }

    pub fn literal(mut self, literal: bool) -> Self {
        self.literal = literal;
        self
    }

    pub fn min_matches(mut self, min_matches: usize) -> Self {
        self.min_matches = min_matches;
        self
    }

    /// A query that any file satisfies is rejected
    pub fn validate(&self) -> ProbeResult<()> {
        if self.min_matches == 0 {
            return Err(ProbeError::InvalidInput("min_matches must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Result of evaluating a [`VerificationQuery`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub match_count: usize,
    /// 1-based line number of the first match
    pub first_match_line: Option<usize>,
    pub satisfied: bool,
}
