use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };
use std::fmt;

/// Pipeline stage a failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Generate,
    Compile,
    Execute,
    Verify,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Generate => write!(f, "generate"),
            Stage::Compile => write!(f, "compile"),
            Stage::Execute => write!(f, "execute"),
            Stage::Verify => write!(f, "verify"),
        }
    }
}

/// What running the compiled model produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    /// The completion marker appeared in stdout
    pub completion_seen: bool,
}

impl ExecResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0) && self.completion_seen
    }

    /// Human-readable reason for a failed run
    pub fn failure_reason(&self) -> String {
        match self.exit_code {
            Some(0) => "completion marker not printed".to_string(),
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum OutcomeStatus {
    Passed,
    Failed { stage: Stage, reason: String },
}

/// Overall result of one probe run, handed to the reporter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub status: OutcomeStatus,
    pub chain_length: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl Outcome {
    pub fn passed(chain_length: usize, started_at: DateTime<Utc>) -> Self {
        Outcome {
            status: OutcomeStatus::Passed,
            chain_length,
            started_at,
            finished_at: Utc::now(),
        }
    }

    pub fn failed(
        chain_length: usize,
        started_at: DateTime<Utc>,
        stage: Stage,
        reason: impl Into<String>
    ) -> Self {
        Outcome {
            status: OutcomeStatus::Failed { stage, reason: reason.into() },
            chain_length,
            started_at,
            finished_at: Utc::now(),
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self.status, OutcomeStatus::Passed)
    }

    pub fn failed_stage(&self) -> Option<Stage> {
        match &self.status {
            OutcomeStatus::Passed => None,
            OutcomeStatus::Failed { stage, .. } => Some(*stage),
        }
    }

    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeStatus::Passed => write!(f, "Passed"),
            OutcomeStatus::Failed { stage, reason } => write!(f, "Failed at {}: {}", stage, reason),
        }
    }
}
