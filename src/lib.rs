pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ ConfigError, ProbeConfig, VerilatorConfig };
pub use errors::{ ProbeError, ProbeResult };
pub use implementations::{ MembLimitProbe, RegexVerifier, ShiftChainGenerator, VerilatorHarness };
pub use models::{
    chain::{ ChainSpec, Signal, SignalKind },
    design::{ Assignment, Statement },
    artifact::{ BuildArtifact, GeneratedArtifact },
    verification::{ VerificationQuery, VerificationReport },
    outcome::{ ExecResult, Outcome, OutcomeStatus, Stage },
};
pub use traits::{ DesignGenerator, Harness, StructuralVerifier };
