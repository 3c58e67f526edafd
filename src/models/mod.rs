pub mod chain;
pub mod design;
pub mod artifact;
pub mod verification;
pub mod outcome;

// Re-export common model types
pub use chain::{ ChainSpec, Signal, SignalKind };
pub use design::{ Assignment, Statement };
pub use artifact::{ BuildArtifact, GeneratedArtifact };
pub use verification::{ VerificationQuery, VerificationReport };
pub use outcome::{ ExecResult, Outcome, OutcomeStatus, Stage };
