pub mod design_generator;
pub mod structural_verifier;
pub mod harness;

// Re-export traits
pub use design_generator::DesignGenerator;
pub use structural_verifier::StructuralVerifier;
pub use harness::Harness;
