pub mod shift_chain;
pub mod pattern_verifier;
pub mod verilator;
pub mod probe;

pub use shift_chain::ShiftChainGenerator;
pub use pattern_verifier::RegexVerifier;
pub use verilator::VerilatorHarness;
pub use probe::MembLimitProbe;
