use std::fmt;

use crate::errors::{ ProbeError, ProbeResult };
use crate::models::design::Assignment;

/// Number of boundary signals every chain module declares
pub const BOUNDARY_SIGNAL_COUNT: usize = 3;

/// Role of a signal in the generated module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Input,
    Clock,
    Output,
    Stage(usize),
}

/// A signal declared by the generated module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub kind: SignalKind,
}

impl Signal {
    pub const INPUT: Signal = Signal { kind: SignalKind::Input };
    pub const CLOCK: Signal = Signal { kind: SignalKind::Clock };
    pub const OUTPUT: Signal = Signal { kind: SignalKind::Output };

    pub fn stage(index: usize) -> Self {
        Signal { kind: SignalKind::Stage(index) }
    }

    pub fn is_boundary(&self) -> bool {
        !matches!(self.kind, SignalKind::Stage(_))
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SignalKind::Input => write!(f, "i"),
            SignalKind::Clock => write!(f, "clk"),
            SignalKind::Output => write!(f, "o"),
            SignalKind::Stage(index) => write!(f, "r{}", index),
        }
    }
}

/// An N-stage shift register description
///
/// Declares the boundary signals plus `r0..=rN`. The extra stage signal
/// beyond what the chain strictly needs is part of the generated shape and
/// counts toward the member total the compiler sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainSpec {
    length: usize,
}

impl ChainSpec {
    /// Create a chain of `length` stages; zero is rejected
    pub fn new(length: usize) -> ProbeResult<Self> {
        if length == 0 {
            return Err(ProbeError::InvalidInput(
                "chain length must be at least 1".to_string()
            ));
        }
        Ok(ChainSpec { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// `i`, `clk` and `o`, in declaration order of the port list
    pub fn boundary_signals(&self) -> [Signal; BOUNDARY_SIGNAL_COUNT] {
        [Signal::INPUT, Signal::CLOCK, Signal::OUTPUT]
    }

    /// `r0` through `rN` inclusive
    pub fn stage_signals(&self) -> impl Iterator<Item = Signal> {
        (0..=self.length).map(Signal::stage)
    }

    /// Every declared signal, boundary signals first
    pub fn signals(&self) -> impl Iterator<Item = Signal> {
        self.boundary_signals().into_iter().chain(self.stage_signals())
    }

    pub fn declared_signal_count(&self) -> usize {
        BOUNDARY_SIGNAL_COUNT + self.length + 1
    }

    /// Seed, N-1 shifts and the output drive
    pub fn assignment_count(&self) -> usize {
        self.length + 1
    }

    pub fn shift_count(&self) -> usize {
        self.length - 1
    }

    /// Clocked assignments in emission order
    ///
    /// `r1..=rN` form the live chain feeding `o`; `r0` takes the input but is
    /// never read and `r1` is never written.
    pub fn assignments(&self) -> impl Iterator<Item = Assignment> {
        let last = Signal::stage(self.length);
        let seed = Assignment::new(Signal::stage(0), Signal::INPUT);
        let shifts = (1..self.length).map(|k| Assignment::new(Signal::stage(k + 1), Signal::stage(k)));
        let drive = Assignment::new(Signal::OUTPUT, last);

        std::iter::once(seed).chain(shifts).chain(std::iter::once(drive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_chain() {
        let err = ChainSpec::new(0).unwrap_err();
        assert!(matches!(err, ProbeError::InvalidInput(_)));
    }

    #[test]
    fn signal_names() {
        let chain = ChainSpec::new(2).unwrap();
        let names: Vec<String> = chain.signals().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["i", "clk", "o", "r0", "r1", "r2"]);
        assert_eq!(chain.signals().filter(Signal::is_boundary).count(), BOUNDARY_SIGNAL_COUNT);
    }

    #[test]
    fn counts_follow_length() {
        for length in [1, 2, 7, 6000] {
            let chain = ChainSpec::new(length).unwrap();
            assert_eq!(chain.signals().count(), chain.declared_signal_count());
            assert_eq!(chain.assignments().count(), chain.assignment_count());
            assert_eq!(chain.declared_signal_count(), length + 4);
            assert_eq!(chain.shift_count(), length - 1);
        }
    }
}
