use std::fmt;

use crate::models::chain::Signal;

/// A non-blocking register assignment `target <= source;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub target: Signal,
    pub source: Signal,
}

impl Assignment {
    pub fn new(target: Signal, source: Signal) -> Self {
        Assignment { target, source }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <= {};", self.target, self.source)
    }
}

/// A statement inside the clocked block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assign(Assignment),
    /// `$write` of a literal message, newline appended
    Display(String),
    Finish,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assign(assignment) => write!(f, "{}", assignment),
            Statement::Display(message) => write!(f, "$write(\"{}\\n\");", message),
            Statement::Finish => write!(f, "$finish;"),
        }
    }
}

impl From<Assignment> for Statement {
    fn from(assignment: Assignment) -> Self {
        Statement::Assign(assignment)
    }
}
