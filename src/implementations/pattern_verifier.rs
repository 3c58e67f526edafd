use std::fs;

use log::debug;
use regex::Regex;

use crate::errors::{ ProbeError, ProbeResult };
use crate::models::verification::{ VerificationQuery, VerificationReport };
use crate::traits::structural_verifier::StructuralVerifier;

/// Line-oriented regex verifier
#[derive(Debug, Clone, Default)]
pub struct RegexVerifier;

impl RegexVerifier {
    pub fn new() -> Self {
        RegexVerifier
    }

    /// Count lines of `text` matching `regex`, with the first match's line number
    pub fn scan(text: &str, regex: &Regex) -> (usize, Option<usize>) {
        let mut matching = text
            .lines()
            .enumerate()
            .filter(|(_, line)| regex.is_match(line))
            .map(|(index, _)| index + 1);

        let first = matching.next();
        let count = first.map_or(0, |_| 1 + matching.count());
        (count, first)
    }

    fn compile(query: &VerificationQuery) -> ProbeResult<Regex> {
        let source = if query.literal {
            regex::escape(&query.pattern)
        } else {
            query.pattern.clone()
        };
        Ok(Regex::new(&source)?)
    }
}

impl StructuralVerifier for RegexVerifier {
    fn evaluate(&self, query: &VerificationQuery) -> ProbeResult<VerificationReport> {
        query.validate()?;
        let regex = Self::compile(query)?;
        let path = &query.artifact_path;
        let text = fs::read_to_string(path).map_err(|e| ProbeError::io(path, e))?;

        let (match_count, first_match_line) = Self::scan(&text, &regex);
        debug!(
            "Pattern '{}' matched {} line(s) in {}",
            query.pattern,
            match_count,
            path.display()
        );

        Ok(VerificationReport {
            match_count,
            first_match_line,
            satisfied: match_count >= query.min_matches,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_counts_lines_not_occurrences() {
        let regex = Regex::new(r"struct \{").unwrap();
        let text = "class A {\n  struct { int a; } x; struct { int b; } y;\n};\n  struct {\n";
        assert_eq!(RegexVerifier::scan(text, &regex), (2, Some(2)));
    }

    #[test]
    fn scan_without_match() {
        let regex = Regex::new("needle").unwrap();
        assert_eq!(RegexVerifier::scan("hay\nstack\n", &regex), (0, None));
    }
}
