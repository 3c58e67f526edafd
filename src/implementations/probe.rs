use std::fs;

use chrono::Utc;
use log::{ info, warn };

use crate::config::ProbeConfig;
use crate::errors::{ ProbeError, ProbeResult };
use crate::implementations::pattern_verifier::RegexVerifier;
use crate::models::outcome::{ Outcome, Stage };
use crate::models::verification::VerificationQuery;
use crate::traits::design_generator::DesignGenerator;
use crate::traits::harness::Harness;
use crate::traits::structural_verifier::StructuralVerifier;

/// The member-limit probe: generate, compile, execute, grep, report
pub struct MembLimitProbe<G, H> {
    generator: G,
    harness: H,
    config: ProbeConfig,
}

impl<G: DesignGenerator, H: Harness> MembLimitProbe<G, H> {
    pub fn new(generator: G, harness: H, config: ProbeConfig) -> Self {
        Self { generator, harness, config }
    }

    pub fn harness(&self) -> &H {
        &self.harness
    }

    /// Run the whole pipeline once
    ///
    /// The outcome is always reported. Stage errors (I/O, missing tools,
    /// compile failures) are reported as a failed outcome and then returned;
    /// a failed run, an absent pattern, or fewer than `min_matches` matching
    /// lines is a failed outcome, not an error.
    pub fn run(&self) -> ProbeResult<Outcome> {
        let started_at = Utc::now();
        let length = self.config.chain_length;

        info!(
            "Probing member limit {} with a {}-stage chain (~{} splits expected)",
            self.config.member_limit,
            length,
            self.config.expected_splits()
        );

        match self.run_stages() {
            Ok(None) => {
                let outcome = Outcome::passed(length, started_at);
                self.harness.report(&outcome);
                Ok(outcome)
            }
            Ok(Some((stage, reason))) => {
                let outcome = Outcome::failed(length, started_at, stage, reason);
                self.harness.report(&outcome);
                Ok(outcome)
            }
            Err((stage, err)) => {
                let outcome = Outcome::failed(length, started_at, stage, err.to_string());
                self.harness.report(&outcome);
                Err(err)
            }
        }
    }

    /// `Ok(None)` on success, `Ok(Some(..))` for a failed check
    fn run_stages(&self) -> Result<Option<(Stage, String)>, (Stage, ProbeError)> {
        let obj_dir = &self.config.obj_dir;
        fs::create_dir_all(obj_dir).map_err(|e| (Stage::Generate, ProbeError::io(obj_dir, e)))?;

        let source = self.config.source_path();
        let generated = self.generator
            .generate(&source, self.config.chain_length)
            .map_err(|e| (Stage::Generate, e))?;
        info!("Generated {} lines", generated.line_count);

        let artifact = self.harness
            .compile(&generated.path, &self.config.verilator.flags)
            .map_err(|e| (Stage::Compile, e))?;

        let result = self.harness.execute(&artifact).map_err(|e| (Stage::Execute, e))?;
        if !result.success() {
            return Ok(Some((Stage::Execute, result.failure_reason())));
        }

        let header = artifact.root_header();
        let found = self.harness
            .grep(&header, &self.config.pattern)
            .map_err(|e| (Stage::Verify, e))?;
        if !found {
            warn!("No '{}' in {}", self.config.pattern, header.display());
            return Ok(
                Some((
                    Stage::Verify,
                    format!("pattern '{}' not found in {}", self.config.pattern, header.display()),
                ))
            );
        }

        if self.config.min_matches > 1 {
            let query = VerificationQuery::new(&header, &self.config.pattern).min_matches(
                self.config.min_matches
            );
            let report = RegexVerifier::new()
                .evaluate(&query)
                .map_err(|e| (Stage::Verify, e))?;
            if !report.satisfied {
                warn!(
                    "Only {} of {} required '{}' lines in {}",
                    report.match_count,
                    query.min_matches,
                    self.config.pattern,
                    header.display()
                );
                return Ok(
                    Some((
                        Stage::Verify,
                        format!(
                            "pattern '{}' matched {} line(s) in {}, need at least {}",
                            self.config.pattern,
                            report.match_count,
                            header.display(),
                            query.min_matches
                        ),
                    ))
                );
            }
        }

        Ok(None)
    }
}
