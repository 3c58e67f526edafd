//! Shared test helpers, including a harness that stands in for Verilator

use std::cell::RefCell;
use std::collections::{ HashMap, HashSet };
use std::fs;
use std::path::Path;

use log::info;

use crate::config::{ ProbeConfig, COMPLETION_MARKER };
use crate::errors::{ ProbeError, ProbeResult };
use crate::implementations::pattern_verifier::RegexVerifier;
use crate::models::artifact::BuildArtifact;
use crate::models::outcome::{ ExecResult, Outcome };
use crate::traits::harness::Harness;
use crate::traits::structural_verifier::StructuralVerifier;

pub fn setup() {
    // Logger may already be initialized by another test
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Probe config rooted in a scratch directory
pub fn scratch_config(dir: &Path, chain_length: usize) -> ProbeConfig {
    ProbeConfig {
        chain_length,
        obj_dir: dir.join("obj_dir"),
        ..ProbeConfig::default()
    }
}

/// `target -> source` for every non-blocking assignment in `text`
pub fn drivers(text: &str) -> HashMap<String, String> {
    text.lines()
        .filter_map(|line| line.trim().split_once(" <= "))
        .map(|(target, source)| (target.to_string(), source.trim_end_matches(';').to_string()))
        .collect()
}

/// Registers whose value can reach `o`, nearest first
///
/// Follows drivers backward from the output until a signal nobody writes
/// or a signal that is not a declared `logic` register.
pub fn live_registers(text: &str) -> Vec<String> {
    let declared: HashSet<&str> = text
        .lines()
        .filter_map(|line| line.trim().strip_prefix("logic "))
        .map(|rest| rest.trim_end_matches(';'))
        .collect();
    let drivers = drivers(text);

    let mut live = Vec::new();
    let mut seen = HashSet::new();
    let mut current = "o";
    while let Some(source) = drivers.get(current) {
        if !declared.contains(source.as_str()) || !seen.insert(source.as_str()) {
            break;
        }
        live.push(source.clone());
        current = source;
    }
    live
}

/// How the fake compiler lays out the root class members
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One anonymous struct per `member_limit` members
    Split { member_limit: usize },
    /// All members directly in the class
    Flat,
    /// Produce no header at all
    Missing,
}

/// Harness that imitates the compile/execute/grep pipeline without a toolchain
///
/// `compile` reads the generated design, keeps the registers that can reach
/// the output (dead ones would be optimized away) and writes a root header
/// laid out per [`Layout`].
pub struct FakeHarness {
    pub layout: Layout,
    pub fail_compile: bool,
    pub exit_code: i32,
    pub print_marker: bool,
    pub calls: RefCell<Vec<String>>,
    pub reported: RefCell<Vec<Outcome>>,
}

impl FakeHarness {
    pub fn new(layout: Layout) -> Self {
        FakeHarness {
            layout,
            fail_compile: false,
            exit_code: 0,
            print_marker: true,
            calls: RefCell::new(Vec::new()),
            reported: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn last_report(&self) -> Option<Outcome> {
        self.reported.borrow().last().cloned()
    }

    fn render_header(&self, prefix: &str, members: &[String]) -> String {
        let mut header = format!("class {}___024root final {{\n  public:\n", prefix);
        match self.layout {
            Layout::Split { member_limit } => {
                for group in members.chunks(member_limit) {
                    header.push_str("    struct {\n");
                    for member in group {
                        header.push_str(&format!("        CData/*0:0*/ {};\n", member));
                    }
                    header.push_str("    };\n");
                }
            }
            Layout::Flat | Layout::Missing => {
                for member in members {
                    header.push_str(&format!("    CData/*0:0*/ {};\n", member));
                }
            }
        }
        header.push_str("};\n");
        header
    }
}

impl Harness for FakeHarness {
    fn compile(&self, source: &Path, flags: &[String]) -> ProbeResult<BuildArtifact> {
        self.calls.borrow_mut().push(format!("compile {} flags", flags.len()));
        if self.fail_compile {
            return Err(ProbeError::CompileError("%Error: syntax error".to_string()));
        }

        let text = fs::read_to_string(source).map_err(|e| ProbeError::io(source, e))?;
        let members: Vec<String> = live_registers(&text)
            .into_iter()
            .rev()
            .map(|name| format!("t__DOT__{}", name))
            .collect();
        info!("Fake compile found {} members", members.len());

        let obj_dir = source.parent().unwrap_or_else(|| Path::new("."));
        let artifact = BuildArtifact::new(obj_dir, "Vt");
        if self.layout != Layout::Missing {
            let header = self.render_header(&artifact.prefix, &members);
            let path = artifact.root_header();
            fs::write(&path, header).map_err(|e| ProbeError::io(&path, e))?;
        }
        Ok(artifact)
    }

    fn execute(&self, _artifact: &BuildArtifact) -> ProbeResult<ExecResult> {
        self.calls.borrow_mut().push("execute".to_string());
        let stdout = if self.print_marker {
            format!("{}\n", COMPLETION_MARKER)
        } else {
            String::new()
        };
        Ok(ExecResult {
            exit_code: Some(self.exit_code),
            stdout,
            stderr: String::new(),
            completion_seen: self.print_marker,
        })
    }

    fn grep(&self, file: &Path, pattern: &str) -> ProbeResult<bool> {
        self.calls.borrow_mut().push("grep".to_string());
        RegexVerifier::new().verify(file, pattern)
    }

    fn report(&self, outcome: &Outcome) {
        self.calls.borrow_mut().push("report".to_string());
        self.reported.borrow_mut().push(outcome.clone());
    }
}
