//! Shift-register design emission
//!
//! Produces a single Verilog module whose register count grows linearly with
//! the chain length. Every register lands in the root class of the compiled
//! model, so a long enough chain forces the compiler to split that class's
//! member struct many times over.

use crate::config::COMPLETION_MARKER;
use crate::models::chain::{ ChainSpec, Signal };
use crate::models::design::Statement;
use crate::traits::design_generator::DesignGenerator;

const ITEM_INDENT: &str = "  ";
const STATEMENT_INDENT: &str = "    ";

/// Generator for the N-stage shift register design
#[derive(Debug, Clone)]
pub struct ShiftChainGenerator {
    module_name: String,
}

impl ShiftChainGenerator {
    pub fn new(module_name: &str) -> Self {
        Self { module_name: module_name.to_string() }
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Statements of the clocked block, in order
    pub fn statements(chain: &ChainSpec) -> impl Iterator<Item = Statement> {
        chain
            .assignments()
            .map(Statement::from)
            .chain([Statement::Display(COMPLETION_MARKER.to_string()), Statement::Finish])
    }

    fn header(&self) -> Vec<String> {
        vec![
            "// Generated by membprobe".to_string(),
            format!("module {} ({}, {}, {});", self.module_name, Signal::INPUT, Signal::CLOCK, Signal::OUTPUT),
            format!("{}input {};", ITEM_INDENT, Signal::CLOCK),
            format!("{}input {};", ITEM_INDENT, Signal::INPUT),
            format!("{}output logic {};", ITEM_INDENT, Signal::OUTPUT)
        ]
    }
}

impl Default for ShiftChainGenerator {
    fn default() -> Self {
        Self::new("t")
    }
}

impl DesignGenerator for ShiftChainGenerator {
    fn render(&self, chain: &ChainSpec) -> String {
        let declarations = chain
            .stage_signals()
            .map(|signal| format!("{}logic {};", ITEM_INDENT, signal));
        let body = Self::statements(chain).map(|stmt| format!("{}{}", STATEMENT_INDENT, stmt));

        let mut lines = self.header();
        lines.extend(declarations);
        lines.push(format!("{}always @ (posedge {}) begin", ITEM_INDENT, Signal::CLOCK));
        lines.extend(body);
        lines.push(format!("{}end", ITEM_INDENT));
        lines.push("endmodule".to_string());

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}
