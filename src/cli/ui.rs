use colored::*;
use console::Term;
use indicatif::{ ProgressBar, ProgressStyle };
use std::time::Duration;
use textwrap::wrap;

use membprobe::{ Outcome, OutcomeStatus, VerificationReport };

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print tool output wrapped to the terminal width
pub fn print_text(text: &str) {
    let width = Term::stdout().size().1 as usize;
    for line in text.lines() {
        for wrapped_line in wrap(line, width.saturating_sub(4).max(20)) {
            println!("  {}", wrapped_line.dimmed());
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print the final outcome of a probe run with color
pub fn print_outcome(outcome: &Outcome) {
    match &outcome.status {
        OutcomeStatus::Passed => println!("{}", "✓ Passed".green().bold()),
        OutcomeStatus::Failed { stage, reason } => {
            println!("{}", format!("✗ Failed at {}: {}", stage, reason).red().bold());
        }
    }
    print_result("Chain length", &outcome.chain_length.to_string());
    print_result("Elapsed", &format!("{:.1}s", outcome.elapsed().num_milliseconds() as f64 / 1000.0));
}

/// Print a verification report with color
pub fn print_report(report: &VerificationReport, min_matches: usize) {
    let summary = format!("{} matching line(s), {} required", report.match_count, min_matches);
    if report.satisfied {
        println!("{}", format!("✓ {}", summary).green().bold());
    } else {
        println!("{}", format!("✗ {}", summary).red().bold());
    }
    if let Some(line) = report.first_match_line {
        print_result("First match", &format!("line {}", line));
    }
}

pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
