//! Stdout rendering of a validation run.
//!
//! The output contract is line-oriented: `[WARN]` lines first, `[ERROR]`
//! lines next, and exactly two `[OK]` lines only when the run fully
//! succeeded.

use cbim_validate::RunReport;

/// Summary lines printed when the run succeeds.
pub const PASS_SUMMARY: [&str; 2] = [
    "Ontology validation passed",
    "Threshold constants, kinetics, TAPVI terminology, and phase alignment are consistent",
];

/// Render the report as the lines to print, in order.
pub fn render_lines(report: &RunReport) -> Vec<String> {
    let mut lines = Vec::new();
    for warning in report.diagnostics.warnings() {
        lines.push(format!("[WARN] {}", warning.message));
    }
    for error in report.diagnostics.errors() {
        lines.push(format!("[ERROR] {}", error.message));
    }
    if report.passed() {
        for line in PASS_SUMMARY {
            lines.push(format!("[OK] {line}"));
        }
    }
    lines
}

pub fn print_report(report: &RunReport) {
    for line in render_lines(report) {
        println!("{line}");
    }
}

/// Process exit code: 0 only when no error was recorded at any stage.
pub fn exit_code(report: &RunReport) -> i32 {
    if report.passed() { 0 } else { 1 }
}
