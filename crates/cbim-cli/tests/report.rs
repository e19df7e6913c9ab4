use cbim_cli::report::{PASS_SUMMARY, exit_code, render_lines};
use cbim_model::Diagnostics;
use cbim_validate::{RunReport, Stage};

fn report(diagnostics: Diagnostics, halted: Option<Stage>) -> RunReport {
    RunReport {
        diagnostics,
        halted,
    }
}

#[test]
fn clean_run_prints_exactly_two_ok_lines() {
    let lines = render_lines(&report(Diagnostics::new(), None));
    assert_eq!(
        lines,
        [
            "[OK] Ontology validation passed",
            "[OK] Threshold constants, kinetics, TAPVI terminology, and phase alignment are consistent",
        ]
    );
    assert_eq!(exit_code(&report(Diagnostics::new(), None)), 0);
}

#[test]
fn warnings_alone_still_pass() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.warn("jsonschema support not available; skipping schema validation");
    let run = report(diagnostics, None);
    let lines = render_lines(&run);
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "[WARN] jsonschema support not available; skipping schema validation"
    );
    assert!(lines[1].starts_with("[OK] "));
    assert!(lines[2].starts_with("[OK] "));
    assert_eq!(exit_code(&run), 0);
}

#[test]
fn errors_suppress_ok_lines_and_fail_the_run() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.warn("advisory");
    diagnostics.error("Expected 18 supplementary CDEs, found 17");
    let run = report(diagnostics, None);
    let lines = render_lines(&run);
    assert_eq!(
        lines,
        [
            "[WARN] advisory",
            "[ERROR] Expected 18 supplementary CDEs, found 17",
        ]
    );
    assert_eq!(exit_code(&run), 1);
}

#[test]
fn warnings_render_before_errors_regardless_of_insertion_order() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.error("first error");
    diagnostics.warn("late warning");
    let lines = render_lines(&report(diagnostics, None));
    assert_eq!(lines, ["[WARN] late warning", "[ERROR] first error"]);
}

#[test]
fn halted_run_renders_its_load_errors_only() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.error("Missing required ontology file: provenance.yaml");
    let run = report(diagnostics, Some(Stage::Load));
    let lines = render_lines(&run);
    assert_eq!(
        lines,
        ["[ERROR] Missing required ontology file: provenance.yaml"]
    );
    assert_eq!(exit_code(&run), 1);
}

#[test]
fn pass_summary_is_stable() {
    assert_eq!(PASS_SUMMARY.len(), 2);
    assert_eq!(PASS_SUMMARY[0], "Ontology validation passed");
}
