use coherence_types::{CoherenceReport, Verdict};

pub fn render_markdown(report: &CoherenceReport) -> String {
    let mut out = String::new();

    out.push_str("# Coherence report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Warn => "WARN",
        Verdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Packages: {} scanned, {} skipped\n- Dependencies: {} scanned, {} mismatched\n\n",
        verdict,
        report.data.packages_scanned,
        report.data.packages_skipped,
        report.data.dependencies_scanned,
        report.data.mismatches_total
    ));

    if let Some(reason) = &report.data.disabled_reason {
        out.push_str(&format!("> Note: {reason}\n\n"));
    }

    if !report.errors.is_empty() {
        out.push_str("## Errors\n\n");
        for error in &report.errors {
            out.push_str(&format!("- {error}\n"));
        }
        out.push('\n');
    }

    if !report.warnings.is_empty() {
        out.push_str("## Warnings (not failures)\n\n");
        for warning in &report.warnings {
            out.push_str(&format!("- {warning}\n"));
        }
        out.push('\n');
    }

    if !report.infos.is_empty() {
        out.push_str("## Skipped\n\n");
        for info in &report.infos {
            out.push_str(&format!("- {info}\n"));
        }
        out.push('\n');
    }

    if report.errors.is_empty() && report.warnings.is_empty() {
        out.push_str("No mismatches.\n");
    }

    out
}
