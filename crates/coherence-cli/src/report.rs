use anyhow::Context;
use camino::Utf8Path;
use coherence_domain::CoherenceOutcome;
use coherence_types::{CoherenceReport, ToolMeta, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

pub fn build_report(
    outcome: CoherenceOutcome,
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
) -> CoherenceReport {
    CoherenceReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "coherence".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: outcome.verdict,
        infos: outcome.infos,
        warnings: outcome.warnings,
        errors: outcome.errors,
        data: outcome.data,
    }
}

pub fn write_report_file(path: &Utf8Path, report: &CoherenceReport) -> anyhow::Result<()> {
    let data = serde_json::to_string_pretty(report).context("serialize report")?;
    write_text_file(path, &data)
}

pub fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write {path}"))?;
    Ok(())
}
