//! CLI entry point for coherence.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. The verification logic lives in `coherence-domain`.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use coherence_domain::universe::PackageUniverse;
use coherence_settings::Overrides;
use coherence_types::CoherenceReport;
use time::OffsetDateTime;

mod render;
mod report;

#[derive(Parser, Debug)]
#[command(
    name = "coherence",
    version,
    about = "Build-drop coherence verifier: in-build dependencies must name the versions the build produced"
)]
struct Cli {
    /// Path to coherence config TOML (missing file is allowed, defaults apply).
    #[arg(long, default_value = "coherence.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|product|none).
    #[arg(long)]
    profile: Option<String>,

    /// Override product-package enforcement.
    #[arg(long, value_name = "BOOL")]
    verify_product: Option<bool>,

    /// Override partner-package enforcement.
    #[arg(long, value_name = "BOOL")]
    verify_partner: Option<bool>,

    /// Additional package ids to exempt from verification (repeatable).
    #[arg(long = "skip", value_name = "PACKAGE_ID")]
    skip: Vec<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Verify a drop manifest and write the report.
    Check {
        /// Path to the drop manifest JSON.
        #[arg(long)]
        manifest: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/coherence/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/coherence/report.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/coherence/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.cmd {
        Commands::Check {
            ref manifest,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(
            &cli,
            manifest.clone(),
            report_out.clone(),
            write_markdown,
            markdown_out.clone(),
        ),
        Commands::Md { ref report, ref output } => cmd_md(report.clone(), output.clone()),
    };

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(err) => {
            eprintln!("coherence error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_check(
    cli: &Cli,
    manifest: Utf8PathBuf,
    report_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
) -> anyhow::Result<i32> {
    let started_at = OffsetDateTime::now_utc();

    // Load config if present; a missing file means defaults apply.
    let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();
    let cfg = if cfg_text.trim().is_empty() {
        coherence_settings::CoherenceConfigV1::default()
    } else {
        coherence_settings::parse_config_toml(&cfg_text)
            .with_context(|| format!("parse config {}", cli.config))?
    };

    let overrides = Overrides {
        profile: cli.profile.clone(),
        verify_product: cli.verify_product,
        verify_partner: cli.verify_partner,
        skip: cli.skip.clone(),
    };
    let resolved = coherence_settings::resolve_config(cfg, overrides).context("resolve config")?;

    let records = coherence_drop::load_drop_manifest(&manifest)?;
    let universe = PackageUniverse::build(records).context("build package universe")?;

    let outcome = coherence_domain::verify(&universe, &resolved.policy)
        .context("verify package universe")?;

    for info in &outcome.infos {
        eprintln!("{info}");
    }
    if !outcome.warnings.is_empty() {
        eprintln!(
            "Following packages have mismatches but are not failures due to disabled verifications:"
        );
        for warning in &outcome.warnings {
            eprintln!("warning: {warning}");
        }
    }
    for error in &outcome.errors {
        eprintln!("error: {error}");
    }

    let finished_at = OffsetDateTime::now_utc();
    let success = outcome.success();
    let report = report::build_report(outcome, started_at, finished_at);

    report::write_report_file(&report_out, &report).context("write report json")?;
    if write_markdown {
        let md = render::render_markdown(&report);
        report::write_text_file(&markdown_out, &md).context("write markdown")?;
    }

    Ok(if success { 0 } else { 1 })
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<i32> {
    let text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report: CoherenceReport = serde_json::from_str(&text).context("parse report json")?;
    let md = render::render_markdown(&report);

    if let Some(out_path) = output {
        report::write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{md}");
    }

    Ok(0)
}
