//! Drop-manifest adapter: load the externally produced description of a build
//! drop into package records.
//!
//! This crate is allowed to do filesystem IO. It parses versions, ranges, and
//! frameworks eagerly so bad metadata fails at load time with a package-
//! qualified error, not in the middle of visitation. Duplicate ids are not
//! its concern; universe construction owns that invariant.

#![forbid(unsafe_code)]

mod parse;

use anyhow::Context;
use camino::Utf8Path;
use coherence_domain::model::PackageRecord;

pub use parse::SCHEMA_DROP_V1;

/// Read and parse a drop manifest file.
pub fn load_drop_manifest(path: &Utf8Path) -> anyhow::Result<Vec<PackageRecord>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    parse_drop_manifest(&text).with_context(|| format!("parse {path}"))
}

/// Parse drop-manifest JSON into package records.
pub fn parse_drop_manifest(text: &str) -> anyhow::Result<Vec<PackageRecord>> {
    parse::parse_manifest(text)
}
