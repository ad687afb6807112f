use anyhow::Context;
use coherence_domain::model::{
    DependencyGroup, DependencyRef, PackageIdentity, PackageRecord,
};
use coherence_types::{BuildVersion, PackageId, TargetFramework, VersionRange};
use serde::Deserialize;

/// Stable schema identifier for the drop manifest.
pub const SCHEMA_DROP_V1: &str = "coherence.drop.v1";

#[derive(Debug, Deserialize)]
struct DropManifest {
    #[serde(default)]
    schema: Option<String>,
    #[serde(default)]
    packages: Vec<PackageEntry>,
}

#[derive(Debug, Deserialize)]
struct PackageEntry {
    id: String,
    version: String,
    #[serde(default)]
    partner: bool,
    #[serde(default)]
    lineup: bool,
    #[serde(default)]
    dependency_groups: Vec<GroupEntry>,
}

#[derive(Debug, Deserialize)]
struct GroupEntry {
    #[serde(default)]
    target_framework: Option<String>,
    #[serde(default)]
    dependencies: Vec<DependencyEntry>,
}

#[derive(Debug, Deserialize)]
struct DependencyEntry {
    id: String,
    range: String,
}

pub fn parse_manifest(text: &str) -> anyhow::Result<Vec<PackageRecord>> {
    let manifest: DropManifest = serde_json::from_str(text).context("parse drop manifest JSON")?;

    if let Some(schema) = manifest.schema.as_deref() {
        if schema != SCHEMA_DROP_V1 {
            anyhow::bail!("unsupported drop manifest schema: {schema} (expected {SCHEMA_DROP_V1})");
        }
    }

    manifest
        .packages
        .into_iter()
        .map(|entry| {
            let id = entry.id.clone();
            to_record(entry).with_context(|| format!("package {id}"))
        })
        .collect()
}

fn to_record(entry: PackageEntry) -> anyhow::Result<PackageRecord> {
    let version = BuildVersion::parse(&entry.version).context("version")?;

    let dependency_groups = entry
        .dependency_groups
        .into_iter()
        .map(to_group)
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(PackageRecord {
        identity: PackageIdentity::new(entry.id.as_str(), version),
        dependency_groups,
        is_partner_package: entry.partner,
        is_lineup_package: entry.lineup,
    })
}

fn to_group(entry: GroupEntry) -> anyhow::Result<DependencyGroup> {
    let dependencies = entry
        .dependencies
        .into_iter()
        .map(|dep| {
            let range = VersionRange::parse(&dep.range)
                .with_context(|| format!("dependency {}", dep.id))?;
            Ok(DependencyRef {
                id: PackageId::new(&dep.id),
                range,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(DependencyGroup {
        target_framework: entry.target_framework.as_deref().map(TargetFramework::parse),
        dependencies,
    })
}
