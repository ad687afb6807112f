//! Config parsing and profile resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CoherenceConfigV1, VerifyConfig, SCHEMA_CONFIG_V1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `coherence.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<CoherenceConfigV1> {
    let cfg: CoherenceConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective verification policy (profile + file config + CLI
/// overrides).
pub fn resolve_config(
    cfg: CoherenceConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
