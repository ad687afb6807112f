use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for `coherence.toml`.
pub const SCHEMA_CONFIG_V1: &str = "coherence.config.v1";

/// `coherence.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CoherenceConfigV1 {
    /// Optional schema string for tooling (`coherence.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Profile: `strict`, `product` (default), or `none`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Per-category enforcement overrides on top of the profile.
    #[serde(default)]
    pub verify: VerifyConfig,

    /// Package ids exempted from verification (case-insensitive). Historical
    /// builds baked these into the tool; here they are configuration.
    #[serde(default)]
    pub skip: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VerifyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_packages: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_packages: Option<bool>,
}
