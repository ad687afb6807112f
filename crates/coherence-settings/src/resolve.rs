use crate::{model::CoherenceConfigV1, presets};
use coherence_domain::policy::VerifyPolicy;
use coherence_types::PackageId;

/// CLI overrides. These win over file config, which wins over the preset.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub verify_product: Option<bool>,
    pub verify_partner: Option<bool>,
    pub skip: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub profile: String,
    pub policy: VerifyPolicy,
}

pub fn resolve_config(
    cfg: CoherenceConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "product".to_string());

    let mut policy = presets::preset(&profile).ok_or_else(|| {
        anyhow::anyhow!("unknown profile: {profile} (expected strict|product|none)")
    })?;

    if let Some(v) = cfg.verify.product_packages {
        policy.behavior.product_packages = v;
    }
    if let Some(v) = cfg.verify.partner_packages {
        policy.behavior.partner_packages = v;
    }
    if let Some(v) = overrides.verify_product {
        policy.behavior.product_packages = v;
    }
    if let Some(v) = overrides.verify_partner {
        policy.behavior.partner_packages = v;
    }

    policy.skip.extend(cfg.skip.iter().map(PackageId::new));
    policy
        .skip
        .extend(overrides.skip.iter().map(PackageId::new));

    Ok(ResolvedConfig { profile, policy })
}
