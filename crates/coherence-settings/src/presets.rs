use coherence_domain::policy::{VerifyBehavior, VerifyPolicy};

/// Preset profiles are opinionated defaults.
///
/// `product` is the historical default: the build's own packages are
/// enforced, partner mismatches stay warnings.
pub fn preset(profile: &str) -> Option<VerifyPolicy> {
    match profile {
        "strict" => Some(VerifyPolicy::new(VerifyBehavior::ALL)),
        "product" => Some(VerifyPolicy::new(VerifyBehavior::PRODUCT)),
        "none" => Some(VerifyPolicy::new(VerifyBehavior::NONE)),
        _ => None,
    }
}
