//! Mismatch severity classification and message rendering.

use crate::model::Mismatch;
use crate::policy::VerifyBehavior;
use coherence_types::{Severity, TargetFramework};

/// A mismatch is tolerated as a warning when its category is not enforced by
/// the behavior flags; otherwise it is an error.
pub fn classify(mismatch: &Mismatch, behavior: VerifyBehavior) -> Severity {
    let tolerated = if mismatch.resolved_is_partner {
        !behavior.partner_packages
    } else {
        !behavior.product_packages
    };
    if tolerated {
        Severity::Warning
    } else {
        Severity::Error
    }
}

/// The one message format shared by warnings and errors. Carries everything
/// needed to diagnose without re-running.
pub fn mismatch_message(mismatch: &Mismatch) -> String {
    format!(
        "{} depends on {} v{} ({}) when the latest build is v{}.",
        mismatch.package.id,
        mismatch.dependency.id,
        mismatch.dependency.range,
        framework_label(mismatch.target_framework.as_ref()),
        mismatch.resolved.version,
    )
}

fn framework_label(framework: Option<&TargetFramework>) -> String {
    match framework {
        // Agnostic groups are exempt from visitation, so this arm is not
        // reachable from the verifier, but the renderer stays total.
        None => "any".to_string(),
        Some(framework) => framework.to_string(),
    }
}
