use crate::classify::{classify, mismatch_message};
use crate::error::CoherenceError;
use crate::policy::{SkipReason, VerifyPolicy};
use crate::universe::PackageUniverse;
use crate::visit::{visit_universe, SkippedPackage};
use coherence_types::{CoherenceData, Severity, Verdict};

/// The terminal result of one verification run.
#[derive(Clone, Debug)]
pub struct CoherenceOutcome {
    pub verdict: Verdict,
    /// Informational messages (skips, disabled notes). Never failures.
    pub infos: Vec<String>,
    /// Tolerated mismatches. Never failures.
    pub warnings: Vec<String>,
    /// Enforced mismatches. Any error fails the run.
    pub errors: Vec<String>,
    pub data: CoherenceData,
}

impl CoherenceOutcome {
    pub fn success(&self) -> bool {
        self.verdict != Verdict::Fail
    }
}

/// Runs the verifier over the whole universe: visit everything, then classify
/// every mismatch, then report. No partial results are produced; a visit
/// failure aborts before any classification happens.
pub fn verify(
    universe: &PackageUniverse,
    policy: &VerifyPolicy,
) -> Result<CoherenceOutcome, CoherenceError> {
    if policy.behavior.is_none() {
        // Disabled sanity check.
        return Ok(CoherenceOutcome {
            verdict: Verdict::Pass,
            infos: vec!["Coherence verification is disabled.".to_string()],
            warnings: Vec::new(),
            errors: Vec::new(),
            data: CoherenceData {
                disabled_reason: Some("verification behavior is none".to_string()),
                ..CoherenceData::default()
            },
        });
    }

    let graph = visit_universe(universe, policy)?;

    let infos: Vec<String> = graph.skipped.iter().map(skip_message).collect();

    let mut warnings = Vec::new();
    let mut errors = Vec::new();
    let mut mismatches_total = 0u32;
    for (_, outcome) in graph.visited() {
        for mismatch in &outcome.mismatches {
            mismatches_total += 1;
            let message = mismatch_message(mismatch);
            match classify(mismatch, policy.behavior) {
                Severity::Error => errors.push(message),
                _ => warnings.push(message),
            }
        }
    }

    let verdict = if !errors.is_empty() {
        Verdict::Fail
    } else if !warnings.is_empty() {
        Verdict::Warn
    } else {
        Verdict::Pass
    };

    let data = CoherenceData {
        packages_scanned: graph.visited_count() as u32,
        packages_skipped: graph.skipped.len() as u32,
        dependencies_scanned: graph.dependencies_scanned,
        mismatches_total,
        mismatches_warned: warnings.len() as u32,
        mismatches_errored: errors.len() as u32,
        disabled_reason: None,
    };

    Ok(CoherenceOutcome {
        verdict,
        infos,
        warnings,
        errors,
        data,
    })
}

fn skip_message(skipped: &SkippedPackage) -> String {
    match skipped.reason {
        SkipReason::Partner => format!(
            "Skipping verification for external package {}.",
            skipped.identity
        ),
        SkipReason::Lineup => format!(
            "Skipping verification for lineup package {}.",
            skipped.identity
        ),
        SkipReason::IgnoreList => format!(
            "Skipping verification for package {} because it is in ignore list.",
            skipped.identity
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::VerifyBehavior;
    use crate::test_support::{
        dep, group, lineup_record, partner_record, record, universe_of,
    };
    use coherence_types::TargetFramework;

    fn net45() -> Option<TargetFramework> {
        Some(TargetFramework::parse("net45"))
    }

    fn mismatched_universe() -> PackageUniverse {
        universe_of(vec![
            record("A", "1.0", vec![group(net45(), vec![dep("B", "1.0")])]),
            record("B", "2.0", Vec::new()),
        ])
    }

    #[test]
    fn product_mismatch_fails_with_exact_message() {
        let universe = mismatched_universe();
        let outcome =
            verify(&universe, &VerifyPolicy::new(VerifyBehavior::PRODUCT)).expect("verify");

        assert!(!outcome.success());
        assert_eq!(outcome.verdict, Verdict::Fail);
        assert_eq!(
            outcome.errors,
            vec!["A depends on B v1.0 (net45) when the latest build is v2.0.".to_string()]
        );
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.data.mismatches_total, 1);
        assert_eq!(outcome.data.mismatches_errored, 1);
    }

    #[test]
    fn behavior_none_short_circuits_to_success() {
        let universe = mismatched_universe();
        let outcome = verify(&universe, &VerifyPolicy::new(VerifyBehavior::NONE)).expect("verify");

        assert!(outcome.success());
        assert_eq!(outcome.verdict, Verdict::Pass);
        assert!(outcome.warnings.is_empty());
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.data.packages_scanned, 0);
        assert!(outcome.data.disabled_reason.is_some());
    }

    #[test]
    fn partner_mismatch_warns_when_only_product_enforced() {
        let universe = universe_of(vec![
            record("A", "1.0", vec![group(net45(), vec![dep("Ext", "1.0")])]),
            partner_record("Ext", "2.0"),
        ]);
        let outcome =
            verify(&universe, &VerifyPolicy::new(VerifyBehavior::PRODUCT)).expect("verify");

        assert!(outcome.success());
        assert_eq!(outcome.verdict, Verdict::Warn);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn exact_versions_pass_cleanly() {
        let universe = universe_of(vec![
            record("A", "1.0", vec![group(net45(), vec![dep("B", "2.0")])]),
            record("B", "2.0", Vec::new()),
        ]);
        let outcome = verify(&universe, &VerifyPolicy::new(VerifyBehavior::ALL)).expect("verify");

        assert_eq!(outcome.verdict, Verdict::Pass);
        assert!(outcome.infos.is_empty());
        assert_eq!(outcome.data.dependencies_scanned, 1);
    }

    #[test]
    fn skips_surface_as_infos() {
        let universe = universe_of(vec![
            partner_record("Ext", "1.0"),
            lineup_record("Lineup", "3.0", Vec::new()),
            record("Legacy.Tool", "1.0", Vec::new()),
        ]);
        let policy = VerifyPolicy::with_skip(VerifyBehavior::ALL, ["Legacy.Tool"]);
        let outcome = verify(&universe, &policy).expect("verify");

        assert_eq!(
            outcome.infos,
            vec![
                "Skipping verification for external package Ext 1.0.".to_string(),
                "Skipping verification for lineup package Lineup 3.0.".to_string(),
                "Skipping verification for package Legacy.Tool 1.0 because it is in ignore list."
                    .to_string(),
            ]
        );
        assert_eq!(outcome.data.packages_skipped, 3);
        assert_eq!(outcome.data.packages_scanned, 0);
    }

    #[test]
    fn lineup_declarations_are_not_verified() {
        // The lineup pins B at a stale version, but its declarations are skipped.
        let universe = universe_of(vec![
            lineup_record(
                "Lineup",
                "1.0",
                vec![group(net45(), vec![dep("B", "1.0")])],
            ),
            record("B", "2.0", Vec::new()),
        ]);
        let outcome = verify(&universe, &VerifyPolicy::new(VerifyBehavior::ALL)).expect("verify");
        assert_eq!(outcome.verdict, Verdict::Pass);
    }

    #[test]
    fn visit_failure_produces_no_report() {
        let universe = universe_of(vec![
            record("A", "1.0", vec![group(net45(), vec![dep("B", "(, 2.0)")])]),
            record("B", "1.0", Vec::new()),
        ]);
        let err = verify(&universe, &VerifyPolicy::new(VerifyBehavior::ALL))
            .expect_err("must abort");
        assert!(err.to_string().contains("unable to verify package A 1.0"));
    }
}
