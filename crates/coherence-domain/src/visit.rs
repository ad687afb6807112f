//! Dependency-graph visitation.
//!
//! Walks every non-skipped package's dependency groups against the universe
//! and returns a freshly built graph. Input records are never mutated.

use crate::error::{CoherenceError, VisitError};
use crate::model::{Mismatch, PackageIdentity, PackageRecord};
use crate::policy::{SkipReason, VerifyPolicy};
use crate::universe::PackageUniverse;
use coherence_types::PackageId;
use std::collections::HashMap;

/// Per-package visitation result.
#[derive(Clone, Debug, Default)]
pub struct VisitOutcome {
    /// Mismatches in declaration order.
    pub mismatches: Vec<Mismatch>,
    /// In-universe, non-partner dependency edges (recorded independently of
    /// whether the edge also mismatched).
    pub product_dependencies: Vec<PackageIdentity>,
}

#[derive(Clone, Debug)]
pub struct SkippedPackage {
    pub identity: PackageIdentity,
    pub reason: SkipReason,
}

/// The result of visiting the whole universe: one outcome per visited package
/// (universe order) plus the ordered skip list.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    visited: Vec<(PackageIdentity, VisitOutcome)>,
    index: HashMap<PackageId, usize>,
    pub skipped: Vec<SkippedPackage>,
    pub dependencies_scanned: u32,
}

impl DependencyGraph {
    pub fn outcome(&self, id: &PackageId) -> Option<&VisitOutcome> {
        self.index.get(id).map(|&i| &self.visited[i].1)
    }

    pub fn visited(&self) -> impl Iterator<Item = &(PackageIdentity, VisitOutcome)> {
        self.visited.iter()
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    fn push(&mut self, identity: PackageIdentity, outcome: VisitOutcome) {
        self.index.insert(identity.id.clone(), self.visited.len());
        self.visited.push((identity, outcome));
    }
}

/// Visits every package in universe order. A failure inspecting one package
/// aborts the entire run, identifying the offending package.
pub fn visit_universe(
    universe: &PackageUniverse,
    policy: &VerifyPolicy,
) -> Result<DependencyGraph, CoherenceError> {
    let mut graph = DependencyGraph::default();

    for record in universe.iter() {
        if let Some(reason) = policy.skip_reason(record) {
            graph.skipped.push(SkippedPackage {
                identity: record.identity.clone(),
                reason,
            });
            continue;
        }

        let outcome = visit_package(record, universe, &mut graph.dependencies_scanned).map_err(
            |source| CoherenceError::VisitFailure {
                package: record.identity.clone(),
                source,
            },
        )?;
        graph.push(record.identity.clone(), outcome);
    }

    Ok(graph)
}

fn visit_package(
    record: &PackageRecord,
    universe: &PackageUniverse,
    dependencies_scanned: &mut u32,
) -> Result<VisitOutcome, VisitError> {
    let mut outcome = VisitOutcome::default();

    for group in &record.dependency_groups {
        if VerifyPolicy::group_exempt(group) {
            continue;
        }

        for dependency in &group.dependencies {
            *dependencies_scanned += 1;

            // Not in the universe: an external dependency, nothing to verify.
            let Some(resolved) = universe.get(&dependency.id) else {
                continue;
            };

            let min = dependency.range.min().ok_or_else(|| VisitError::MissingMinimum {
                dependency: dependency.id.clone(),
                range: dependency.range.clone(),
            })?;

            // We only care about the minimum bound; any divergence from the
            // produced version, higher or lower, is a mismatch.
            if resolved.identity.version != *min {
                outcome.mismatches.push(Mismatch {
                    package: record.identity.clone(),
                    dependency: dependency.clone(),
                    target_framework: group.target_framework.clone(),
                    resolved: resolved.identity.clone(),
                    resolved_is_partner: resolved.is_partner_package,
                });
            }

            if !resolved.is_partner_package {
                outcome.product_dependencies.push(resolved.identity.clone());
            }
        }
    }

    Ok(outcome)
}
