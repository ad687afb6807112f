use crate::model::PackageIdentity;
use coherence_types::{PackageId, VersionRange};
use thiserror::Error;

/// Fatal engine errors. Mismatches are data, not errors; only these two
/// conditions abort a run.
#[derive(Debug, Error)]
pub enum CoherenceError {
    /// Two input records share a case-insensitive identifier.
    #[error("multiple copies of the same package were found:\n  {first}\n  {second}")]
    DuplicateIdentity {
        first: PackageIdentity,
        second: PackageIdentity,
    },

    /// Inspecting one package's dependency groups failed; the whole run stops
    /// before any classification or reporting happens.
    #[error("unable to verify package {package}")]
    VisitFailure {
        package: PackageIdentity,
        #[source]
        source: VisitError,
    },
}

#[derive(Debug, Error)]
pub enum VisitError {
    /// The dependency resolved inside the universe but its range carries no
    /// minimum bound to verify against.
    #[error("dependency {dependency} range '{range}' has no minimum bound")]
    MissingMinimum {
        dependency: PackageId,
        range: VersionRange,
    },
}
