use coherence_types::{BuildVersion, PackageId, TargetFramework, VersionRange};
use std::fmt;

/// Identity of one built package: id plus the version the build produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageIdentity {
    pub id: PackageId,
    pub version: BuildVersion,
}

impl PackageIdentity {
    pub fn new(id: impl Into<PackageId>, version: BuildVersion) -> Self {
        Self {
            id: id.into(),
            version,
        }
    }
}

impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.version)
    }
}

/// A declared dependency. Only the range's minimum bound participates in
/// verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DependencyRef {
    pub id: PackageId,
    pub range: VersionRange,
}

/// Dependencies declared for one target framework. An absent framework means
/// the group is framework-agnostic.
#[derive(Clone, Debug, Default)]
pub struct DependencyGroup {
    pub target_framework: Option<TargetFramework>,
    pub dependencies: Vec<DependencyRef>,
}

/// One package record in the universe. Immutable input: visitation never
/// writes back into records, it returns a freshly built graph instead.
#[derive(Clone, Debug)]
pub struct PackageRecord {
    pub identity: PackageIdentity,
    pub dependency_groups: Vec<DependencyGroup>,
    pub is_partner_package: bool,
    pub is_lineup_package: bool,
}

/// A recorded version mismatch: the dependency named one minimum version, the
/// build produced another.
#[derive(Clone, Debug)]
pub struct Mismatch {
    /// The package declaring the dependency.
    pub package: PackageIdentity,
    pub dependency: DependencyRef,
    pub target_framework: Option<TargetFramework>,
    /// Identity of the package actually found in the universe.
    pub resolved: PackageIdentity,
    pub resolved_is_partner: bool,
}
