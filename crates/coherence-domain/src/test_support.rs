use crate::model::{
    DependencyGroup, DependencyRef, Mismatch, PackageIdentity, PackageRecord,
};
use crate::universe::PackageUniverse;
use coherence_types::{BuildVersion, PackageId, TargetFramework, VersionRange};

pub fn dep(id: &str, range: &str) -> DependencyRef {
    DependencyRef {
        id: PackageId::new(id),
        range: VersionRange::parse(range).expect("valid range in test"),
    }
}

pub fn group(target_framework: Option<TargetFramework>, deps: Vec<DependencyRef>) -> DependencyGroup {
    DependencyGroup {
        target_framework,
        dependencies: deps,
    }
}

pub fn identity(id: &str, version: &str) -> PackageIdentity {
    PackageIdentity::new(id, BuildVersion::parse(version).expect("valid version in test"))
}

pub fn record(id: &str, version: &str, groups: Vec<DependencyGroup>) -> PackageRecord {
    PackageRecord {
        identity: identity(id, version),
        dependency_groups: groups,
        is_partner_package: false,
        is_lineup_package: false,
    }
}

pub fn partner_record(id: &str, version: &str) -> PackageRecord {
    PackageRecord {
        is_partner_package: true,
        ..record(id, version, Vec::new())
    }
}

pub fn lineup_record(id: &str, version: &str, groups: Vec<DependencyGroup>) -> PackageRecord {
    PackageRecord {
        is_lineup_package: true,
        ..record(id, version, groups)
    }
}

pub fn universe_of(records: Vec<PackageRecord>) -> PackageUniverse {
    PackageUniverse::build(records).expect("valid universe in test")
}

#[allow(clippy::too_many_arguments)]
pub fn mismatch(
    package_id: &str,
    package_version: &str,
    dep_id: &str,
    dep_range: &str,
    framework: &str,
    resolved_version: &str,
    resolved_is_partner: bool,
) -> Mismatch {
    Mismatch {
        package: identity(package_id, package_version),
        dependency: dep(dep_id, dep_range),
        target_framework: Some(TargetFramework::parse(framework)),
        resolved: identity(dep_id, resolved_version),
        resolved_is_partner,
    }
}
