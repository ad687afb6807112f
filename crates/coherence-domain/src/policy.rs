use crate::model::{DependencyGroup, PackageRecord};
use coherence_types::PackageId;
use std::collections::BTreeSet;

/// Which mismatch categories are promoted from warning to error. Both flags
/// off disables verification entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyBehavior {
    pub product_packages: bool,
    pub partner_packages: bool,
}

impl VerifyBehavior {
    /// Verification disabled.
    pub const NONE: Self = Self {
        product_packages: false,
        partner_packages: false,
    };

    /// Enforce only the build's own output packages.
    pub const PRODUCT: Self = Self {
        product_packages: true,
        partner_packages: false,
    };

    /// Enforce everything.
    pub const ALL: Self = Self {
        product_packages: true,
        partner_packages: true,
    };

    pub fn is_none(self) -> bool {
        !self.product_packages && !self.partner_packages
    }
}

impl Default for VerifyBehavior {
    fn default() -> Self {
        VerifyBehavior::PRODUCT
    }
}

/// Why a package was exempted from visitation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    Partner,
    Lineup,
    IgnoreList,
}

/// Verification policy: behavior flags plus the configured ignore set.
///
/// The ignore set is supplied by configuration; the engine carries no literal
/// package names.
#[derive(Clone, Debug, Default)]
pub struct VerifyPolicy {
    pub behavior: VerifyBehavior,
    pub skip: BTreeSet<PackageId>,
}

impl VerifyPolicy {
    pub fn new(behavior: VerifyBehavior) -> Self {
        Self {
            behavior,
            skip: BTreeSet::new(),
        }
    }

    pub fn with_skip<I, S>(behavior: VerifyBehavior, skip: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PackageId>,
    {
        Self {
            behavior,
            skip: skip.into_iter().map(Into::into).collect(),
        }
    }

    /// Package-level exemption. Partner and lineup packages and ignore-listed
    /// ids are not visited at all.
    pub fn skip_reason(&self, record: &PackageRecord) -> Option<SkipReason> {
        if record.is_partner_package {
            Some(SkipReason::Partner)
        } else if record.is_lineup_package {
            Some(SkipReason::Lineup)
        } else if self.skip.contains(&record.identity.id) {
            Some(SkipReason::IgnoreList)
        } else {
            None
        }
    }

    /// Group-level exemption: framework-agnostic and portable-class-library
    /// groups are never inspected, regardless of package skip status.
    pub fn group_exempt(group: &DependencyGroup) -> bool {
        match &group.target_framework {
            None => true,
            Some(framework) => framework.is_portable(),
        }
    }
}
