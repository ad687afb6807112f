//! Stable DTOs shared across the coherence workspace.
//!
//! This crate is intentionally boring:
//! - package identity types (case-insensitive ids, build versions, ranges)
//! - target-framework monikers and the portable-profile rule
//! - data types for the emitted report envelope

#![forbid(unsafe_code)]

pub mod framework;
pub mod id;
pub mod report;
pub mod version;

pub use framework::{TargetFramework, UNSUPPORTED_FRAMEWORK};
pub use id::PackageId;
pub use report::{
    CoherenceData, CoherenceReport, ReportEnvelope, Severity, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
pub use version::{BuildVersion, VersionError, VersionRange};
