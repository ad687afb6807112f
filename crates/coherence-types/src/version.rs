//! Build version and dependency range parsing.
//!
//! Build drops carry legacy four-part package versions (`1.0`, `1.0.0.5`,
//! `1.0.0-beta1-1234`), which the Rust `semver` crate cannot represent, so the
//! engine owns its own version type. Missing numeric parts compare as zero
//! (`1.0 == 1.0.0`) and a release version sorts above any prerelease of the
//! same numbers.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("invalid version '{input}': {reason}")]
    InvalidVersion { input: String, reason: String },

    #[error("invalid version range '{input}': {reason}")]
    InvalidRange { input: String, reason: String },
}

/// A comparable package version: up to four numeric parts plus an optional
/// prerelease tag. `Display` preserves the original input text.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BuildVersion {
    parts: [u64; 4],
    release: Option<String>,
    raw: String,
}

impl BuildVersion {
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(VersionError::InvalidVersion {
                input: input.to_string(),
                reason: "empty".to_string(),
            });
        }

        let (number, release) = match raw.split_once('-') {
            Some((number, release)) if !release.is_empty() => (number, Some(release)),
            Some(_) => {
                return Err(VersionError::InvalidVersion {
                    input: input.to_string(),
                    reason: "empty prerelease tag".to_string(),
                });
            }
            None => (raw, None),
        };

        let mut parts = [0u64; 4];
        let pieces: Vec<&str> = number.split('.').collect();
        if pieces.is_empty() || pieces.len() > 4 {
            return Err(VersionError::InvalidVersion {
                input: input.to_string(),
                reason: format!("expected 1 to 4 numeric parts, got {}", pieces.len()),
            });
        }
        for (i, piece) in pieces.iter().enumerate() {
            parts[i] = piece.parse::<u64>().map_err(|_| VersionError::InvalidVersion {
                input: input.to_string(),
                reason: format!("'{piece}' is not a number"),
            })?;
        }

        Ok(Self {
            parts,
            release: release.map(|r| r.to_string()),
            raw: raw.to_string(),
        })
    }

    /// Failure-free comparison key: numeric parts, then the release tag with a
    /// missing tag sorting highest (a release is newer than its prereleases).
    fn key(&self) -> ([u64; 4], bool, String) {
        (
            self.parts,
            self.release.is_none(),
            self.release
                .as_deref()
                .map(|r| r.to_ascii_lowercase())
                .unwrap_or_default(),
        )
    }
}

impl PartialEq for BuildVersion {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for BuildVersion {}

impl PartialOrd for BuildVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BuildVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a_parts, a_final, a_rel) = self.key();
        let (b_parts, b_final, b_rel) = other.key();
        a_parts
            .cmp(&b_parts)
            .then(a_final.cmp(&b_final))
            .then(a_rel.cmp(&b_rel))
    }
}

impl fmt::Display for BuildVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for BuildVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildVersion::parse(s)
    }
}

impl TryFrom<String> for BuildVersion {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        BuildVersion::parse(&value)
    }
}

impl From<BuildVersion> for String {
    fn from(value: BuildVersion) -> Self {
        value.raw
    }
}

/// A dependency version range. Only the minimum bound participates in
/// coherence verification; the raw text is preserved for display.
///
/// Accepted syntaxes (the legacy nuspec forms):
/// - `1.0` — minimum 1.0, unbounded above
/// - `[1.0]` — exactly 1.0
/// - `[1.0, 2.0)` / `[1.0, )` — minimum 1.0
/// - `(, 2.0)` — no minimum
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionRange {
    min: Option<BuildVersion>,
    raw: String,
}

impl VersionRange {
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(VersionError::InvalidRange {
                input: input.to_string(),
                reason: "empty".to_string(),
            });
        }

        let min = if raw.starts_with('[') || raw.starts_with('(') {
            let closed = raw.ends_with(']') || raw.ends_with(')');
            if !closed || raw.len() < 2 {
                return Err(VersionError::InvalidRange {
                    input: input.to_string(),
                    reason: "unbalanced brackets".to_string(),
                });
            }
            let inner = &raw[1..raw.len() - 1];
            let lower = match inner.split_once(',') {
                Some((lower, _)) => lower.trim(),
                None => inner.trim(),
            };
            if lower.is_empty() {
                None
            } else {
                Some(BuildVersion::parse(lower)?)
            }
        } else {
            Some(BuildVersion::parse(raw)?)
        };

        Ok(Self {
            min,
            raw: raw.to_string(),
        })
    }

    /// Minimum bound, absent for open-below ranges like `(, 2.0)`.
    pub fn min(&self) -> Option<&BuildVersion> {
        self.min.as_ref()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for VersionRange {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionRange::parse(s)
    }
}

impl TryFrom<String> for VersionRange {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        VersionRange::parse(&value)
    }
}

impl From<VersionRange> for String {
    fn from(value: VersionRange) -> Self {
        value.raw
    }
}
