//! Target-framework monikers.
//!
//! The verifier only needs two facts about a framework: whether it is a
//! portable-class-library profile (always exempt from verification) and the
//! short moniker to render in mismatch messages. Recognition is an explicit
//! engine-owned parser; nothing here mutates shared registries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder rendered for frameworks with no known short moniker.
pub const UNSUPPORTED_FRAMEWORK: &str = "unsupported";

/// A parsed target-framework moniker.
///
/// Accepts both short monikers (`net45`, `netstandard1.3`, `dnxcore50`,
/// `portable-net45+win8`) and full names
/// (`.NETPortable,Version=v4.5,Profile=Profile259`). Unrecognized input is
/// preserved but renders as [`UNSUPPORTED_FRAMEWORK`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TargetFramework {
    identifier: String,
    short: Option<String>,
    raw: String,
}

impl TargetFramework {
    pub fn parse(input: &str) -> Self {
        let raw = input.trim().to_string();

        // Full-name form: ".NETFramework,Version=v4.5[,Profile=...]".
        if raw.starts_with('.') || raw.contains(',') {
            let identifier = raw.split(',').next().unwrap_or(&raw).trim().to_string();
            return Self {
                identifier,
                short: None,
                raw,
            };
        }

        let folded = raw.to_ascii_lowercase();
        let identifier = if folded.starts_with("portable") {
            ".NETPortable"
        } else if folded.starts_with("netstandard") {
            ".NETStandard"
        } else if folded.starts_with("netcoreapp") {
            ".NETCoreApp"
        } else if folded.starts_with("netcore") {
            ".NETCore"
        } else if folded.starts_with("dnxcore") {
            "DNXCore"
        } else if folded.starts_with("dnx") {
            "DNX"
        } else if folded.starts_with("dotnet") {
            ".NETPlatform"
        } else if folded.starts_with("net") && folded[3..].chars().all(|c| c.is_ascii_digit()) {
            ".NETFramework"
        } else if folded.starts_with("wpa") {
            "WindowsPhoneApp"
        } else if folded.starts_with("wp") {
            "WindowsPhone"
        } else if folded.starts_with("win") {
            "Windows"
        } else if folded.starts_with("sl") {
            "Silverlight"
        } else {
            ""
        };

        if identifier.is_empty() {
            Self {
                identifier: raw.clone(),
                short: None,
                raw,
            }
        } else {
            Self {
                identifier: identifier.to_string(),
                short: Some(folded),
                raw,
            }
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Portable-class-library profiles are always exempt from verification.
    pub fn is_portable(&self) -> bool {
        self.identifier.eq_ignore_ascii_case(".NETPortable")
    }

    /// Short moniker, if one is known for this framework.
    pub fn short_name(&self) -> Option<&str> {
        self.short.as_deref()
    }
}

impl fmt::Display for TargetFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name().unwrap_or(UNSUPPORTED_FRAMEWORK))
    }
}

impl From<String> for TargetFramework {
    fn from(value: String) -> Self {
        TargetFramework::parse(&value)
    }
}

impl From<&str> for TargetFramework {
    fn from(value: &str) -> Self {
        TargetFramework::parse(value)
    }
}

impl From<TargetFramework> for String {
    fn from(value: TargetFramework) -> Self {
        value.raw
    }
}
