//! Pure coherence verification (no IO).
//!
//! Input: a package universe constructed elsewhere plus a verification policy.
//! Output: classified warnings/errors + verdict + run counters.

#![forbid(unsafe_code)]

pub mod classify;
pub mod error;
pub mod model;
pub mod policy;
pub mod universe;
pub mod visit;

mod engine;

#[cfg(test)]
mod test_support;

pub use engine::{verify, CoherenceOutcome};
pub use error::{CoherenceError, VisitError};
