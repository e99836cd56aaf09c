//! Pure policy evaluation (no IO).
//!
//! Input: a compiled [`RuleSet`] and a resource's labels, constructed elsewhere.
//! Output: a [`Verdict`] naming at most one violation.

#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod policy;
pub mod verdict;

mod checks;
mod engine;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;

pub use engine::{evaluate, evaluate_labels};
pub use error::ConfigError;
pub use model::{LabelMap, ResourceModel};
pub use policy::RuleSet;
pub use verdict::{Verdict, Violation};
