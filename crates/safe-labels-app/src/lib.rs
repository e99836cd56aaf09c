//! Use case orchestration for safe-labels.
//!
//! This crate provides the application layer: the entry points a policy host calls
//! (settings validation, request validation) plus local use cases for the CLI. It is
//! intentionally thin and delegates rule compilation and evaluation to the lower layers.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod resource;
mod settings;
mod validate;

pub use check::{run_check, verdict_exit_code, CheckInput, CheckOutput};
pub use explain::{
    format_explanation, format_not_found, rule_topic, run_explain, ExplainOutput, RuleTopic,
};
pub use resource::resource_from_object;
pub use settings::{validate_settings, INVALID_SETTINGS_MESSAGE};
pub use validate::{validate, validate_request};
