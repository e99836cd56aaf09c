//! Stable DTOs and IDs used across the safe-labels workspace.
//!
//! This crate is intentionally boring:
//! - data types exchanged with the admission host
//! - stable string IDs and codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod protocol;

pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use protocol::{
    AdmissionRequest, GroupVersionKind, SettingsValidationResponse, ValidationRequest,
    ValidationResponse, CODE_BAD_REQUEST,
};
