//! Stable identifiers for checks and violation codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_LABELS_DENY_LIST: &str = "labels.deny_list";
pub const CHECK_LABELS_CONSTRAINTS: &str = "labels.constraints";
pub const CHECK_LABELS_REQUIRED: &str = "labels.required";

// Codes: labels.deny_list
pub const CODE_DENIED_LABEL: &str = "denied_label";

// Codes: labels.constraints
pub const CODE_CONSTRAINT_MISMATCH: &str = "constraint_mismatch";

// Codes: labels.required
pub const CODE_MISSING_CONSTRAINED_LABEL: &str = "missing_constrained_label";

// Settings-level
pub const CHECK_SETTINGS_VALIDATION: &str = "settings.validation";
pub const CODE_INVALID_PATTERN: &str = "invalid_pattern";
pub const CODE_OVERLAPPING_LABELS: &str = "overlapping_labels";
