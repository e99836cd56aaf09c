use safe_labels_types::ids;
use std::fmt;

/// A single broken rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub check_id: String,
    pub code: String,
    /// The offending label key.
    pub label: String,
    pub message: String,
}

impl Violation {
    /// A denied key is present.
    pub fn denied(label: &str) -> Self {
        Self::new(
            ids::CHECK_LABELS_DENY_LIST,
            ids::CODE_DENIED_LABEL,
            label,
            format!("label {label:?} is on the deny list"),
        )
    }

    /// A constrained key is present but its value does not match.
    pub fn constraint_mismatch(label: &str) -> Self {
        Self::new(
            ids::CHECK_LABELS_CONSTRAINTS,
            ids::CODE_CONSTRAINT_MISMATCH,
            label,
            format!("label {label:?} does not pass user-defined constraint"),
        )
    }

    /// A constrained key is absent from a resource of the given kind.
    pub fn missing_constrained(label: &str, kind: &str) -> Self {
        Self::new(
            ids::CHECK_LABELS_REQUIRED,
            ids::CODE_MISSING_CONSTRAINED_LABEL,
            label,
            format!("constrained label {label:?} not found inside of {kind}"),
        )
    }

    fn new(check_id: &str, code: &str, label: &str, message: String) -> Self {
        Self {
            check_id: check_id.to_string(),
            code: code.to_string(),
            label: label.to_string(),
            message,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of one evaluation. Only the first violation found is reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(Violation),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Verdict::Pass => None,
            Verdict::Fail(v) => Some(v),
        }
    }

    /// Human-readable rejection reason, if any.
    pub fn reason(&self) -> Option<&str> {
        self.violation().map(|v| v.message.as_str())
    }
}
