use safe_labels_types::ids;
use thiserror::Error;

/// Settings that can never produce a usable [`RuleSet`](crate::RuleSet).
///
/// Raised at configuration time only; evaluation itself never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("compiling regexp for label {label:?} ({pattern})")]
    InvalidPattern {
        label: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// `labels` is sorted and free of duplicates.
    #[error(
        "the following labels cannot be constrained and denied at the same time: {}",
        .labels.join(", ")
    )]
    OverlappingLabels { labels: Vec<String> },
}

impl ConfigError {
    /// Stable code for reports and `explain`.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidPattern { .. } => ids::CODE_INVALID_PATTERN,
            ConfigError::OverlappingLabels { .. } => ids::CODE_OVERLAPPING_LABELS,
        }
    }
}
