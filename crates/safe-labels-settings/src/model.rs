use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Policy settings schema v1, as the user writes them.
///
/// Transient: parsed once, handed to [`compile`](crate::compile), then dropped.
/// Unknown keys are rejected so that a misspelt rule never silently disables itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SafeLabelsSettingsV1 {
    /// Label keys that must never appear on a resource. Exact match, no patterns.
    #[serde(default)]
    pub denied_labels: Vec<String>,

    /// Label key -> regular expression its value must match (unanchored search).
    /// Every key listed here is also required to be present.
    #[serde(default)]
    pub constrained_labels: BTreeMap<String, String>,
}
