use crate::model::SafeLabelsSettingsV1;
use regex::Regex;
use safe_labels_domain::{ConfigError, RuleSet};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Compile raw settings into an immutable [`RuleSet`].
///
/// Fails on the first pattern that does not compile (in key order) or when a label is both
/// denied and constrained. Nothing is returned on failure, so a partial rule set never escapes.
pub fn compile(settings: SafeLabelsSettingsV1) -> Result<RuleSet, ConfigError> {
    let SafeLabelsSettingsV1 {
        denied_labels,
        constrained_labels,
    } = settings;

    // Duplicates collapse silently.
    let denied: BTreeSet<String> = denied_labels.into_iter().collect();

    let mut constrained = BTreeMap::new();
    for (label, pattern) in constrained_labels {
        let regex = match Regex::new(&pattern) {
            Ok(regex) => regex,
            Err(source) => {
                return Err(ConfigError::InvalidPattern {
                    label,
                    pattern,
                    source,
                });
            }
        };
        constrained.insert(label, regex);
    }

    let rules = RuleSet::new(denied, constrained)?;
    debug!(
        denied = rules.denied_labels().len(),
        constrained = rules.constrained_labels().len(),
        "compiled label rules"
    );
    Ok(rules)
}

/// A printable digest of a compiled rule set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsSummary {
    pub denied_labels: Vec<String>,
    /// `(label, pattern)` pairs, sorted by label.
    pub constrained_labels: Vec<(String, String)>,
}

impl From<&RuleSet> for SettingsSummary {
    fn from(rules: &RuleSet) -> Self {
        Self {
            denied_labels: rules.denied_labels().iter().cloned().collect(),
            constrained_labels: rules
                .constrained_labels()
                .iter()
                .map(|(label, regex)| (label.clone(), regex.as_str().to_string()))
                .collect(),
        }
    }
}
