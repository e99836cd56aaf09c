use crate::error::ConfigError;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

/// Compiled label rules. Immutable once built.
///
/// Invariant: no key is both denied and constrained. [`RuleSet::new`] is the only way to
/// build a non-empty set and refuses to construct a violating one.
///
/// `Regex` is safe for concurrent shared use, so a `RuleSet` can be evaluated from many
/// threads at once without locking.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    denied_labels: BTreeSet<String>,
    constrained_labels: BTreeMap<String, Regex>,
}

impl RuleSet {
    pub fn new(
        denied_labels: BTreeSet<String>,
        constrained_labels: BTreeMap<String, Regex>,
    ) -> Result<Self, ConfigError> {
        // Map keys iterate sorted, so the reported list is already ordered.
        let overlapping: Vec<String> = constrained_labels
            .keys()
            .filter(|label| denied_labels.contains(*label))
            .cloned()
            .collect();

        if !overlapping.is_empty() {
            return Err(ConfigError::OverlappingLabels {
                labels: overlapping,
            });
        }

        Ok(Self {
            denied_labels,
            constrained_labels,
        })
    }

    pub fn denied_labels(&self) -> &BTreeSet<String> {
        &self.denied_labels
    }

    pub fn constrained_labels(&self) -> &BTreeMap<String, Regex> {
        &self.constrained_labels
    }

    pub fn is_denied(&self, label: &str) -> bool {
        self.denied_labels.contains(label)
    }

    pub fn constraint(&self, label: &str) -> Option<&Regex> {
        self.constrained_labels.get(label)
    }

    pub fn is_empty(&self) -> bool {
        self.denied_labels.is_empty() && self.constrained_labels.is_empty()
    }
}
