use crate::model::LabelMap;
use crate::policy::RuleSet;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

pub fn rules(denied: &[&str], constrained: &[(&str, &str)]) -> RuleSet {
    let denied: BTreeSet<String> = denied.iter().map(|s| s.to_string()).collect();
    let constrained: BTreeMap<String, Regex> = constrained
        .iter()
        .map(|(label, pattern)| {
            (
                label.to_string(),
                Regex::new(pattern).expect("test patterns must compile"),
            )
        })
        .collect();
    RuleSet::new(denied, constrained).expect("test rule sets must be disjoint")
}

pub fn labels(pairs: &[(&str, &str)]) -> LabelMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
