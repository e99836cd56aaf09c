//! Fuzz target for label evaluation.
//!
//! Goal: evaluating arbitrary labels against arbitrary rules should **never panic**,
//! and evaluating twice must give the same verdict.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_label_evaluation
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use safe_labels_domain::{LabelMap, RuleSet, evaluate_labels};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Arbitrary, Debug)]
struct EvaluationInput {
    denied: Vec<String>,
    constrained: Vec<(String, String)>,
    labels: Vec<(String, String)>,
}

fuzz_target!(|input: EvaluationInput| {
    if input.denied.len() > 32 || input.constrained.len() > 16 || input.labels.len() > 64 {
        return;
    }

    let denied: BTreeSet<String> = input.denied.into_iter().collect();
    let constrained: BTreeMap<String, regex::Regex> = input
        .constrained
        .into_iter()
        .filter(|(_, pattern)| pattern.len() <= 128)
        .filter_map(|(key, pattern)| regex::Regex::new(&pattern).ok().map(|re| (key, re)))
        .collect();

    let Ok(rules) = RuleSet::new(denied, constrained) else {
        return;
    };

    let labels: LabelMap = input.labels.into_iter().collect();
    let first = evaluate_labels(&rules, &labels);
    assert_eq!(first, evaluate_labels(&rules, &labels));
});
