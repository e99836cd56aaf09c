//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - RuleSet construction (denied and constrained keys stay disjoint)
//! - Evaluation determinism
//! - Deny list precedence and tie-breaking

use crate::engine::evaluate_labels;
use crate::error::ConfigError;
use crate::model::LabelMap;
use crate::policy::RuleSet;
use crate::verdict::Verdict;
use proptest::prelude::*;
use regex::Regex;
use safe_labels_types::ids;
use std::collections::{BTreeMap, BTreeSet};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for label keys in a given namespace, so callers can keep sets disjoint.
fn arb_key(prefix: &'static str) -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,11}")
        .unwrap()
        .prop_map(move |s| format!("{prefix}{s}"))
}

fn arb_value() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9._-]{0,16}").unwrap()
}

/// A handful of patterns that always compile.
fn arb_pattern() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".*".to_string()),
        Just(r"^team-\d+$".to_string()),
        Just(r"\d".to_string()),
        Just("^[a-z]+$".to_string()),
        Just("prod|staging".to_string()),
    ]
}

fn arb_labels(prefix: &'static str) -> impl Strategy<Value = LabelMap> {
    prop::collection::btree_map(arb_key(prefix), arb_value(), 0..8)
}

fn compile_all(constrained: &BTreeMap<String, String>) -> BTreeMap<String, Regex> {
    constrained
        .iter()
        .map(|(k, p)| (k.clone(), Regex::new(p).unwrap()))
        .collect()
}

// ============================================================================
// Property tests: RuleSet construction
// ============================================================================

proptest! {
    /// Construction fails exactly when the key sets intersect, naming every shared key.
    #[test]
    fn overlap_is_rejected_with_every_shared_key(
        denied in prop::collection::btree_set(arb_key(""), 0..6),
        constrained in prop::collection::btree_map(arb_key(""), arb_pattern(), 0..6),
        forced in prop::collection::btree_set(arb_key("x-"), 0..3),
    ) {
        let mut denied = denied;
        let mut constrained = constrained;
        for key in &forced {
            denied.insert(key.clone());
            constrained.insert(key.clone(), ".*".to_string());
        }

        let expected: Vec<String> = constrained
            .keys()
            .filter(|k| denied.contains(*k))
            .cloned()
            .collect();

        match RuleSet::new(denied, compile_all(&constrained)) {
            Ok(_) => prop_assert!(expected.is_empty()),
            Err(ConfigError::OverlappingLabels { labels }) => {
                prop_assert!(!expected.is_empty());
                prop_assert_eq!(labels, expected);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}

// ============================================================================
// Property tests: Evaluation
// ============================================================================

proptest! {
    /// Evaluating the same inputs repeatedly always yields the same verdict.
    #[test]
    fn evaluation_is_deterministic(
        denied in prop::collection::btree_set(arb_key("d-"), 0..4),
        constrained in prop::collection::btree_map(arb_key("c-"), arb_pattern(), 0..4),
        labels in prop::collection::btree_map(
            prop_oneof![arb_key("d-"), arb_key("c-"), arb_key("l-")],
            arb_value(),
            0..10,
        ),
    ) {
        let rules = RuleSet::new(denied, compile_all(&constrained)).unwrap();

        let first = evaluate_labels(&rules, &labels);
        for _ in 0..3 {
            prop_assert_eq!(evaluate_labels(&rules, &labels), first.clone());
        }
    }

    /// Without constraints, labels that avoid the deny list always pass.
    #[test]
    fn labels_outside_deny_list_pass(
        denied in prop::collection::btree_set(arb_key("d-"), 0..6),
        labels in arb_labels("l-"),
    ) {
        let rules = RuleSet::new(denied, BTreeMap::new()).unwrap();
        prop_assert_eq!(evaluate_labels(&rules, &labels), Verdict::Pass);
    }

    /// Any denied key present fails on the deny list, naming the smallest such key,
    /// whatever the constraints say.
    #[test]
    fn denied_key_always_fails_first(
        denied in prop::collection::btree_set(arb_key("d-"), 1..5),
        constrained in prop::collection::btree_map(arb_key("c-"), arb_pattern(), 0..4),
        extra in arb_labels("l-"),
        pick in any::<prop::sample::Index>(),
        value in arb_value(),
    ) {
        let denied_vec: Vec<String> = denied.iter().cloned().collect();
        let chosen = pick.get(&denied_vec).clone();
        let rules = RuleSet::new(denied.clone(), compile_all(&constrained)).unwrap();

        let mut labels = extra;
        labels.insert(chosen, value);

        let expected_label = labels
            .keys()
            .find(|k| denied.contains(*k))
            .cloned()
            .unwrap();

        let verdict = evaluate_labels(&rules, &labels);
        let violation = verdict.violation().cloned();
        prop_assert!(violation.is_some());
        let violation = violation.unwrap();
        prop_assert_eq!(violation.code.as_str(), ids::CODE_DENIED_LABEL);
        prop_assert_eq!(violation.label, expected_label);
    }

    /// Every constrained key is required: dropping one from a passing map makes it fail.
    #[test]
    fn constrained_keys_are_required(
        constrained in prop::collection::btree_set(arb_key("c-"), 1..5),
        pick in any::<prop::sample::Index>(),
    ) {
        let patterns: BTreeMap<String, String> = constrained
            .iter()
            .map(|k| (k.clone(), ".*".to_string()))
            .collect();
        let rules = RuleSet::new(BTreeSet::new(), compile_all(&patterns)).unwrap();

        let mut labels: LabelMap = constrained
            .iter()
            .map(|k| (k.clone(), "v".to_string()))
            .collect();
        prop_assert!(evaluate_labels(&rules, &labels).is_pass());

        let keys: Vec<String> = constrained.iter().cloned().collect();
        let removed = pick.get(&keys).clone();
        labels.remove(&removed);

        let verdict = evaluate_labels(&rules, &labels);
        let violation = verdict.violation().cloned();
        prop_assert!(violation.is_some());
        let violation = violation.unwrap();
        prop_assert_eq!(violation.code.as_str(), ids::CODE_MISSING_CONSTRAINED_LABEL);
        prop_assert_eq!(violation.label, removed);
    }
}
