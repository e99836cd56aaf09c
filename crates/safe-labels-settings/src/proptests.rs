//! Property-based tests for settings compilation.
//!
//! - Compilation fails exactly when some pattern does not compile
//! - A failure names the first bad pattern in key order
//! - Successful compilation keeps every key and pattern

use crate::{SafeLabelsSettingsV1, compile};
use proptest::prelude::*;
use regex::Regex;
use safe_labels_domain::ConfigError;
use std::collections::BTreeMap;

/// Pattern-ish strings: heavy on metacharacters so that many of them are invalid.
fn arb_pattern() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex(r"[a-z0-9()\[\]{}*+?|^$.\\,:-]{0,12}").unwrap(),
        any::<String>().prop_map(|s| s.chars().take(16).collect()),
    ]
}

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,11}").unwrap()
}

fn constrained_only(constrained: BTreeMap<String, String>) -> SafeLabelsSettingsV1 {
    SafeLabelsSettingsV1 {
        denied_labels: Vec::new(),
        constrained_labels: constrained,
    }
}

proptest! {
    /// A single pattern compiles into rules exactly when the regex engine accepts it.
    #[test]
    fn compile_fails_exactly_for_invalid_patterns(key in arb_key(), pattern in arb_pattern()) {
        let expected_err = Regex::new(&pattern).is_err();
        let settings = constrained_only(BTreeMap::from([(key.clone(), pattern.clone())]));

        match compile(settings) {
            Ok(rules) => {
                prop_assert!(!expected_err);
                prop_assert_eq!(rules.constraint(&key).map(Regex::as_str), Some(pattern.as_str()));
            }
            Err(ConfigError::InvalidPattern { label, pattern: reported, .. }) => {
                prop_assert!(expected_err);
                prop_assert_eq!(label, key);
                prop_assert_eq!(reported, pattern);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// With several patterns, the reported one is the smallest key whose pattern is invalid.
    #[test]
    fn first_invalid_pattern_in_key_order_is_reported(
        constrained in prop::collection::btree_map(arb_key(), arb_pattern(), 1..6),
    ) {
        let first_bad = constrained
            .iter()
            .find(|(_, pattern)| Regex::new(pattern).is_err())
            .map(|(key, _)| key.clone());

        match compile(constrained_only(constrained.clone())) {
            Ok(rules) => {
                prop_assert!(first_bad.is_none());
                prop_assert_eq!(rules.constrained_labels().len(), constrained.len());
            }
            Err(ConfigError::InvalidPattern { label, .. }) => {
                prop_assert_eq!(Some(label), first_bad);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
