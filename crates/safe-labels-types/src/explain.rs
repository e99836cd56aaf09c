//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples (settings or resource labels, as JSON).
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Input that would trigger a violation.
    pub before: &'static str,
    /// Input that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_LABELS_DENY_LIST => Some(explain_deny_list()),
        ids::CHECK_LABELS_CONSTRAINTS => Some(explain_constraints()),
        ids::CHECK_LABELS_REQUIRED => Some(explain_required()),
        ids::CHECK_SETTINGS_VALIDATION => Some(explain_settings_validation()),

        // Codes
        ids::CODE_DENIED_LABEL => Some(explain_denied_label()),
        ids::CODE_CONSTRAINT_MISMATCH => Some(explain_constraint_mismatch()),
        ids::CODE_MISSING_CONSTRAINED_LABEL => Some(explain_missing_constrained_label()),
        ids::CODE_INVALID_PATTERN => Some(explain_invalid_pattern()),
        ids::CODE_OVERLAPPING_LABELS => Some(explain_overlapping_labels()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_LABELS_DENY_LIST,
        ids::CHECK_LABELS_CONSTRAINTS,
        ids::CHECK_LABELS_REQUIRED,
        ids::CHECK_SETTINGS_VALIDATION,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_DENIED_LABEL,
        ids::CODE_CONSTRAINT_MISMATCH,
        ids::CODE_MISSING_CONSTRAINED_LABEL,
        ids::CODE_INVALID_PATTERN,
        ids::CODE_OVERLAPPING_LABELS,
    ]
}

// --- Check-level explanations ---

fn explain_deny_list() -> Explanation {
    Explanation {
        title: "Denied Labels",
        description: "\
Rejects resources that carry any label listed in `denied_labels`.

Matching is exact on the label key: no globs, no prefixes. The label value is
not inspected. When several denied labels are present, the one reported is the
first in lexicographic key order.",
        remediation: "\
Remove the denied label from the resource metadata, or drop the key from
`denied_labels` if it should be allowed.",
        examples: ExamplePair {
            before: r#"{ "metadata": { "labels": { "owner": "team-a" } } }"#,
            after: r#"{ "metadata": { "labels": { "team": "team-a" } } }"#,
        },
    }
}

fn explain_constraints() -> Explanation {
    Explanation {
        title: "Constrained Label Values",
        description: "\
Requires the value of each label listed in `constrained_labels` to match its
regular expression.

Matching uses unanchored search semantics: `team-\\d+` accepts `my-team-42`.
Anchor the pattern with `^` and `$` to require a full match.",
        remediation: "\
Change the label value so it matches the configured expression, or relax the
expression in the policy settings.",
        examples: ExamplePair {
            before: r#"{ "metadata": { "labels": { "cost-center": "marketing" } } }"#,
            after: r#"{ "metadata": { "labels": { "cost-center": "cc-1234" } } }"#,
        },
    }
}

fn explain_required() -> Explanation {
    Explanation {
        title: "Constrained Labels Are Required",
        description: "\
Every label listed in `constrained_labels` must be present on the resource.

Constraining a label's value also mandates its presence: a resource without the
label is rejected even though no value failed to match.",
        remediation: "\
Add the missing label with a value that satisfies its constraint.",
        examples: ExamplePair {
            before: r#"{ "metadata": { "labels": { "app": "web" } } }"#,
            after: r#"{ "metadata": { "labels": { "app": "web", "cost-center": "cc-7" } } }"#,
        },
    }
}

fn explain_settings_validation() -> Explanation {
    Explanation {
        title: "Policy Settings Validation",
        description: "\
Checks the policy settings before any resource is evaluated.

Every constraint must be a valid regular expression, and no label may be both
denied and constrained. Invalid settings reject every request until fixed.",
        remediation: "\
Fix the reported pattern or remove the label from one of the two lists.",
        examples: ExamplePair {
            before: r#"{ "denied_labels": ["cost-center"], "constrained_labels": { "cost-center": ".*" } }"#,
            after: r#"{ "denied_labels": ["owner"], "constrained_labels": { "cost-center": "cc-\\d+" } }"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_denied_label() -> Explanation {
    Explanation {
        title: "Label On The Deny List",
        description: "\
The resource carries a label whose key appears in `denied_labels`.",
        remediation: "\
Remove the label from the resource.",
        examples: ExamplePair {
            before: r#"{ "owner": "x" }"#,
            after: r#"{}"#,
        },
    }
}

fn explain_constraint_mismatch() -> Explanation {
    Explanation {
        title: "Label Value Fails Its Constraint",
        description: "\
The resource carries a constrained label whose value does not match the
configured regular expression.",
        remediation: "\
Set a value that matches the expression configured for the label.",
        examples: ExamplePair {
            before: r#"{ "cc-center": "team-kubewarden" }"#,
            after: r#"{ "cc-center": "team-123" }"#,
        },
    }
}

fn explain_missing_constrained_label() -> Explanation {
    Explanation {
        title: "Constrained Label Missing",
        description: "\
A label listed in `constrained_labels` is absent from the resource.",
        remediation: "\
Add the label with a value that satisfies its constraint.",
        examples: ExamplePair {
            before: r#"{ "owner": "team-1" }"#,
            after: r#"{ "owner": "team-1", "cc-center": "team-1" }"#,
        },
    }
}

fn explain_invalid_pattern() -> Explanation {
    Explanation {
        title: "Invalid Constraint Pattern",
        description: "\
A value in `constrained_labels` is not a valid regular expression. The whole
settings payload is rejected; no partial rule set is ever used.",
        remediation: "\
Fix the expression syntax. The error names the label, the pattern, and the
parser error.",
        examples: ExamplePair {
            before: r#"{ "constrained_labels": { "cost-center": "cc-[a+" } }"#,
            after: r#"{ "constrained_labels": { "cost-center": "cc-[a]+" } }"#,
        },
    }
}

fn explain_overlapping_labels() -> Explanation {
    Explanation {
        title: "Label Both Denied And Constrained",
        description: "\
A label key appears in both `denied_labels` and `constrained_labels`. A denied
label can never be present, while a constrained label must be present, so no
resource could ever be admitted.",
        remediation: "\
Remove the label from one of the two lists.",
        examples: ExamplePair {
            before: r#"{ "denied_labels": ["foo", "cost-center"], "constrained_labels": { "cost-center": ".*" } }"#,
            after: r#"{ "denied_labels": ["foo"], "constrained_labels": { "cost-center": ".*" } }"#,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_identifier_resolves() {
        for id in all_check_ids().iter().chain(all_codes()) {
            assert!(lookup_explanation(id).is_some(), "{id} has no explanation");
        }
    }

    #[test]
    fn unknown_identifier_is_none() {
        assert!(lookup_explanation("labels.unknown").is_none());
    }
}
