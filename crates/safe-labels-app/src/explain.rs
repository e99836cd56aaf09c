//! The `explain` use case: describe a check or code in terms of the label rules behind it.
//!
//! Registry text comes from `safe_labels_types::explain`. The check that emits a code, the
//! settings fields that drive it and the rejection message are derived here from the rules.

use crate::settings::INVALID_SETTINGS_MESSAGE;
use safe_labels_domain::{ConfigError, Violation};
use safe_labels_types::explain::{self, Explanation};
use safe_labels_types::ids;

/// Stand-ins used when rendering sample rejection messages.
pub const SAMPLE_LABEL: &str = "<label>";
pub const SAMPLE_KIND: &str = "<Kind>";

/// Where a check ID or code sits in the label rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTopic {
    /// The check that reports it; a check ID maps to itself.
    pub check_id: &'static str,
    /// Every code that check can emit.
    pub codes: &'static [&'static str],
    /// Settings fields that configure the check.
    pub settings_fields: &'static [&'static str],
    /// The message a host would see, with [`SAMPLE_LABEL`] and [`SAMPLE_KIND`] filled in.
    pub sample_message: Option<String>,
}

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found {
        explanation: Explanation,
        topic: RuleTopic,
    },
    /// Unknown identifier; lists every check with the codes it emits.
    NotFound {
        identifier: String,
        checks: Vec<(&'static str, &'static [&'static str])>,
    },
}

/// Look up an explanation for a check_id or code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match (explain::lookup_explanation(identifier), rule_topic(identifier)) {
        (Some(explanation), Some(topic)) => ExplainOutput::Found { explanation, topic },
        _ => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            checks: explain::all_check_ids()
                .iter()
                .map(|check_id| (*check_id, codes_of(check_id)))
                .collect(),
        },
    }
}

/// Place `identifier` within the rules, or `None` when it names nothing.
pub fn rule_topic(identifier: &str) -> Option<RuleTopic> {
    let check_id = check_for(identifier)?;
    let codes = codes_of(check_id);

    let sample_message = if identifier == check_id {
        match codes {
            [only] => sample_message(only),
            _ => None,
        }
    } else {
        sample_message(identifier)
    };

    Some(RuleTopic {
        check_id,
        codes,
        settings_fields: settings_fields_of(check_id),
        sample_message,
    })
}

fn check_for(identifier: &str) -> Option<&'static str> {
    match identifier {
        ids::CHECK_LABELS_DENY_LIST | ids::CODE_DENIED_LABEL => Some(ids::CHECK_LABELS_DENY_LIST),
        ids::CHECK_LABELS_CONSTRAINTS | ids::CODE_CONSTRAINT_MISMATCH => {
            Some(ids::CHECK_LABELS_CONSTRAINTS)
        }
        ids::CHECK_LABELS_REQUIRED | ids::CODE_MISSING_CONSTRAINED_LABEL => {
            Some(ids::CHECK_LABELS_REQUIRED)
        }
        ids::CHECK_SETTINGS_VALIDATION | ids::CODE_INVALID_PATTERN | ids::CODE_OVERLAPPING_LABELS => {
            Some(ids::CHECK_SETTINGS_VALIDATION)
        }
        _ => None,
    }
}

fn codes_of(check_id: &str) -> &'static [&'static str] {
    match check_id {
        ids::CHECK_LABELS_DENY_LIST => &[ids::CODE_DENIED_LABEL],
        ids::CHECK_LABELS_CONSTRAINTS => &[ids::CODE_CONSTRAINT_MISMATCH],
        ids::CHECK_LABELS_REQUIRED => &[ids::CODE_MISSING_CONSTRAINED_LABEL],
        ids::CHECK_SETTINGS_VALIDATION => &[ids::CODE_INVALID_PATTERN, ids::CODE_OVERLAPPING_LABELS],
        _ => &[],
    }
}

fn settings_fields_of(check_id: &str) -> &'static [&'static str] {
    match check_id {
        ids::CHECK_LABELS_DENY_LIST => &["denied_labels"],
        ids::CHECK_LABELS_CONSTRAINTS | ids::CHECK_LABELS_REQUIRED => &["constrained_labels"],
        ids::CHECK_SETTINGS_VALIDATION => &["denied_labels", "constrained_labels"],
        _ => &[],
    }
}

/// Invalid patterns have no sample: their message embeds the regex parser's own error.
fn sample_message(code: &str) -> Option<String> {
    match code {
        ids::CODE_DENIED_LABEL => Some(Violation::denied(SAMPLE_LABEL).message),
        ids::CODE_CONSTRAINT_MISMATCH => Some(Violation::constraint_mismatch(SAMPLE_LABEL).message),
        ids::CODE_MISSING_CONSTRAINED_LABEL => {
            Some(Violation::missing_constrained(SAMPLE_LABEL, SAMPLE_KIND).message)
        }
        ids::CODE_OVERLAPPING_LABELS => {
            let err = ConfigError::OverlappingLabels {
                labels: vec![SAMPLE_LABEL.to_string()],
            };
            Some(format!("{INVALID_SETTINGS_MESSAGE}: {err}"))
        }
        _ => None,
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(explanation: &Explanation, topic: &RuleTopic) -> String {
    let mut out = String::new();

    out.push_str(explanation.title);
    out.push('\n');
    out.push_str(&"=".repeat(explanation.title.len()));
    out.push_str("\n\n");
    out.push_str(explanation.description);
    out.push_str("\n\n");

    push_field(&mut out, "Check", topic.check_id);
    push_field(&mut out, "Codes", &topic.codes.join(", "));
    push_field(&mut out, "Settings", &topic.settings_fields.join(", "));
    if let Some(message) = &topic.sample_message {
        push_field(&mut out, "Message", message);
    }

    out.push_str("\nRemediation\n-----------\n");
    out.push_str(explanation.remediation);
    out.push_str("\n\nExamples\n--------\n");
    out.push_str("Rejected:\n");
    push_indented(&mut out, explanation.examples.before);
    out.push_str("Accepted:\n");
    push_indented(&mut out, explanation.examples.after);

    out
}

fn push_field(out: &mut String, name: &str, value: &str) {
    let name = format!("{name}:");
    out.push_str(&format!("{name:<10}{value}\n"));
}

fn push_indented(out: &mut String, text: &str) {
    for line in text.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    checks: &[(&'static str, &'static [&'static str])],
) -> String {
    let mut out = format!("Unknown check_id or code: {identifier}\n\n");

    out.push_str("Known checks and the codes they emit:\n");
    for (check_id, codes) in checks {
        out.push_str(&format!("  {check_id}\n"));
        for code in *codes {
            out.push_str(&format!("    - {code}\n"));
        }
    }

    out
}
