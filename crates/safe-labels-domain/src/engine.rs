use crate::checks;
use crate::model::{DEFAULT_RESOURCE_KIND, LabelMap, ResourceModel};
use crate::policy::RuleSet;
use crate::verdict::Verdict;
use tracing::{debug, trace};

/// Evaluate a resource's labels against a compiled rule set.
///
/// Pure and deterministic: the same inputs always give the same verdict.
pub fn evaluate(rules: &RuleSet, resource: &ResourceModel) -> Verdict {
    evaluate_inner(rules, resource.kind(), &resource.labels)
}

/// Evaluate a bare label map, reported as belonging to a generic resource.
pub fn evaluate_labels(rules: &RuleSet, labels: &LabelMap) -> Verdict {
    evaluate_inner(rules, DEFAULT_RESOURCE_KIND, labels)
}

fn evaluate_inner(rules: &RuleSet, kind: &str, labels: &LabelMap) -> Verdict {
    match checks::first_violation(kind, labels, rules) {
        Some(violation) => {
            debug!(
                check_id = %violation.check_id,
                label = %violation.label,
                kind,
                "label policy violated"
            );
            Verdict::Fail(violation)
        }
        None => {
            trace!(labels = labels.len(), kind, "labels satisfy policy");
            Verdict::Pass
        }
    }
}
