use crate::model::LabelMap;
use crate::policy::RuleSet;
use crate::verdict::Violation;

mod constraints;
mod deny_list;
mod required;


/// Run every check in its fixed phase order and stop at the first violation.
///
/// The order decides which message surfaces when several rules are broken at once:
/// deny list, then value constraints, then presence of constrained labels.
pub fn first_violation(kind: &str, labels: &LabelMap, rules: &RuleSet) -> Option<Violation> {
    deny_list::run(labels, rules)
        .or_else(|| constraints::run(labels, rules))
        .or_else(|| required::run(kind, labels, rules))
}
