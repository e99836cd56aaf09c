use crate::model::LabelMap;
use crate::policy::RuleSet;
use crate::verdict::Violation;

/// Every constrained label is implicitly required.
pub fn run(kind: &str, labels: &LabelMap, rules: &RuleSet) -> Option<Violation> {
    let label = rules
        .constrained_labels()
        .keys()
        .find(|label| !labels.contains_key(label.as_str()))?;

    Some(Violation::missing_constrained(label, kind))
}
