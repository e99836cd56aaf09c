use crate::model::LabelMap;
use crate::policy::RuleSet;
use crate::verdict::Violation;

pub fn run(labels: &LabelMap, rules: &RuleSet) -> Option<Violation> {
    let label = labels.keys().find(|label| rules.is_denied(label))?;

    Some(Violation::denied(label))
}
