use crate::model::LabelMap;
use crate::policy::RuleSet;
use crate::verdict::Violation;

/// Values are matched with unanchored search: the pattern may hit anywhere in the value.
/// Character classes such as `\d` are Unicode-aware unless the pattern opts out with `(?-u)`.
pub fn run(labels: &LabelMap, rules: &RuleSet) -> Option<Violation> {
    labels.iter().find_map(|(label, value)| {
        let pattern = rules.constraint(label)?;
        if pattern.is_match(value) {
            return None;
        }

        Some(Violation::constraint_mismatch(label))
    })
}
