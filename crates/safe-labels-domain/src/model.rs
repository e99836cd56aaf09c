use std::collections::BTreeMap;

/// Label key -> value, as found on the candidate resource.
///
/// Ordered so that "first violation" always means the lexicographically smallest key.
pub type LabelMap = BTreeMap<String, String>;

/// Kind used in messages when the caller did not say what the labels belong to.
pub const DEFAULT_RESOURCE_KIND: &str = "resource";

/// The candidate resource as the evaluator sees it.
///
/// Only `labels` takes part in the decision; the rest feeds messages and logs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceModel {
    pub kind: String,
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub labels: LabelMap,
}

impl ResourceModel {
    pub fn from_labels(labels: LabelMap) -> Self {
        Self {
            kind: DEFAULT_RESOURCE_KIND.to_string(),
            name: None,
            namespace: None,
            labels,
        }
    }

    pub fn kind(&self) -> &str {
        if self.kind.is_empty() {
            DEFAULT_RESOURCE_KIND
        } else {
            &self.kind
        }
    }
}
