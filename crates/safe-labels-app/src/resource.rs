use anyhow::Context;
use safe_labels_domain::{LabelMap, ResourceModel};
use serde::Deserialize;
use serde_json::Value;

/// Only the metadata of the candidate object is read; the rest of its schema is ignored.
#[derive(Debug, Default, Deserialize)]
struct ObjectShape {
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    metadata: Option<ObjectMeta>,
}

#[derive(Debug, Default, Deserialize)]
struct ObjectMeta {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    namespace: Option<String>,
    #[serde(default)]
    labels: Option<LabelMap>,
}

/// Extract the evaluator's view of any Kubernetes-shaped object.
///
/// `kind` comes from the admission request; when it is empty the object's own `kind`
/// field is used instead. A missing `metadata` or `labels` block means "no labels".
pub fn resource_from_object(kind: &str, object: &Value) -> anyhow::Result<ResourceModel> {
    let shape = ObjectShape::deserialize(object).context("decode object metadata")?;
    let meta = shape.metadata.unwrap_or_default();

    let kind = if kind.is_empty() {
        shape.kind.unwrap_or_default()
    } else {
        kind.to_string()
    };

    Ok(ResourceModel {
        kind,
        name: meta.name,
        namespace: meta.namespace,
        labels: meta.labels.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_metadata_from_pod() {
        let object = json!({
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": {
                "name": "nginx",
                "namespace": "default",
                "labels": { "app": "web", "cc-center": "team-1" }
            },
            "spec": { "containers": [] }
        });

        let resource = resource_from_object("Pod", &object).expect("pod");
        assert_eq!(resource.kind(), "Pod");
        assert_eq!(resource.name.as_deref(), Some("nginx"));
        assert_eq!(resource.namespace.as_deref(), Some("default"));
        assert_eq!(resource.labels.len(), 2);
        assert_eq!(resource.labels["cc-center"], "team-1");
    }

    #[test]
    fn falls_back_to_object_kind() {
        let object = json!({ "kind": "Deployment", "metadata": { "name": "web" } });
        let resource = resource_from_object("", &object).expect("deployment");
        assert_eq!(resource.kind(), "Deployment");
        assert!(resource.labels.is_empty());
    }

    #[test]
    fn missing_metadata_and_null_labels_mean_no_labels() {
        let resource = resource_from_object("Pod", &json!({})).expect("empty object");
        assert!(resource.labels.is_empty());

        let object = json!({ "metadata": { "labels": null } });
        let resource = resource_from_object("Pod", &object).expect("null labels");
        assert!(resource.labels.is_empty());
    }

    #[test]
    fn non_string_label_values_are_rejected() {
        let object = json!({ "metadata": { "labels": { "replicas": 3 } } });
        assert!(resource_from_object("Pod", &object).is_err());
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(resource_from_object("Pod", &json!("pod")).is_err());
        assert!(resource_from_object("Pod", &Value::Null).is_err());
    }
}
