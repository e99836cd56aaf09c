use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Code attached to rejections caused by malformed input (as opposed to rule violations).
pub const CODE_BAD_REQUEST: u16 = 400;

/// Envelope the host hands to the policy for every admission review.
///
/// `settings` is kept as raw JSON: it is compiled by `safe-labels-settings`, not here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationRequest {
    pub request: AdmissionRequest,
    #[serde(default)]
    pub settings: JsonValue,
}

/// The subset of a Kubernetes `AdmissionRequest` the policy reads.
///
/// Unknown fields are ignored so newer hosts keep working.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AdmissionRequest {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub kind: GroupVersionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// The candidate resource, schema-free. Only `metadata` is consulted.
    #[serde(default)]
    pub object: JsonValue,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GroupVersionKind {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub kind: String,
}

/// Admission verdict returned to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResponse {
    pub accepted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Machine-readable code; only set for malformed input, never for rule violations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl ValidationResponse {
    pub fn accept() -> Self {
        Self {
            accepted: true,
            message: None,
            code: None,
        }
    }

    pub fn reject(message: impl Into<String>, code: Option<u16>) -> Self {
        Self {
            accepted: false,
            message: Some(message.into()),
            code,
        }
    }
}

/// Answer to a settings-validation call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SettingsValidationResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SettingsValidationResponse {
    pub fn accept() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn reject(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accept_omits_message_and_code() {
        let v = serde_json::to_value(ValidationResponse::accept()).expect("serialize");
        assert_eq!(v, json!({ "accepted": true }));
    }

    #[test]
    fn request_ignores_unknown_fields_and_defaults_missing_ones() {
        let req: ValidationRequest = serde_json::from_value(json!({
            "request": {
                "uid": "abc",
                "kind": { "kind": "Pod" },
                "userInfo": { "username": "admin" },
                "object": { "metadata": { "name": "nginx" } }
            }
        }))
        .expect("deserialize");

        assert_eq!(req.request.uid, "abc");
        assert_eq!(req.request.kind.kind, "Pod");
        assert_eq!(req.request.kind.version, "");
        assert!(req.settings.is_null());
        assert_eq!(req.request.object["metadata"]["name"], "nginx");
    }

    #[test]
    fn settings_reject_carries_message() {
        let resp = SettingsValidationResponse::reject("nope");
        assert!(!resp.valid);
        assert_eq!(resp.message.as_deref(), Some("nope"));
    }
}
