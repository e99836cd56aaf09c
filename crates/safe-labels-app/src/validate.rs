//! The request-validation entry point.

use crate::resource::resource_from_object;
use safe_labels_domain::{RuleSet, Verdict, evaluate};
use safe_labels_types::{CODE_BAD_REQUEST, ValidationRequest, ValidationResponse};
use tracing::debug;

/// Decode a raw validation request and decide it.
pub fn validate(payload: &[u8]) -> ValidationResponse {
    match serde_json::from_slice::<ValidationRequest>(payload) {
        Ok(request) => validate_request(request),
        Err(err) => ValidationResponse::reject(
            format!("unmarshaling validation request: {err}"),
            Some(CODE_BAD_REQUEST),
        ),
    }
}

/// Decide an already-decoded validation request.
///
/// Malformed settings or objects are rejected with [`CODE_BAD_REQUEST`]; rule violations
/// are rejected without a code.
pub fn validate_request(request: ValidationRequest) -> ValidationResponse {
    let ValidationRequest { request, settings } = request;

    // Settings arrive with every request, so they are compiled every time.
    let rules = match compile_settings(settings) {
        Ok(rules) => rules,
        Err(err) => {
            return ValidationResponse::reject(
                format!("unmarshaling policy settings: {err:#}"),
                Some(CODE_BAD_REQUEST),
            );
        }
    };

    let resource = match resource_from_object(&request.kind.kind, &request.object) {
        Ok(resource) => resource,
        Err(err) => {
            let kind = if request.kind.kind.is_empty() {
                "resource"
            } else {
                request.kind.kind.as_str()
            };
            return ValidationResponse::reject(
                format!("unmarshaling {kind} object: {err:#}"),
                Some(CODE_BAD_REQUEST),
            );
        }
    };

    debug!(
        uid = %request.uid,
        kind = resource.kind(),
        name = resource.name.as_deref().unwrap_or_default(),
        namespace = resource.namespace.as_deref().unwrap_or_default(),
        "validating object"
    );

    match evaluate(&rules, &resource) {
        Verdict::Pass => ValidationResponse::accept(),
        Verdict::Fail(violation) => ValidationResponse::reject(violation.message, None),
    }
}

fn compile_settings(settings: serde_json::Value) -> anyhow::Result<RuleSet> {
    let settings = safe_labels_settings::parse_settings_value(settings)?;
    let rules = safe_labels_settings::compile(settings)?;
    Ok(rules)
}
