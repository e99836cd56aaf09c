//! The settings-validation entry point.

use safe_labels_settings::SettingsSummary;
use safe_labels_types::SettingsValidationResponse;
use tracing::{debug, warn};

/// Prefix of every settings rejection.
pub const INVALID_SETTINGS_MESSAGE: &str = "Provided settings are not valid";

/// Parse and compile a raw settings payload, answering whether the host may use it.
///
/// Nothing is kept: the compiled rules are dropped once validity is known.
pub fn validate_settings(payload: &[u8]) -> SettingsValidationResponse {
    match safe_labels_settings::load_rules_json(payload) {
        Ok(rules) => {
            let summary = SettingsSummary::from(&rules);
            debug!(
                denied = ?summary.denied_labels,
                constrained = summary.constrained_labels.len(),
                "settings accepted"
            );
            SettingsValidationResponse::accept()
        }
        Err(err) => {
            let message = format!("{INVALID_SETTINGS_MESSAGE}: {err:#}");
            warn!(error = %message, "settings rejected");
            SettingsValidationResponse::reject(message)
        }
    }
}
