//! Settings parsing and compilation into a [`RuleSet`].
//!
//! This crate is intentionally IO-free: it parses settings provided as bytes or strings.

#![forbid(unsafe_code)]

mod compile;
mod model;

#[cfg(test)]
mod proptests;

pub use compile::{compile, SettingsSummary};
pub use model::SafeLabelsSettingsV1;

use anyhow::Context;
use safe_labels_domain::RuleSet;

/// Parse a JSON settings payload as delivered by the host.
///
/// An empty or `null` payload means "no settings" and yields the defaults.
pub fn parse_settings_json(input: &[u8]) -> anyhow::Result<SafeLabelsSettingsV1> {
    if input.iter().all(u8::is_ascii_whitespace) {
        return Ok(SafeLabelsSettingsV1::default());
    }
    let value: serde_json::Value = serde_json::from_slice(input).context("parse settings JSON")?;
    parse_settings_value(value)
}

/// Parse settings already decoded as JSON (e.g. embedded in a validation request).
pub fn parse_settings_value(value: serde_json::Value) -> anyhow::Result<SafeLabelsSettingsV1> {
    if value.is_null() {
        return Ok(SafeLabelsSettingsV1::default());
    }
    let settings = serde_json::from_value(value)?;
    Ok(settings)
}

/// Parse `safe-labels.toml` (or equivalent) into a typed model.
pub fn parse_settings_toml(input: &str) -> anyhow::Result<SafeLabelsSettingsV1> {
    let settings: SafeLabelsSettingsV1 = toml::from_str(input)?;
    Ok(settings)
}

/// Parse and compile in one go. Compile errors keep their typed [`ConfigError`] as the root cause.
///
/// [`ConfigError`]: safe_labels_domain::ConfigError
pub fn load_rules_json(input: &[u8]) -> anyhow::Result<RuleSet> {
    let settings = parse_settings_json(input)?;
    let rules = compile(settings)?;
    Ok(rules)
}
