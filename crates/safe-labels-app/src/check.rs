//! The `check` use case: evaluate a label set locally against settings.

use anyhow::Context;
use safe_labels_domain::{LabelMap, ResourceModel, Verdict, evaluate};
use safe_labels_settings::{SafeLabelsSettingsV1, SettingsSummary};

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput {
    /// Parsed (not yet compiled) settings.
    pub settings: SafeLabelsSettingsV1,
    /// Labels of the resource to check.
    pub labels: LabelMap,
    /// Resource kind used in messages, e.g. `Pod`.
    pub kind: Option<String>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub verdict: Verdict,
    /// The rules that were applied.
    pub summary: SettingsSummary,
}

/// Run the check use case: compile settings, evaluate labels, produce a verdict.
pub fn run_check(input: CheckInput) -> anyhow::Result<CheckOutput> {
    let rules = safe_labels_settings::compile(input.settings).context("compile settings")?;

    let mut resource = ResourceModel::from_labels(input.labels);
    if let Some(kind) = input.kind {
        resource.kind = kind;
    }

    let verdict = evaluate(&rules, &resource);

    Ok(CheckOutput {
        verdict,
        summary: SettingsSummary::from(&rules),
    })
}

/// Map verdict to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(verdict: &Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail(_) => 2,
    }
}
