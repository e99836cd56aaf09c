//! CLI entry point for safe-labels.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and
//! exit codes. All business logic lives in the `safe-labels-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use safe_labels_app::{
    CheckInput, ExplainOutput, format_explanation, format_not_found, run_check, run_explain,
    validate, validate_settings, verdict_exit_code,
};
use safe_labels_domain::LabelMap;
use safe_labels_settings::SafeLabelsSettingsV1;
use std::io::Read;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "safe-labels",
    version,
    about = "Admission policy for resource labels: deny list plus per-label regex constraints"
)]
struct Cli {
    /// Log level used when RUST_LOG is not set (error|warn|info|debug|trace).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log output format (logs always go to stderr).
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decide a validation request (JSON) and print the response JSON.
    Validate {
        /// Path to the validation request, or `-` for stdin.
        #[arg(long, default_value = "-")]
        request: Utf8PathBuf,
    },

    /// Validate a settings payload (JSON) and print the response JSON.
    ValidateSettings {
        /// Path to the settings payload, or `-` for stdin.
        #[arg(long, default_value = "-")]
        settings: Utf8PathBuf,
    },

    /// Evaluate labels given on the command line against a settings file.
    Check {
        /// Settings file (TOML when it ends in `.toml`, JSON otherwise).
        #[arg(long)]
        settings: Utf8PathBuf,

        /// A label as KEY=VALUE. Repeat for more labels.
        #[arg(long = "label", value_name = "KEY=VALUE", value_parser = parse_label)]
        labels: Vec<(String, String)>,

        /// Resource kind used in messages.
        #[arg(long)]
        kind: Option<String>,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "labels.deny_list") or code (e.g., "denied_label") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_format);

    let result = match cli.cmd {
        Commands::Validate { request } => cmd_validate(&request),
        Commands::ValidateSettings { settings } => cmd_validate_settings(&settings),
        Commands::Check {
            settings,
            labels,
            kind,
        } => cmd_check(&settings, labels, kind),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    };

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("safe-labels error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(level: &str, format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// The host contract puts the verdict inside the response, so this always exits 0.
fn cmd_validate(request_path: &Utf8Path) -> anyhow::Result<i32> {
    let payload = read_input(request_path)?;
    let response = validate(&payload);
    debug!(accepted = response.accepted, "request decided");
    print_json(&response)?;
    Ok(0)
}

fn cmd_validate_settings(settings_path: &Utf8Path) -> anyhow::Result<i32> {
    let payload = read_input(settings_path)?;
    let response = validate_settings(&payload);
    print_json(&response)?;
    Ok(if response.valid { 0 } else { 1 })
}

fn cmd_check(
    settings_path: &Utf8Path,
    labels: Vec<(String, String)>,
    kind: Option<String>,
) -> anyhow::Result<i32> {
    let settings = load_settings_file(settings_path)?;
    let labels: LabelMap = labels.into_iter().collect();

    let output = run_check(CheckInput {
        settings,
        labels,
        kind,
    })?;

    match output.verdict.reason() {
        Some(reason) => println!("rejected: {reason}"),
        None => println!("accepted"),
    }

    Ok(verdict_exit_code(&output.verdict))
}

fn cmd_explain(identifier: &str) -> anyhow::Result<i32> {
    match run_explain(identifier) {
        ExplainOutput::Found { explanation, topic } => {
            print!("{}", format_explanation(&explanation, &topic));
            Ok(0)
        }
        ExplainOutput::NotFound { identifier, checks } => {
            eprint!("{}", format_not_found(&identifier, &checks));
            Ok(1)
        }
    }
}

fn load_settings_file(path: &Utf8Path) -> anyhow::Result<SafeLabelsSettingsV1> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read settings: {path}"))?;
    let settings = if path.extension() == Some("toml") {
        safe_labels_settings::parse_settings_toml(&text)
    } else {
        safe_labels_settings::parse_settings_json(text.as_bytes())
    };
    settings.with_context(|| format!("parse settings: {path}"))
}

fn read_input(path: &Utf8Path) -> anyhow::Result<Vec<u8>> {
    if path.as_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("read stdin")?;
        return Ok(buf);
    }
    std::fs::read(path).with_context(|| format!("read input: {path}"))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string(value).context("serialize response")?;
    println!("{json}");
    Ok(())
}

fn parse_label(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got {raw:?}")),
    }
}
