//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest_dir.to_path_buf())
}

/// Get the schemas directory path.
fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Get the test fixtures directory path.
fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_settings_schema() -> schemars::Schema {
    schema_for!(safe_labels_settings::SafeLabelsSettingsV1)
}

fn generate_request_schema() -> schemars::Schema {
    schema_for!(safe_labels_types::ValidationRequest)
}

fn generate_response_schema() -> schemars::Schema {
    schema_for!(safe_labels_types::ValidationResponse)
}

fn generate_settings_response_schema() -> schemars::Schema {
    schema_for!(safe_labels_types::SettingsValidationResponse)
}

const SETTINGS_SCHEMA: &str = "safe-labels.settings.v1.json";
const REQUEST_SCHEMA: &str = "safe-labels.validation-request.v1.json";
const RESPONSE_SCHEMA: &str = "safe-labels.validation-response.v1.json";
const SETTINGS_RESPONSE_SCHEMA: &str = "safe-labels.settings-response.v1.json";

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: SETTINGS_SCHEMA,
            generate: generate_settings_schema,
        },
        SchemaSpec {
            filename: REQUEST_SCHEMA,
            generate: generate_request_schema,
        },
        SchemaSpec {
            filename: RESPONSE_SCHEMA,
            generate: generate_response_schema,
        },
        SchemaSpec {
            filename: SETTINGS_RESPONSE_SCHEMA,
            generate: generate_settings_response_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();

    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create schemas directory")?;
    }

    for spec in schema_specs() {
        let schema = (spec.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Write JSON schemas to schemas/");
    eprintln!("  validate-schemas  Check schemas/ matches the Rust types");
    eprintln!("  conform           Validate tests/fixtures against the generated schemas");
    eprintln!("  explain-coverage  Check every check_id and code has an explanation");
    eprintln!("  print-schema-ids  List generated schema names");
}

/// Compile one generated schema into a validator.
fn compile_schema(generate: fn() -> schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(generate()).context("Failed to convert schema to JSON")?;
    jsonschema::validator_for(&value).map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))
}

/// Validate every fixture document against the schema of the type it stands for.
///
/// A request's embedded `settings` (when not null) must also match the settings schema.
fn conform() -> anyhow::Result<()> {
    let settings = compile_schema(generate_settings_schema)?;
    let request = compile_schema(generate_request_schema)?;
    let response = compile_schema(generate_response_schema)?;
    let settings_response = compile_schema(generate_settings_response_schema)?;
    println!("✓ generated schemas compile");

    let checks: [(&str, &jsonschema::Validator); 4] = [
        ("settings.json", &settings),
        ("request.json", &request),
        ("expected.response.json", &response),
        ("expected.settings.json", &settings_response),
    ];

    let dir = fixtures_dir();
    if !dir.exists() {
        bail!("tests/fixtures/ not found at {}", dir.display());
    }

    let mut entries: Vec<PathBuf> = fs::read_dir(&dir)
        .context("Failed to read tests/fixtures/")?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    entries.sort();

    let mut document_count = 0;
    let mut errors = Vec::new();

    for fixture in entries {
        let name = fixture
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        for (file, validator) in &checks {
            let path = fixture.join(file);
            if !path.exists() {
                continue;
            }

            let value = read_json(&path)?;
            for err in validator.iter_errors(&value) {
                errors.push(format!("{}/{}: schema validation: {}", name, file, err));
            }

            if *file == "request.json" {
                if let Some(embedded) = value.get("settings").filter(|v| !v.is_null()) {
                    for err in settings.iter_errors(embedded) {
                        errors.push(format!("{}/{}: settings: {}", name, file, err));
                    }
                }
            }

            document_count += 1;
        }

        println!("  ✓ {} checked", name);
    }

    if document_count == 0 {
        bail!("No fixture documents found in {}", dir.display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!(
        "\n✓ All {} fixture documents pass conformance checks!",
        document_count
    );
    Ok(())
}

/// Validate that all check IDs and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let check_ids = safe_labels_types::explain::all_check_ids();
    let codes = safe_labels_types::explain::all_codes();

    let mut errors = Vec::new();

    for (kind, identifier) in check_ids
        .iter()
        .map(|id| ("Check ID", *id))
        .chain(codes.iter().map(|code| ("Code", *code)))
    {
        match safe_labels_types::explain::lookup_explanation(identifier) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("{} '{}' has empty title", kind, identifier));
                }
                if exp.description.is_empty() {
                    errors.push(format!("{} '{}' has empty description", kind, identifier));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("{} '{}' has empty remediation", kind, identifier));
                }
            }
            None => {
                errors.push(format!("{} '{}' has no explanation", kind, identifier));
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} check IDs have explanations", check_ids.len());
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
