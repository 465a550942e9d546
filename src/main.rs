use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use pluglint::Report;

#[derive(Parser)]
#[command(
    name = "pluglint",
    version,
    about = "Plugin package validator (OpenAPI contract + metadata manifest)"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Output format for validation results.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Format {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON object with the diagnostics array and the verdict
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a plugin package (OpenAPI document + plugin metadata)
    Validate {
        /// Path to the OpenAPI document
        openapi_file: Option<PathBuf>,
        /// Path to the plugin metadata document
        meta_file: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Validate {
            openapi_file,
            meta_file,
            format,
        }) => {
            // Both documents are required; no checker runs without them.
            let (Some(openapi_file), Some(meta_file)) = (openapi_file, meta_file) else {
                eprintln!("Usage: pluglint validate <openapi_file.yaml> <plugin_meta.yaml>");
                eprintln!();
                eprintln!("Example:");
                eprintln!("  pluglint validate document_converter.yaml plugin_meta.yaml");
                std::process::exit(1);
            };

            let report = pluglint::validate_package(&openapi_file, &meta_file);

            match format {
                Format::Text => print_report(&report, &openapi_file, &meta_file),
                Format::Json => {
                    let json = serde_json::json!({
                        "openapi_file": openapi_file.display().to_string(),
                        "meta_file": meta_file.display().to_string(),
                        "diagnostics": report.diagnostics(),
                        "success": report.is_success(),
                    });
                    println!("{}", serde_json::to_string_pretty(&json).unwrap());
                }
            }

            if !report.is_success() {
                std::process::exit(1);
            }
        }
        None => {
            eprintln!("Usage: pluglint <command> [args]");
            eprintln!("Run `pluglint --help` for details.");
            std::process::exit(1);
        }
    }
}

/// Render the report as human-readable text with status glyphs and counts.
fn print_report(report: &Report, openapi_file: &Path, meta_file: &Path) {
    println!("🔍 Validating plugin package...");
    println!("   OpenAPI file: {}", openapi_file.display());
    println!("   Metadata file: {}", meta_file.display());
    println!();

    let errors = report.errors();
    let warnings = report.warnings();

    if !errors.is_empty() {
        println!("❌ Validation failed with the following errors:");
        for e in &errors {
            println!("   • {}", e.message);
        }
        println!();
    }

    if !warnings.is_empty() {
        println!("⚠️  Warnings:");
        for w in &warnings {
            println!("   • {}", w.message);
        }
        println!();
    }

    if errors.is_empty() && warnings.is_empty() {
        println!("✅ Plugin package is valid!");
    } else if errors.is_empty() {
        println!("✅ Plugin package is mostly valid; review the warnings above.");
    } else {
        println!("❌ Found {} error(s); fix them and validate again.", errors.len());
    }
}
