// src/bin/arf_validate.rs
// =============================================================================
// Entry point of arf-validate.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Load arf.json (a read or syntax error is fatal: exit code 1)
// 3. Validate the tree in one pass
// 4. Print the report
// 5. Exit 0, even when the structure is invalid
// =============================================================================

use anyhow::Result;
use arf_tools::cli::ValidateArgs;
use arf_tools::tree::load_document;
use arf_tools::validate::{validate_document, ValidationReport};
use arf_tools::{logging, ArfError};
use clap::Parser;
use serde::Serialize;
use std::path::Path;

// Shape of the --json output
#[derive(Serialize)]
struct JsonOutput<'a> {
    file: &'a Path,
    valid: bool,
    #[serde(flatten)]
    report: &'a ValidationReport,
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = file parsed (whether or not the structure is valid)
//   Ok(1) = file unreadable or not valid JSON
//   Err   = unexpected error (e.g. the JSON report could not be serialized)
fn run() -> Result<i32> {
    let args = ValidateArgs::parse();
    logging::init(args.verbose);

    if !args.json {
        println!(
            "Validating {} (version {})...",
            args.file.display(),
            env!("CARGO_PKG_VERSION")
        );
    }

    let document = match load_document(&args.file) {
        Ok(document) => document,
        Err(e) => {
            report_fatal(&e);
            return Ok(1);
        }
    };

    let report = validate_document(&document);

    if args.json {
        let output = JsonOutput {
            file: &args.file,
            valid: report.is_valid(),
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&report, args.verbose);
    }

    Ok(0)
}

fn report_fatal(error: &ArfError) {
    if error.is_parse() {
        eprintln!("CRITICAL: Invalid JSON syntax");
    } else {
        eprintln!("CRITICAL: Could not read the catalog");
    }
    eprintln!("{}", error);
}

// Errors and warnings go to stderr, the verdict lines to stdout
fn print_report(report: &ValidationReport, verbose: bool) {
    if report.root_missing_type {
        eprintln!("WARNING: Root missing type.");
    }

    for error in &report.errors {
        eprintln!("ERROR: {}", error);
    }

    if report.is_valid() {
        println!("✅ Structure Validation: PASSED");
    } else {
        eprintln!("❌ Structure Validation: FAILED ({} error(s))", report.errors.len());
    }

    if report.duplicate_urls.is_empty() {
        println!("Duplicate URLs: NONE");
    } else {
        eprintln!("\n[!] Found {} Duplicate URLs:", report.duplicate_urls.len());
        for duplicate in &report.duplicate_urls {
            eprintln!("  - \"{}\": {}", duplicate.name, duplicate.url);
        }
    }

    // Plain names repeat legitimately across folders, so only the count is
    // shown unless asked for.
    if !report.duplicate_names.is_empty() {
        eprintln!(
            "\n[!] Found {} Duplicate Names (potentially ambiguous nodes):",
            report.duplicate_names.len()
        );
        if verbose {
            for name in &report.duplicate_names {
                eprintln!("  - \"{}\"", name);
            }
        } else {
            eprintln!("  (run with --verbose to see the names)");
        }
    }
}
