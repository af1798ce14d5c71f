// src/cli.rs
// =============================================================================
// This file defines the command-line interfaces of both binaries using the
// `clap` crate.
//
// Both tools are meant to be run with no arguments at all from the
// repository root; every flag below only overrides a default.
//
//   arf-validate     [--file PATH] [--json] [--verbose]
//   arf-check-links  [--file PATH] [--concurrency N] [--timeout-ms MS]
//                    [--json] [--verbose]
// =============================================================================

use crate::checker::{CheckerConfig, DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_MS};
use crate::tree::DEFAULT_ARF_PATH;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

// Arguments for arf-validate
//
// #[derive(Parser)] tells clap to generate the parsing code; doc comments on
// the fields become the --help text.
#[derive(Parser, Debug)]
#[command(
    name = "arf-validate",
    version,
    about = "Validate the structure of arf.json",
    long_about = "Checks that every node of arf.json has a name and a type, that every url node \
                  has a url, and warns about duplicate names and URLs. Exits non-zero only when \
                  the file cannot be read or is not valid JSON."
)]
pub struct ValidateArgs {
    /// Path to the catalog file
    #[arg(long, default_value = DEFAULT_ARF_PATH)]
    pub file: PathBuf,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// List the duplicate names and enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

// Arguments for arf-check-links
#[derive(Parser, Debug)]
#[command(
    name = "arf-check-links",
    version,
    about = "Find dead links in arf.json",
    long_about = "Sends an HTTP HEAD request to every url node of arf.json, a bounded number at a \
                  time, and lists the ones that are dead, time out, fail, or cannot be parsed. \
                  Always exits 0."
)]
pub struct CheckLinksArgs {
    /// Path to the catalog file
    #[arg(long, default_value = DEFAULT_ARF_PATH)]
    pub file: PathBuf,

    /// Maximum number of probes in flight at once
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Per-probe timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Print the report as JSON instead of text (disables progress markers)
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging of every probe
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckLinksArgs {
    pub fn checker_config(&self) -> CheckerConfig {
        CheckerConfig::default()
            .with_concurrency(self.concurrency)
            .with_timeout(Duration::from_millis(self.timeout_ms))
            .with_progress(!self.json)
    }
}
