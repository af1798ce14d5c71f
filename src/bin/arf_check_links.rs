// src/bin/arf_check_links.rs
// =============================================================================
// Entry point of arf-check-links.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Load arf.json and flatten it into a worklist of url nodes
// 3. Drain the worklist through the probe engine
// 4. Print the report
// 5. Exit 0 no matter what was found; dead links are information, not failure
//
// The binary runs on a current-thread tokio runtime: the probes are
// concurrent I/O on one thread, never parallel work.
// =============================================================================

use anyhow::{Context, Result};
use arf_tools::checker::{HttpProbe, ProbeEngine};
use arf_tools::cli::CheckLinksArgs;
use arf_tools::logging;
use arf_tools::tree::{collect_work_items, load_document};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Problems (unreadable file, bad JSON) are printed, but the exit code
    // stays 0.
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
    }
}

async fn run() -> Result<()> {
    let args = CheckLinksArgs::parse();
    logging::init(args.verbose);
    let config = args.checker_config();

    if !args.json {
        println!("Loading {}...", args.file.display());
    }

    let document = load_document(&args.file)?;
    let items = collect_work_items(&document);

    if !args.json {
        println!("🔍 Found {} URLs to check.", items.len());
        println!("🌐 Starting checks with concurrency {}...", config.concurrency);
    }

    let probe = HttpProbe::new(&config).context("setting up the HTTP client")?;
    let report = ProbeEngine::new(probe, &config).run(items).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        // Blank lines push the report below the progress markers
        println!("\n");
        print!("{}", report);
    }

    Ok(())
}
