//! `rembed embed` and `rembed status`.
//!
//! Both commands resolve the same settings. `embed` regenerates stale headers
//! and the aggregator; `status` only reports what `embed` would do.

use rembed_driver::{Embedder, ResourceFailure, RunReport, StatusEntry};

use crate::settings::{self, Settings};
use crate::{EmbedArgs, GlobalArgs, ReportFormat};

/// Runs the `rembed embed` command.
///
/// Per-resource failures are reported but do not fail the command, so a
/// build that references a missing asset still gets headers for the rest.
pub fn run(args: &EmbedArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let Some(settings) = settings::resolve(args, global)? else {
        return Ok(0);
    };
    let report = embedder(&settings).run(&settings.specs)?;

    match args.format {
        ReportFormat::Text => {
            if !global.quiet {
                print_report(&report, global.verbose);
            }
        }
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{json}");
        }
    }
    Ok(0)
}

/// Runs the `rembed status` command. Nothing is written.
pub fn status(args: &EmbedArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let Some(settings) = settings::resolve(args, global)? else {
        return Ok(0);
    };
    let (entries, failures) = embedder(&settings).status(&settings.specs);

    match args.format {
        ReportFormat::Text => {
            if !global.quiet {
                print_status(&entries, &failures);
            }
        }
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "resources": entries,
                "failures": failures,
            }))?;
            println!("{json}");
        }
    }
    Ok(0)
}

fn embedder(settings: &Settings) -> Embedder {
    Embedder::new(&settings.codegen, &settings.output_dir, &settings.build_root)
}

fn print_report(report: &RunReport, verbose: bool) {
    for entry in &report.generated {
        eprintln!(
            "   Generated {} ({})",
            entry.header.display(),
            entry.reason
        );
    }
    if verbose {
        for path in &report.up_to_date {
            eprintln!("       Fresh {}", path.display());
        }
        for path in &report.skipped {
            eprintln!("     Skipped {}", path.display());
        }
    }
    print_failures(&report.failures);
    if let Some(aggregator) = &report.aggregator {
        eprintln!("       Wrote {}", aggregator.display());
    }
    eprintln!(
        "   Result: {} generated, {} up to date, {} failed",
        report.generated.len(),
        report.up_to_date.len(),
        report.failures.len()
    );
}

fn print_status(entries: &[StatusEntry], failures: &[ResourceFailure]) {
    for entry in entries {
        let label = if entry.stale { "Stale" } else { "Fresh" };
        eprintln!(
            "{label:>12} {} ({})",
            entry.source.display(),
            entry.reason
        );
    }
    print_failures(failures);
    let stale = entries.iter().filter(|e| e.stale).count();
    eprintln!(
        "   Result: {} stale, {} up to date, {} failed",
        stale,
        entries.len() - stale,
        failures.len()
    );
}

fn print_failures(failures: &[ResourceFailure]) {
    for failure in failures {
        eprintln!("      Failed {}: {}", failure.path.display(), failure.error);
    }
}
