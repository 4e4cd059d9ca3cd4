use super::bootstrap;
use crate::cli::PackArgs;
use crate::config::AppConfig;
use crate::error::Result;
use reagentry::engine::context::InstallReport;
use tracing::{info, warn};

pub fn run(args: PackArgs, app_config: &AppConfig) -> Result<()> {
    let engine_config = app_config.engine_config(&args, None)?;
    let result = bootstrap(&args, app_config, &engine_config)?;

    for report in &result.reports {
        print_report(report);
    }

    let engine = &result.engine;
    println!();
    println!(
        "Installed {} substance(s), {} reaction(s), {} localization key(s).",
        engine.substances().len(),
        engine.reactions().len(),
        engine.localization().len()
    );

    let failures = result.failure_count();
    if failures == 0 {
        info!("All content packs installed cleanly.");
        println!("✓ No registrations were dropped.");
    } else {
        warn!("{} registration(s) were dropped.", failures);
        println!("⚠ {} registration(s) were dropped.", failures);
    }
    println!("Fingerprint: {}", engine.fingerprint());

    Ok(())
}

fn print_report(report: &InstallReport) {
    let id = if report.extension_id.is_empty() {
        "<invalid id>"
    } else {
        report.extension_id.as_str()
    };
    println!(
        "[{}] {} translation(s), {} substance(s), {} reaction(s)",
        id, report.translations, report.substances, report.reactions
    );
    for failure in &report.failures {
        println!("  dropped {}: {}", failure.item, failure.error);
    }
}
