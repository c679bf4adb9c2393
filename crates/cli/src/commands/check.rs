use regioncheck_core::{RegionProvider, commands::check::check_regions};

use super::list::join;
use crate::error::CommandError;

pub async fn check(providers: &[&dyn RegionProvider], strict: bool) -> Result<(), CommandError> {
    let reports = check_regions(providers).await;

    let mut failed = 0;
    let mut drifted = 0;
    for report in &reports {
        match &report.drift {
            Ok(drift) if drift.is_empty() => println!("{}: up to date", report.provider_name),
            Ok(drift) => {
                drifted += 1;
                println!("{}: regions changed", report.provider_name);
                if !drift.added.is_empty() {
                    println!("  added:   {}", join(&drift.added));
                }
                if !drift.removed.is_empty() {
                    println!("  removed: {}", join(&drift.removed));
                }
            }
            Err(error) => {
                eprintln!("{}: {}", report.provider_name, error);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(CommandError::LookupsFailed {
            failed,
            total: reports.len(),
        });
    }
    if strict && drifted > 0 {
        return Err(CommandError::OutOfDate { count: drifted });
    }
    Ok(())
}
