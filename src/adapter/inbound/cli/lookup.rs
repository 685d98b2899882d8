//! Handler for the `lookup` command.

use crate::error::Result;
use crate::port::inbound::lookup::{Lookup, PatentLookup};

use super::{output, render};

/// Execute `lookup <PATENT>`.
///
/// Not found and classification failures are rendered as banners and are
/// not errors; only invalid input and storage failures return `Err`.
pub async fn execute(service: &dyn PatentLookup, patent: &str) -> Result<Lookup> {
    let pb = output::spinner(&format!("Looking up {}", patent.trim()));

    let outcome = match service.lookup(patent).await {
        Ok(outcome) => outcome,
        Err(e) => {
            output::spinner_fail(&pb, "Lookup failed");
            return Err(e);
        }
    };

    match &outcome {
        Lookup::Found(report) if report.classification.is_ready() => {
            output::spinner_success(&pb, "Classified");
        }
        Lookup::Found(_) => output::spinner_success(&pb, "Fetched metadata"),
        Lookup::NotFound { .. } => pb.finish_and_clear(),
    }

    render::lookup(&outcome);
    Ok(outcome)
}
