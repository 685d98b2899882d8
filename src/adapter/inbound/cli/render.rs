//! Terminal rendering of a lookup outcome.

use crate::domain::{ClassificationView, PatentReport};
use crate::port::inbound::lookup::{Lookup, NOT_FOUND_MESSAGE};

use super::output;

/// Print one lookup outcome.
///
/// In JSON mode the whole outcome is a single line.
pub fn lookup(outcome: &Lookup) {
    if output::is_json() {
        if let Ok(value) = serde_json::to_value(outcome) {
            output::json_output(&value);
        }
        return;
    }

    match outcome {
        Lookup::NotFound { .. } => output::banner(NOT_FOUND_MESSAGE),
        Lookup::Found(report) => report_text(report),
    }
}

fn report_text(report: &PatentReport) {
    output::section("Patent Metadata");
    output::field("Patent number", output::highlight(&report.patent_number));
    output::field("Title", text(report.title.as_deref()));
    output::field("Filing date", text(report.filing_date.as_deref()));
    output::field("Publication date", text(report.publication_date.as_deref()));
    output::field("Application number", text(report.application_number.as_deref()));
    output::field("Assignees", list(&report.assignees));
    output::field("Inventors", list(&report.inventors));
    output::field("CPC", list(&report.cpc_codes));
    output::field("IPC", list(&report.ipc_codes));
    output::field("USPC", list(&report.uspc_codes));
    if let Some(abstract_text) = &report.abstract_text {
        output::section("Abstract");
        output::lines(abstract_text);
    }

    match &report.classification {
        ClassificationView::Failed { reason } => output::banner(reason),
        ready => {
            output::section("Classification");
            if let Some(json) = ready
                .fields_json()
                .and_then(|v| serde_json::to_string_pretty(&v).ok())
            {
                output::lines(&json);
            }
            output::section("Reasoning");
            output::lines(&report.reasoning_text());
        }
    }
}

fn text(value: Option<&str>) -> String {
    value.map_or_else(|| output::muted("n/a"), str::to_string)
}

fn list(items: &[String]) -> String {
    if items.is_empty() {
        output::muted("n/a")
    } else {
        items.join(", ")
    }
}
