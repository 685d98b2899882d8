//! HTML rendering for the lookup form.

use std::fmt::Write;

use crate::domain::{ClassificationView, PatentReport};
use crate::port::inbound::lookup::{Lookup, NOT_FOUND_MESSAGE};

/// Result of a submitted form, if any.
pub enum Outcome {
    Lookup(Lookup),
    Error(String),
}

/// Escape text for HTML element content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the whole page.
#[must_use]
pub fn render(input: &str, outcome: Option<&Outcome>) -> String {
    let mut body = String::new();
    match outcome {
        None => {}
        Some(Outcome::Error(message)) => banner(&mut body, message),
        Some(Outcome::Lookup(Lookup::NotFound { .. })) => banner(&mut body, NOT_FOUND_MESSAGE),
        Some(Outcome::Lookup(Lookup::Found(report))) => render_report(&mut body, report),
    }

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Patent Categorizer</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }}
.banner {{ background: #fdecea; color: #611a15; padding: .75rem 1rem; border-radius: 4px; }}
pre {{ background: #f6f8fa; padding: 1rem; overflow-x: auto; }}
dt {{ font-weight: 600; }}
</style>
</head>
<body>
<h1>Patent Categorizer</h1>
<form method="get" action="/">
<label for="patent">Enter a US patent number</label>
<input id="patent" name="patent" value="{input}" autofocus>
<button type="submit">Look up</button>
</form>
{body}</body>
</html>
"#,
        input = escape(input),
    )
}

fn banner(out: &mut String, message: &str) {
    let _ = writeln!(out, r#"<div class="banner">{}</div>"#, escape(message));
}

fn render_report(out: &mut String, report: &PatentReport) {
    out.push_str("<h2>Patent Metadata</h2>\n<dl>\n");
    let fields: [(&str, Option<String>); 11] = [
        ("Patent number", Some(report.patent_number.clone())),
        ("Title", report.title.clone()),
        ("Abstract", report.abstract_text.clone()),
        ("Filing date", report.filing_date.clone()),
        ("Publication date", report.publication_date.clone()),
        ("Application number", report.application_number.clone()),
        ("Assignees", join(&report.assignees)),
        ("Inventors", join(&report.inventors)),
        ("CPC", join(&report.cpc_codes)),
        ("IPC", join(&report.ipc_codes)),
        ("USPC", join(&report.uspc_codes)),
    ];
    for (label, value) in fields {
        let value = value.unwrap_or_default();
        let _ = writeln!(out, "<dt>{label}</dt><dd>{}</dd>", escape(&value));
    }
    out.push_str("</dl>\n");

    match &report.classification {
        ClassificationView::Failed { reason } => banner(out, reason),
        ready => {
            let json = ready
                .fields_json()
                .and_then(|v| serde_json::to_string_pretty(&v).ok())
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "<h2>Classification</h2>\n<pre>{}</pre>\n<h2>Reasoning</h2>\n<p>{}</p>",
                escape(&json),
                escape(&report.reasoning_text()),
            );
        }
    }
}

fn join(items: &[String]) -> Option<String> {
    (!items.is_empty()).then(|| items.join(", "))
}
