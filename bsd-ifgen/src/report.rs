use colored::Colorize;

use crate::drift::{format_drift_summary, format_drift_text, DriftLine};

/// Render drift entries for terminal output.
pub fn render_drift(entries: &[DriftLine]) -> String {
    let raw = format_drift_text(entries);
    let mut out = Vec::new();

    for line in raw.lines() {
        let colored = if line.starts_with('+') {
            line.green().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else {
            line.to_string()
        };
        out.push(colored);
    }

    out.join("\n")
}

/// Render drift counts for terminal output.
pub fn render_drift_summary(entries: &[DriftLine]) -> String {
    format_drift_summary(entries).cyan().to_string()
}

/// Render named documents: a lone document bare, several under
/// `==> name <==` headers.
pub fn render_documents(documents: &[(String, String)]) -> String {
    if let [(_, content)] = documents {
        return content.clone();
    }

    documents
        .iter()
        .map(|(name, content)| format!("==> {name} <==\n{content}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}
