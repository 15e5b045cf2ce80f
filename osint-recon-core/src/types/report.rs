//! Report document handed to the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of an aggregated report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub label: String,
    pub value: String,
}

impl ReportEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Stable, sorted, in-memory report structure.
///
/// Produced by the aggregator and consumed by external presentation code
/// (console or file writer). The entry sequence is finite and already in
/// display order; writers only serialize it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Report heading, e.g. "IP lookup" or "Handle search".
    pub title: String,
    /// Normalized subject the report describes.
    pub subject: String,
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<ReportEntry>,
}

impl ReportDocument {
    #[must_use]
    pub fn new(title: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            generated_at: Utc::now(),
            entries: Vec::new(),
        }
    }

    /// Render the line-oriented text form: a header, then one
    /// `label: value` line per entry.
    #[must_use]
    pub fn to_text_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 2);
        lines.push(format!("# {}: {}", self.title, self.subject));
        lines.push(format!(
            "# generated {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        for entry in &self.entries {
            lines.push(format!("{}: {}", entry.label, entry.value));
        }
        lines
    }
}
