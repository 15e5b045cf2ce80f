//! Pure aggregation of raw results into report documents.

use crate::types::{
    ProbeOutcome, ProbeResult, ReportDocument, ReportEntry, ResolutionResult, Subject,
};

/// Summarize a probe batch for a handle.
///
/// Confirmed hits come first, sorted by platform name; indeterminate probes
/// follow with their failure detail so the reader knows which platforms were
/// not actually checked. Platforms where the handle was absent are counted
/// but not listed.
#[must_use]
pub fn report_probes(subject: &Subject, results: &[ProbeResult]) -> ReportDocument {
    let mut doc = ReportDocument::new("Handle presence", subject.to_string());

    let mut found: Vec<&ProbeResult> = results
        .iter()
        .filter(|r| r.outcome == ProbeOutcome::Found)
        .collect();
    found.sort_by(|a, b| a.probe.cmp(&b.probe));

    let not_found = results
        .iter()
        .filter(|r| r.outcome == ProbeOutcome::NotFound)
        .count();
    let indeterminate: Vec<&ProbeResult> = results
        .iter()
        .filter(|r| r.outcome == ProbeOutcome::Indeterminate)
        .collect();

    doc.entries.push(ReportEntry::new(
        "Checked",
        format!("{} platform(s)", results.len()),
    ));
    doc.entries
        .push(ReportEntry::new("Found", format!("{}", found.len())));
    doc.entries
        .push(ReportEntry::new("Not found", format!("{not_found}")));
    doc.entries.push(ReportEntry::new(
        "Unreachable",
        format!("{}", indeterminate.len()),
    ));

    for hit in found {
        doc.entries.push(ReportEntry::new(hit.probe.clone(), hit.url.clone()));
    }
    for miss in indeterminate {
        let detail = miss.error.as_deref().unwrap_or("No response");
        doc.entries.push(ReportEntry::new(
            miss.probe.clone(),
            format!("Unreachable ({detail})"),
        ));
    }

    doc
}

/// Flatten a geolocation resolution into labelled report lines.
#[must_use]
pub fn report_resolution(result: &ResolutionResult) -> ReportDocument {
    let mut doc = ReportDocument::new("IP geolocation", result.subject.clone());

    let source = if result.served_from_cache {
        "cache".to_string()
    } else {
        result
            .provider
            .clone()
            .unwrap_or_else(|| "unknown".to_string())
    };
    doc.entries.push(ReportEntry::new("Source", source));

    if let Some(map) = result.payload.as_object() {
        for (key, value) in map {
            let rendered = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            doc.entries.push(ReportEntry::new(key.clone(), rendered));
        }
    }

    doc
}
