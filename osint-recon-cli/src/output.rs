//! Report rendering to stdout or a file.

use std::io::Write;
use std::path::Path;

use osint_recon_core::types::ReportDocument;

pub fn emit(doc: &ReportDocument, json: bool, output: Option<&Path>) -> std::io::Result<()> {
    let rendered = if json {
        serde_json::to_string_pretty(doc).unwrap_or_else(|_| "{}".to_string())
    } else {
        doc.to_text_lines().join("\n")
    };

    match output {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            writeln!(file, "{rendered}")?;
            log::info!("Report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
