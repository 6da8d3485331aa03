//! Embeds the aggregate document into the static dashboard template.
//!
//! Plain string substitution: the single marker is replaced by one
//! assignment statement defining `window.DASHBOARD_DATA`.

use crate::{
    error::{FundingError, FundingResult},
    report::ReportDocument,
};
use std::{fs, io, path::Path};

pub const DASHBOARD_MARKER: &str = "/*__DASHBOARD_DATA__*/";
const ASSIGNMENT_PREFIX: &str = "window.DASHBOARD_DATA = ";

/// Substitute `doc` for the marker. The marker must occur exactly once.
pub fn embed(template: &str, doc: &ReportDocument) -> FundingResult<String> {
    let count = template.matches(DASHBOARD_MARKER).count();
    match count {
        0 => return Err(FundingError::MarkerMissing { marker: DASHBOARD_MARKER }),
        1 => {}
        _ => return Err(FundingError::MarkerNotUnique { marker: DASHBOARD_MARKER, count }),
    }

    // "</" only appears inside JSON strings; "<\/" is the same string
    // and can never close the enclosing <script> element.
    let json = serde_json::to_string(doc)?.replace("</", "<\\/");
    Ok(template.replacen(DASHBOARD_MARKER, &format!("{ASSIGNMENT_PREFIX}{json};"), 1))
}

/// Parse the embedded assignment back out of an assembled document.
pub fn extract(html: &str) -> FundingResult<ReportDocument> {
    let start = html.find(ASSIGNMENT_PREFIX).ok_or(FundingError::PayloadMissing)?;
    let payload = &html[start + ASSIGNMENT_PREFIX.len()..];
    let doc = serde_json::Deserializer::from_str(payload)
        .into_iter::<ReportDocument>()
        .next()
        .ok_or(FundingError::PayloadMissing)??;
    Ok(doc)
}

/// Read the template, embed `doc`, and write the result to `output_path`,
/// creating missing parent directories.
pub fn write_dashboard(
    template_path: &Path,
    output_path: &Path,
    doc: &ReportDocument,
) -> FundingResult<()> {
    let template = fs::read_to_string(template_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FundingError::TemplateMissing {
            path: template_path.display().to_string(),
        },
        _ => FundingError::Io(e),
    })?;
    let html = embed(&template, doc)?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, html)?;
    log::info!("Dashboard written to {}", output_path.display());
    Ok(())
}
