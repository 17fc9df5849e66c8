//! CSV report
//!
//! Columns: `name, score, status`, the six single sources, then
//! `domains_<tld>` and `social_<platform>` per configured TLD/platform.
//! Evidence columns hold `true`/`false`; a missing entry is `false`.

use crate::error::CheckerResult;
use crate::report::ReportLayout;
use crate::types::{NameResult, SourceId};
use std::io::Write;

/// Header row for the given layout
pub fn headers(layout: &ReportLayout) -> Vec<String> {
    let mut headers = vec!["name".to_string(), "score".to_string(), "status".to_string()];
    headers.extend(SourceId::ALL.iter().map(|s| s.as_str().to_string()));
    headers.extend(layout.tlds.iter().map(|tld| format!("domains_{}", tld)));
    headers.extend(layout.platforms.iter().map(|p| format!("social_{}", p)));
    headers
}

/// One flat row for a result
pub fn row(result: &NameResult, layout: &ReportLayout) -> Vec<String> {
    let sources = &result.sources;
    let mut row = vec![
        result.name.clone(),
        format!("{:.2}", result.score),
        result.status.to_string(),
    ];

    row.extend(
        SourceId::ALL
            .iter()
            .map(|s| sources.single_exists(*s).to_string()),
    );
    row.extend(layout.tlds.iter().map(|tld| {
        sources
            .domains()
            .get(tld)
            .copied()
            .unwrap_or(false)
            .to_string()
    }));
    row.extend(layout.platforms.iter().map(|p| {
        sources
            .social()
            .get(p)
            .is_some_and(|e| e.exists())
            .to_string()
    }));

    row
}

/// Write header and rows
pub fn write<W: Write>(writer: W, results: &[NameResult], layout: &ReportLayout) -> CheckerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(headers(layout))?;
    for result in results {
        csv.write_record(row(result, layout))?;
    }
    csv.flush()?;
    Ok(())
}
