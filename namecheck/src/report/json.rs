//! JSON report

use crate::error::CheckerResult;
use crate::types::NameResult;

/// Pretty-printed array of `{name, sources, score, status}` records
pub fn render(results: &[NameResult]) -> CheckerResult<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
