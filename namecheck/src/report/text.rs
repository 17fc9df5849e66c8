//! Plain-text report: the names worth considering

use crate::types::NameResult;

pub const TITLE: &str = "Artist names - certainly free";

/// `Name: <name>   Score: <score> Status: <status>`
pub fn line(result: &NameResult) -> String {
    format!(
        "Name: {}   Score: {:.2} Status: {}",
        result.name, result.score, result.status
    )
}

/// Title, timestamp, then one line per free or certainly free result
pub fn render(results: &[NameResult], stamp: &str) -> String {
    let mut out = format!("{}\n\n{}\n\n", TITLE, stamp);
    for result in results.iter().filter(|r| r.status.is_free()) {
        out.push_str(&line(result));
        out.push_str("\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SourceSet, Status};

    fn result(name: &str, status: Status, score: f64) -> NameResult {
        NameResult {
            name: name.to_string(),
            sources: SourceSet::default(),
            score,
            status,
        }
    }

    #[test]
    fn test_line_format() {
        assert_eq!(
            line(&result("Nova", Status::Free, 0.1)),
            "Name: Nova   Score: 0.10 Status: free"
        );
    }

    #[test]
    fn test_only_free_results_listed() {
        let results = vec![
            result("Certain", Status::CertainlyFree, 0.0),
            result("Loose", Status::Free, 0.15),
            result("Half", Status::Partial, 0.4),
            result("Gone", Status::Taken, 0.9),
        ];

        let text = render(&results, "19102026_120000");
        assert!(text.starts_with("Artist names - certainly free\n\n19102026_120000\n\n"));
        assert!(text.contains("Name: Certain   Score: 0.00 Status: certainly free"));
        assert!(text.contains("Name: Loose"));
        assert!(!text.contains("Half"));
        assert!(!text.contains("Gone"));
    }
}
