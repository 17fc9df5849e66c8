// Status Classifier - Availability Decision
//
// First matching rule wins:
// 1. CertainlyFree - every single source, domain and social entry negative
// 2. Free          - score <= 0.20 and no domain taken
// 3. Partial       - score <= 0.60 (a taken domain lands here even at low scores)
// 4. Taken         - score > 0.60, whether or not a domain is taken

use crate::types::{SourceSet, Status};

/// Highest score still classified as Free
pub const FREE_MAX_SCORE: f64 = 0.20;

/// Highest score still classified as Partial
pub const PARTIAL_MAX_SCORE: f64 = 0.60;

/// Map a score and its evidence to a status
pub fn classify(score: f64, sources: &SourceSet) -> Status {
    let any_domain = sources.any_domain_taken();

    if sources.all_negative() {
        Status::CertainlyFree
    } else if score <= FREE_MAX_SCORE && !any_domain {
        Status::Free
    } else if score <= PARTIAL_MAX_SCORE {
        Status::Partial
    } else {
        Status::Taken
    }
}
