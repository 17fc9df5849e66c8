// Score Calculator - Weighted Evidence Score
//
// Single sources contribute their full weight when present. Domains and social
// platforms contribute a proportional, capped sub-score. The total saturates at 1.0.

use crate::scoring::{round2, WeightTable};
use crate::types::SourceSet;

/// Converts a SourceSet into a normalized score in [0, 1]
#[derive(Debug, Clone, Default)]
pub struct ScoreCalculator {
    weights: WeightTable,
}

impl ScoreCalculator {
    pub fn new(weights: WeightTable) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Compute the overall score
    ///
    /// # Returns
    /// * Score clipped to 1.0 and rounded to two decimals
    pub fn score(&self, sources: &SourceSet) -> f64 {
        let singles: f64 = self
            .weights
            .singles()
            .iter()
            .filter(|(source, _)| sources.single_exists(*source))
            .map(|(_, weight)| weight)
            .sum();

        let total = singles + self.domain_sub_score(sources) + self.social_sub_score(sources);

        round2(total.min(1.0))
    }

    /// Share of taken TLDs times the domain cap, rounded to two decimals
    pub fn domain_sub_score(&self, sources: &SourceSet) -> f64 {
        let domains = sources.domains();
        if domains.is_empty() {
            return 0.0;
        }

        let taken = domains.values().filter(|taken| **taken).count();
        round2(taken as f64 / domains.len() as f64 * self.weights.domains_cap())
    }

    /// Share of platforms reporting the name times the social cap, rounded to two decimals
    pub fn social_sub_score(&self, sources: &SourceSet) -> f64 {
        let social = sources.social();
        if social.is_empty() {
            return 0.0;
        }

        let taken = social.values().filter(|e| e.exists()).count();
        round2(taken as f64 / social.len() as f64 * self.weights.social_cap())
    }
}
