// Scoring - Evidence Fusion
//
// Weighted score over a SourceSet, then a status decision over (score, SourceSet).
// Both steps are pure functions of their inputs.

pub mod score_calculator;
pub mod status_classifier;

pub use score_calculator::ScoreCalculator;
pub use status_classifier::classify;

use crate::types::SourceId;
use namecheck_common::config::WeightsConfig;

/// Round to two decimal places
///
/// Rounds the exact binary value: `0.25 * 0.30` is stored just below 0.075
/// and becomes 0.07.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Per-source weights plus the caps of the two set-valued sub-scores
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    singles: Vec<(SourceId, f64)>,
    domains_cap: f64,
    social_cap: f64,
}

impl WeightTable {
    pub fn new(singles: Vec<(SourceId, f64)>, domains_cap: f64, social_cap: f64) -> Self {
        Self {
            singles,
            domains_cap,
            social_cap,
        }
    }

    pub fn from_config(config: &WeightsConfig) -> Self {
        Self::new(
            vec![
                (SourceId::Discogs, config.discogs),
                (SourceId::Bandcamp, config.bandcamp),
                (SourceId::Musicbrainz, config.musicbrainz),
                (SourceId::Wikipedia, config.wikipedia),
                (SourceId::Duckduckgo, config.duckduckgo),
                (SourceId::DomainComTaken, config.domain_com_taken),
            ],
            config.domains_cap,
            config.social_cap,
        )
    }

    pub fn singles(&self) -> &[(SourceId, f64)] {
        &self.singles
    }

    pub fn weight(&self, source: SourceId) -> Option<f64> {
        self.singles
            .iter()
            .find(|(id, _)| *id == source)
            .map(|(_, w)| *w)
    }

    pub fn domains_cap(&self) -> f64 {
        self.domains_cap
    }

    pub fn social_cap(&self) -> f64 {
        self.social_cap
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::from_config(&WeightsConfig::default())
    }
}
