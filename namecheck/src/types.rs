//! Core Types for namecheck
//!
//! Evidence data model shared by the probes, the orchestrator, the scoring
//! layer and the report writers:
//! - **ProbeOutcome:** what a single probe call observed (found / not found / failed)
//! - **Evidence:** the existence signal kept for scoring
//! - **SourceSet:** all evidence collected for one name
//! - **Status / NameResult:** classification output per name

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

// ============================================================================
// Probe Outcome
// ============================================================================

/// Result of one probe call
///
/// Probes never return errors to their caller; transport, timeout and parse
/// problems are reported as `Failed` with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The source knows the name. `reference` is an advisory URL (or domain).
    Found { reference: Option<String> },
    /// The source answered and does not know the name
    NotFound,
    /// The source could not be queried
    Failed(String),
}

impl ProbeOutcome {
    /// Strong positive with a reference
    pub fn found(reference: impl Into<String>) -> Self {
        ProbeOutcome::Found {
            reference: Some(reference.into()),
        }
    }

    /// Weak positive: the source returned candidates, none matched exactly
    pub fn found_weak() -> Self {
        ProbeOutcome::Found { reference: None }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ProbeOutcome::Failed(_))
    }
}

impl From<ProbeError> for ProbeOutcome {
    fn from(err: ProbeError) -> Self {
        ProbeOutcome::Failed(err.to_string())
    }
}

/// Internal probe errors, collapsed into `ProbeOutcome::Failed` at the probe boundary
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Source answered with an unexpected HTTP status
    #[error("HTTP status {0}")]
    Status(u16),

    /// Failed to parse response body
    #[error("Parse error: {0}")]
    Parse(String),

    /// Probe did not finish before its timeout
    #[error("Timed out after {0} ms")]
    Timeout(u128),

    /// Request could not be built (bad template, bad URL)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProbeError::Parse(err.to_string())
        } else {
            ProbeError::Network(err.to_string())
        }
    }
}

// ============================================================================
// Evidence
// ============================================================================

/// Existence signal produced by one probe for one name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    exists: bool,
    reference: Option<String>,
}

impl Evidence {
    pub fn found(reference: Option<String>) -> Self {
        Self {
            exists: true,
            reference,
        }
    }

    pub fn not_found() -> Self {
        Self::default()
    }

    /// Scoring policy for probe outcomes: a failed probe counts as "not found"
    pub fn from_outcome(outcome: &ProbeOutcome) -> Self {
        match outcome {
            ProbeOutcome::Found { reference } => Self::found(reference.clone()),
            ProbeOutcome::NotFound | ProbeOutcome::Failed(_) => Self::not_found(),
        }
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Reference URL; only ever present when `exists` is true
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }
}

// ============================================================================
// Source Identifiers
// ============================================================================

/// Single-value evidence sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceId {
    Discogs,
    Bandcamp,
    Musicbrainz,
    Wikipedia,
    Duckduckgo,
    DomainComTaken,
}

impl SourceId {
    /// All sources in report column order
    pub const ALL: [SourceId; 6] = [
        SourceId::Discogs,
        SourceId::Bandcamp,
        SourceId::Musicbrainz,
        SourceId::Wikipedia,
        SourceId::Duckduckgo,
        SourceId::DomainComTaken,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::Discogs => "discogs",
            SourceId::Bandcamp => "bandcamp",
            SourceId::Musicbrainz => "musicbrainz",
            SourceId::Wikipedia => "wikipedia",
            SourceId::Duckduckgo => "duckduckgo",
            SourceId::DomainComTaken => "domain_com_taken",
        }
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Source Set
// ============================================================================

/// All evidence collected for one name
///
/// Built once through [`SourceSetBuilder`]; read-only afterwards. Domain and
/// social maps keep the configured TLD/platform order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceSet {
    #[serde(flatten)]
    singles: BTreeMap<SourceId, Evidence>,

    domains: IndexMap<String, bool>,

    #[serde(rename = "social_media")]
    social: IndexMap<String, Evidence>,

    /// Probe key → failure reason (observability only, never scored)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    failures: BTreeMap<String, String>,
}

impl SourceSet {
    pub fn builder() -> SourceSetBuilder {
        SourceSetBuilder::default()
    }

    pub fn single(&self, source: SourceId) -> Option<&Evidence> {
        self.singles.get(&source)
    }

    /// Existence signal of a single source; absent sources count as false
    pub fn single_exists(&self, source: SourceId) -> bool {
        self.singles.get(&source).is_some_and(Evidence::exists)
    }

    pub fn singles(&self) -> &BTreeMap<SourceId, Evidence> {
        &self.singles
    }

    pub fn domains(&self) -> &IndexMap<String, bool> {
        &self.domains
    }

    pub fn social(&self) -> &IndexMap<String, Evidence> {
        &self.social
    }

    pub fn failures(&self) -> &BTreeMap<String, String> {
        &self.failures
    }

    pub fn any_domain_taken(&self) -> bool {
        self.domains.values().any(|taken| *taken)
    }

    /// True when every single source, domain and social entry is negative
    pub fn all_negative(&self) -> bool {
        !self.singles.values().any(Evidence::exists)
            && !self.any_domain_taken()
            && !self.social.values().any(Evidence::exists)
    }
}

/// Accumulates probe outcomes into a [`SourceSet`]
///
/// Applies the outcome → evidence policy and records failures.
#[derive(Debug, Default)]
pub struct SourceSetBuilder {
    set: SourceSet,
}

impl SourceSetBuilder {
    /// Pre-register TLDs so every configured domain appears, in order
    pub fn with_domains<I, S>(mut self, tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tld in tlds {
            self.set.domains.insert(tld.into(), false);
        }
        self
    }

    /// Pre-register platforms so every configured platform appears, in order
    pub fn with_social<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for platform in platforms {
            self.set.social.insert(platform.into(), Evidence::not_found());
        }
        self
    }

    pub fn single(mut self, source: SourceId, outcome: &ProbeOutcome) -> Self {
        self.note_failure(source.as_str(), outcome);
        self.set.singles.insert(source, Evidence::from_outcome(outcome));
        self
    }

    pub fn domain(mut self, tld: &str, outcome: &ProbeOutcome) -> Self {
        self.note_failure(&format!("domains.{}", tld), outcome);
        self.set
            .domains
            .insert(tld.to_string(), Evidence::from_outcome(outcome).exists());
        self
    }

    pub fn social(mut self, platform: &str, outcome: &ProbeOutcome) -> Self {
        self.note_failure(&format!("social_media.{}", platform), outcome);
        self.set
            .social
            .insert(platform.to_string(), Evidence::from_outcome(outcome));
        self
    }

    pub fn build(self) -> SourceSet {
        self.set
    }

    fn note_failure(&mut self, key: &str, outcome: &ProbeOutcome) {
        if let ProbeOutcome::Failed(reason) = outcome {
            self.set.failures.insert(key.to_string(), reason.clone());
        }
    }
}

// ============================================================================
// Status and Name Result
// ============================================================================

/// Availability classification, ordered from most to least available
///
/// Serialized with the same labels as `Display`, so every report agrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[serde(rename = "certainly free")]
    CertainlyFree,
    Free,
    Partial,
    Taken,
}

impl Status {
    /// Sort rank used by the batch ordering (0 = most available)
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Statuses listed in the plain-text report
    pub fn is_free(&self) -> bool {
        matches!(self, Status::CertainlyFree | Status::Free)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::CertainlyFree => write!(f, "certainly free"),
            Status::Free => write!(f, "free"),
            Status::Partial => write!(f, "partial"),
            Status::Taken => write!(f, "taken"),
        }
    }
}

/// Final verdict for one candidate name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameResult {
    pub name: String,
    pub sources: SourceSet,
    /// Score in [0, 1], two decimals
    pub score: f64,
    pub status: Status,
}
