//! Evidence Probes
//!
//! Each probe asks one external source whether a name is already in use.
//!
//! # Probe Shapes
//! - **Single-value** ([`Probe`]): one outcome per name (Wikipedia, DuckDuckGo,
//!   Discogs, Bandcamp, MusicBrainz, primary `.com` domain)
//! - **Set-valued** ([`SetProbe`]): one outcome per member key (TLDs, social platforms)
//!
//! # Failure Isolation
//! Probes never return errors. Network, status and parse problems become
//! `ProbeOutcome::Failed`, which the scoring layer treats as "not found".
//!
//! # Registry
//! [`ProbeRegistry`] is the single table of source → weight → probe, plus the
//! two set probes and their sub-score caps. Adding or removing a source is a
//! registry change; the orchestrator and scorer read everything from it.

pub mod bandcamp;
pub mod discogs;
pub mod domain;
pub mod duckduckgo;
pub mod http;
pub mod musicbrainz;
pub mod social;
pub mod wikipedia;

use crate::error::CheckerResult;
use crate::scoring::WeightTable;
use crate::types::{ProbeOutcome, SourceId};
use async_trait::async_trait;
use namecheck_common::TomlConfig;
use std::sync::Arc;

/// Single-value probe
#[async_trait]
pub trait Probe: Send + Sync {
    /// Source this probe reports for
    fn source(&self) -> SourceId;

    /// Query the source for `name`; never fails
    async fn probe(&self, name: &str) -> ProbeOutcome;
}

/// Set-valued probe: one independent check per member key
#[async_trait]
pub trait SetProbe: Send + Sync {
    /// Member keys in report order
    fn keys(&self) -> Vec<String>;

    /// Check one member; never fails
    async fn probe_member(&self, name: &str, key: &str) -> ProbeOutcome;
}

/// One row of the registry table
#[derive(Clone)]
pub struct RegisteredProbe {
    pub source: SourceId,
    pub weight: f64,
    pub probe: Arc<dyn Probe>,
}

/// Fixed set of probes run for every name
#[derive(Clone, Default)]
pub struct ProbeRegistry {
    singles: Vec<RegisteredProbe>,
    domains: Option<(Arc<dyn SetProbe>, f64)>,
    social: Option<(Arc<dyn SetProbe>, f64)>,
}

impl ProbeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single-value probe with its score weight
    pub fn register(mut self, weight: f64, probe: Arc<dyn Probe>) -> Self {
        self.singles.push(RegisteredProbe {
            source: probe.source(),
            weight,
            probe,
        });
        self
    }

    /// Set the domain set probe and the cap of its sub-score
    pub fn with_domains(mut self, probe: Arc<dyn SetProbe>, cap: f64) -> Self {
        self.domains = Some((probe, cap));
        self
    }

    /// Set the social set probe and the cap of its sub-score
    pub fn with_social(mut self, probe: Arc<dyn SetProbe>, cap: f64) -> Self {
        self.social = Some((probe, cap));
        self
    }

    /// Standard registry: all six single sources plus domains and social
    ///
    /// All HTTP probes share `client` (one connection pool per run).
    pub fn from_config(config: &TomlConfig, client: reqwest::Client) -> Self {
        let probes = &config.probes;
        let endpoints = &probes.endpoints;
        let w = &config.weights;

        Self::new()
            .register(
                w.discogs,
                Arc::new(discogs::DiscogsProbe::new(
                    client.clone(),
                    &endpoints.discogs,
                    config.resolve_discogs_token(),
                )),
            )
            .register(
                w.bandcamp,
                Arc::new(bandcamp::BandcampProbe::new(client.clone(), &endpoints.bandcamp)),
            )
            .register(
                w.musicbrainz,
                Arc::new(musicbrainz::MusicBrainzProbe::new(
                    client.clone(),
                    &endpoints.musicbrainz,
                )),
            )
            .register(
                w.wikipedia,
                Arc::new(wikipedia::WikipediaProbe::new(client.clone(), &endpoints.wikipedia)),
            )
            .register(
                w.duckduckgo,
                Arc::new(duckduckgo::DuckDuckGoProbe::new(
                    client.clone(),
                    &endpoints.duckduckgo,
                )),
            )
            .register(w.domain_com_taken, Arc::new(domain::PrimaryDomainProbe))
            .with_domains(
                Arc::new(domain::DomainSetProbe::new(probes.tlds.clone())),
                w.domains_cap,
            )
            .with_social(
                Arc::new(social::SocialProbe::new(
                    client,
                    probes.social_platforms.clone(),
                )),
                w.social_cap,
            )
    }

    /// Build the standard registry with a fresh shared HTTP client
    pub fn from_config_with_client(config: &TomlConfig) -> CheckerResult<Self> {
        let client = http::build_client(&config.probes)?;
        Ok(Self::from_config(config, client))
    }

    pub fn singles(&self) -> &[RegisteredProbe] {
        &self.singles
    }

    pub fn domains(&self) -> Option<&Arc<dyn SetProbe>> {
        self.domains.as_ref().map(|(probe, _)| probe)
    }

    pub fn social(&self) -> Option<&Arc<dyn SetProbe>> {
        self.social.as_ref().map(|(probe, _)| probe)
    }

    /// Weight table derived from the registered probes
    pub fn weight_table(&self) -> WeightTable {
        WeightTable::new(
            self.singles.iter().map(|r| (r.source, r.weight)).collect(),
            self.domains.as_ref().map_or(0.0, |(_, cap)| *cap),
            self.social.as_ref().map_or(0.0, |(_, cap)| *cap),
        )
    }

    /// Number of probe calls issued per name (set members counted individually)
    pub fn call_count(&self) -> usize {
        self.singles.len()
            + self.domains().map_or(0, |p| p.keys().len())
            + self.social().map_or(0, |p| p.keys().len())
    }
}

/// One entity returned by a catalog/search source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub title: String,
    pub reference: Option<String>,
}

impl Candidate {
    pub fn new(title: impl Into<String>, reference: Option<String>) -> Self {
        Self {
            title: title.into(),
            reference,
        }
    }
}

/// Decide a catalog/search outcome from the returned candidates
///
/// - exact (case-insensitive) title match → found, with that candidate's reference
/// - with `allow_substring`, a title containing the name → found, with reference
/// - any other candidate → found without reference (weak positive)
/// - no candidates → not found
pub fn match_candidates(name: &str, candidates: &[Candidate], allow_substring: bool) -> ProbeOutcome {
    if candidates.is_empty() {
        return ProbeOutcome::NotFound;
    }

    let wanted = name.trim().to_lowercase();
    let titles: Vec<String> = candidates
        .iter()
        .map(|c| c.title.trim().to_lowercase())
        .collect();

    let exact = titles.iter().position(|t| *t == wanted);
    let partial = || {
        if allow_substring && !wanted.is_empty() {
            titles.iter().position(|t| t.contains(&wanted))
        } else {
            None
        }
    };

    match exact.or_else(partial) {
        Some(index) => ProbeOutcome::Found {
            reference: candidates[index].reference.clone(),
        },
        None => ProbeOutcome::found_weak(),
    }
}
