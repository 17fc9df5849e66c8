//! Test Helper Utilities
//!
//! Scripted probes for exercising the orchestrator and batch runner without
//! network access.

#![allow(dead_code)]

pub mod canned_http;

use async_trait::async_trait;
use namecheck::probes::{Probe, ProbeRegistry, SetProbe};
use namecheck::{CheckerOptions, NameChecker, ProbeOutcome, SourceId};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Always returns the same outcome
pub struct StaticProbe {
    pub source: SourceId,
    pub outcome: ProbeOutcome,
}

impl StaticProbe {
    pub fn arc(source: SourceId, outcome: ProbeOutcome) -> Arc<Self> {
        Arc::new(Self { source, outcome })
    }
}

#[async_trait]
impl Probe for StaticProbe {
    fn source(&self) -> SourceId {
        self.source
    }

    async fn probe(&self, _name: &str) -> ProbeOutcome {
        self.outcome.clone()
    }
}

/// Found for the listed names, not found otherwise
pub struct KnownNamesProbe {
    pub source: SourceId,
    pub known: HashSet<String>,
}

impl KnownNamesProbe {
    pub fn arc(source: SourceId, known: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            source,
            known: known.iter().map(|n| n.to_string()).collect(),
        })
    }
}

#[async_trait]
impl Probe for KnownNamesProbe {
    fn source(&self) -> SourceId {
        self.source
    }

    async fn probe(&self, name: &str) -> ProbeOutcome {
        if self.known.contains(name) {
            ProbeOutcome::found(format!("https://{}/{}", self.source, name))
        } else {
            ProbeOutcome::NotFound
        }
    }
}

/// Sleeps before answering; used to trigger the orchestrator timeout
pub struct SlowProbe {
    pub source: SourceId,
    pub delay: Duration,
}

#[async_trait]
impl Probe for SlowProbe {
    fn source(&self) -> SourceId {
        self.source
    }

    async fn probe(&self, _name: &str) -> ProbeOutcome {
        tokio::time::sleep(self.delay).await;
        ProbeOutcome::found_weak()
    }
}

/// Tracks the highest number of calls in flight at once
#[derive(Default)]
pub struct ConcurrencyGauge {
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl ConcurrencyGauge {
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    async fn hold(&self, delay: Duration) {
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(delay).await;
        self.current.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct GaugedProbe {
    pub source: SourceId,
    pub gauge: Arc<ConcurrencyGauge>,
    pub delay: Duration,
}

#[async_trait]
impl Probe for GaugedProbe {
    fn source(&self) -> SourceId {
        self.source
    }

    async fn probe(&self, _name: &str) -> ProbeOutcome {
        self.gauge.hold(self.delay).await;
        ProbeOutcome::NotFound
    }
}

/// Set probe with a fixed outcome per member
pub struct StaticSetProbe {
    pub members: Vec<(String, ProbeOutcome)>,
}

impl StaticSetProbe {
    pub fn arc(members: Vec<(&str, ProbeOutcome)>) -> Arc<Self> {
        Arc::new(Self {
            members: members
                .into_iter()
                .map(|(k, o)| (k.to_string(), o))
                .collect(),
        })
    }

    /// Every member answers `outcome`
    pub fn uniform(keys: &[&str], outcome: ProbeOutcome) -> Arc<Self> {
        Self::arc(keys.iter().map(|k| (*k, outcome.clone())).collect())
    }
}

#[async_trait]
impl SetProbe for StaticSetProbe {
    fn keys(&self) -> Vec<String> {
        self.members.iter().map(|(k, _)| k.clone()).collect()
    }

    async fn probe_member(&self, _name: &str, key: &str) -> ProbeOutcome {
        self.members
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, o)| o.clone())
            .unwrap_or(ProbeOutcome::NotFound)
    }
}

pub const TLDS: [&str; 10] = [
    "com", "art", "music", "band", "audio", "de", "at", "fm", "dj", "rocks",
];

pub const PLATFORMS: [&str; 5] = ["instagram", "tiktok", "youtube", "youtubemusic", "applemusic"];

/// Registry with every single source fixed to `NotFound` and default weights
pub fn negative_registry() -> ProbeRegistry {
    registry_with(|_| ProbeOutcome::NotFound)
}

/// Registry whose single-source outcomes come from `outcome_for`
pub fn registry_with(outcome_for: impl Fn(SourceId) -> ProbeOutcome) -> ProbeRegistry {
    let weights = [
        (SourceId::Discogs, 0.25),
        (SourceId::Bandcamp, 0.20),
        (SourceId::Musicbrainz, 0.20),
        (SourceId::Wikipedia, 0.15),
        (SourceId::Duckduckgo, 0.10),
        (SourceId::DomainComTaken, 0.05),
    ];

    weights
        .into_iter()
        .fold(ProbeRegistry::new(), |registry, (source, weight)| {
            registry.register(weight, StaticProbe::arc(source, outcome_for(source)))
        })
}

/// Checker with a short timeout suitable for tests
pub fn checker(registry: ProbeRegistry) -> NameChecker {
    NameChecker::new(
        registry,
        CheckerOptions {
            probe_timeout: Duration::from_millis(500),
            max_probes_per_name: 32,
        },
    )
}
