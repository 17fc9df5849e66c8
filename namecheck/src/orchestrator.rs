//! Per-Name Orchestration
//!
//! Runs every registered probe, and every member of every set probe, for one
//! name concurrently, then folds the outcomes into a [`SourceSet`], a score
//! and a status.
//!
//! # Guarantees
//! - No short-circuit: every probe call runs to completion or timeout
//! - Failure isolation: a failed or timed-out call becomes negative evidence
//!   for its own slot only
//! - Completeness: the SourceSet has an entry for every registered source,
//!   TLD and platform
//!
//! In-flight calls per name are bounded by `max_probes_per_name`; completion
//! order is not observable by callers.

use crate::error::CheckerResult;
use crate::probes::{ProbeRegistry, SetProbe};
use crate::scoring::{classify, ScoreCalculator};
use crate::types::{NameResult, ProbeError, ProbeOutcome, SourceId, SourceSet};
use futures::future::BoxFuture;
use futures::stream::{self, StreamExt};
use namecheck_common::TomlConfig;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Evidence slot a probe call fills
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Single(SourceId),
    Domain(String),
    Social(String),
}

impl Slot {
    fn label(&self) -> String {
        match self {
            Slot::Single(source) => source.to_string(),
            Slot::Domain(tld) => format!("domains.{}", tld),
            Slot::Social(platform) => format!("social_media.{}", platform),
        }
    }
}

/// Orchestrator limits
#[derive(Debug, Clone)]
pub struct CheckerOptions {
    /// Upper bound per probe call
    pub probe_timeout: Duration,
    /// Probe calls in flight for one name
    pub max_probes_per_name: usize,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            probe_timeout: Duration::from_secs(8),
            max_probes_per_name: 32,
        }
    }
}

impl CheckerOptions {
    pub fn from_config(config: &TomlConfig) -> Self {
        Self {
            probe_timeout: Duration::from_secs(config.probes.timeout_secs),
            max_probes_per_name: config.concurrency.max_probes_per_name,
        }
    }
}

/// Checks one name against every registered probe
pub struct NameChecker {
    registry: ProbeRegistry,
    calculator: ScoreCalculator,
    options: CheckerOptions,
}

impl NameChecker {
    /// Create a checker; the score weights come from the registry table
    pub fn new(registry: ProbeRegistry, options: CheckerOptions) -> Self {
        let calculator = ScoreCalculator::new(registry.weight_table());
        Self {
            registry,
            calculator,
            options,
        }
    }

    /// Standard checker with all network probes and a shared HTTP client
    ///
    /// The configuration is validated first; configs built in code skip the
    /// check that TOML loading performs.
    pub fn from_config(config: &TomlConfig) -> CheckerResult<Self> {
        config.validate()?;
        let registry = ProbeRegistry::from_config_with_client(config)?;
        Ok(Self::new(registry, CheckerOptions::from_config(config)))
    }

    pub fn registry(&self) -> &ProbeRegistry {
        &self.registry
    }

    pub fn calculator(&self) -> &ScoreCalculator {
        &self.calculator
    }

    /// Probe `name` everywhere and classify it
    pub async fn check(&self, name: &str) -> NameResult {
        let sources = self.collect(name).await;
        let score = self.calculator.score(&sources);
        let status = classify(score, &sources);

        info!(
            name,
            score,
            status = %status,
            failed_probes = sources.failures().len(),
            "Name checked"
        );

        NameResult {
            name: name.to_string(),
            sources,
            score,
            status,
        }
    }

    /// Run all probe calls for `name` and assemble the SourceSet
    pub async fn collect(&self, name: &str) -> SourceSet {
        let mut calls: Vec<BoxFuture<'_, (Slot, ProbeOutcome)>> =
            Vec::with_capacity(self.registry.call_count());

        for registered in self.registry.singles() {
            let probe = Arc::clone(&registered.probe);
            let slot = Slot::Single(registered.source);
            calls.push(Box::pin(async move {
                let outcome = self.bounded(probe.probe(name)).await;
                (slot, outcome)
            }));
        }

        let domain_keys = self.push_set_calls(&mut calls, name, self.registry.domains(), Slot::Domain);
        let social_keys = self.push_set_calls(&mut calls, name, self.registry.social(), Slot::Social);

        debug!(name, calls = calls.len(), "Dispatching probes");

        let outcomes: Vec<(Slot, ProbeOutcome)> = stream::iter(calls)
            .buffer_unordered(self.options.max_probes_per_name.max(1))
            .collect()
            .await;

        let mut builder = SourceSet::builder()
            .with_domains(domain_keys)
            .with_social(social_keys);

        for (slot, outcome) in &outcomes {
            if let ProbeOutcome::Failed(reason) = outcome {
                warn!(name, probe = %slot.label(), reason = %reason, "Probe failed, counted as not found");
            }
            builder = match slot {
                Slot::Single(source) => builder.single(*source, outcome),
                Slot::Domain(tld) => builder.domain(tld, outcome),
                Slot::Social(platform) => builder.social(platform, outcome),
            };
        }

        builder.build()
    }

    /// Queue one call per member of `set`; returns the member keys in order
    fn push_set_calls<'a>(
        &'a self,
        calls: &mut Vec<BoxFuture<'a, (Slot, ProbeOutcome)>>,
        name: &'a str,
        set: Option<&Arc<dyn SetProbe>>,
        slot: fn(String) -> Slot,
    ) -> Vec<String> {
        let Some(set) = set else {
            return Vec::new();
        };

        let keys = set.keys();
        for key in &keys {
            let probe = Arc::clone(set);
            let key = key.clone();
            calls.push(Box::pin(async move {
                let outcome = self.bounded(probe.probe_member(name, &key)).await;
                (slot(key), outcome)
            }));
        }
        keys
    }

    /// Apply the per-probe timeout
    async fn bounded<F>(&self, call: F) -> ProbeOutcome
    where
        F: Future<Output = ProbeOutcome>,
    {
        match tokio::time::timeout(self.options.probe_timeout, call).await {
            Ok(outcome) => outcome,
            Err(_) => ProbeError::Timeout(self.options.probe_timeout.as_millis()).into(),
        }
    }
}
