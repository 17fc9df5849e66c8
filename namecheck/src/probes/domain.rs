//! Domain Probes (DNS)
//!
//! A domain that resolves is considered taken. Any resolution failure counts
//! as free: "no such host" and a broken resolver are not told apart.
//!
//! - [`PrimaryDomainProbe`]: `<name>.com`, spaces removed
//! - [`DomainSetProbe`]: `<name>.<tld>` for every configured TLD, spaces and
//!   hyphens removed

use crate::probes::{Probe, SetProbe};
use crate::types::{ProbeOutcome, SourceId};
use async_trait::async_trait;
use tokio::net::lookup_host;
use tracing::trace;

/// Host checked by the primary domain probe
pub fn primary_host(name: &str) -> String {
    format!("{}.com", name.trim().to_lowercase().replace(' ', ""))
}

/// Host checked for one TLD of the domain set probe
pub fn tld_host(name: &str, tld: &str) -> String {
    let base: String = name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();
    format!("{}.{}", base, tld.trim_start_matches('.'))
}

/// Resolve `host`; resolvable → found (reference = host), anything else → not found
pub async fn resolve(host: &str) -> ProbeOutcome {
    match lookup_host((host, 0)).await {
        Ok(mut addrs) => {
            if addrs.next().is_some() {
                ProbeOutcome::found(host)
            } else {
                ProbeOutcome::NotFound
            }
        }
        Err(e) => {
            trace!(host, error = %e, "Host did not resolve");
            ProbeOutcome::NotFound
        }
    }
}

/// `<name>.com` resolution
pub struct PrimaryDomainProbe;

#[async_trait]
impl Probe for PrimaryDomainProbe {
    fn source(&self) -> SourceId {
        SourceId::DomainComTaken
    }

    async fn probe(&self, name: &str) -> ProbeOutcome {
        resolve(&primary_host(name)).await
    }
}

/// Resolution across a configured TLD list
pub struct DomainSetProbe {
    tlds: Vec<String>,
}

impl DomainSetProbe {
    pub fn new(tlds: Vec<String>) -> Self {
        Self { tlds }
    }
}

#[async_trait]
impl SetProbe for DomainSetProbe {
    fn keys(&self) -> Vec<String> {
        self.tlds.clone()
    }

    async fn probe_member(&self, name: &str, key: &str) -> ProbeOutcome {
        resolve(&tld_host(name, key)).await
    }
}
