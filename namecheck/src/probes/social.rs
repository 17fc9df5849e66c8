//! Social Platform Probe
//!
//! Requests one profile or search URL per configured platform. A success
//! status counts as "exists"; the page content is not inspected, so this is a
//! much weaker signal than the catalog probes.

use crate::probes::SetProbe;
use crate::types::{ProbeError, ProbeOutcome};
use async_trait::async_trait;
use namecheck_common::config::PlatformConfig;
use reqwest::Client;
use tracing::debug;
use url::{form_urlencoded, Url};

pub struct SocialProbe {
    client: Client,
    platforms: Vec<PlatformConfig>,
}

impl SocialProbe {
    pub fn new(client: Client, platforms: Vec<PlatformConfig>) -> Self {
        Self { client, platforms }
    }

    async fn check(&self, name: &str, platform: &str) -> Result<ProbeOutcome, ProbeError> {
        let template = self
            .platforms
            .iter()
            .find(|p| p.name == platform)
            .map(|p| p.url_template.as_str())
            .ok_or_else(|| ProbeError::InvalidRequest(format!("unknown platform {}", platform)))?;

        let url = render_url(template, name)?;
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        debug!(platform, status = status.as_u16(), "Social platform checked");

        if status.is_success() {
            Ok(ProbeOutcome::found(url.as_str()))
        } else {
            Ok(ProbeOutcome::NotFound)
        }
    }
}

/// Fill a platform URL template
///
/// `{name}` receives the trimmed name as is, `{query}` its form-encoded form.
pub fn render_url(template: &str, name: &str) -> Result<Url, ProbeError> {
    let name = name.trim();
    let query: String = form_urlencoded::byte_serialize(name.as_bytes()).collect();
    let raw = template.replace("{name}", name).replace("{query}", &query);

    Url::parse(&raw).map_err(|e| ProbeError::InvalidRequest(format!("{}: {}", raw, e)))
}

#[async_trait]
impl SetProbe for SocialProbe {
    fn keys(&self) -> Vec<String> {
        self.platforms.iter().map(|p| p.name.clone()).collect()
    }

    async fn probe_member(&self, name: &str, key: &str) -> ProbeOutcome {
        self.check(name, key).await.unwrap_or_else(ProbeOutcome::from)
    }
}
