//! Wikipedia Probe
//!
//! Looks up the page summary for the name via the REST API.
//! A summary with an `extract` means an article exists.
//!
//! # API Reference
//! - Endpoint: `{base}/api/rest_v1/page/summary/{title}` (spaces → underscores)
//! - 404 = no article

use crate::probes::{http, Probe};
use crate::types::{ProbeError, ProbeOutcome, SourceId};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct PageSummary {
    extract: Option<String>,
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<PageUrls>,
}

#[derive(Debug, Deserialize)]
struct PageUrls {
    page: Option<String>,
}

pub struct WikipediaProbe {
    client: Client,
    base_url: String,
}

impl WikipediaProbe {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    async fn lookup(&self, name: &str) -> Result<ProbeOutcome, ProbeError> {
        let title = name.trim().replace(' ', "_");
        let url = http::endpoint(
            &self.base_url,
            &["api", "rest_v1", "page", "summary", title.as_str()],
            &[],
        )?;

        debug!(url = %url, "Querying Wikipedia");

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(ProbeOutcome::NotFound);
        }
        if !response.status().is_success() {
            return Err(ProbeError::Status(response.status().as_u16()));
        }

        let summary: PageSummary = response.json().await?;
        Ok(summary_outcome(summary))
    }
}

fn summary_outcome(summary: PageSummary) -> ProbeOutcome {
    if summary.extract.is_none() {
        return ProbeOutcome::NotFound;
    }

    let page = summary
        .content_urls
        .and_then(|urls| urls.desktop)
        .and_then(|desktop| desktop.page);

    ProbeOutcome::Found { reference: page }
}

#[async_trait]
impl Probe for WikipediaProbe {
    fn source(&self) -> SourceId {
        SourceId::Wikipedia
    }

    async fn probe(&self, name: &str) -> ProbeOutcome {
        self.lookup(name).await.unwrap_or_else(ProbeOutcome::from)
    }
}
