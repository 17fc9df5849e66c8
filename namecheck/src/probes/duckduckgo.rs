//! DuckDuckGo Probe
//!
//! Runs an HTML search for `<name> artist` and reports the name as found when
//! the result page lists any hits. Never carries a reference.

use crate::probes::{http, Probe};
use crate::types::{ProbeError, ProbeOutcome, SourceId};
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::debug;

const RESULT_SELECTOR: &str = ".result__title";

pub struct DuckDuckGoProbe {
    client: Client,
    base_url: String,
}

impl DuckDuckGoProbe {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    async fn lookup(&self, name: &str) -> Result<ProbeOutcome, ProbeError> {
        let query = format!("{} artist", name.trim());
        let url = http::endpoint(&self.base_url, &["html", ""], &[("q", query.as_str())])?;

        debug!(url = %url, "Querying DuckDuckGo");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ProbeError::Status(response.status().as_u16()));
        }
        let body = response.text().await?;

        if count_results(&body)? > 0 {
            Ok(ProbeOutcome::found_weak())
        } else {
            Ok(ProbeOutcome::NotFound)
        }
    }
}

/// Number of search hits on a DuckDuckGo HTML result page
pub(crate) fn count_results(html: &str) -> Result<usize, ProbeError> {
    let selector =
        Selector::parse(RESULT_SELECTOR).map_err(|e| ProbeError::Parse(format!("{:?}", e)))?;
    let document = Html::parse_document(html);
    Ok(document.select(&selector).count())
}

#[async_trait]
impl Probe for DuckDuckGoProbe {
    fn source(&self) -> SourceId {
        SourceId::Duckduckgo
    }

    async fn probe(&self, name: &str) -> ProbeOutcome {
        self.lookup(name).await.unwrap_or_else(ProbeOutcome::from)
    }
}
