//! Discogs Probe
//!
//! Searches the Discogs database for artists (first 5 hits). Only an exact
//! title match yields a reference; any other hit is a weak positive.
//!
//! # API Reference
//! - Endpoint: `{base}/database/search?q=&type=artist&per_page=5[&token=]`
//! - Unauthenticated requests are rejected by Discogs (the probe then fails)

use crate::probes::{http, match_candidates, Candidate, Probe};
use crate::types::{ProbeError, ProbeOutcome, SourceId};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    title: String,
    resource_url: Option<String>,
}

pub struct DiscogsProbe {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl DiscogsProbe {
    pub fn new(client: Client, base_url: &str, token: Option<String>) -> Self {
        if token.is_none() {
            debug!("No Discogs token configured; requests will be unauthenticated");
        }
        Self {
            client,
            base_url: base_url.to_string(),
            token,
        }
    }

    async fn lookup(&self, name: &str) -> Result<ProbeOutcome, ProbeError> {
        let name = name.trim();
        let mut query = vec![("q", name), ("type", "artist"), ("per_page", "5")];
        if let Some(token) = &self.token {
            query.push(("token", token.as_str()));
        }
        let url = http::endpoint(&self.base_url, &["database", "search"], &query)?;

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ProbeError::Status(response.status().as_u16()));
        }

        let search: SearchResponse = response.json().await?;
        debug!(name, hits = search.results.len(), "Discogs search complete");

        Ok(search_outcome(name, search))
    }
}

fn search_outcome(name: &str, search: SearchResponse) -> ProbeOutcome {
    let candidates: Vec<Candidate> = search
        .results
        .into_iter()
        .map(|r| Candidate::new(r.title, r.resource_url))
        .collect();

    match_candidates(name, &candidates, false)
}

#[async_trait]
impl Probe for DiscogsProbe {
    fn source(&self) -> SourceId {
        SourceId::Discogs
    }

    async fn probe(&self, name: &str) -> ProbeOutcome {
        self.lookup(name).await.unwrap_or_else(ProbeOutcome::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SearchResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_exact_title_match() {
        let search = parse(
            r#"{"results": [
                {"title": "Nova (3)", "resource_url": "https://api.discogs.com/artists/3"},
                {"title": "Nova", "resource_url": "https://api.discogs.com/artists/1"}
            ]}"#,
        );
        assert_eq!(
            search_outcome("nova", search),
            ProbeOutcome::found("https://api.discogs.com/artists/1")
        );
    }

    #[test]
    fn test_near_match_is_weak_positive() {
        let search = parse(r#"{"results": [{"title": "Nova (3)", "resource_url": "x"}]}"#);
        assert_eq!(search_outcome("nova", search), ProbeOutcome::found_weak());
    }

    #[test]
    fn test_no_results() {
        assert_eq!(search_outcome("nova", parse(r#"{"results": []}"#)), ProbeOutcome::NotFound);
        assert_eq!(search_outcome("nova", parse("{}")), ProbeOutcome::NotFound);
    }
}
