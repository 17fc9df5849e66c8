//! MusicBrainz Probe
//!
//! Searches MusicBrainz artists (first 5 hits). An artist whose name equals or
//! contains the queried name is a strong positive with the artist page URL.
//!
//! # API Reference
//! - Endpoint: `{base}/ws/2/artist/?query=&fmt=json&limit=5`
//! - Documentation: https://musicbrainz.org/doc/MusicBrainz_API/Search
//! - A User-Agent header is required (set on the shared client)

use crate::probes::{http, match_candidates, Candidate, Probe};
use crate::types::{ProbeError, ProbeOutcome, SourceId};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ArtistSearch {
    #[serde(default)]
    artists: Vec<ArtistHit>,
}

#[derive(Debug, Deserialize)]
struct ArtistHit {
    id: String,
    #[serde(default)]
    name: String,
}

pub struct MusicBrainzProbe {
    client: Client,
    base_url: String,
}

impl MusicBrainzProbe {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn lookup(&self, name: &str) -> Result<ProbeOutcome, ProbeError> {
        let name = name.trim();
        let url = http::endpoint(
            &self.base_url,
            &["ws", "2", "artist", ""],
            &[("query", name), ("fmt", "json"), ("limit", "5")],
        )?;

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ProbeError::Status(response.status().as_u16()));
        }

        let search: ArtistSearch = response.json().await?;
        debug!(name, hits = search.artists.len(), "MusicBrainz search complete");

        Ok(self.search_outcome(name, search))
    }

    fn search_outcome(&self, name: &str, search: ArtistSearch) -> ProbeOutcome {
        let candidates: Vec<Candidate> = search
            .artists
            .into_iter()
            .map(|a| {
                let page = format!("{}/artist/{}", self.base_url, a.id);
                Candidate::new(a.name, Some(page))
            })
            .collect();

        match_candidates(name, &candidates, true)
    }
}

#[async_trait]
impl Probe for MusicBrainzProbe {
    fn source(&self) -> SourceId {
        SourceId::Musicbrainz
    }

    async fn probe(&self, name: &str) -> ProbeOutcome {
        self.lookup(name).await.unwrap_or_else(ProbeOutcome::from)
    }
}
