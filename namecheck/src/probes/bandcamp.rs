//! Bandcamp Probe
//!
//! Scrapes the Bandcamp band search page (`item_type=b`). A result heading that
//! equals or contains the name is a strong positive with the heading link;
//! any other result is a weak positive.

use crate::probes::{http, match_candidates, Candidate, Probe};
use crate::types::{ProbeError, ProbeOutcome, SourceId};
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::debug;

pub struct BandcampProbe {
    client: Client,
    base_url: String,
}

impl BandcampProbe {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    async fn lookup(&self, name: &str) -> Result<ProbeOutcome, ProbeError> {
        let name = name.trim();
        let url = http::endpoint(&self.base_url, &["search"], &[("q", name), ("item_type", "b")])?;

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ProbeError::Status(response.status().as_u16()));
        }
        let body = response.text().await?;

        let candidates = parse_results(&body)?;
        debug!(name, hits = candidates.len(), "Bandcamp search complete");

        Ok(match_candidates(name, &candidates, true))
    }
}

/// Extract one candidate per `li.searchresult`
///
/// Results without a heading still count as candidates (empty title), so a
/// non-empty result list is never reported as "not found".
pub(crate) fn parse_results(html: &str) -> Result<Vec<Candidate>, ProbeError> {
    let parse = |s: &str| Selector::parse(s).map_err(|e| ProbeError::Parse(format!("{:?}", e)));
    let result_sel = parse("li.searchresult")?;
    let heading_sel = parse(".heading")?;
    let link_sel = parse("a")?;

    let document = Html::parse_document(html);
    let candidates = document
        .select(&result_sel)
        .map(|result| match result.select(&heading_sel).next() {
            Some(heading) => {
                let title = heading.text().collect::<String>().trim().to_string();
                let link = heading
                    .select(&link_sel)
                    .next()
                    .and_then(|a| a.value().attr("href"))
                    .map(str::to_string);
                Candidate::new(title, link)
            }
            None => Candidate::new("", None),
        })
        .collect();

    Ok(candidates)
}

#[async_trait]
impl Probe for BandcampProbe {
    fn source(&self) -> SourceId {
        SourceId::Bandcamp
    }

    async fn probe(&self, name: &str) -> ProbeOutcome {
        self.lookup(name).await.unwrap_or_else(ProbeOutcome::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <ul class="result-items">
          <li class="searchresult data-search">
            <div class="result-info">
              <div class="heading"><a href="https://novasounds.bandcamp.com?from=search">Nova Sounds</a></div>
            </div>
          </li>
          <li class="searchresult data-search">
            <div class="result-info">
              <div class="heading">
                <a href="https://nova.bandcamp.com?from=search">
                  Nova
                </a>
              </div>
            </div>
          </li>
        </ul>"#;

    #[test]
    fn test_parse_results() {
        let candidates = parse_results(PAGE).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1].title, "Nova");
        assert_eq!(
            candidates[1].reference.as_deref(),
            Some("https://nova.bandcamp.com?from=search")
        );
    }

    #[test]
    fn test_exact_heading_wins() {
        let candidates = parse_results(PAGE).unwrap();
        assert_eq!(
            match_candidates("nova", &candidates, true),
            ProbeOutcome::found("https://nova.bandcamp.com?from=search")
        );
    }

    #[test]
    fn test_result_without_heading_is_weak_positive() {
        let html = r#"<ul><li class="searchresult"><div class="art"></div></li></ul>"#;
        let candidates = parse_results(html).unwrap();
        assert_eq!(match_candidates("nova", &candidates, true), ProbeOutcome::found_weak());
    }

    #[test]
    fn test_empty_page() {
        let candidates = parse_results("<html><body></body></html>").unwrap();
        assert_eq!(match_candidates("nova", &candidates, true), ProbeOutcome::NotFound);
    }
}
