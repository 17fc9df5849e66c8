//! Shared HTTP plumbing for the web probes

use crate::error::{CheckerError, CheckerResult};
use crate::types::ProbeError;
use namecheck_common::config::ProbeConfig;
use reqwest::{header, Client};
use std::time::Duration;
use url::Url;

/// Build the HTTP client shared by every probe of a run
///
/// The client-level timeout matches the per-probe timeout.
pub fn build_client(config: &ProbeConfig) -> CheckerResult<Client> {
    let user_agent = header::HeaderValue::from_str(&config.user_agent)
        .map_err(|e| CheckerError::HttpClient(format!("Invalid user agent: {}", e)))?;

    let mut headers = header::HeaderMap::new();
    headers.insert(header::USER_AGENT, user_agent);

    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .default_headers(headers)
        .build()
        .map_err(|e| CheckerError::HttpClient(e.to_string()))
}

/// Join path segments and query pairs onto a base URL
///
/// Segments and query values are percent-encoded by `url`.
pub fn endpoint(base: &str, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, ProbeError> {
    let mut url =
        Url::parse(base).map_err(|e| ProbeError::InvalidRequest(format!("{}: {}", base, e)))?;

    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| ProbeError::InvalidRequest(format!("{} cannot be a base", base)))?;
        path.pop_if_empty().extend(segments);
    }

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    Ok(url)
}
