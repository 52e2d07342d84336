// src/core/net.rs
// Blocking HTTP GET. One request per call; no retries.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{TIMEOUT_SECS, USER_AGENT};
use crate::error::ScrapeError;

pub fn http_get(url: &str) -> Result<String, ScrapeError> {
    let net_err = |e: reqwest::Error| ScrapeError::NetworkRequest(s!(url), e);

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()
        .map_err(net_err)?;

    log::info!("GET {url}");
    let resp = client.get(url).send().map_err(net_err)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::HttpStatus { url: s!(url), status });
    }
    resp.text().map_err(net_err)
}
