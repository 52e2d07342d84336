// src/scrape/scrape.rs
use std::fs;

use crate::{
    config::options::ScrapeOptions,
    error::{ExtractError, ScrapeError},
    record::Record,
    specs::{amedas, kansokujo, StationKind},
};

/// Parse an already-loaded page with the layout for `kind`.
pub fn parse_page(kind: StationKind, html_doc: &str) -> Result<Vec<Record>, ExtractError> {
    match kind {
        StationKind::Kansokujo => kansokujo::parse_doc(html_doc),
        StationKind::Amedas => amedas::parse_doc(html_doc),
    }
}

/// Scrape one station-day into canonical records.
///
/// The station kind is decided once from the query; it picks both the page
/// URL and the column layout, so the two can never disagree.
/// With `input` set, the page is read from disk instead of fetched.
pub fn collect(scrape: &ScrapeOptions) -> Result<Vec<Record>, ScrapeError> {
    let query = scrape.query.as_ref().ok_or(ScrapeError::NoStation)?;
    let kind = query.kind()?;
    log::info!(
        "Station {} (prec {}) on {}: {kind} layout",
        query.block_no, query.prec_no, query.date
    );

    let records = match &scrape.input {
        Some(path) => {
            let html_doc = fs::read_to_string(path)
                .map_err(|e| ScrapeError::ReadInput(path.clone(), e))?;
            log::debug!("Read {} bytes from {}", html_doc.len(), path.display());
            parse_page(kind, &html_doc)?
        }
        None => match kind {
            StationKind::Kansokujo => kansokujo::fetch(query)?,
            StationKind::Amedas => amedas::fetch(query)?,
        },
    };

    if records.is_empty() {
        log::warn!("No observation rows for station {} on {}", query.block_no, query.date);
    }
    Ok(records)
}
