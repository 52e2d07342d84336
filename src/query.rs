// src/query.rs
use chrono::NaiveDate;

use crate::config::consts::{HOST, PREFIX};
use crate::error::ScrapeError;
use crate::specs::{amedas, kansokujo, StationKind};

/// One station-day to scrape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationQuery {
    /// Prefecture/region code, e.g. "46".
    pub prec_no: String,
    /// Station block code, e.g. "47670" or "0529".
    pub block_no: String,
    pub date: NaiveDate,
}

impl StationQuery {
    pub fn new(prec_no: &str, block_no: &str, date: NaiveDate) -> Self {
        Self { prec_no: s!(prec_no), block_no: s!(block_no), date }
    }

    /// Layout of this station's page. URL and extractor both derive from it.
    pub fn kind(&self) -> Result<StationKind, ScrapeError> {
        StationKind::from_block_no(&self.block_no)
    }

    pub fn url(&self) -> Result<String, ScrapeError> {
        Ok(match self.kind()? {
            StationKind::Kansokujo => kansokujo::url(self),
            StationKind::Amedas => amedas::url(self),
        })
    }

    /// `<HOST><PREFIX><page>?prec_no=..&block_no=..&year=..&month=..&day=..`
    pub(crate) fn page_url(&self, page: &str) -> String {
        format!(
            "{HOST}{PREFIX}{page}?prec_no={}&block_no={}&{}",
            self.prec_no,
            self.block_no,
            self.date.format("year=%Y&month=%m&day=%d"),
        )
    }
}
