// src/specs/kansokujo.rs
// Full observation station page (hourly_s1.php). Its 17 columns are the
// record positions in the same order.

use crate::config::consts::{KANSOKUJO_PAGE, TABLE_ID};
use crate::core::{net, table::Table};
use crate::error::{ExtractError, ScrapeError};
use crate::query::StationQuery;
use crate::record::{Field::*, Record};

use super::{CellKind::*, ColumnSpec};

pub const COLUMNS: [ColumnSpec; 17] = [
    ColumnSpec::new(0, Hour, Int),                // 時
    ColumnSpec::new(1, StationPressure, Float),   // 気圧(hPa) 現地
    ColumnSpec::new(2, SeaLevelPressure, Float),  // 気圧(hPa) 海面
    ColumnSpec::new(3, Precipitation, Float),     // 降水量(mm)
    ColumnSpec::new(4, Temperature, Float),       // 気温(℃)
    ColumnSpec::new(5, DewPoint, Float),          // 露点温度(℃)
    ColumnSpec::new(6, VaporPressure, Float),     // 蒸気圧(hPa)
    ColumnSpec::new(7, Humidity, Int),            // 湿度(％)
    ColumnSpec::new(8, WindSpeed, Float),         // 風速
    ColumnSpec::new(9, WindDirection, Bearing),   // 風向
    ColumnSpec::new(10, Sunshine, Float),         // 日照時間(h)
    ColumnSpec::new(11, SolarRadiation, Float),   // 全天日射量(MJ/㎡)
    ColumnSpec::new(12, Snowfall, Int),           // 雪(cm) 降雪
    ColumnSpec::new(13, SnowDepth, Int),          // 雪(cm) 積雪
    ColumnSpec::new(14, Weather, WeatherIcon),    // 天気
    ColumnSpec::new(15, CloudCover, Text),        // 雲量
    ColumnSpec::new(16, Visibility, Float),       // 視程(km)
];

/// Page URL for a query; `view=p1` selects the hourly table.
pub fn url(q: &StationQuery) -> String {
    format!("{}&view=p1", q.page_url(KANSOKUJO_PAGE))
}

/// Split out for unit tests.
pub fn parse_doc(html_doc: &str) -> Result<Vec<Record>, ExtractError> {
    let table = Table::from_doc(html_doc, TABLE_ID)?;
    super::extract(&table.rows, &COLUMNS)
}

pub fn fetch(q: &StationQuery) -> Result<Vec<Record>, ScrapeError> {
    let html_doc = net::http_get(&url(q))?;
    let t = std::time::Instant::now();
    let out = parse_doc(&html_doc)?;
    log::debug!("Kansokujo: parsed {} rows in {:?}", out.len(), t.elapsed());
    Ok(out)
}
