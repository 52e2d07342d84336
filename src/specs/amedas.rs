// src/specs/amedas.rs
// Automated station page (hourly_a1.php). Eight columns, remapped onto the
// record; pressure, humidity, radiation, weather, cloud and visibility stay absent.

use crate::config::consts::{AMEDAS_PAGE, TABLE_ID};
use crate::core::{net, table::Table};
use crate::error::{ExtractError, ScrapeError};
use crate::query::StationQuery;
use crate::record::{Field::*, Record};

use super::{CellKind::*, ColumnSpec};

pub const COLUMNS: [ColumnSpec; 8] = [
    ColumnSpec::new(0, Hour, Int),              // 時
    ColumnSpec::new(1, Precipitation, Float),   // 降水量(mm)
    ColumnSpec::new(2, Temperature, Float),     // 気温(℃)
    ColumnSpec::new(3, WindSpeed, Float),       // 風速
    ColumnSpec::new(4, WindDirection, Bearing), // 風向
    ColumnSpec::new(5, Sunshine, Float),        // 日照時間(h)
    ColumnSpec::new(6, Snowfall, Int),          // 雪(cm) 降雪
    ColumnSpec::new(7, SnowDepth, Int),         // 雪(cm) 積雪
];

pub fn url(q: &StationQuery) -> String {
    q.page_url(AMEDAS_PAGE)
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
    log::debug!("Amedas: parsed {} rows in {:?}", out.len(), t.elapsed());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <table id="tablefix1" class="data2_s">
          <tr class="mtx"><th rowspan="2">時</th><th rowspan="2">降水量<br>(mm)</th><th rowspan="2">気温<br>(℃)</th><th colspan="2">風向・風速(m/s)</th></tr>
          <tr class="mtx"><th>風速</th><th>風向</th></tr>
          <tr class="mtx" style="text-align:right;">
            <td style="white-space:nowrap">1</td>
            <td class="data_0_0">0.0</td>
            <td class="data_0_0">-2.4</td>
            <td class="data_0_0">1.1</td>
            <td class="data_0_0" style="text-align:center">静穏</td>
            <td class="data_0_0"></td>
            <td class="data_0_0">2</td>
            <td class="data_0_0">31</td>
          </tr>
        </table>
    "#;

    #[test]
    fn remaps_onto_record() {
        let out = parse_doc(DOC).unwrap();
        assert_eq!(out.len(), 1);
        let r = &out[0];
        assert_eq!(r.int(Hour), Some(1));
        assert_eq!(r.float(Precipitation), Some(0.0));
        assert_eq!(r.float(Temperature), Some(-2.4));
        assert_eq!(r.float(WindSpeed), Some(1.1));
        assert_eq!(r.get(WindDirection), None); // calm has no bearing
        assert_eq!(r.get(Sunshine), None);
        assert_eq!(r.int(Snowfall), Some(2));
        assert_eq!(r.int(SnowDepth), Some(31));
    }

    #[test]
    fn unreported_fields_stay_absent() {
        let out = parse_doc(DOC).unwrap();
        for f in [StationPressure, SeaLevelPressure, DewPoint, VaporPressure,
                  Humidity, SolarRadiation, Weather, CloudCover, Visibility] {
            assert_eq!(out[0].get(f), None, "{f:?}");
        }
    }

    #[test]
    fn url_has_no_view_param() {
        let q = StationQuery::new("54", "0529", chrono::NaiveDate::from_ymd_opt(2018, 12, 1).unwrap());
        assert_eq!(
            url(&q),
            "https://www.data.jma.go.jp/obd/stats/etrn/view/hourly_a1.php?prec_no=54&block_no=0529&year=2018&month=12&day=01"
        );
    }
}
