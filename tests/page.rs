// tests/page.rs
//
// From saved page HTML to emitted lines, without the network.
//
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use jma_scrape::config::options::{AppOptions, ExportFormat, ScrapeOptions};
use jma_scrape::csv::to_export_string;
use jma_scrape::file::write_export;
use jma_scrape::scrape::{collect, parse_page};
use jma_scrape::{ScrapeError, StationKind, StationQuery};

const AMEDAS_PAGE: &str = r#"
<html><head><meta charset="UTF-8"><title>気象庁｜過去の気象データ検索</title></head>
<body>
<table id="tablefix1" class="data2_s">
  <tr class="mtx"><th rowspan="2">時</th><th rowspan="2">降水量<br>(mm)</th><th rowspan="2">気温<br>(℃)</th><th colspan="2">風向・風速(m/s)</th><th rowspan="2">日照<br>時間<br>(h)</th><th colspan="2">雪(cm)</th></tr>
  <tr class="mtx"><th>風速</th><th>風向</th><th>降雪</th><th>積雪</th></tr>
  <tr class="mtx" style="text-align:right;"><td style="white-space:nowrap">1</td><td class="data_0_0">0.0</td><td class="data_0_0">3.4</td><td class="data_0_0">1.2</td><td class="data_0_0" style="text-align:center">北北西</td><td class="data_0_0"></td><td class="data_0_0">--</td><td class="data_0_0">--</td></tr>
  <tr class="mtx" style="text-align:right;"><td style="white-space:nowrap">2</td><td class="data_0_0">0.5&nbsp;)</td><td class="data_0_0">3.1</td><td class="data_0_0">0.8</td><td class="data_0_0" style="text-align:center">西</td><td class="data_0_0"></td><td class="data_0_0">0</td><td class="data_0_0">2</td></tr>
</table>
</body></html>
"#;

const KANSOKUJO_PAGE: &str = r#"
<table id="tablefix1" class="data2_s">
  <tr class="mtx"><th rowspan="2">時</th><th colspan="2">気圧(hPa)</th></tr>
  <tr class="mtx"><th>現地</th><th>海面</th></tr>
  <tr class="mtx"><td>24</td><td>1020.1</td><td>1021.5</td><td>--</td><td>5.0</td><td>-1.0</td><td>5.7</td><td>65</td><td>2.3</td><td>北東</td><td></td><td></td><td>--</td><td>--</td><td><img src="x.png" alt="快晴"></td><td>0</td><td>30.0</td></tr>
</table>
"#;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("jma_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 12, 1).unwrap()
}

#[test]
fn amedas_page_to_csv() {
    let records = parse_page(StationKind::Amedas, AMEDAS_PAGE).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(
        to_export_string(&records, false, ','),
        "1,,,0,3.4,,,,1.2,337.5,,,,,,,\n\
         2,,,0.5,3.1,,,,0.8,270,,,0,2,,,\n"
    );
}

#[test]
fn kansokujo_page_to_tsv() {
    let records = parse_page(StationKind::Kansokujo, KANSOKUJO_PAGE).unwrap();
    assert_eq!(
        to_export_string(&records, false, '\t'),
        "24\t1020.1\t1021.5\t\t5\t-1\t5.7\t65\t2.3\t45\t\t\t\t\t快晴\t0\t30\n"
    );
}

#[test]
fn page_without_table_is_an_error() {
    let err = parse_page(StationKind::Amedas, "<html><body>no data</body></html>").unwrap_err();
    assert!(err.to_string().contains("tablefix1"));
}

#[test]
fn collect_from_saved_page_and_write_file() {
    let dir = tmp_dir("collect");
    let page = dir.join("page.html");
    fs::write(&page, AMEDAS_PAGE).unwrap();

    let mut opts = AppOptions::default();
    opts.scrape = ScrapeOptions {
        query: Some(StationQuery::new("54", "0529", day())),
        input: Some(page),
    };
    opts.export.format = ExportFormat::Csv;
    opts.export.include_headers = true;
    opts.export.out_path = Some(dir.join("nested").join("day.csv"));

    let records = collect(&opts.scrape).unwrap();
    let written = write_export(&opts.export, &records).unwrap().unwrap();

    let text = fs::read_to_string(written).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("hour,station_pressure_hpa,"));
    assert!(lines[1].starts_with("1,,,0,3.4,"));
}

#[test]
fn collect_uses_layout_of_the_station() {
    // A full-station block number reads the amedas page with the 17-column
    // layout, which is too wide for its rows.
    let dir = tmp_dir("mismatch");
    let page = dir.join("page.html");
    fs::write(&page, AMEDAS_PAGE).unwrap();

    let scrape = ScrapeOptions {
        query: Some(StationQuery::new("46", "47670", day())),
        input: Some(page),
    };
    assert!(matches!(collect(&scrape), Err(ScrapeError::Extract(_))));
}

#[test]
fn collect_requires_a_station() {
    assert!(matches!(collect(&ScrapeOptions::default()), Err(ScrapeError::NoStation)));
}

#[test]
fn missing_input_file() {
    let scrape = ScrapeOptions {
        query: Some(StationQuery::new("54", "0529", day())),
        input: Some(PathBuf::from("/nonexistent/jma/page.html")),
    };
    assert!(matches!(collect(&scrape), Err(ScrapeError::ReadInput(..))));
}
