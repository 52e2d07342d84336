// src/config/consts.rs

// Net config
pub const HOST: &str = "https://www.data.jma.go.jp";
pub const PREFIX: &str = "/obd/stats/etrn/view/";
pub const USER_AGENT: &str = concat!("jma_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;

// Pages
pub const KANSOKUJO_PAGE: &str = "hourly_s1.php";
pub const AMEDAS_PAGE: &str = "hourly_a1.php";
pub const KANSOKUJO_MIN_BLOCK: u32 = 10_000;

// Table
pub const TABLE_ID: &str = "tablefix1";
pub const HEADER_ROWS: usize = 2;

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
