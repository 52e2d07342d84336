// src/scrape/mod.rs
mod scrape;

pub use scrape::collect;
pub use scrape::parse_page;
