// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod logger;
pub mod query;
pub mod record;
pub mod scrape;
pub mod specs;

pub use error::{CliError, ExtractError, ScrapeError};
pub use query::StationQuery;
pub use record::{Field, Record, Value};
pub use specs::StationKind;
