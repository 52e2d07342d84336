// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Structural problems in a loaded table. Cell-level parse failures are
/// never errors; they become absent values.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Table '#{0}' not found in page")]
    TableNotFound(&'static str),

    #[error("Row {row} has {found} cells; column {column} is required")]
    MissingCell { row: usize, column: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("No station selected")]
    NoStation,

    #[error("Invalid station block number '{0}'")]
    InvalidBlock(String),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus { url: String, status: reqwest::StatusCode },

    #[error("Failed to read page file '{0}'")]
    ReadInput(PathBuf, #[source] std::io::Error),

    #[error("Failed to write export '{0}'")]
    WriteOutput(PathBuf, #[source] std::io::Error),

    #[error("Failed to write export to stdout")]
    WriteStdout(#[source] std::io::Error),

    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to extract observation table")]
    Extract(#[from] ExtractError),
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Missing value for {0}")]
    MissingValue(&'static str),

    #[error("Missing required argument {0}")]
    MissingArg(&'static str),

    #[error("Unknown arg: {0}")]
    UnknownArg(String),

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String, #[source] chrono::ParseError),

    #[error("Failed to set up logging")]
    Logger(#[source] std::io::Error),

    #[error(transparent)]
    Scrape(#[from] ScrapeError),
}
