// src/cli.rs
use std::{env, path::PathBuf};

use chrono::NaiveDate;
use log::LevelFilter;

use crate::config::consts::LOG_FILE;
use crate::config::options::{AppOptions, ExportFormat};
use crate::error::CliError;
use crate::query::StationQuery;

/// Parsed command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub options: AppOptions,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub help: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            log_level: LevelFilter::Warn,
            log_file: PathBuf::from(LOG_FILE),
            help: false,
        }
    }
}

pub fn run() -> Result<(), CliError> {
    let params = parse_args(env::args().skip(1))?;
    if params.help {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }
    crate::logger::init(&params.log_file, params.log_level).map_err(CliError::Logger)?;
    run_with(&params.options)
}

/// Scrape and export according to `options`.
pub fn run_with(options: &AppOptions) -> Result<(), CliError> {
    let records = crate::scrape::collect(&options.scrape)?;
    if let Some(path) = crate::file::write_export(&options.export, &records)? {
        eprintln!("Wrote {} rows to {}", records.len(), path.display());
    }
    Ok(())
}

pub fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> Result<Params, CliError> {
    let mut params = Params::default();
    let mut prec: Option<String> = None;
    let mut block: Option<String> = None;
    let mut date: Option<NaiveDate> = None;

    let mut args = argv.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--prec" => prec = Some(args.next().ok_or(CliError::MissingValue("--prec"))?),
            "--block" => block = Some(args.next().ok_or(CliError::MissingValue("--block"))?),
            "--date" => {
                let v = args.next().ok_or(CliError::MissingValue("--date"))?;
                date = Some(parse_date(&v)?);}
            "-i" | "--input" => {
                let v = args.next().ok_or(CliError::MissingValue("--input"))?;
                params.options.scrape.input = Some(PathBuf::from(v));}
            "-o" | "--out" => {
                let v = args.next().ok_or(CliError::MissingValue("--out"))?;
                params.options.export.out_path = Some(PathBuf::from(v));}
            "--format" => {
                let v = args.next().ok_or(CliError::MissingValue("--format"))?;
                params.options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    _ => return Err(CliError::UnknownFormat(v)),
                };}
            "--include-headers" => params.options.export.include_headers = true,
            "--log-level" => {
                let v = args.next().ok_or(CliError::MissingValue("--log-level"))?;
                params.log_level = v.parse().map_err(|_| CliError::UnknownLevel(v))?;}
            "--log-file" => {
                let v = args.next().ok_or(CliError::MissingValue("--log-file"))?;
                params.log_file = PathBuf::from(v);}
            "-h" | "--help" => {
                params.help = true;
                return Ok(params);}
            _ => return Err(CliError::UnknownArg(a)),
        }
    }

    let prec = prec.ok_or(CliError::MissingArg("--prec"))?;
    let block = block.ok_or(CliError::MissingArg("--block"))?;
    let date = date.ok_or(CliError::MissingArg("--date"))?;
    let query = StationQuery::new(&prec, &block, date);
    // Reject a bad block before any I/O happens.
    query.kind()?;
    params.options.scrape.query = Some(query);

    Ok(params)
}

fn parse_date(s: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| CliError::InvalidDate(s!(s), e))
}
