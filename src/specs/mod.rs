// src/specs/mod.rs
//! # Page specs
//!
//! One module per observation page layout. Each spec knows *where the data
//! lives* (URL, table id) and *how its columns map onto [`Record`]*.
//!
//! ## Layouts
//! - [`kansokujo`]: full observation stations, `hourly_s1.php`, 17 columns that
//!   line up one-to-one with the record.
//! - [`amedas`]: automated stations, `hourly_a1.php`, 8 columns remapped onto
//!   sparser record positions; the rest stay absent.
//!
//! ## Shape
//! A layout is plain data: a list of [`ColumnSpec`] triples
//! `(source column, record field, cell kind)`. [`extract`] walks the table rows,
//! skips the two header rows, and projects every other row through the list
//! with [`project_row`]. Both layouts share that routine.
//!
//! ## Errors
//! Unparsable cells become absent values. A row that is too short for its
//! layout fails the whole pass with [`ExtractError::MissingCell`]; no partial
//! record list is returned.
//!
//! ```text
//! scrape::collect → StationQuery::kind() → specs::<layout>::fetch/parse_doc
//!                                          ↘ Table::from_doc → specs::extract
//! ```
pub mod amedas;
pub mod kansokujo;

use std::fmt;

use crate::config::consts::{HEADER_ROWS, KANSOKUJO_MIN_BLOCK};
use crate::core::coerce::{coerce_bearing, coerce_float, coerce_int, coerce_text};
use crate::core::table::{Cell, Row};
use crate::error::{ExtractError, ScrapeError};
use crate::record::{Field, Record, Value, ValueType};

/// How a source cell becomes a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Int,
    Float,
    Bearing,
    /// `alt` text of the weather icon.
    WeatherIcon,
    /// Trimmed visible text (cloud cover).
    Text,
}

impl CellKind {
    pub fn coerce(self, cell: &Cell) -> Option<Value> {
        match self {
            CellKind::Int => coerce_int(&cell.text).map(Value::Int),
            CellKind::Float => coerce_float(&cell.text).map(Value::Float),
            CellKind::Bearing => coerce_bearing(&cell.text).map(Value::Float),
            CellKind::WeatherIcon => cell
                .image_alt
                .as_deref()
                .and_then(coerce_text)
                .map(Value::Text),
            CellKind::Text => coerce_text(&cell.text).map(Value::Text),
        }
    }

    /// Type of the value produced, if any.
    pub fn value_type(self) -> ValueType {
        match self {
            CellKind::Int => ValueType::Int,
            CellKind::Float | CellKind::Bearing => ValueType::Float,
            CellKind::WeatherIcon | CellKind::Text => ValueType::Text,
        }
    }
}

/// Source column `source` feeds record `field` through `kind`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub source: usize,
    pub field: Field,
    pub kind: CellKind,
}

impl ColumnSpec {
    pub const fn new(source: usize, field: Field, kind: CellKind) -> Self {
        Self { source, field, kind }
    }
}

/// Which page layout a station publishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StationKind {
    /// Full observation station (気象台・測候所).
    Kansokujo,
    /// Automated station (AMeDAS).
    Amedas,
}

impl StationKind {
    /// Block numbers of 10000 and up are full stations. Leading zeros are
    /// allowed ("0529" is block 529).
    pub fn from_block_no(block_no: &str) -> Result<Self, ScrapeError> {
        let n: u32 = block_no
            .trim()
            .parse()
            .map_err(|_| ScrapeError::InvalidBlock(s!(block_no)))?;
        Ok(if n >= KANSOKUJO_MIN_BLOCK { StationKind::Kansokujo } else { StationKind::Amedas })
    }

    pub fn columns(self) -> &'static [ColumnSpec] {
        match self {
            StationKind::Kansokujo => &kansokujo::COLUMNS,
            StationKind::Amedas => &amedas::COLUMNS,
        }
    }
}

impl fmt::Display for StationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StationKind::Kansokujo => "kansokujo",
            StationKind::Amedas => "amedas",
        })
    }
}

/// Project one table row onto a fresh record. `row_index` is only for errors.
pub fn project_row(row_index: usize, row: &Row, columns: &[ColumnSpec]) -> Result<Record, ExtractError> {
    let mut record = Record::empty();
    for col in columns {
        let cell = row.cells.get(col.source).ok_or(ExtractError::MissingCell {
            row: row_index,
            column: col.source,
            found: row.cells.len(),
        })?;
        record.set(col.field, col.kind.coerce(cell));
    }
    Ok(record)
}

/// Skip the header rows, then project every remaining row.
pub fn extract(rows: &[Row], columns: &[ColumnSpec]) -> Result<Vec<Record>, ExtractError> {
    rows.iter()
        .enumerate()
        .skip(HEADER_ROWS)
        .map(|(i, row)| project_row(i, row, columns))
        .collect()
}
