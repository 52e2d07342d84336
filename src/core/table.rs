// src/core/table.rs
// Rows and cells of one observation table, as a browser would expose them.

use super::html::{attr_value, inner_after_open_tag, next_tag_block_ci, opener, table_by_id, to_lower};
use super::vischars::visible_text;
use crate::error::ExtractError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    /// Rendered text, whitespace-normalized.
    pub text: String,
    /// `alt` of the first `<img>` inside the cell, if any.
    pub image_alt: Option<String>,
}

impl Cell {
    pub fn text(text: &str) -> Self {
        Self { text: s!(text), image_alt: None }
    }

    pub fn image(alt: &str) -> Self {
        Self { text: s!(), image_alt: Some(s!(alt)) }
    }

    fn from_block(td: &str) -> Self {
        let inner = inner_after_open_tag(td);
        let image_alt = to_lower(inner)
            .find("<img")
            .and_then(|s| {
                let e = inner[s..].find('>')? + s + 1;
                attr_value(&inner[s..e], "alt")
            })
            .map(visible_text);
        Self { text: visible_text(inner), image_alt }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self { Self { cells } }

    /// Shorthand for rows made of plain text cells.
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        Self { cells: texts.iter().map(|t| Cell::text(t.as_ref())).collect() }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    /// Locate `<table id="...">` and read every `<tr>` and its `<td>` cells.
    /// `<th>` cells are not collected; header rows end up with few or no cells.
    pub fn from_doc(doc: &str, table_id: &'static str) -> Result<Self, ExtractError> {
        let table = table_by_id(doc, table_id).ok_or(ExtractError::TableNotFound(table_id))?;
        let body = inner_after_open_tag(table);

        let mut rows = Vec::new();
        let mut pos = 0usize;
        while let Some((tr_s, tr_e)) = next_tag_block_ci(body, "<tr", "</tr>", pos) {
            let tr = &body[tr_s..tr_e];
            pos = tr_e;

            let mut cells = Vec::new();
            let mut td_pos = opener(tr).len();
            while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
                cells.push(Cell::from_block(&tr[td_s..td_e]));
                td_pos = td_e;
            }
            rows.push(Row::new(cells));
        }
        log::debug!("Table #{table_id}: {} rows", rows.len());
        Ok(Self { rows })
    }
}
