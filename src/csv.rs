// src/csv.rs
// Delimited output for records. Values are numbers or short labels, so no
// quoting or escaping is applied.
use std::io::{self, Write};

use crate::record::{header_cells, Record};

/// Write one row of cells joined by `sep`, newline terminated.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        write!(w, "{}", cell)?;
    }
    writeln!(w)
}

/// One record per line, absent values empty.
pub fn write_record<W: Write>(w: W, record: &Record, sep: char) -> io::Result<()> {
    write_row(w, &record.to_cells(), sep)
}

pub fn write_records<W: Write>(
    mut w: W,
    records: &[Record],
    include_headers: bool,
    sep: char,
) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &header_cells(), sep)?;
    }
    for r in records {
        write_record(&mut w, r, sep)?;
    }
    Ok(())
}

/// Whole export as a string (same bytes `write_records` would emit).
pub fn to_export_string(records: &[Record], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_records(&mut buf, records, include_headers, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Field, Value};

    #[test]
    fn absent_renders_empty() {
        let mut r = Record::empty();
        r.set(Field::Hour, Some(Value::Int(1)));
        r.set(Field::Visibility, Some(Value::Float(20.0)));
        let s = to_export_string(&[r], false, ',');
        assert_eq!(s, "1,,,,,,,,,,,,,,,,20\n");
    }

    #[test]
    fn headers_only_on_request() {
        let r = Record::empty();
        let without = to_export_string(std::slice::from_ref(&r), false, '\t');
        assert_eq!(without.lines().count(), 1);
        assert_eq!(without.matches('\t').count(), 16);

        let with = to_export_string(&[r], true, '\t');
        let first = with.lines().next().unwrap();
        assert!(first.starts_with("hour\tstation_pressure_hpa\t"));
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(to_export_string(&[], false, ','), "");
    }
}
