// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_records;
use crate::error::ScrapeError;
use crate::record::Record;

/// Write the export to `export.out_path`, or to stdout when unset.
/// Returns the path written to, if any.
pub fn write_export(
    export: &ExportOptions,
    records: &[Record],
) -> Result<Option<PathBuf>, ScrapeError> {
    let sep = export.format.delim();

    let Some(path) = &export.out_path else {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        write_records(&mut out, records, export.include_headers, sep)
            .and_then(|_| out.flush())
            .map_err(ScrapeError::WriteStdout)?;
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let write_err = |e: io::Error| ScrapeError::WriteOutput(path.clone(), e);
    let file = File::create(path).map_err(write_err)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_records(&mut out, records, export.include_headers, sep)
        .and_then(|_| out.flush())
        .map_err(write_err)?;

    log::info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(Some(path.clone()))
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ScrapeError::WriteOutput(dir.to_path_buf(), e))?;
    }
    Ok(())
}
