//! Loads a delimited file into a [`Table`].
//!
//! The header row becomes the column list; every subsequent record becomes a
//! row of best-effort typed cells (empty field → missing, numeric text →
//! number, anything else → text). Read failures are classified: an unreadable
//! file is an I/O error, ragged or undecodable content is a parse error.

use std::path::Path;

use anyhow::Result;
use encoding_rs::Encoding;
use log::debug;

use crate::{data, error::CleanError, io_utils, table::Table};

pub fn load_table(path: &Path, delimiter: u8, encoding: &'static Encoding) -> Result<Table> {
    let mut reader = io_utils::open_csv_reader_from_path(path, delimiter)?;

    let headers = reader
        .byte_headers()
        .map_err(|err| classify_read_error(path, err))?
        .clone();
    let headers = io_utils::decode_record(&headers, encoding)?;

    let mut rows = Vec::new();
    for (idx, record) in reader.byte_records().enumerate() {
        let record = record.map_err(|err| classify_read_error(path, err))?;
        let decoded = io_utils::decode_record(&record, encoding)
            .map_err(|err| err.context(format!("reading row {}", idx + 2)))?;
        rows.push(
            decoded
                .iter()
                .map(|field| data::infer_value(field))
                .collect(),
        );
    }

    debug!(
        "Loaded {} row(s) across {} column(s) from {:?}",
        rows.len(),
        headers.len(),
        path
    );
    Ok(Table::new(headers, rows))
}

fn classify_read_error(path: &Path, err: csv::Error) -> anyhow::Error {
    if err.is_io_error() {
        CleanError::Io(format!("reading {path:?}: {err}")).into()
    } else {
        CleanError::Parse(format!("malformed delimited content in {path:?}: {err}")).into()
    }
}
