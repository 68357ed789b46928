//! Serializes a cleaned [`Table`] back to a delimited file.
//!
//! Header row first in the table's current column order, then one record per
//! row with missing cells rendered as empty fields. The destination directory
//! must already exist.

use std::path::Path;

use anyhow::Result;
use log::debug;

use crate::{data::Value, error::CleanError, io_utils, table::Table};

pub fn write_table(table: &Table, path: &Path, delimiter: u8) -> Result<()> {
    let mut writer = io_utils::open_csv_writer(path, delimiter)?;

    writer
        .write_record(table.columns())
        .map_err(|err| classify_write_error(path, err))?;

    for row in table.rows() {
        let rendered = row
            .iter()
            .map(|cell| cell.as_ref().map(Value::as_display).unwrap_or_default())
            .collect::<Vec<_>>();
        writer
            .write_record(&rendered)
            .map_err(|err| classify_write_error(path, err))?;
    }
    writer
        .flush()
        .map_err(|err| CleanError::Io(format!("flushing output file {path:?}: {err}")))?;

    debug!("Wrote {} row(s) to {:?}", table.row_count(), path);
    Ok(())
}

fn classify_write_error(path: &Path, err: csv::Error) -> anyhow::Error {
    CleanError::Io(format!("writing to {path:?}: {err}")).into()
}
