//! The in-memory table the pipeline stages operate on.
//!
//! Columns are an ordered list of names; rows are row-major vectors of
//! optional [`Value`] cells (a `None` cell is a missing value). Required
//! columns are resolved through [`Table::column_index`], which fails with the
//! schema error kind instead of silently misbehaving on absent columns.

use anyhow::Result;
use itertools::Itertools;

use crate::{data::Value, error::CleanError};

pub type Row = Vec<Option<Value>>;

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Rewrites every column label in place, preserving order.
    pub fn rename_columns<F>(&mut self, mut rename: F)
    where
        F: FnMut(&str) -> String,
    {
        for column in &mut self.columns {
            *column = rename(column);
        }
    }

    /// Position of a column by name, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Position of a required column; absent columns are a schema error.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.position(name).ok_or_else(|| {
            CleanError::Schema(format!(
                "required column '{}' not found (available: {})",
                name,
                self.columns.iter().join(", ")
            ))
            .into()
        })
    }

    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[Option<Value>]) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }

    /// Rendered string cells for the first `limit` rows, missing cells blank.
    pub fn head(&self, limit: usize) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .take(limit)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_ref().map(Value::as_display).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}
