//! The cleaning pipeline: four in-place table transforms applied in a fixed
//! order, bracketed by the loader and the writer.
//!
//! 1. [`normalize_columns`] — canonical column labels.
//! 2. [`drop_missing`] — remove records lacking `price` or `qty`.
//! 3. [`coerce_and_filter`] — numeric coercion (null on failure), then drop
//!    null or negative `price`/`qty`.
//! 4. [`trim_text_fields`] — strip whitespace on `product`/`category`.
//!
//! Stages 2 and 3 stay separate on purpose: the first drops only
//! originally-absent values, the second additionally drops values that fail
//! numeric parsing. Do not collapse them.

use anyhow::{Context, Result};
use log::{debug, info};

use crate::{
    cli::Cli,
    data::{self, Value},
    io_utils, load, render,
    table::Table,
    write,
};

pub const PRICE_COLUMN: &str = "price";
pub const QTY_COLUMN: &str = "qty";
pub const TEXT_COLUMNS: &[&str] = &["product", "category"];

pub fn execute(args: &Cli) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    info!(
        "Cleaning '{}' -> '{}' (delimiter '{}')",
        args.input.display(),
        args.output.display(),
        crate::printable_delimiter(delimiter)
    );

    let mut table = load::load_table(&args.input, delimiter, encoding)
        .with_context(|| format!("Loading raw sales data from {:?}", args.input))?;
    let raw_rows = table.row_count();

    clean_table(&mut table)?;

    let output_delimiter = io_utils::resolve_output_delimiter(&args.output, delimiter);
    write::write_table(&table, &args.output, output_delimiter)
        .with_context(|| format!("Writing cleaned sales data to {:?}", args.output))?;

    println!("Cleaning complete. First few rows:");
    render::print_table(table.columns(), &table.head(args.rows));
    info!(
        "Kept {} of {} row(s) -> {:?}",
        table.row_count(),
        raw_rows,
        args.output
    );
    Ok(())
}

/// Runs the four transform stages over a loaded table, in order.
pub fn clean_table(table: &mut Table) -> Result<()> {
    normalize_columns(table);
    drop_missing(table)?;
    coerce_and_filter(table)?;
    trim_text_fields(table);
    Ok(())
}

/// Canonicalizes every column label. Pure and total; column order preserved.
pub fn normalize_columns(table: &mut Table) {
    table.rename_columns(data::normalize_column_name);
}

/// Keeps only records where both `price` and `qty` are present. Fails when
/// either column is absent from the table.
pub fn drop_missing(table: &mut Table) -> Result<()> {
    let price = table.column_index(PRICE_COLUMN)?;
    let qty = table.column_index(QTY_COLUMN)?;
    let before = table.row_count();
    table.retain_rows(|row| cell(row, price).is_some() && cell(row, qty).is_some());
    debug!(
        "Missing-value filter dropped {} row(s)",
        before - table.row_count()
    );
    Ok(())
}

/// Coerces `price` and `qty` to numbers (unparsable values become missing),
/// then keeps only records where both are present and non-negative.
pub fn coerce_and_filter(table: &mut Table) -> Result<()> {
    let price = table.column_index(PRICE_COLUMN)?;
    let qty = table.column_index(QTY_COLUMN)?;

    for row in table.rows_mut() {
        for idx in [price, qty] {
            if let Some(slot) = row.get_mut(idx) {
                *slot = slot.take().and_then(|value| data::coerce_numeric(&value));
            }
        }
    }

    let before = table.row_count();
    table.retain_rows(|row| in_range(row, price) && in_range(row, qty));
    debug!(
        "Coercion and range filter dropped {} row(s)",
        before - table.row_count()
    );
    Ok(())
}

/// Strips leading/trailing whitespace from `product` and `category` values.
/// Columns that are absent are skipped; missing cells stay missing.
pub fn trim_text_fields(table: &mut Table) {
    for name in TEXT_COLUMNS {
        let Some(idx) = table.position(name) else {
            continue;
        };
        for row in table.rows_mut() {
            if let Some(slot) = row.get_mut(idx)
                && let Some(value) = slot.take()
            {
                *slot = Some(Value::String(value.as_display().trim().to_string()));
            }
        }
    }
}

fn cell(row: &[Option<Value>], idx: usize) -> Option<&Value> {
    row.get(idx).and_then(|slot| slot.as_ref())
}

fn in_range(row: &[Option<Value>], idx: usize) -> bool {
    cell(row, idx)
        .and_then(Value::as_f64)
        .is_some_and(|value| value >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CleanError;

    fn string_cell(value: &str) -> Option<Value> {
        Some(Value::String(value.to_string()))
    }

    fn raw_sales_table() -> Table {
        Table::new(
            vec![
                " Price ".to_string(),
                "Qty".to_string(),
                "Product".to_string(),
            ],
            vec![
                vec![string_cell("10"), Some(Value::Integer(2)), string_cell(" Widget ")],
                vec![string_cell("-5"), Some(Value::Integer(3)), string_cell("Gadget")],
                vec![None, Some(Value::Integer(1)), string_cell("Thing")],
            ],
        )
    }

    #[test]
    fn normalize_columns_rewrites_labels_in_order() {
        let mut table = Table::new(
            vec![
                "Product Name".to_string(),
                "Unit-Price".to_string(),
                " Qty ".to_string(),
            ],
            Vec::new(),
        );
        normalize_columns(&mut table);
        assert_eq!(table.columns(), ["product_name", "unit_price", "qty"]);
    }

    #[test]
    fn drop_missing_removes_only_absent_values() {
        let mut table = raw_sales_table();
        normalize_columns(&mut table);
        drop_missing(&mut table).unwrap();
        // Row 3 has no price; rows with unparsable text survive this stage.
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn drop_missing_requires_price_and_qty_columns() {
        let mut table = Table::new(
            vec!["product".to_string(), "qty".to_string()],
            vec![vec![string_cell("Widget"), Some(Value::Integer(1))]],
        );
        let err = drop_missing(&mut table).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CleanError>(),
            Some(CleanError::Schema(_))
        ));
    }

    #[test]
    fn coerce_and_filter_drops_unparsable_and_negative_values() {
        let mut table = Table::new(
            vec!["price".to_string(), "qty".to_string()],
            vec![
                vec![string_cell("10"), string_cell("2")],
                vec![string_cell("abc"), string_cell("1")],
                vec![string_cell("-5"), string_cell("3")],
                vec![string_cell("4.5"), string_cell("0")],
            ],
        );
        coerce_and_filter(&mut table).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0][0], Some(Value::Integer(10)));
        assert_eq!(table.rows()[1][0], Some(Value::Float(4.5)));
        // qty = 0 is valid, not missing.
        assert_eq!(table.rows()[1][1], Some(Value::Integer(0)));
    }

    #[test]
    fn zero_price_and_qty_are_retained() {
        let mut table = Table::new(
            vec!["price".to_string(), "qty".to_string()],
            vec![vec![Some(Value::Integer(0)), Some(Value::Integer(0))]],
        );
        coerce_and_filter(&mut table).unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn trim_text_fields_strips_present_columns_and_skips_absent_ones() {
        let mut table = Table::new(
            vec!["price".to_string(), "qty".to_string(), "product".to_string()],
            vec![vec![
                Some(Value::Integer(10)),
                Some(Value::Integer(2)),
                string_cell("  Widget  "),
            ]],
        );
        trim_text_fields(&mut table);
        assert_eq!(table.rows()[0][2], string_cell("Widget"));

        // No product/category at all: nothing to do, nothing to fail.
        let mut bare = Table::new(
            vec!["price".to_string(), "qty".to_string()],
            vec![vec![Some(Value::Integer(1)), Some(Value::Integer(1))]],
        );
        trim_text_fields(&mut bare);
        assert_eq!(bare.row_count(), 1);
    }

    #[test]
    fn trim_text_fields_leaves_missing_cells_missing() {
        let mut table = Table::new(
            vec!["price".to_string(), "qty".to_string(), "category".to_string()],
            vec![vec![Some(Value::Integer(1)), Some(Value::Integer(1)), None]],
        );
        trim_text_fields(&mut table);
        assert_eq!(table.rows()[0][2], None);
    }

    #[test]
    fn clean_table_matches_the_reference_example() {
        let mut table = raw_sales_table();
        clean_table(&mut table).unwrap();

        assert_eq!(table.columns(), ["price", "qty", "product"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows()[0][0], Some(Value::Integer(10)));
        assert_eq!(table.rows()[0][1], Some(Value::Integer(2)));
        assert_eq!(table.rows()[0][2], string_cell("Widget"));
    }

    #[test]
    fn clean_table_is_idempotent() {
        let mut table = raw_sales_table();
        clean_table(&mut table).unwrap();
        let cleaned = table.clone();
        clean_table(&mut table).unwrap();
        assert_eq!(table, cleaned);
    }
}
