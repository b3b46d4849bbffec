//! The column pairer: partitions a table's interior columns into
//! (amount, description) pairs and isolates the trailing total column.

use crate::diagnostics::Diagnostic;
use crate::error::TransformError;

use super::schema::{BudgetTable, ColumnRef, TableSchema};

/// Derives the [`TableSchema`] for a budget table.
///
/// Interior columns (everything between the phase column and the trailing
/// total column) pair up as (amount, description) starting at column 1. A
/// dangling amount column with no description partner still becomes a
/// project; it is reported as a diagnostic and its descriptions read empty.
///
/// Fails with a structural error when the table cannot hold even one
/// project pair plus a total column.
pub fn pair_columns(
    table: &BudgetTable,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<TableSchema, TransformError> {
    let n = table.column_count();
    if n < 3 {
        return Err(TransformError::TooFewColumns { column_count: n });
    }

    let phase_col = ColumnRef(0);
    let total_col = ColumnRef(n - 1);

    let mut pairs = Vec::new();
    let mut col = 1;
    while col < n - 1 {
        let amount = ColumnRef(col);
        let description = if col + 1 < n - 1 {
            Some(ColumnRef(col + 1))
        } else {
            diagnostics.push(Diagnostic::UnpairedColumn {
                column: col,
                header: table.header(amount).to_string(),
            });
            None
        };
        pairs.push((amount, description));
        col += 2;
    }

    Ok(TableSchema {
        phase_col,
        pairs,
        total_col,
    })
}
