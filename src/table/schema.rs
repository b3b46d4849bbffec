//! The budget table abstraction and its derived column schema.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// A stable, zero-based reference to a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef(pub usize);

impl ColumnRef {
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable, row-ordered budget table: one row per review meeting.
///
/// Column 0 carries the phase label, the interior columns alternate
/// (project amount, project description) pairs, and the last column holds
/// the stated total for the row. Rows may be ragged; cells past the end of
/// a row read as null.
#[derive(Debug, Clone, Default)]
pub struct BudgetTable {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl BudgetTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header(&self, col: ColumnRef) -> &str {
        &self.headers[col.index()]
    }

    /// Cell access that never panics: out-of-range reads are null.
    pub fn cell(&self, row: usize, col: ColumnRef) -> &Cell {
        static NULL: Cell = Cell::Null;
        self.rows
            .get(row)
            .and_then(|r| r.get(col.index()))
            .unwrap_or(&NULL)
    }
}

/// The column layout derived once by the pairer and passed to every
/// downstream stage, so column semantics are never re-derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    /// Column 0: the phase (meeting) label.
    pub phase_col: ColumnRef,
    /// Interior (amount, description) pairs; a dangling amount column has
    /// no description partner.
    pub pairs: Vec<(ColumnRef, Option<ColumnRef>)>,
    /// The trailing stated-total column.
    pub total_col: ColumnRef,
}

impl TableSchema {
    /// Project name for a pair, which is the amount column's header text.
    pub fn project_name<'t>(&self, table: &'t BudgetTable, pair: usize) -> &'t str {
        table.header(self.pairs[pair].0)
    }
}
