//! The input side of the engine: typed cells, the budget table, and the
//! column schema the pairer derives from it.
pub mod cell;
pub mod pairing;
pub mod schema;

pub use cell::Cell;
pub use pairing::pair_columns;
pub use schema::{BudgetTable, ColumnRef, TableSchema};
