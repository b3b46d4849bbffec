//! Typed cell values for the in-memory budget table.
//!
//! The engine does no file I/O; the caller loads whatever storage format it
//! uses and hands over cells as numeric-or-null / string-or-null values.

/// The atomic unit of table data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    Number(f64),
    Text(String),
    #[default]
    Null,
}

impl Cell {
    /// Numeric view of the cell.
    ///
    /// Text that parses as a float is accepted, mirroring how loosely typed
    /// spreadsheet columns arrive in practice. Anything else is `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(s) => s.trim().parse::<f64>().ok(),
            Cell::Null => None,
        }
    }

    /// Textual view of the cell. Numbers are stringified the way a label
    /// column would show them; `Null` stays absent.
    pub fn as_label(&self) -> Option<String> {
        match self {
            Cell::Number(v) => Some(format_number_label(*v)),
            Cell::Text(s) => Some(s.clone()),
            Cell::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

// Integral floats render without a trailing ".0" so a numeric phase label
// reads like the header it came from.
fn format_number_label(v: f64) -> String {
    if v.fract() == 0.0 && v.is_finite() {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
