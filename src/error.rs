//! Fatal error taxonomy for the transform.
//!
//! Only structural problems (the table cannot be interpreted as a budget at
//! all) and the empty-result condition abort the transform. Everything
//! recoverable degrades gracefully and surfaces through
//! [`crate::diagnostics::Diagnostic`] instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The table cannot hold a phase column, at least one project amount
    /// column, and a trailing total column.
    #[error("budget table has {column_count} column(s); need at least 3 (phase, project amount, total)")]
    TooFewColumns { column_count: usize },

    /// The first column carries no phase labels, so there are zero phases.
    #[error("phase column '{header}' is entirely empty; no meetings to chart")]
    NoPhases { header: String },

    /// Every project amount was null or zero at every phase: the table is
    /// readable but yields no positive flow. Distinct from a structural
    /// error so callers can word the two differently.
    #[error("no positive budget flow in the table; nothing to chart")]
    NoData,
}
