//! The non-fatal warning channel.
//!
//! Advisory findings are collected into an ordered list and returned with
//! the result, so callers and tests can assert on them directly instead of
//! string-matching log output. A diagnostic never alters the numeric
//! output of the transform.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The computed per-phase sum of project amounts disagrees with the
    /// table's own total column beyond the accounting tolerance. The
    /// computed sum stays authoritative for derived figures; the stated
    /// total is still shown verbatim in the subtitle.
    TotalMismatch {
        phase_index: usize,
        alias: String,
        computed: f64,
        stated: f64,
    },

    /// An interior amount column had no description partner; its project
    /// proceeds with empty descriptions.
    UnpairedColumn { column: usize, header: String },

    /// A phase fell outside the six-entry alias tier and uses the generated
    /// `第{n}次` alias and `({n})` display symbol.
    AliasTierOverflow { phase_index: usize, alias: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::TotalMismatch {
                phase_index,
                alias,
                computed,
                stated,
            } => write!(
                f,
                "phase {} ({}): computed project sum {} disagrees with stated total {}",
                phase_index, alias, computed, stated
            ),
            Diagnostic::UnpairedColumn { column, header } => write!(
                f,
                "amount column {} ('{}') has no description partner",
                column, header
            ),
            Diagnostic::AliasTierOverflow { phase_index, alias } => write!(
                f,
                "phase {} is beyond the alias table; using generated alias '{}'",
                phase_index, alias
            ),
        }
    }
}
