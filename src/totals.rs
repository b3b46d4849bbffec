//! Phase-total aggregation for the chart subtitle.
//!
//! Reads the table's trailing stated-total column per phase, independent
//! of the edge graph; the two outputs only meet again at presentation
//! time. The stated totals are shown verbatim here even when they
//! disagree with the computed project sums.

use serde::Serialize;

use crate::flow::format_amount;
use crate::phase::Phase;
use crate::table::{BudgetTable, TableSchema};

/// One subtitle entry: the phase's alias, its time text, and the stated
/// total for that row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseTotal {
    pub alias: String,
    pub time: String,
    pub total: f64,
}

/// Collects the stated totals in phase order, skipping phases whose total
/// cell is null or non-numeric.
pub fn phase_totals(table: &BudgetTable, schema: &TableSchema, phases: &[Phase]) -> Vec<PhaseTotal> {
    phases
        .iter()
        .filter_map(|phase| {
            let total = table.cell(phase.row, schema.total_col).as_number()?;
            Some(PhaseTotal {
                alias: phase.alias.clone(),
                time: phase.time.clone(),
                total,
            })
        })
        .collect()
}

/// Renders the subtitle line: `别名：时间 合计：{total}` entries joined
/// with `" | "`. Empty input renders empty.
pub fn format_subtitle(totals: &[PhaseTotal]) -> String {
    totals
        .iter()
        .map(|t| format!("{}：{} 合计：{}", t.alias, t.time, format_amount(t.total)))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Font size tier for the rendered subtitle, by character count.
pub fn subtitle_font_size(totals: &[PhaseTotal]) -> u32 {
    if totals.is_empty() {
        return 12;
    }
    match format_subtitle(totals).chars().count() {
        0..=50 => 14,
        51..=100 => 12,
        101..=150 => 10,
        _ => 9,
    }
}

/// Chart title for a budget named `name`, or the bare fallback.
pub fn chart_title(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{}-桑基图", name),
        None => "桑基图".to_string(),
    }
}
