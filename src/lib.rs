//! Budget-to-flow-graph transformation engine.
//!
//! Takes an in-memory budget table (one row per review meeting, paired
//! project/description columns, trailing total column) and derives a
//! directed flow graph for a Sankey-style chart: how each project's
//! allocation carries over between consecutive meetings, with synthetic
//! resource-pool nodes absorbing the surplus or supplying the deficit at
//! every transition. A phase-total summary for the chart subtitle is
//! produced alongside, independent of the graph.
//!
//! The transform is a pure function of its input table: no I/O, no shared
//! state, safe to invoke concurrently on different tables.

pub mod diagnostics;
pub mod error;
pub mod flow;
pub mod graph;
pub mod naming;
pub mod phase;
pub mod table;
pub mod totals;

pub use diagnostics::Diagnostic;
pub use error::TransformError;
pub use graph::{SankeyGraph, SankeyLink, SankeyNode};
pub use table::{BudgetTable, Cell, ColumnRef, TableSchema};
pub use totals::PhaseTotal;

use flow::FlowBuilder;
use naming::NodeNames;

/// Everything one transform call yields: the chart graph, the subtitle
/// totals, and any advisory findings gathered along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutput {
    pub graph: SankeyGraph,
    pub phase_totals: Vec<PhaseTotal>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs the whole pipeline: column pairing, phase aliasing, flow and
/// resource-pool derivation, node enrichment, graph assembly, and the
/// phase-total aggregation.
///
/// Structural problems (too few columns, an empty phase column) and the
/// all-zero "nothing to chart" case are errors; everything else degrades
/// gracefully and is reported through [`TransformOutput::diagnostics`].
pub fn transform(table: &BudgetTable) -> Result<TransformOutput, TransformError> {
    let mut diagnostics = Vec::new();

    let schema = table::pair_columns(table, &mut diagnostics)?;
    let phases = phase::extract_phases(table, &schema, &mut diagnostics)?;

    let edges = FlowBuilder::new(table, &schema, &phases).build(&mut diagnostics);
    if edges.is_empty() {
        return Err(TransformError::NoData);
    }

    let names = NodeNames::derive(table, &schema, &phases, &edges);
    let graph = graph::assemble(&edges, &names);
    let phase_totals = totals::phase_totals(table, &schema, &phases);

    Ok(TransformOutput {
        graph,
        phase_totals,
        diagnostics,
    })
}
