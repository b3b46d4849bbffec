//! The flow and resource-pool builder.
//!
//! Walks every project across consecutive phase pairs and emits the raw
//! edge list: a main-flow edge carrying the portion of the amount that
//! survives the transition, plus at most one resource-pool edge absorbing
//! the excess or supplying the deficit. Pool nodes are shared across
//! projects for a given transition.

use crate::diagnostics::Diagnostic;
use crate::naming;
use crate::phase::{resource_pool_name, Phase};
use crate::table::{BudgetTable, TableSchema};

use super::amount::{round8, AMOUNT_EPSILON};

/// A raw directed flow between base-keyed nodes, before display-name
/// remapping.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowEdge {
    pub source: String,
    pub target: String,
    pub value: f64,
}

/// Borrows the table plus its derived schema and phases for one pass.
pub struct FlowBuilder<'a> {
    table: &'a BudgetTable,
    schema: &'a TableSchema,
    phases: &'a [Phase],
}

impl<'a> FlowBuilder<'a> {
    pub fn new(table: &'a BudgetTable, schema: &'a TableSchema, phases: &'a [Phase]) -> Self {
        Self {
            table,
            schema,
            phases,
        }
    }

    /// A project's amount at one phase: null reads as 0, everything rounded
    /// at the point of reading.
    pub fn amount_at(&self, pair: usize, phase: &Phase) -> f64 {
        let (amount_col, _) = self.schema.pairs[pair];
        round8(self.table.cell(phase.row, amount_col).as_number().unwrap_or(0.0))
    }

    /// Emits all edges, projects in pair order and transitions in row
    /// order, with each transition's main flow before its pool edge. Also
    /// cross-checks the computed per-phase sums against the table's stated
    /// totals.
    pub fn build(&self, diagnostics: &mut Vec<Diagnostic>) -> Vec<FlowEdge> {
        let mut edges = Vec::new();

        for pair in 0..self.schema.pairs.len() {
            let project = self.schema.project_name(self.table, pair);
            for window in self.phases.windows(2) {
                let (from_phase, to_phase) = (&window[0], &window[1]);
                let transition = from_phase.index;
                let from_value = self.amount_at(pair, from_phase);
                let to_value = self.amount_at(pair, to_phase);

                let main_flow = from_value.min(to_value);
                if main_flow > 0.0 {
                    edges.push(FlowEdge {
                        source: naming::base_key(project, from_phase),
                        target: naming::base_key(project, to_phase),
                        value: main_flow,
                    });
                }

                if from_value > to_value {
                    let excess = round8(from_value - to_value);
                    if excess > 0.0 {
                        edges.push(FlowEdge {
                            source: naming::base_key(project, from_phase),
                            target: resource_pool_name(transition),
                            value: excess,
                        });
                    }
                } else if to_value > from_value {
                    let deficit = round8(to_value - from_value);
                    if deficit > 0.0 {
                        edges.push(FlowEdge {
                            source: resource_pool_name(transition),
                            target: naming::base_key(project, to_phase),
                            value: deficit,
                        });
                    }
                }
            }
        }

        self.check_totals(diagnostics);
        edges
    }

    // The computed sum is authoritative for derived figures; a disagreeing
    // stated total is advisory only.
    fn check_totals(&self, diagnostics: &mut Vec<Diagnostic>) {
        for phase in self.phases {
            let computed: f64 = (0..self.schema.pairs.len())
                .map(|pair| self.amount_at(pair, phase))
                .sum();
            let Some(stated) = self.table.cell(phase.row, self.schema.total_col).as_number()
            else {
                continue;
            };
            if (computed - stated).abs() > AMOUNT_EPSILON {
                diagnostics.push(Diagnostic::TotalMismatch {
                    phase_index: phase.index,
                    alias: phase.alias.clone(),
                    computed,
                    stated,
                });
            }
        }
    }
}
