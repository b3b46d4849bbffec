//! Node identity and enrichment.
//!
//! Every (project, phase) node has three progressively more decorated
//! spellings: the base key the flow builder emits, a full name carrying
//! the formatted amount, and the compact display name shown on the chart.
//! They are modeled as one [`NodeIdentity`] per base key rather than
//! chained string lookups, so a missed lookup can never silently collapse
//! two nodes into one.

use std::collections::{HashMap, HashSet};

use crate::flow::builder::FlowEdge;
use crate::flow::{format_amount, round8};
use crate::phase::{phase_symbol, Phase};
use crate::table::{BudgetTable, TableSchema};

/// Base key for a (project, phase) node. Resource pools never get one;
/// their single name plays all three roles.
pub fn base_key(project: &str, phase: &Phase) -> String {
    format!("{}（{}：{}）", project, phase.alias, phase.time)
}

/// The three spellings of one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIdentity {
    pub base_key: String,
    /// Base key plus the amount suffix; `None` when no amount is known
    /// (resource pools), in which case all three spellings coincide.
    pub full_name: Option<String>,
    pub display_name: String,
}

/// All identities for the nodes referenced by an edge list, plus the
/// description attachment map consumed at presentation time.
#[derive(Debug, Clone, Default)]
pub struct NodeNames {
    identities: HashMap<String, NodeIdentity>,
    descriptions: HashMap<String, String>,
}

impl NodeNames {
    /// Builds identities for every base key appearing as an edge endpoint.
    ///
    /// Amounts and descriptions are looked up from the same table the
    /// edges came from; endpoints without a known amount (the pools) keep
    /// their base key unchanged. Descriptions survive only when non-empty,
    /// keyed by display name for the tooltip layer.
    pub fn derive(
        table: &BudgetTable,
        schema: &TableSchema,
        phases: &[Phase],
        edges: &[FlowEdge],
    ) -> Self {
        let mut referenced: HashSet<&str> = HashSet::new();
        for edge in edges {
            referenced.insert(&edge.source);
            referenced.insert(&edge.target);
        }

        let mut identities = HashMap::new();
        let mut descriptions = HashMap::new();

        for (pair, &(amount_col, description_col)) in schema.pairs.iter().enumerate() {
            let project = schema.project_name(table, pair);
            for phase in phases {
                let base = base_key(project, phase);
                if !referenced.contains(base.as_str()) {
                    continue;
                }
                let amount = round8(table.cell(phase.row, amount_col).as_number().unwrap_or(0.0));
                let amount_str = format_amount(amount);
                let display = format!("{}{}：{}", phase_symbol(phase.index), project, amount_str);

                if let Some(desc_col) = description_col {
                    if let Some(text) = table.cell(phase.row, desc_col).as_label() {
                        if !text.is_empty() {
                            descriptions.insert(display.clone(), text);
                        }
                    }
                }

                identities.insert(
                    base.clone(),
                    NodeIdentity {
                        full_name: Some(format!("{} 金额：{}", base, amount_str)),
                        display_name: display,
                        base_key: base,
                    },
                );
            }
        }

        // Remaining endpoints (resource pools) keep a single spelling.
        for edge in edges {
            for key in [&edge.source, &edge.target] {
                identities.entry(key.clone()).or_insert_with(|| NodeIdentity {
                    base_key: key.clone(),
                    full_name: None,
                    display_name: key.clone(),
                });
            }
        }

        Self {
            identities,
            descriptions,
        }
    }

    /// Display spelling for a base key. Unknown keys map to themselves,
    /// which can only happen for keys that never went through `derive`.
    pub fn display_of<'a>(&'a self, base: &'a str) -> &'a str {
        self.identities
            .get(base)
            .map(|id| id.display_name.as_str())
            .unwrap_or(base)
    }

    pub fn identity(&self, base: &str) -> Option<&NodeIdentity> {
        self.identities.get(base)
    }

    /// display name →描述 text, non-empty descriptions only.
    pub fn descriptions(&self) -> &HashMap<String, String> {
        &self.descriptions
    }
}
