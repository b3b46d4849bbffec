//! The graph assembler: turns raw base-keyed flow edges into the
//! chart-ready node and link lists.
//!
//! Edges are remapped to display names, self-loops are dropped, and the
//! node set is deduplicated through a petgraph `DiGraph` so endpoint
//! bookkeeping stays structural rather than string-set juggling. Links
//! keep the builder's emission order; nodes come out lexicographic by
//! display name.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::flow::builder::FlowEdge;
use crate::naming::NodeNames;
use crate::phase::is_resource_pool;

use super::palette::{assign_colors, RESOURCE_POOL_COLOR};

/// One chart node. `color` and `description` are omitted from serialized
/// output when absent, matching the renderer's expected JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyNode {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One chart link between display-named endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyLink {
    pub source: String,
    pub target: String,
    pub value: f64,
}

/// The chart contract handed to the external renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SankeyGraph {
    pub nodes: Vec<SankeyNode>,
    pub links: Vec<SankeyLink>,
}

/// Assembles the final graph from the raw edge list and the identity map.
pub fn assemble(edges: &[FlowEdge], names: &NodeNames) -> SankeyGraph {
    let mut graph: DiGraph<String, f64> = DiGraph::new();
    let mut index: HashMap<String, NodeIndex> = HashMap::new();

    for edge in edges {
        let source = names.display_of(&edge.source);
        let target = names.display_of(&edge.target);
        // Equal endpoints after remapping would render as a degenerate
        // self-loop; drop the edge entirely.
        if source == target {
            continue;
        }
        let s = intern(&mut graph, &mut index, source);
        let t = intern(&mut graph, &mut index, target);
        graph.add_edge(s, t, edge.value);
    }

    let links: Vec<SankeyLink> = graph
        .edge_references()
        .map(|e| SankeyLink {
            source: graph[e.source()].clone(),
            target: graph[e.target()].clone(),
            value: *e.weight(),
        })
        .collect();

    let mut display_names: Vec<&String> = graph.node_weights().collect();
    display_names.sort();

    let colors = assign_colors(display_names.iter().map(|n| n.as_str()));
    let descriptions = names.descriptions();

    let nodes = display_names
        .into_iter()
        .map(|name| {
            let color = if is_resource_pool(name) {
                Some(RESOURCE_POOL_COLOR.to_string())
            } else {
                super::palette::project_of_display(name)
                    .and_then(|project| colors.get(project))
                    .map(|c| (*c).to_string())
            };
            SankeyNode {
                name: name.clone(),
                color,
                description: descriptions.get(name).cloned(),
            }
        })
        .collect();

    SankeyGraph { nodes, links }
}

fn intern(
    graph: &mut DiGraph<String, f64>,
    index: &mut HashMap<String, NodeIndex>,
    name: &str,
) -> NodeIndex {
    match index.get(name) {
        Some(&idx) => idx,
        None => {
            let idx = graph.add_node(name.to_string());
            index.insert(name.to_string(), idx);
            idx
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::FlowBuilder;
    use crate::phase::extract_phases;
    use crate::table::{pair_columns, BudgetTable, Cell};

    fn reference_table() -> BudgetTable {
        BudgetTable::new(
            vec![
                "时间列".into(),
                "项目A".into(),
                "项目A_说明".into(),
                "项目B".into(),
                "项目B_说明".into(),
                "总预算".into(),
            ],
            vec![
                vec![
                    Cell::from("M1(2024-01)"),
                    Cell::from(100.0),
                    Cell::from("初版预算"),
                    Cell::from(50.0),
                    Cell::Null,
                    Cell::from(150.0),
                ],
                vec![
                    Cell::from("M2(2024-02)"),
                    Cell::from(80.0),
                    Cell::Null,
                    Cell::from(70.0),
                    Cell::Null,
                    Cell::from(150.0),
                ],
            ],
        )
    }

    fn assemble_table(table: &BudgetTable) -> SankeyGraph {
        let mut diags = Vec::new();
        let schema = pair_columns(table, &mut diags).unwrap();
        let phases = extract_phases(table, &schema, &mut diags).unwrap();
        let edges = FlowBuilder::new(table, &schema, &phases).build(&mut diags);
        let names = NodeNames::derive(table, &schema, &phases, &edges);
        assemble(&edges, &names)
    }

    #[test]
    fn test_reference_graph() {
        let graph = assemble_table(&reference_table());

        assert_eq!(
            graph.links,
            vec![
                SankeyLink {
                    source: "①项目A：100".into(),
                    target: "②项目A：80".into(),
                    value: 80.0,
                },
                SankeyLink {
                    source: "①项目A：100".into(),
                    target: "资源池一".into(),
                    value: 20.0,
                },
                SankeyLink {
                    source: "①项目B：50".into(),
                    target: "②项目B：70".into(),
                    value: 50.0,
                },
                SankeyLink {
                    source: "资源池一".into(),
                    target: "②项目B：70".into(),
                    value: 20.0,
                },
            ]
        );

        // Nodes are lexicographic by display name; pools are grey, project
        // nodes share a per-project palette color.
        let node_names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
        let mut sorted = node_names.clone();
        sorted.sort();
        assert_eq!(node_names, sorted);

        let pool = graph.nodes.iter().find(|n| n.name == "资源池一").unwrap();
        assert_eq!(pool.color.as_deref(), Some(RESOURCE_POOL_COLOR));
        assert!(pool.description.is_none());

        let a1 = graph.nodes.iter().find(|n| n.name == "①项目A：100").unwrap();
        let a2 = graph.nodes.iter().find(|n| n.name == "②项目A：80").unwrap();
        assert_eq!(a1.color, a2.color);
        assert_eq!(a1.description.as_deref(), Some("初版预算"));
        assert!(a2.description.is_none());

        let b1 = graph.nodes.iter().find(|n| n.name == "①项目B：50").unwrap();
        assert_ne!(a1.color, b1.color);
    }

    #[test]
    fn test_no_self_loops() {
        let graph = assemble_table(&reference_table());
        assert!(graph.links.iter().all(|l| l.source != l.target));
    }

    #[test]
    fn test_seven_phase_display_names_stay_unique() {
        // Aliases beyond the six-entry symbol table must not collapse
        // onto one node; transitions 6 and 7 keep distinct endpoints.
        let rows: Vec<Vec<Cell>> = (0..8)
            .map(|i| {
                vec![
                    Cell::from(format!("M{}(2024-{:02})", i + 1, i + 1)),
                    Cell::from(100.0 + i as f64),
                    Cell::Null,
                    Cell::from(100.0 + i as f64),
                ]
            })
            .collect();
        let table = BudgetTable::new(
            vec!["时间".into(), "项目A".into(), "说明".into(), "总预算".into()],
            rows,
        );
        let graph = assemble_table(&table);

        assert!(graph.nodes.iter().any(|n| n.name == "(7)项目A：106"));
        assert!(graph.nodes.iter().any(|n| n.name == "(8)项目A：107"));
        // Eight phases, one project: 8 project nodes + 7 deficit pools.
        assert_eq!(graph.nodes.len(), 15);
        assert!(graph.links.iter().all(|l| l.source != l.target));
    }

    #[test]
    fn test_serialized_shape_omits_absent_fields() {
        let graph = assemble_table(&reference_table());
        let json = serde_json::to_value(&graph).unwrap();

        let nodes = json["nodes"].as_array().unwrap();
        let pool = nodes
            .iter()
            .find(|n| n["name"] == "资源池一")
            .unwrap();
        assert!(pool.get("description").is_none());
        assert_eq!(pool["color"], "#B0B0B0");

        let links = json["links"].as_array().unwrap();
        assert_eq!(links[0]["value"], 80.0);
    }

    #[test]
    fn test_idempotence() {
        let table = reference_table();
        let first = assemble_table(&table);
        let second = assemble_table(&table);
        assert_eq!(first, second);
    }
}
