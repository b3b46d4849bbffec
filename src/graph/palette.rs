//! Project colors.
//!
//! Projects cycle through a fixed 20-entry palette; resource pools keep a
//! single neutral grey and never consume a palette slot. Assignment is
//! keyed by project in lexicographic order, so coloring is reproducible
//! run to run.

use std::collections::{BTreeSet, HashMap};

use crate::phase::is_resource_pool;

pub const COLOR_PALETTE: [&str; 20] = [
    "#5470c6", "#91cc75", "#fac858", "#ee6666", "#73c0de", "#3ba272",
    "#fc8452", "#9a60b4", "#ea7ccc", "#5d7092", "#6e9ef1", "#f6c555",
    "#ef6567", "#95d475", "#f7a35c", "#8085e9", "#f15c80", "#e4d354",
    "#2b908f", "#f45b5b",
];

pub const RESOURCE_POOL_COLOR: &str = "#B0B0B0";

/// Extracts the project name from a node's display text.
///
/// Display names read `{symbol}{project}：{amount}`; the symbol prefix is
/// either a circled digit or a `({n})` ordinal. Base-key and full-name
/// spellings are cut at the full-width paren instead. Pools have no
/// project.
pub fn project_of_display(name: &str) -> Option<&str> {
    if is_resource_pool(name) {
        return None;
    }
    let rest = strip_symbol_prefix(name);
    // Base-key and full-name spellings carry a full-width paren before the
    // first separator; display names have none and split at the colon.
    let project = match rest.split_once('（') {
        Some((head, _)) => head,
        None => rest.split_once('：').map(|(head, _)| head).unwrap_or(rest),
    };
    // A leading separator or an all-symbol name yields nothing usable.
    (!project.is_empty()).then_some(project)
}

fn strip_symbol_prefix(name: &str) -> &str {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if ('①'..='⑩').contains(&c) => return chars.as_str(),
        _ => {}
    }
    if let Some(inner) = name.strip_prefix('(') {
        if let Some(close) = inner.find(')') {
            if close > 0 && inner[..close].bytes().all(|b| b.is_ascii_digit()) {
                return &inner[close + 1..];
            }
        }
    }
    name
}

/// Assigns palette colors round-robin over the lexicographically sorted
/// project list deduced from the display names.
pub fn assign_colors<'a>(
    display_names: impl IntoIterator<Item = &'a str>,
) -> HashMap<String, &'static str> {
    let projects: BTreeSet<&str> = display_names
        .into_iter()
        .filter_map(project_of_display)
        .collect();
    projects
        .into_iter()
        .enumerate()
        .map(|(i, project)| (project.to_string(), COLOR_PALETTE[i % COLOR_PALETTE.len()]))
        .collect()
}
