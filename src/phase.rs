//! Phase aliasing and the fixed naming tables.
//!
//! A phase is one time-ordered row of the budget table (a review meeting).
//! Its alias is a pure function of the phase's ordinal index, independent
//! of label content; label text only contributes the parenthesized time
//! substring shown inside node names.

use crate::diagnostics::Diagnostic;
use crate::error::TransformError;
use crate::table::{BudgetTable, TableSchema};

/// Ordinal aliases for the first six meetings.
const MEETING_ALIASES: [&str; 6] = ["初始", "第一次", "第二次", "第三次", "第四次", "第五次"];

/// Numerals for resource-pool names, one per phase transition.
const CHINESE_NUMERALS: [&str; 10] = ["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];

/// Circled-digit display symbols for the aliased tiers.
const PHASE_SYMBOLS: [&str; 6] = ["①", "②", "③", "④", "⑤", "⑥"];

/// One meeting row, resolved to its ordinal identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    /// The raw first-column label.
    pub label: String,
    /// 0-based ordinal over non-null phase rows, in table order.
    pub index: usize,
    /// The row this phase was read from (rows with a null label are skipped,
    /// so this can run ahead of `index`).
    pub row: usize,
    /// Short ordinal alias, per [`alias_for`].
    pub alias: String,
    /// The parenthesized time substring of the label, else the label itself.
    pub time: String,
}

/// Alias for a phase ordinal: the six-entry table, then `第{i+1}次`.
pub fn alias_for(index: usize) -> String {
    match MEETING_ALIASES.get(index) {
        Some(alias) => (*alias).to_string(),
        None => format!("第{}次", index + 1),
    }
}

/// Extracts the time description from a phase label: the content between
/// the first `(` and the last `)` after it. Labels without parentheses are
/// used verbatim.
pub fn time_of(label: &str) -> String {
    let Some(open) = label.find('(') else {
        return label.to_string();
    };
    let inner = &label[open + 1..];
    match inner.rfind(')') {
        Some(close) => inner[..close].to_string(),
        None => inner.to_string(),
    }
}

/// Name of the shared resource-pool node for phase transition `i`
/// (0-based): `资源池一` through `资源池十`, then plain decimal.
pub fn resource_pool_name(transition: usize) -> String {
    match CHINESE_NUMERALS.get(transition) {
        Some(numeral) => format!("资源池{}", numeral),
        None => format!("资源池{}", transition + 1),
    }
}

/// Display-name prefix for a phase: a circled digit for the first six
/// phases. Beyond the symbol table the 1-based ordinal is spelled out as
/// `({n})` so display names stay unique for any phase count.
pub fn phase_symbol(index: usize) -> String {
    match PHASE_SYMBOLS.get(index) {
        Some(symbol) => (*symbol).to_string(),
        None => format!("({})", index + 1),
    }
}

/// Whether a node name denotes a resource pool: `资源池` followed by one or
/// more numeral glyphs (一..十, ①..⑩, or ASCII digits).
pub fn is_resource_pool(name: &str) -> bool {
    let Some(suffix) = name.strip_prefix("资源池") else {
        return false;
    };
    !suffix.is_empty()
        && suffix.chars().all(|c| {
            c.is_ascii_digit() || ('①'..='⑩').contains(&c) || "一二三四五六七八九十".contains(c)
        })
}

/// Reads the non-null first-column labels and resolves each to a [`Phase`].
///
/// A phase past the six-entry alias tier is still fully usable; it just
/// gets flagged so callers can see the tier was exceeded. A table with no
/// phase labels at all is a structural error.
pub fn extract_phases(
    table: &BudgetTable,
    schema: &TableSchema,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<Phase>, TransformError> {
    let mut phases = Vec::new();
    for row in 0..table.row_count() {
        let Some(label) = table.cell(row, schema.phase_col).as_label() else {
            continue;
        };
        let index = phases.len();
        let alias = alias_for(index);
        if index >= MEETING_ALIASES.len() {
            diagnostics.push(Diagnostic::AliasTierOverflow {
                phase_index: index,
                alias: alias.clone(),
            });
        }
        phases.push(Phase {
            time: time_of(&label),
            label,
            index,
            row,
            alias,
        });
    }

    if phases.is_empty() {
        return Err(TransformError::NoPhases {
            header: table.header(schema.phase_col).to_string(),
        });
    }
    Ok(phases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{pair_columns, Cell};
    use rstest::rstest;

    #[rstest]
    #[case(0, "初始")]
    #[case(1, "第一次")]
    #[case(5, "第五次")]
    #[case(6, "第7次")]
    #[case(11, "第12次")]
    fn test_alias_tiers(#[case] index: usize, #[case] expected: &str) {
        assert_eq!(alias_for(index), expected);
    }

    #[rstest]
    #[case("M1(2024-01)", "2024-01")]
    #[case("预算评审(2024年3月)", "2024年3月")]
    #[case("kickoff", "kickoff")]
    #[case("odd(unclosed", "unclosed")]
    #[case("M(a)(b)", "a)(b")] // one extraction rule for node keys and totals
    #[case("M(a(b))", "a(b)")]
    fn test_time_extraction(#[case] label: &str, #[case] expected: &str) {
        assert_eq!(time_of(label), expected);
    }

    #[rstest]
    #[case(0, "资源池一")]
    #[case(9, "资源池十")]
    #[case(10, "资源池11")]
    fn test_pool_names(#[case] transition: usize, #[case] expected: &str) {
        assert_eq!(resource_pool_name(transition), expected);
    }

    #[test]
    fn test_symbols_and_overflow() {
        assert_eq!(phase_symbol(0), "①");
        assert_eq!(phase_symbol(5), "⑥");
        // Past the table the ordinal is encoded, not collapsed to ①.
        assert_eq!(phase_symbol(6), "(7)");
        assert_eq!(phase_symbol(7), "(8)");
    }

    #[test]
    fn test_pool_recognition() {
        assert!(is_resource_pool("资源池一"));
        assert!(is_resource_pool("资源池11"));
        assert!(is_resource_pool("资源池⑩"));
        assert!(!is_resource_pool("资源池"));
        assert!(!is_resource_pool("资源池A"));
        assert!(!is_resource_pool("项目A（初始：2024-01）"));
    }

    #[test]
    fn test_extract_skips_null_rows() {
        let table = BudgetTable::new(
            vec!["时间".into(), "项目A".into(), "说明".into(), "总预算".into()],
            vec![
                vec![Cell::from("M1(2024-01)"), Cell::from(1.0), Cell::Null, Cell::from(1.0)],
                vec![Cell::Null, Cell::Null, Cell::Null, Cell::Null],
                vec![Cell::from("M2(2024-02)"), Cell::from(2.0), Cell::Null, Cell::from(2.0)],
            ],
        );
        let mut diags = Vec::new();
        let schema = pair_columns(&table, &mut diags).unwrap();
        let phases = extract_phases(&table, &schema, &mut diags).unwrap();

        assert_eq!(phases.len(), 2);
        assert_eq!(phases[0].alias, "初始");
        assert_eq!(phases[0].row, 0);
        assert_eq!(phases[1].alias, "第一次");
        assert_eq!(phases[1].row, 2);
        assert_eq!(phases[1].time, "2024-02");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_overflow_diagnostic() {
        let rows: Vec<Vec<Cell>> = (0..7)
            .map(|i| vec![Cell::from(format!("M{}", i)), Cell::from(1.0), Cell::Null, Cell::from(1.0)])
            .collect();
        let table = BudgetTable::new(
            vec!["时间".into(), "项目A".into(), "说明".into(), "总预算".into()],
            rows,
        );
        let mut diags = Vec::new();
        let schema = pair_columns(&table, &mut diags).unwrap();
        let phases = extract_phases(&table, &schema, &mut diags).unwrap();

        assert_eq!(phases[6].alias, "第7次");
        assert_eq!(
            diags,
            vec![Diagnostic::AliasTierOverflow {
                phase_index: 6,
                alias: "第7次".to_string(),
            }]
        );
    }

    #[test]
    fn test_no_phases_is_structural() {
        let table = BudgetTable::new(
            vec!["时间".into(), "项目A".into(), "说明".into(), "总预算".into()],
            vec![vec![Cell::Null, Cell::from(1.0), Cell::Null, Cell::from(1.0)]],
        );
        let mut diags = Vec::new();
        let schema = pair_columns(&table, &mut diags).unwrap();
        let err = extract_phases(&table, &schema, &mut diags).unwrap_err();
        assert_eq!(err, TransformError::NoPhases { header: "时间".to_string() });
    }
}
