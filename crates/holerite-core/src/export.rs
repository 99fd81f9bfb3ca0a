use crate::model::{ResultTable, PERIOD_KEY};

/// Placeholder rendered for a column a page never produced.
pub const MISSING_PLACEHOLDER: &str = "-";

/// Tunable export behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Render missing cells as "0" instead of "-" so exported columns stay
    /// numeric-typed. Off by default: absent is not the same as zero.
    pub zero_fill: bool,
}

/// Column names whose figures belong to the payslip footer rather than the
/// per-rubric section.
fn is_aggregate_column(name: &str) -> bool {
    let upper = name.to_uppercase();
    ["BASE", "FGTS", "LÍQUIDO", "LIQUIDO", "TOTAL"]
        .iter()
        .any(|kw| upper.contains(kw))
}

/// Deterministic column order for tabular export: the period first, ordinary
/// line-item columns alphabetically, footer-aggregate columns alphabetically
/// last. Independent of the order fields were extracted in.
pub fn ordered_columns(table: &ResultTable) -> Vec<String> {
    let mut items = Vec::new();
    let mut aggregates = Vec::new();

    for col in table.columns() {
        if col == PERIOD_KEY {
            continue;
        }
        if is_aggregate_column(&col) {
            aggregates.push(col);
        } else {
            items.push(col);
        }
    }

    let mut columns = Vec::with_capacity(items.len() + aggregates.len() + 1);
    columns.push(PERIOD_KEY.to_string());
    columns.extend(items);
    columns.extend(aggregates);
    columns
}

/// Materialize the table as a header row plus one cell row per record.
pub fn to_grid(table: &ResultTable, opts: &ExportOptions) -> (Vec<String>, Vec<Vec<String>>) {
    let header = ordered_columns(table);
    let missing = if opts.zero_fill {
        "0"
    } else {
        MISSING_PLACEHOLDER
    };

    let rows = table
        .records
        .iter()
        .map(|rec| {
            header
                .iter()
                .map(|col| {
                    rec.fields
                        .get(col)
                        .cloned()
                        .unwrap_or_else(|| missing.to_string())
                })
                .collect()
        })
        .collect();

    (header, rows)
}
