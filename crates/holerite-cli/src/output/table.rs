use holerite_core::export::{to_grid, ExportOptions};
use holerite_core::model::ResultTable;

/// Render the result table as aligned text columns for terminal viewing.
pub fn render(table: &ResultTable, opts: &ExportOptions) -> String {
    let (header, rows) = to_grid(table, opts);

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header, &widths);

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &separator, &widths);

    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use holerite_core::model::PageRecord;

    #[test]
    fn test_render_aligns_columns() {
        let mut a = PageRecord::new(1, "01/2021".into());
        a.insert_item("SALARIO".into(), "2.000,00".into());
        let mut b = PageRecord::new(2, "02/2021".into());
        b.insert_item("SALARIO".into(), "2.100,00".into());

        let table = ResultTable {
            records: vec![a, b],
        };
        let rendered = render(&table, &ExportOptions::default());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Mês/Ano"));
        assert!(lines[1].starts_with("-------"));
        assert!(lines[2].contains("2.000,00"));
        assert!(lines[3].contains("2.100,00"));
    }
}
