use holerite_core::error::HoleriteError;
use holerite_core::export::{to_grid, ExportOptions};
use holerite_core::model::ResultTable;

/// Render the result table as CSV: header row of ordered column names, one
/// row per extracted page. Pipe-joined duplicate values are quoted by the
/// writer as needed.
pub fn render(table: &ResultTable, opts: &ExportOptions) -> Result<String, HoleriteError> {
    let (header, rows) = to_grid(table, opts);

    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    writer
        .write_record(&header)
        .map_err(|e| HoleriteError::Export(e.to_string()))?;
    for row in rows {
        writer
            .write_record(&row)
            .map_err(|e| HoleriteError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| HoleriteError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| HoleriteError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use holerite_core::model::PageRecord;

    #[test]
    fn test_csv_header_and_rows() {
        let mut rec = PageRecord::new(1, "03/2021".into());
        rec.insert_item("SALARIO".into(), "2.000,00".into());
        let table = ResultTable {
            records: vec![rec],
        };

        let csv = render(&table, &ExportOptions::default()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Mês/Ano,SALARIO"));
        assert_eq!(lines.next(), Some("03/2021,\"2.000,00\""));
    }
}
