use holerite_core::error::HoleriteError;
use holerite_core::export::ExportOptions;
use holerite_core::extraction::pdftotext::PdftotextExtractor;
use holerite_core::model::ExtractOptions;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    out: Option<PathBuf>,
    carry_forward: bool,
    require_positive: bool,
    zero_fill: bool,
) -> Result<(), HoleriteError> {
    let opts = ExtractOptions {
        carry_forward_period: carry_forward,
        require_positive_values: require_positive,
    };
    let export_opts = ExportOptions { zero_fill };

    let pdf_bytes = std::fs::read(&input_file)?;
    let extractor = PdftotextExtractor::new();
    let parsed = holerite_core::extract_document(&pdf_bytes, &extractor, &opts)?;

    for w in &parsed.warnings {
        eprintln!("warning: page {}: {}", w.page_number, w.message);
    }
    eprintln!("{} pay period(s) extracted", parsed.table.len());

    let rendered = match output_format {
        "json" => output::json::render(&parsed)?,
        "csv" => output::csv::render(&parsed.table, &export_opts)?,
        _ => output::table::render(&parsed.table, &export_opts),
    };

    match out {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            eprintln!("written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
