use holerite_core::error::HoleriteError;
use holerite_core::extraction::pdftotext::PdftotextExtractor;
use holerite_core::extraction::PdfExtractor;
use holerite_core::model::ExtractOptions;
use std::path::PathBuf;

/// Diagnostic pass: which period each page resolves to and how many fields
/// it yields. Useful for checking a new issuer layout before extracting.
pub fn run(input_file: PathBuf, carry_forward: bool) -> Result<(), HoleriteError> {
    let opts = ExtractOptions {
        carry_forward_period: carry_forward,
        ..Default::default()
    };

    let pdf_bytes = std::fs::read(&input_file)?;
    let extractor = PdftotextExtractor::new();
    let pages = extractor.extract_pages(&pdf_bytes)?;
    let parsed = holerite_core::extract_pages(&pages, &opts);

    println!(
        "{} page(s), {} with salary data",
        pages.len(),
        parsed.table.len()
    );
    for rec in &parsed.table.records {
        println!(
            "  page {:>3}  {:<20}  {} field(s)",
            rec.page_number,
            rec.period(),
            rec.data_field_count()
        );
    }

    if !parsed.warnings.is_empty() {
        println!();
        for w in &parsed.warnings {
            println!("  page {:>3}  skipped: {}", w.page_number, w.message);
        }
    }

    Ok(())
}
