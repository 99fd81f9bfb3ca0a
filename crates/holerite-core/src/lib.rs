pub mod assemble;
pub mod classify;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;

use error::HoleriteError;
use extraction::PdfExtractor;
use model::{ExtractOptions, ParsedDocument};

pub use assemble::extract_pages;

/// Main API entry point: extract the salary-evolution table from a payslip
/// PDF.
///
/// Runs the text-extraction backend, then the page-by-page engine. Line- and
/// field-level failures are recovered inside the engine; only document-level
/// read failures and the no-data condition surface as errors.
pub fn extract_document(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    opts: &ExtractOptions,
) -> Result<ParsedDocument, HoleriteError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let parsed = extract_pages(&pages, opts);

    if parsed.table.is_empty() {
        return Err(HoleriteError::NoTabularData);
    }

    Ok(parsed)
}
