pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod service;
pub mod transform;

use error::CutlistError;
use extraction::{PageContent, PdfExtractor};
use model::ExtractedDocument;

pub use service::{export_pdf, ExportRequest};

/// Main API entry point: extract the cutting list and thickness table from a
/// PolyBoard PDF.
///
/// Only extraction failures are errors. A PDF without a cutting list returns
/// an empty document; deciding whether that is a failure is up to the caller.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<ExtractedDocument, CutlistError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    log::debug!(
        "{} extracted {} page(s)",
        extractor.backend_name(),
        pages.len()
    );
    Ok(parse_pages(&pages))
}

/// Parse already extracted page text.
pub fn parse_pages(pages: &[PageContent]) -> ExtractedDocument {
    parsing::parse_pages(pages)
}
