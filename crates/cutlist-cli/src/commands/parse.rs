use cutlist_core::extraction::pdftotext::PdftotextExtractor;
use cutlist_core::transform::to_provider_rows;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), cutlist_core::error::CutlistError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let document = cutlist_core::parse_pdf(&pdf_bytes, &extractor)?;
    let rows = to_provider_rows(&document);

    let parsed = serde_json::json!({
        "pieces": &document.pieces,
        "thickness": &document.thickness,
        "skipped_lines": &document.skipped_lines,
        "rows": &rows,
    });

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&parsed)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} piece(s) and {} material thickness(es), written to {}",
                document.pieces.len(),
                document.thickness.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => println!("{}", serde_json::to_string_pretty(&parsed)?),
            _ => println!("{}", output::table::format_rows(&rows)),
        },
    }

    if !document.skipped_lines.is_empty() {
        eprintln!(
            "  {} line(s) skipped during parsing",
            document.skipped_lines.len()
        );
    }

    Ok(())
}
