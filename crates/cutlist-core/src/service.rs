use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::error::CutlistError;
use crate::export::{dated_filename, SheetWriter};
use crate::extraction::PdfExtractor;
use crate::model::ProcessResult;
use crate::{parse_pdf, transform};

/// Everything the facade needs to turn one PDF into an order sheet.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub input: PathBuf,
    /// Defaults to the input path with a `.xlsx` extension.
    pub output: Option<PathBuf>,
    /// Explicit template; a missing file is an error.
    pub template: Option<PathBuf>,
    /// Template used when none is given, only if it exists on disk.
    pub default_template: Option<PathBuf>,
    /// Stamped into the output name whenever a template is used.
    pub date: NaiveDate,
}

impl ExportRequest {
    pub fn new(input: impl Into<PathBuf>, date: NaiveDate) -> Self {
        ExportRequest {
            input: input.into(),
            output: None,
            template: None,
            default_template: None,
            date,
        }
    }

    /// The template that will be used, if any.
    pub fn resolved_template(&self) -> Option<PathBuf> {
        if let Some(template) = &self.template {
            return Some(template.clone());
        }
        match &self.default_template {
            Some(default) if default.is_file() => Some(default.clone()),
            Some(default) => {
                log::warn!(
                    "default template {} not found, writing a plain sheet",
                    default.display()
                );
                None
            }
            None => None,
        }
    }

    /// Where the spreadsheet will be written.
    pub fn resolved_output(&self, template: Option<&Path>) -> PathBuf {
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("xlsx"));
        match template {
            Some(_) => dated_filename(&output, self.date),
            None => output,
        }
    }
}

/// Convert a PolyBoard PDF into the supplier's order spreadsheet.
///
/// Never fails: every error ends up in `ProcessResult::errors`.
pub fn export_pdf(
    request: &ExportRequest,
    extractor: &dyn PdfExtractor,
    writer: &dyn SheetWriter,
) -> ProcessResult {
    match run(request, extractor, writer) {
        Ok(path) => ProcessResult::success(path),
        Err(e) => {
            log::debug!("export of {} failed: {e}", request.input.display());
            ProcessResult::failure(e.to_string())
        }
    }
}

fn run(
    request: &ExportRequest,
    extractor: &dyn PdfExtractor,
    writer: &dyn SheetWriter,
) -> Result<PathBuf, CutlistError> {
    if request.input.as_os_str().is_empty() {
        return Err(CutlistError::MissingInput);
    }

    let template = request.resolved_template();
    let output = request.resolved_output(template.as_deref());

    let pdf_bytes = read_input(&request.input)?;
    let document = parse_pdf(&pdf_bytes, extractor)?;
    let rows = transform::to_provider_rows(&document);
    if rows.is_empty() {
        return Err(CutlistError::NoData);
    }

    log::debug!(
        "{} writing {} row(s) to {}",
        writer.backend_name(),
        rows.len(),
        output.display()
    );
    writer.write_rows(&rows, &output, template.as_deref())?;
    Ok(output)
}

fn read_input(path: &Path) -> Result<Vec<u8>, CutlistError> {
    if !path.exists() {
        return Err(CutlistError::InputNotFound(path.to_path_buf()));
    }
    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(CutlistError::NotPdf(path.to_path_buf()));
    }
    Ok(std::fs::read(path)?)
}
