use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CutlistError {
    #[error("PDF path not provided")]
    MissingInput,

    #[error("input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("input file does not have a .pdf extension: {}", .0.display())]
    NotPdf(PathBuf),

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("the PDF contained no cutting-list data to export")]
    NoData,

    #[error("no rows to write")]
    NoRows,

    #[error("output path must have a .xlsx extension: {}", .0.display())]
    InvalidOutputPath(PathBuf),

    #[error("template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("failed to load template layout from {path}: {reason}")]
    LayoutLoad { path: PathBuf, reason: String },

    #[error("invalid template layout: {0}")]
    LayoutInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
