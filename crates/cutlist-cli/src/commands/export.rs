use cutlist_core::export::load_template_layout;
use cutlist_core::export::xlsx::XlsxWriter;
use cutlist_core::extraction::pdftotext::PdftotextExtractor;
use cutlist_core::{export_pdf, ExportRequest};
use std::path::PathBuf;

use crate::output;

/// Template shipped next to the executable.
const DEFAULT_TEMPLATE: &str = "plantilla/PLANILLA PEDIDOS ONLINE.xlsx";

pub struct ExportArgs {
    pub input_file: PathBuf,
    pub out: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub no_template: bool,
    pub layout: Option<PathBuf>,
    pub output_format: String,
}

pub fn run(args: ExportArgs) -> Result<(), cutlist_core::error::CutlistError> {
    let writer = match &args.layout {
        Some(path) => XlsxWriter::with_layout(load_template_layout(path)?),
        None => XlsxWriter::new(),
    };

    let mut request = ExportRequest::new(args.input_file, chrono::Local::now().date_naive());
    request.output = args.out;
    request.template = args.template;
    if !args.no_template {
        request.default_template = default_template_path();
    }

    let extractor = PdftotextExtractor::new();
    let result = export_pdf(&request, &extractor, &writer);

    match args.output_format.as_str() {
        "json" => output::json::print(&result)?,
        _ => output::table::print_result(&result),
    }

    if !result.ok {
        std::process::exit(1);
    }
    Ok(())
}

fn default_template_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(DEFAULT_TEMPLATE))
}
