pub mod xlsx;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CutlistError;
use crate::model::OutputRow;

/// Last row of an .xlsx worksheet.
pub const MAX_SHEET_ROW: u32 = 1_048_576;
/// Last column of an .xlsx worksheet (XFD).
pub const MAX_SHEET_COLUMN: u32 = 16_384;

/// Trait for spreadsheet writing backends.
pub trait SheetWriter: Send + Sync {
    /// Write `rows` to `output`. Without a template a fresh sheet with a
    /// header row is created; with one, rows go into the template's order area.
    fn write_rows(
        &self,
        rows: &[OutputRow],
        output: &Path,
        template: Option<&Path>,
    ) -> Result<(), CutlistError>;

    /// Name of this writer backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Where order rows go inside the supplier template. Rows and columns are
/// 1-based, as in the spreadsheet itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateLayout {
    /// First row of the order area.
    pub start_row: u32,
    /// Column receiving the running piece number.
    pub number_column: u32,
    pub description_column: u32,
    pub color_column: u32,
    pub thickness_column: u32,
    pub length_column: u32,
    pub breadth_column: u32,
    pub quantity_column: u32,
    pub grain_column: u32,
}

impl Default for TemplateLayout {
    /// "PLANILLA PEDIDOS ONLINE": numbers in B, data in C..I from row 14.
    fn default() -> Self {
        TemplateLayout {
            start_row: 14,
            number_column: 2,
            description_column: 3,
            color_column: 4,
            thickness_column: 5,
            length_column: 6,
            breadth_column: 7,
            quantity_column: 8,
            grain_column: 9,
        }
    }
}

impl TemplateLayout {
    /// Data columns in `OutputRow::cells` order (the first seven cells).
    pub fn data_columns(&self) -> [u32; 7] {
        [
            self.description_column,
            self.color_column,
            self.thickness_column,
            self.length_column,
            self.breadth_column,
            self.quantity_column,
            self.grain_column,
        ]
    }
}

/// Load a template layout from a JSON file. Missing fields keep their defaults.
pub fn load_template_layout(path: &Path) -> Result<TemplateLayout, CutlistError> {
    let content = std::fs::read_to_string(path).map_err(|e| CutlistError::LayoutLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let layout: TemplateLayout =
        serde_json::from_str(&content).map_err(|e| CutlistError::LayoutLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_layout(&layout)?;
    Ok(layout)
}

/// Validate that a layout addresses real, distinct cells.
pub fn validate_layout(layout: &TemplateLayout) -> Result<(), CutlistError> {
    if layout.start_row == 0 || layout.start_row > MAX_SHEET_ROW {
        return Err(CutlistError::LayoutInvalid(format!(
            "start_row must be between 1 and {MAX_SHEET_ROW}"
        )));
    }

    let mut columns = vec![layout.number_column];
    columns.extend(layout.data_columns());
    if columns.iter().any(|&c| c == 0 || c > MAX_SHEET_COLUMN) {
        return Err(CutlistError::LayoutInvalid(format!(
            "columns must be between 1 and {MAX_SHEET_COLUMN}"
        )));
    }

    let mut sorted = columns.clone();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() != columns.len() {
        return Err(CutlistError::LayoutInvalid(
            "each field needs its own column".into(),
        ));
    }

    Ok(())
}

/// Insert a date before the extension: `dir/order.xlsx` → `dir/order_2025-02-13.xlsx`.
pub fn dated_filename(path: &Path, date: NaiveDate) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_{}.{}", date.format("%Y-%m-%d"), ext.to_string_lossy()),
        None => format!("{stem}_{}", date.format("%Y-%m-%d")),
    };
    path.with_file_name(name)
}

/// Check the output path and create its parent directories.
pub fn prepare_output_path(path: &Path) -> Result<(), CutlistError> {
    let is_xlsx = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("xlsx"))
        .unwrap_or(false);
    if !is_xlsx {
        return Err(CutlistError::InvalidOutputPath(path.to_path_buf()));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dated_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 13).unwrap();
        assert_eq!(
            dated_filename(Path::new("out/pedido.xlsx"), date),
            PathBuf::from("out/pedido_2025-02-13.xlsx")
        );
        assert_eq!(
            dated_filename(Path::new("pedido"), date),
            PathBuf::from("pedido_2025-02-13")
        );
    }

    #[test]
    fn test_default_layout_is_valid() {
        assert!(validate_layout(&TemplateLayout::default()).is_ok());
    }

    #[test]
    fn test_layout_partial_json_keeps_defaults() {
        let layout: TemplateLayout = serde_json::from_str(r#"{"start_row": 20}"#).unwrap();
        assert_eq!(layout.start_row, 20);
        assert_eq!(layout.number_column, 2);
        assert_eq!(layout.grain_column, 9);
    }

    #[test]
    fn test_layout_rejects_duplicate_and_zero_columns() {
        let duplicated = TemplateLayout {
            color_column: 3,
            ..Default::default()
        };
        assert!(matches!(
            validate_layout(&duplicated),
            Err(CutlistError::LayoutInvalid(_))
        ));

        let zero_row = TemplateLayout {
            start_row: 0,
            ..Default::default()
        };
        assert!(validate_layout(&zero_row).is_err());

        let zero_column = TemplateLayout {
            number_column: 0,
            ..Default::default()
        };
        assert!(validate_layout(&zero_column).is_err());
    }

    #[test]
    fn test_layout_rejects_cells_past_sheet_limits() {
        for json in [
            r#"{"start_row": 4294967295}"#,
            r#"{"start_row": 2000000}"#,
            r#"{"grain_column": 16385}"#,
        ] {
            let layout: TemplateLayout = serde_json::from_str(json).unwrap();
            assert!(
                matches!(validate_layout(&layout), Err(CutlistError::LayoutInvalid(_))),
                "{json}"
            );
        }

        let last_cells = TemplateLayout {
            start_row: MAX_SHEET_ROW,
            grain_column: MAX_SHEET_COLUMN,
            ..Default::default()
        };
        assert!(validate_layout(&last_cells).is_ok());
    }

    #[test]
    fn test_load_template_layout_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, r#"{"start_row": 16, "number_column": 1}"#).unwrap();
        let layout = load_template_layout(&path).unwrap();
        assert_eq!(layout.start_row, 16);
        assert_eq!(layout.number_column, 1);

        let missing = load_template_layout(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(CutlistError::LayoutLoad { .. })));
    }

    #[test]
    fn test_prepare_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("pedido.XLSX");
        prepare_output_path(&nested).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());

        let wrong = dir.path().join("pedido.csv");
        assert!(matches!(
            prepare_output_path(&wrong),
            Err(CutlistError::InvalidOutputPath(_))
        ));
    }
}
