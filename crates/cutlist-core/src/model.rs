use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Edge-banding tokens of a cut piece, in the column order of the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeBanding {
    pub left: String,
    pub right: String,
    pub bottom: String,
    pub top: String,
}

/// One physical piece from the cutting list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutPiece {
    /// Material as printed; may end in "..." when the column was truncated.
    pub material: String,
    pub reference: String,
    /// Furniture unit the piece belongs to (empty when none was seen yet).
    pub group: String,
    /// Height in millimeters.
    pub height: Decimal,
    /// Width in millimeters.
    pub width: Decimal,
    pub quantity: u32,
    pub edges: EdgeBanding,
}

/// Material name → panel thickness, as read from the summary section.
///
/// Keeps document order; re-inserting a material replaces its thickness in
/// place. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThicknessTable(Vec<(String, String)>);

impl ThicknessTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, material: impl Into<String>, thickness: impl Into<String>) {
        let material = material.into();
        let thickness = thickness.into();
        match self.0.iter_mut().find(|(key, _)| *key == material) {
            Some((_, existing)) => *existing = thickness,
            None => self.0.push((material, thickness)),
        }
    }

    pub fn get(&self, material: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == material)
            .map(|(_, thickness)| thickness.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ThicknessTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for ThicknessTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = ThicknessTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of material names to thicknesses")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut table = ThicknessTable::new();
                while let Some((material, thickness)) = map.next_entry::<String, String>()? {
                    table.insert(material, thickness);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ThicknessTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = ThicknessTable::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}

/// A data line the row decoder could not turn into a piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    pub line_text: String,
    pub reason: String,
}

/// Everything pulled out of one report, ready for projection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub pieces: Vec<CutPiece>,
    pub thickness: ThicknessTable,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_lines: Vec<SkippedLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grain {
    /// Grain runs along the length of the piece.
    #[serde(rename = "LONGITUD")]
    WithGrain,
    #[serde(rename = "NINGUNA")]
    NoGrain,
}

impl Grain {
    /// Supplier vocabulary for this grain.
    pub fn as_str(&self) -> &'static str {
        match self {
            Grain::WithGrain => "LONGITUD",
            Grain::NoGrain => "NINGUNA",
        }
    }
}

impl fmt::Display for Grain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supplier column names, in sheet order.
pub const PROVIDER_COLUMNS: [&str; 9] = [
    "DESCRIPCION",
    "COLOR",
    "ESPESOR",
    "LONGITUD",
    "ANCHO",
    "CANTIDAD",
    "VETA",
    "CANTEADO",
    "PEGADO PVC",
];

/// One row of the supplier order sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    #[serde(rename = "DESCRIPCION")]
    pub description: String,
    #[serde(rename = "COLOR")]
    pub color: String,
    #[serde(rename = "ESPESOR")]
    pub thickness: String,
    #[serde(rename = "LONGITUD")]
    pub length: i64,
    #[serde(rename = "ANCHO")]
    pub breadth: i64,
    #[serde(rename = "CANTIDAD")]
    pub quantity: u32,
    #[serde(rename = "VETA")]
    pub grain: Grain,
    #[serde(rename = "CANTEADO")]
    pub edge_banding: String,
    #[serde(rename = "PEGADO PVC")]
    pub pvc_gluing: String,
}

/// A single cell value as handed to a sheet writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl OutputRow {
    /// Cell values in `PROVIDER_COLUMNS` order.
    pub fn cells(&self) -> [CellValue; 9] {
        [
            CellValue::Text(self.description.clone()),
            CellValue::Text(self.color.clone()),
            CellValue::Text(self.thickness.clone()),
            CellValue::Integer(self.length),
            CellValue::Integer(self.breadth),
            CellValue::Integer(i64::from(self.quantity)),
            CellValue::Text(self.grain.to_string()),
            CellValue::Text(self.edge_banding.clone()),
            CellValue::Text(self.pvc_gluing.clone()),
        ]
    }
}

/// Outcome of a full PDF → spreadsheet run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub ok: bool,
    pub file_path: Option<std::path::PathBuf>,
    pub errors: Vec<String>,
}

impl ProcessResult {
    pub fn success(file_path: std::path::PathBuf) -> Self {
        ProcessResult {
            ok: true,
            file_path: Some(file_path),
            errors: vec![],
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ProcessResult {
            ok: false,
            file_path: None,
            errors: vec![message.into()],
        }
    }
}
