pub mod grain;
pub mod thickness;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::model::{CutPiece, ExtractedDocument, OutputRow, ThicknessTable};
use grain::infer_grain;
use thickness::lookup_thickness;

/// Project every extracted piece onto the supplier's order columns.
///
/// Height becomes LONGITUD and width ANCHO. CANTEADO and PEGADO PVC stay
/// empty; the report does not carry that information.
pub fn to_provider_rows(document: &ExtractedDocument) -> Vec<OutputRow> {
    document
        .pieces
        .iter()
        .map(|piece| project_row(piece, &document.thickness))
        .collect()
}

/// Build the order row for a single piece.
pub fn project_row(piece: &CutPiece, thickness: &ThicknessTable) -> OutputRow {
    OutputRow {
        description: describe(&piece.reference, &piece.group),
        color: piece.material.clone(),
        thickness: lookup_thickness(&piece.material, thickness),
        length: round_mm(piece.height),
        breadth: round_mm(piece.width),
        quantity: piece.quantity,
        grain: infer_grain(&piece.material),
        edge_banding: String::new(),
        pvc_gluing: String::new(),
    }
}

/// "<reference>_<group>", or whichever of the two is present.
fn describe(reference: &str, group: &str) -> String {
    let reference = reference.trim();
    match (reference.is_empty(), group.is_empty()) {
        (_, true) => reference.to_string(),
        (true, false) => group.to_string(),
        (false, false) => format!("{reference}_{group}"),
    }
}

/// Round to whole millimeters, halves to even. The row decoder only admits
/// dimensions whose rounded value fits an `i64`.
fn round_mm(value: Decimal) -> i64 {
    value.round().to_i64().unwrap_or_default()
}
