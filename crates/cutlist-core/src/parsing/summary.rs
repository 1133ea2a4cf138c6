use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::ThicknessTable;

/// "material, 18.00 1.53 m²": material, thickness, then area.
static PANEL_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(.+?),?\s+([\d.]+)\s+[\d.]+\s*m²").expect("panel row pattern")
});

/// Build the material → thickness table from the "Resumen / Panel" section.
///
/// Documents without both markers have no summary and yield an empty table.
/// A material listed more than once keeps its last thickness.
pub fn parse_thickness_table(text: &str) -> ThicknessTable {
    let mut table = ThicknessTable::new();
    if !text.contains("Resumen") || !text.contains("Panel") {
        return table;
    }

    for caps in PANEL_ROW.captures_iter(text) {
        let (Some(material), Some(thickness)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let material = material.as_str().trim().trim_end_matches(',');
        if material.eq_ignore_ascii_case("total") {
            continue;
        }
        table.insert(material, normalize_thickness(thickness.as_str()));
    }

    log::debug!("thickness table has {} material(s)", table.len());
    table
}

/// Drop trailing zeros and a dangling decimal point: "18.00" → "18",
/// "15.50" → "15.5". Values without a point are returned untouched.
pub fn normalize_thickness(value: &str) -> String {
    if value.contains('.') {
        value.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        value.to_string()
    }
}
