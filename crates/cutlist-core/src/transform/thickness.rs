use crate::model::ThicknessTable;
use crate::parsing::row::ELLIPSIS;

/// Find the thickness of a possibly truncated material name.
///
/// The name is cut at its first "..." and compared case-insensitively: a
/// summary key matches when it starts with the cleaned name, or when the
/// cleaned name starts with the key's text before its first comma. The first
/// matching key in document order wins. Returns an empty string when nothing
/// matches.
pub fn lookup_thickness(material: &str, table: &ThicknessTable) -> String {
    if material.is_empty() {
        return String::new();
    }
    let cleaned = material
        .split(ELLIPSIS)
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    table
        .iter()
        .find(|(key, _)| {
            let key = key.to_lowercase();
            let key_head = key.split(',').next().unwrap_or_default();
            key.starts_with(&cleaned) || cleaned.starts_with(key_head)
        })
        .map(|(_, thickness)| thickness.to_string())
        .unwrap_or_default()
}
