use once_cell::sync::Lazy;
use regex::Regex;

/// Title of the cutting-list section, with the optional "(Siguiente)" marker
/// PolyBoard prints when the table continues on a new page.
static CUT_LIST_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Lista de Corte \(Dimensiones Netas\)(?:\s*\(Siguiente\))?\s*\n")
        .expect("cut list title pattern")
});

/// Section headers that close a cutting-list block.
static NEXT_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Resumen|Lista de Muebles").expect("next section pattern"));

/// Locate every cutting-list block in the concatenated document text.
///
/// Each block runs from the line after a section title up to the next
/// "Resumen" / "Lista de Muebles" header or the end of the text. A document
/// without a cutting list yields no blocks.
pub fn extract_cut_list_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(title) = CUT_LIST_TITLE.find_at(text, pos) {
        let start = title.end();
        let end = NEXT_SECTION
            .find_at(text, start)
            .map(|m| m.start())
            .unwrap_or(text.len());
        blocks.push(&text[start..end]);
        pos = end;
    }

    log::debug!("found {} cutting-list block(s)", blocks.len());
    blocks
}
