use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::model::{CutPiece, EdgeBanding};

/// Height, width and quantity followed by the rest of the row.
static ROW_TRIPLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+\.?\d*)\s+(\d+\.?\d*)\s+(\d+)\s+(.+)$").expect("row triple pattern")
});

/// Marker PolyBoard prints where a column was cut short.
pub const ELLIPSIS: &str = "...";

/// Why a data line produced no piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeSkip {
    NoDimensions,
    InvalidNumber(String),
    NonPositive,
    OutOfRange(String),
}

impl std::fmt::Display for DecodeSkip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeSkip::NoDimensions => write!(f, "no height/width/quantity triple"),
            DecodeSkip::InvalidNumber(s) => write!(f, "invalid number '{s}'"),
            DecodeSkip::NonPositive => write!(f, "zero dimension or quantity"),
            DecodeSkip::OutOfRange(s) => write!(f, "dimension '{s}' out of range"),
        }
    }
}

/// Decode one data row of the cutting list into a piece owned by `group`.
///
/// The first `real real integer` run in the line is read as height, width and
/// quantity. Text before it holds material and reference, text after it the
/// grain flag followed by the four edge-banding columns.
pub fn decode_row(line: &str, group: &str) -> Result<CutPiece, DecodeSkip> {
    let caps = ROW_TRIPLE.captures(line).ok_or(DecodeSkip::NoDimensions)?;
    let (Some(whole), Some(height), Some(width), Some(quantity), Some(rest)) =
        (caps.get(0), caps.get(1), caps.get(2), caps.get(3), caps.get(4))
    else {
        return Err(DecodeSkip::NoDimensions);
    };

    let height = parse_dimension(height.as_str())?;
    let width = parse_dimension(width.as_str())?;
    let quantity: u32 = quantity
        .as_str()
        .parse()
        .map_err(|_| DecodeSkip::InvalidNumber(quantity.as_str().to_string()))?;

    if height.is_zero() || width.is_zero() || quantity == 0 {
        return Err(DecodeSkip::NonPositive);
    }

    let edges = parse_edges(rest.as_str());
    let (material, reference) = split_material_reference(line[..whole.start()].trim());

    Ok(CutPiece {
        material,
        reference,
        group: group.to_string(),
        height,
        width,
        quantity,
        edges,
    })
}

/// Dimensions may carry a bare trailing point ("600."). They must round to
/// a whole number of millimeters that fits an `i64`.
fn parse_dimension(s: &str) -> Result<Decimal, DecodeSkip> {
    let value = Decimal::from_str(s.trim_end_matches('.'))
        .map_err(|_| DecodeSkip::InvalidNumber(s.to_string()))?;
    if value.round().to_i64().is_none() {
        return Err(DecodeSkip::OutOfRange(s.to_string()));
    }
    Ok(value)
}

/// The remainder reads "<grain flag> <left> <right> <bottom> <top> ...".
fn parse_edges(rest: &str) -> EdgeBanding {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.len() < 5 {
        return EdgeBanding::default();
    }
    EdgeBanding {
        left: tokens[1].to_string(),
        right: tokens[2].to_string(),
        bottom: tokens[3].to_string(),
        top: tokens[4].to_string(),
    }
}

/// Split the text before the dimensions into material and reference.
///
/// Both columns may be truncated with "..."; the first token ending in it
/// closes the material column. Without one, the first word is the material.
pub fn split_material_reference(prefix: &str) -> (String, String) {
    let tokens: Vec<&str> = prefix.split_whitespace().collect();
    match tokens.as_slice() {
        [] => (String::new(), String::new()),
        [only] => (only.to_string(), String::new()),
        _ => {
            let split = tokens
                .iter()
                .position(|t| t.ends_with(ELLIPSIS))
                .map(|i| i + 1)
                .unwrap_or(1);
            (tokens[..split].join(" "), tokens[split..].join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decode_full_row() {
        let piece = decode_row(
            "gris sombra... RF001 600.4 350.2 2 No white white white white",
            "closet unit",
        )
        .unwrap();
        assert_eq!(piece.material, "gris sombra...");
        assert_eq!(piece.reference, "RF001");
        assert_eq!(piece.group, "closet unit");
        assert_eq!(piece.height, dec!(600.4));
        assert_eq!(piece.width, dec!(350.2));
        assert_eq!(piece.quantity, 2);
        assert_eq!(piece.edges.left, "white");
        assert_eq!(piece.edges.right, "white");
        assert_eq!(piece.edges.bottom, "white");
        assert_eq!(piece.edges.top, "white");
    }

    #[test]
    fn test_dimensions_independent_of_surroundings() {
        let lines = [
            "a 600.4 350.2 2 No",
            "gris sombra... Estante Fij... 600.4 350.2 2 No PAPIER, 0.... x y z extra",
            "MELA_BL Lateral izquierdo del mueble 600.4 350.2 2 Sí",
        ];
        for line in lines {
            let piece = decode_row(line, "").unwrap();
            assert_eq!(piece.height, dec!(600.4), "{line}");
            assert_eq!(piece.width, dec!(350.2), "{line}");
            assert_eq!(piece.quantity, 2, "{line}");
        }
    }

    #[test]
    fn test_reference_digits_do_not_shift_triple() {
        let piece = decode_row("MELA RF001 720.0 560.0 1 No", "").unwrap();
        assert_eq!(piece.material, "MELA");
        assert_eq!(piece.reference, "RF001");
        assert_eq!(piece.height, dec!(720.0));
        assert_eq!(piece.width, dec!(560.0));
        assert_eq!(piece.quantity, 1);
    }

    #[test]
    fn test_trailing_point_dimension() {
        let piece = decode_row("MELA Zocalo 600. 80.5 1 No", "").unwrap();
        assert_eq!(piece.height, dec!(600));
        assert_eq!(piece.width, dec!(80.5));
    }

    #[test]
    fn test_short_remainder_leaves_edges_empty() {
        let piece = decode_row("MELA Puerta 720 400 2 No PAPIER", "").unwrap();
        assert_eq!(piece.edges, EdgeBanding::default());
    }

    #[test]
    fn test_no_triple_is_skipped() {
        assert_eq!(
            decode_row("alacena tati", ""),
            Err(DecodeSkip::NoDimensions)
        );
        // The triple must be followed by something.
        assert_eq!(
            decode_row("MELA Puerta 720 400 2", ""),
            Err(DecodeSkip::NoDimensions)
        );
    }

    #[test]
    fn test_zero_quantity_is_skipped() {
        assert_eq!(
            decode_row("MELA Puerta 720 400 0 No", ""),
            Err(DecodeSkip::NonPositive)
        );
    }

    #[test]
    fn test_zero_dimension_is_skipped() {
        assert_eq!(
            decode_row("MELA Puerta 0 400 1 No", ""),
            Err(DecodeSkip::NonPositive)
        );
        assert_eq!(
            decode_row("MELA Puerta 720 0.0 1 No", ""),
            Err(DecodeSkip::NonPositive)
        );
    }

    #[test]
    fn test_oversized_dimension_is_skipped() {
        assert_eq!(
            decode_row("MELA Puerta 10000000000000000000000 400 1 No", ""),
            Err(DecodeSkip::OutOfRange("10000000000000000000000".into()))
        );
    }

    #[test]
    fn test_four_remainder_tokens_leave_edges_empty() {
        let piece = decode_row("MELA Puerta 720.0 400.0 2 No a b c", "").unwrap();
        assert_eq!(piece.edges, EdgeBanding::default());

        let piece = decode_row("MELA Puerta 720.0 400.0 2 No a b c d", "").unwrap();
        assert_eq!(piece.edges.left, "a");
        assert_eq!(piece.edges.top, "d");
    }

    #[test]
    fn test_split_material_reference() {
        assert_eq!(
            split_material_reference("gris sombr... Estante Fij..."),
            ("gris sombr...".to_string(), "Estante Fij...".to_string())
        );
        assert_eq!(
            split_material_reference("MELA_BL Lateral izq"),
            ("MELA_BL".to_string(), "Lateral izq".to_string())
        );
        assert_eq!(
            split_material_reference("MELA_BL"),
            ("MELA_BL".to_string(), String::new())
        );
        assert_eq!(
            split_material_reference("  "),
            (String::new(), String::new())
        );
    }

    #[test]
    fn test_material_ending_in_last_token() {
        assert_eq!(
            split_material_reference("roble natural claro..."),
            ("roble natural claro...".to_string(), String::new())
        );
    }
}
