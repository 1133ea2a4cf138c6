use crate::model::Grain;

/// Material name fragments of boards that have a visible grain.
/// Melamine and MDF boards carry none.
pub const GRAINED_MATERIALS: &[&str] = &["terciado", "cedro", "pino", "fibroplus"];

/// Infer the grain direction of a material from its name.
pub fn infer_grain(material: &str) -> Grain {
    if material.trim().is_empty() {
        return Grain::NoGrain;
    }
    let lower = material.to_lowercase();
    if GRAINED_MATERIALS.iter().any(|kw| lower.contains(kw)) {
        Grain::WithGrain
    } else {
        Grain::NoGrain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grained_keywords() {
        assert_eq!(infer_grain("Terciado fenolico 18"), Grain::WithGrain);
        assert_eq!(infer_grain("CEDRO macizo"), Grain::WithGrain);
        assert_eq!(infer_grain("pino clear..."), Grain::WithGrain);
        assert_eq!(infer_grain("Fibroplus roble"), Grain::WithGrain);
    }

    #[test]
    fn test_plain_boards_have_no_grain() {
        assert_eq!(infer_grain("gris sombra..."), Grain::NoGrain);
        assert_eq!(infer_grain("MELA_BL"), Grain::NoGrain);
    }

    #[test]
    fn test_blank_material_has_no_grain() {
        assert_eq!(infer_grain(""), Grain::NoGrain);
        assert_eq!(infer_grain("   \t"), Grain::NoGrain);
    }

    #[test]
    fn test_inference_is_stable() {
        for material in ["cedro", "gris sombra", "", "pino"] {
            assert_eq!(infer_grain(material), infer_grain(material));
        }
    }
}
