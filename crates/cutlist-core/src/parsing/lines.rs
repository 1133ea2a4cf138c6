use once_cell::sync::Lazy;
use regex::Regex;

/// Section titles repeated at the top of every cutting-list page.
pub const SECTION_TITLES: &[&str] = &[
    "Lista de Corte (Dimensiones Netas)",
    "Lista de Corte (Dimensiones Netas) (Siguiente)",
];

static VERSION_STAMP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)PolyBoard\s+\d+\.\d+").expect("version stamp pattern"));
static PAGE_STAMP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Página\s+\d+/\d+\s*$").expect("page stamp pattern"));
static DATE_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}\s*$").expect("date pattern"));
static DIMENSION_TRIPLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.?\d*\s+\d+\.?\d*\s+\d+\b").expect("dimension triple pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Tool stamp, date, project name or page counter.
    PageHeaderNoise,
    SectionTitle,
    TableHeader,
    /// Furniture unit name scoping the rows below it.
    GroupLabel,
    DataRow,
}

/// State carried from one retained line to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    pub previous_was_date: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub kind: LineKind,
    /// Whether the line itself is a date-only line.
    pub is_date: bool,
}

/// A named predicate; the first rule whose predicate holds decides the kind.
pub struct LineRule {
    pub name: &'static str,
    pub kind: LineKind,
    pub matches: fn(&str, LineState) -> bool,
}

/// Classification rules in priority order. Lines matching none are data rows.
pub static LINE_RULES: &[LineRule] = &[
    LineRule {
        name: "empty",
        kind: LineKind::PageHeaderNoise,
        matches: is_empty,
    },
    LineRule {
        name: "version-stamp",
        kind: LineKind::PageHeaderNoise,
        matches: is_version_stamp,
    },
    LineRule {
        name: "date",
        kind: LineKind::PageHeaderNoise,
        matches: is_date,
    },
    LineRule {
        name: "page-stamp",
        kind: LineKind::PageHeaderNoise,
        matches: is_page_stamp,
    },
    LineRule {
        name: "project-name",
        kind: LineKind::PageHeaderNoise,
        matches: is_project_name,
    },
    LineRule {
        name: "section-title",
        kind: LineKind::SectionTitle,
        matches: is_section_title,
    },
    LineRule {
        name: "table-header",
        kind: LineKind::TableHeader,
        matches: is_header_row,
    },
    LineRule {
        name: "group-label",
        kind: LineKind::GroupLabel,
        matches: is_group_label,
    },
];

fn is_empty(line: &str, _: LineState) -> bool {
    line.is_empty()
}

fn is_version_stamp(line: &str, _: LineState) -> bool {
    VERSION_STAMP.is_match(line)
}

fn is_date(line: &str, _: LineState) -> bool {
    is_date_line(line)
}

fn is_page_stamp(line: &str, _: LineState) -> bool {
    PAGE_STAMP.is_match(line)
}

/// The project name always follows the date stamp and carries no digits.
/// A table header never counts as one, whatever precedes it.
fn is_project_name(line: &str, state: LineState) -> bool {
    state.previous_was_date
        && !line.chars().any(|c| c.is_ascii_digit())
        && !is_table_header(line)
}

fn is_section_title(line: &str, _: LineState) -> bool {
    SECTION_TITLES.contains(&line)
}

fn is_header_row(line: &str, _: LineState) -> bool {
    is_table_header(line)
}

fn is_group_label(line: &str, _: LineState) -> bool {
    !DIMENSION_TRIPLE.is_match(line)
}

/// True if the line is nothing but a `d/m/yyyy` date.
pub fn is_date_line(line: &str) -> bool {
    DATE_ONLY.is_match(line.trim())
}

/// Detect the column header row of the cutting-list table.
pub fn is_table_header(line: &str) -> bool {
    (line.contains("Material") && line.contains("Referencia") && line.contains("Altura"))
        || line.contains("Alture")
        || (line.contains("Anchura") && line.contains("Cantidad"))
}

/// Classify one trimmed line of a cutting-list block.
pub fn classify(line: &str, state: LineState) -> Classification {
    let line = line.trim();
    let kind = LINE_RULES
        .iter()
        .find(|rule| (rule.matches)(line, state))
        .map(|rule| {
            log::trace!("line {:?} matched rule {}", line, rule.name);
            rule.kind
        })
        .unwrap_or(LineKind::DataRow);

    Classification {
        kind,
        is_date: is_date_line(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AFTER_DATE: LineState = LineState {
        previous_was_date: true,
    };

    fn kind(line: &str) -> LineKind {
        classify(line, LineState::default()).kind
    }

    #[test]
    fn test_page_header_lines_are_noise() {
        assert_eq!(kind("PolyBoard 7.08a"), LineKind::PageHeaderNoise);
        assert_eq!(kind("polyboard 6.1 - informe"), LineKind::PageHeaderNoise);
        assert_eq!(kind("Página 3/12"), LineKind::PageHeaderNoise);
        assert_eq!(kind(""), LineKind::PageHeaderNoise);
    }

    #[test]
    fn test_date_line_sets_is_date() {
        let c = classify("13/2/2025", LineState::default());
        assert_eq!(c.kind, LineKind::PageHeaderNoise);
        assert!(c.is_date);

        let c = classify("05/11/2024", LineState::default());
        assert!(c.is_date);

        assert!(!classify("alacena tati", LineState::default()).is_date);
    }

    #[test]
    fn test_project_name_after_date_is_noise() {
        assert_eq!(
            classify("Cocina Martinez", AFTER_DATE).kind,
            LineKind::PageHeaderNoise
        );
        // Without the preceding date the same line names a furniture group.
        assert_eq!(kind("Cocina Martinez"), LineKind::GroupLabel);
    }

    #[test]
    fn test_line_with_digit_after_date_is_not_project_name() {
        let c = classify("gris sombra... RF001 600.4 350.2 2 No", AFTER_DATE);
        assert_eq!(c.kind, LineKind::DataRow);
    }

    #[test]
    fn test_section_titles() {
        assert_eq!(
            kind("Lista de Corte (Dimensiones Netas)"),
            LineKind::SectionTitle
        );
        assert_eq!(
            kind("Lista de Corte (Dimensiones Netas) (Siguiente)"),
            LineKind::SectionTitle
        );
    }

    #[test]
    fn test_table_header_regardless_of_date_flag() {
        let headers = [
            "Material Referencia Altura Anchura Cantidad Fibra",
            "Material Referencia Alture Anchura",
            "Anchura Cantidad Izquierda Derecha",
        ];
        for header in headers {
            assert_eq!(kind(header), LineKind::TableHeader, "{header}");
            assert_eq!(
                classify(header, AFTER_DATE).kind,
                LineKind::TableHeader,
                "{header}"
            );
        }
    }

    #[test]
    fn test_group_label_has_no_dimension_triple() {
        assert_eq!(kind("alacena tati"), LineKind::GroupLabel);
        assert_eq!(kind("mueble 2 puertas"), LineKind::GroupLabel);
        assert_eq!(kind("closet unit"), LineKind::GroupLabel);
    }

    #[test]
    fn test_data_row() {
        assert_eq!(
            kind("gris sombra... Estante Fij... 563.0 300.5 2 No PAPIER PAPIER PAPIER PAPIER"),
            LineKind::DataRow
        );
        assert_eq!(kind("MELA 720 560 1"), LineKind::DataRow);
    }

    #[test]
    fn test_rules_are_uniquely_named() {
        let mut names: Vec<&str> = LINE_RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), LINE_RULES.len());
    }
}
