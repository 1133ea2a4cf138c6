pub mod blocks;
pub mod lines;
pub mod row;
pub mod summary;

use crate::extraction::{join_pages, PageContent};
use crate::model::{CutPiece, ExtractedDocument, SkippedLine};
use blocks::extract_cut_list_blocks;
use lines::{classify, LineKind, LineState};
use row::decode_row;
use summary::parse_thickness_table;

/// Parse extracted page content into cut pieces and the thickness table.
///
/// Never fails: a document without a cutting list simply yields no pieces.
pub fn parse_pages(pages: &[PageContent]) -> ExtractedDocument {
    let text = join_pages(pages);

    let mut pieces = Vec::new();
    let mut skipped_lines = Vec::new();
    for block in extract_cut_list_blocks(&text) {
        let parsed = parse_cut_list_block(block);
        pieces.extend(parsed.pieces);
        skipped_lines.extend(parsed.skipped_lines);
    }

    ExtractedDocument {
        pieces,
        thickness: parse_thickness_table(&text),
        skipped_lines,
    }
}

/// State threaded from line to line within one cutting-list block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockState {
    pub line: LineState,
    /// Furniture unit the following rows belong to.
    pub group: String,
}

#[derive(Debug, Default)]
pub struct ParsedBlock {
    pub pieces: Vec<CutPiece>,
    pub skipped_lines: Vec<SkippedLine>,
}

/// What a single line contributes to the block.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Ignored,
    Group,
    Piece(CutPiece),
    Skipped(SkippedLine),
}

/// Advance the block state by one trimmed, non-empty line.
pub fn step(state: BlockState, line: &str) -> (BlockState, LineOutcome) {
    let class = classify(line, state.line);
    let line_state = LineState {
        previous_was_date: class.is_date,
    };

    match class.kind {
        LineKind::GroupLabel => (
            BlockState {
                line: line_state,
                group: line.to_string(),
            },
            LineOutcome::Group,
        ),
        LineKind::DataRow => {
            let outcome = match decode_row(line, &state.group) {
                Ok(piece) => LineOutcome::Piece(piece),
                Err(skip) => {
                    log::debug!("skipped cutting-list line {:?}: {}", line, skip);
                    LineOutcome::Skipped(SkippedLine {
                        line_text: line.to_string(),
                        reason: skip.to_string(),
                    })
                }
            };
            (
                BlockState {
                    line: line_state,
                    group: state.group,
                },
                outcome,
            )
        }
        LineKind::PageHeaderNoise | LineKind::SectionTitle | LineKind::TableHeader => (
            BlockState {
                line: line_state,
                group: state.group,
            },
            LineOutcome::Ignored,
        ),
    }
}

/// Parse one cutting-list block. Each block starts without a group.
pub fn parse_cut_list_block(block: &str) -> ParsedBlock {
    let mut parsed = ParsedBlock::default();
    let mut state = BlockState::default();

    for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (next, outcome) = step(state, line);
        state = next;
        match outcome {
            LineOutcome::Piece(piece) => parsed.pieces.push(piece),
            LineOutcome::Skipped(skipped) => parsed.skipped_lines.push(skipped),
            LineOutcome::Ignored | LineOutcome::Group => {}
        }
    }

    parsed
}
