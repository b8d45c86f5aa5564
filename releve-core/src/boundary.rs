//! Block boundary detection over raw converter output.

use regex::Regex;

use crate::error::ParseError;
use crate::template::TemplateConfig;

/// Byte span of the nearest boundary match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BoundaryMatch {
    pub start: usize,
    pub end: usize,
}

/// Earliest match of any pattern, by position in the text.
///
/// Patterns are probed independently; the nearest occurrence wins, not the
/// first pattern in the list. On a position tie the earlier pattern is kept.
pub(crate) fn find_nearest(text: &str, patterns: &[Regex]) -> Option<BoundaryMatch> {
    let mut nearest: Option<BoundaryMatch> = None;
    for pattern in patterns {
        if let Some(m) = pattern.find(text) {
            if nearest.is_none_or(|n| m.start() < n.start) {
                nearest = Some(BoundaryMatch {
                    start: m.start(),
                    end: m.end(),
                });
            }
        }
    }
    nearest
}

/// Carve the document into statement blocks, in discovery order.
///
/// Each block spans from the matched start line's terminator to the next end
/// match (exclusive), right-trimmed. The block text therefore begins with a
/// newline; the empty line it produces at index 0 is removed through the
/// template's `leading_rows_to_drop`.
///
/// A start match without a following end match fails the whole document, and
/// a document with no start match at all fails too; partial results are
/// never returned.
pub fn extract_blocks(text: &str, config: &TemplateConfig) -> Result<Vec<String>, ParseError> {
    let mut blocks = Vec::new();
    let mut cursor = 0usize;

    while let Some(start) = find_nearest(&text[cursor..], &config.start_patterns) {
        let match_start = cursor + start.start;
        let block_start = match text[match_start..].find('\n') {
            Some(newline) => match_start + newline,
            None => text.len(),
        };

        let Some(end) = find_nearest(&text[block_start..], &config.end_patterns) else {
            return Err(ParseError::EndBoundaryNotFound {
                blocks_closed: blocks.len(),
            });
        };

        let block = &text[block_start..block_start + end.start];
        blocks.push(block.trim_end().to_string());
        cursor = block_start + end.end;
    }

    if blocks.is_empty() {
        return Err(ParseError::StartBoundaryNotFound);
    }
    Ok(blocks)
}
