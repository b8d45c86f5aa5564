//! Row preparation, slicing, and continuation merging.

use tracing::debug;

use crate::columns::ColumnSpan;
use crate::template::TemplateConfig;

/// One statement row: trimmed cells, arity equal to the block's span count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Cell at `index`, or `""` past the end.
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map_or("", String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// Split a block into lines and drop configured leading and noise lines.
///
/// Leading drops go by zero-based line index; noise drops are case-sensitive
/// substring matches over the remaining lines. Survivor order is preserved.
/// Filtering happens before column inference, so noise lines never skew the
/// space intersection.
pub fn prepare_rows(block: &str, config: &TemplateConfig) -> Vec<String> {
    let survivors: Vec<String> = block
        .lines()
        .enumerate()
        .filter(|(index, _)| !config.leading_rows_to_drop.contains(index))
        .filter(|(_, line)| {
            !config
                .noise_tokens
                .iter()
                .any(|token| line.contains(token.as_str()))
        })
        .map(|(_, line)| line.to_string())
        .collect();
    debug!(rows = survivors.len(), "prepared block\n{}", survivors.join("\n"));
    survivors
}

/// Slice one raw line into trimmed cells.
///
/// Offsets are character-based and saturate: a line shorter than the span
/// set yields empty cells, never an error.
pub fn parse_row(spans: &[ColumnSpan], raw: &str) -> Row {
    let chars: Vec<char> = raw.chars().collect();
    let cells = spans
        .iter()
        .map(|span| {
            let start = span.start.min(chars.len());
            let end = span.end().min(chars.len());
            chars[start..end]
                .iter()
                .collect::<String>()
                .trim()
                .to_string()
        })
        .collect();
    Row::new(cells)
}

/// Fold continuation rows into their predecessors.
///
/// From the second row of a block onward, a row whose cell at any configured
/// anchor column is empty is concatenated cell-wise (no separator) onto the
/// most recently emitted row. Merging only ever reduces the row count; it
/// never reorders.
pub fn merge_rows(parsed: Vec<Row>, anchor_columns: &[usize]) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::with_capacity(parsed.len());
    let mut last_emitted = 0usize;

    for (index, row) in parsed.into_iter().enumerate() {
        let continuation = index > 0
            && anchor_columns
                .iter()
                .any(|&anchor| row.cell(anchor).is_empty());

        if continuation {
            let target = &mut rows[last_emitted];
            for (dst, src) in target.cells.iter_mut().zip(row.cells.iter()) {
                dst.push_str(src);
            }
        } else {
            rows.push(row);
            last_emitted = rows.len() - 1;
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn config(leading: Vec<usize>, noise: Vec<&str>) -> TemplateConfig {
        TemplateConfig {
            id: "test".to_string(),
            name: "test".to_string(),
            start_patterns: vec![Regex::new("START").unwrap()],
            end_patterns: vec![Regex::new("END").unwrap()],
            leading_rows_to_drop: leading,
            noise_tokens: noise.into_iter().map(str::to_string).collect(),
            anchor_columns: vec![0],
        }
    }

    fn row(cells: &[&str]) -> Row {
        Row::new(cells.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_prepare_drops_leading_indices() {
        let block = "\nfirst data\nsecond data";
        let rows = prepare_rows(block, &config(vec![0], vec![]));
        assert_eq!(rows, vec!["first data".to_string(), "second data".to_string()]);
    }

    #[test]
    fn test_prepare_drops_noise_lines_by_substring() {
        let block = "keep one\n  TOTAL OF EVERYTHING  \nkeep two";
        let rows = prepare_rows(block, &config(vec![], vec!["TOTAL"]));
        assert_eq!(rows, vec!["keep one".to_string(), "keep two".to_string()]);
    }

    #[test]
    fn test_prepare_noise_match_is_case_sensitive() {
        let block = "total in lowercase survives";
        let rows = prepare_rows(block, &config(vec![], vec!["TOTAL"]));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_parse_row_trims_cells() {
        let spans = [
            ColumnSpan { start: 0, length: 6 },
            ColumnSpan { start: 8, length: 6 },
        ];
        let parsed = parse_row(&spans, "ab      cd    ");
        assert_eq!(parsed.cells(), ["ab".to_string(), "cd".to_string()]);
    }

    #[test]
    fn test_parse_row_short_line_yields_empty_cells() {
        let spans = [
            ColumnSpan { start: 0, length: 4 },
            ColumnSpan { start: 6, length: 4 },
            ColumnSpan { start: 12, length: 4 },
        ];
        let parsed = parse_row(&spans, "abcd  ef");
        assert_eq!(
            parsed.cells(),
            ["abcd".to_string(), "ef".to_string(), String::new()]
        );
    }

    #[test]
    fn test_parse_row_counts_characters_not_bytes() {
        let spans = [
            ColumnSpan { start: 0, length: 6 },
            ColumnSpan { start: 8, length: 4 },
        ];
        let parsed = parse_row(&spans, "RELEVÉ  1234");
        assert_eq!(parsed.cells(), ["RELEVÉ".to_string(), "1234".to_string()]);
    }

    #[test]
    fn test_no_empty_anchor_means_no_merging() {
        let parsed = vec![row(&["a", "1"]), row(&["b", "2"]), row(&["c", "3"])];
        let merged = merge_rows(parsed, &[0]);
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_continuation_concatenates_cell_wise() {
        let parsed = vec![row(&["21/03", "CARTE RESTAU", "15,00"]), row(&["", "PARIS", ""])];
        let merged = merge_rows(parsed, &[0]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].cell(0), "21/03");
        assert_eq!(merged[0].cell(1), "CARTE RESTAUPARIS");
        assert_eq!(merged[0].cell(2), "15,00");
    }

    #[test]
    fn test_first_row_is_never_a_continuation() {
        let parsed = vec![row(&["", "orphan continuation"]), row(&["b", "data"])];
        let merged = merge_rows(parsed, &[0]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].cell(1), "orphan continuation");
    }

    #[test]
    fn test_consecutive_continuations_pile_onto_same_row() {
        let parsed = vec![
            row(&["a", "one"]),
            row(&["", "-two"]),
            row(&["", "-three"]),
            row(&["b", "next"]),
        ];
        let merged = merge_rows(parsed, &[0]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].cell(1), "one-two-three");
        assert_eq!(merged[1].cell(1), "next");
    }

    #[test]
    fn test_continuation_when_any_anchor_empty() {
        // OR semantics across anchors: one empty anchor cell is enough.
        let parsed = vec![row(&["a", "x", "one"]), row(&["b", "", "/two"])];
        let merged = merge_rows(parsed, &[0, 1]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].cell(2), "one/two");
    }
}
