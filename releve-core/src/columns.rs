//! Fixed-width column inference from whitespace alignment.
//!
//! A well-aligned block keeps some character offsets blank in every row;
//! maximal runs of those offsets are the column gaps. The converter
//! right-trims lines, so offsets past the end of a short row count as blank.
//! All arithmetic is over characters, not bytes: accented statement text
//! must not split a column mid-code-point.

/// Half-open character span of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub start: usize,
    pub length: usize,
}

impl ColumnSpan {
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// A maximal run of globally-blank offsets, half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SpaceGroup {
    pub start: usize,
    pub end: usize,
}

/// Gaps seeded unconditionally over the date-pair region: single-digit days
/// or months can leave these offsets without a space in every row.
const DATE_GAP_SEEDS: [SpaceGroup; 2] = [
    SpaceGroup { start: 11, end: 12 },
    SpaceGroup { start: 22, end: 23 },
];

/// Intersect space offsets across all rows and group them into gaps.
///
/// Candidate offsets range over the first row's width. Runs of a single
/// offset and runs touching the left edge are alignment noise, not gaps.
/// The seeded date gaps are merged in afterwards; overlapping or touching
/// groups coalesce so a seed never splits a wider discovered gap.
pub(crate) fn find_space_groups(rows: &[String]) -> Vec<SpaceGroup> {
    let chars: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();
    let width = chars.first().map_or(0, Vec::len);

    let mut groups: Vec<SpaceGroup> = Vec::new();
    for offset in 0..width {
        let blank_everywhere = chars
            .iter()
            .all(|row| row.get(offset).copied().unwrap_or(' ') == ' ');
        if !blank_everywhere {
            continue;
        }
        match groups.last_mut() {
            Some(group) if group.end == offset => group.end += 1,
            _ => groups.push(SpaceGroup {
                start: offset,
                end: offset + 1,
            }),
        }
    }

    groups.retain(|g| g.end - g.start > 1 && g.start != 0);

    for seed in DATE_GAP_SEEDS {
        if seed.end <= width {
            groups.push(seed);
        }
    }
    groups.sort_by_key(|g| g.start);

    let mut merged: Vec<SpaceGroup> = Vec::new();
    for group in groups {
        match merged.last_mut() {
            Some(last) if group.start <= last.end => last.end = last.end.max(group.end),
            _ => merged.push(group),
        }
    }
    merged
}

/// Compute the block's column spans from its prepared rows.
///
/// The first column runs from offset 0 to the first gap; each later column
/// runs from the previous gap's end to the next gap's start; the last column
/// ends at the first row's width. Spans and gaps together tile
/// `[0, first-row width)` exactly, in order.
pub fn infer_columns(rows: &[String]) -> Vec<ColumnSpan> {
    let width = rows.first().map_or(0, |row| row.chars().count());

    let mut spans = Vec::new();
    let mut gap_end = 0usize;
    for group in find_space_groups(rows) {
        spans.push(ColumnSpan {
            start: gap_end,
            length: group.start - gap_end,
        });
        gap_end = group.end;
    }
    spans.push(ColumnSpan {
        start: gap_end,
        length: width.saturating_sub(gap_end),
    });
    spans
}
