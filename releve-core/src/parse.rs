//! Document-level parsing pipeline.
//!
//! Blocks are parsed independently (column spans are inferred per block from
//! its own prepared rows) and their merged rows concatenated in discovery
//! order. Nothing here touches the filesystem; the input is the converter's
//! text output and the result is rows or a fatal error.

use tracing::debug;

use crate::boundary::extract_blocks;
use crate::columns::infer_columns;
use crate::error::ParseError;
use crate::rows::{Row, merge_rows, parse_row, prepare_rows};
use crate::template::{Template, TemplateConfig};
use crate::transaction::Transaction;

/// Parse raw converter output into merged rows.
pub fn parse_document(text: &str, config: &TemplateConfig) -> Result<Vec<Row>, ParseError> {
    let blocks = extract_blocks(text, config)?;
    let mut rows = Vec::new();
    for block in &blocks {
        rows.extend(parse_block(block, config));
    }
    Ok(rows)
}

/// Parse and normalize in one step.
pub fn extract_transactions(
    text: &str,
    template: &dyn Template,
) -> Result<Vec<Transaction>, ParseError> {
    let rows = parse_document(text, template.configuration())?;
    Ok(template.format(&rows))
}

fn parse_block(block: &str, config: &TemplateConfig) -> Vec<Row> {
    let prepared = prepare_rows(block, config);
    if prepared.is_empty() {
        return Vec::new();
    }
    let spans = infer_columns(&prepared);
    debug!(columns = spans.len(), "inferred column spans");

    let parsed = prepared.iter().map(|line| parse_row(&spans, line)).collect();
    merge_rows(parsed, &config.anchor_columns)
}
