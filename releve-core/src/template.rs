use regex::Regex;

use crate::rows::Row;
use crate::transaction::Transaction;

/// Declarative, per-institution extraction settings.
///
/// Templates are declared in code (see the releve-templates crate); the
/// patterns are compiled when the template is constructed, so a bad pattern
/// surfaces at registry build time rather than mid-parse.
#[derive(Debug, Clone)]
pub struct TemplateConfig {
    /// Stable identifier used for selection (e.g. "sg_pro").
    pub id: String,
    /// Human-readable institution / account name.
    pub name: String,
    /// Patterns opening a statement block. The block body starts on the line
    /// after the match.
    pub start_patterns: Vec<Regex>,
    /// Patterns closing a statement block (exclusive).
    pub end_patterns: Vec<Regex>,
    /// Zero-based line indices dropped from the head of every block.
    pub leading_rows_to_drop: Vec<usize>,
    /// Case-sensitive substrings; any block line containing one is discarded
    /// before column inference.
    pub noise_tokens: Vec<String>,
    /// Column indices whose blank cells mark a continuation row.
    pub anchor_columns: Vec<usize>,
}

/// A bank-statement template: extraction settings plus row normalization.
///
/// One implementation per institution, selected by id through the registry
/// before parsing begins.
pub trait Template: Send + Sync {
    fn configuration(&self) -> &TemplateConfig;

    /// Normalize merged rows into transactions.
    ///
    /// Rows with fewer than four cells become placeholder transactions,
    /// never errors.
    fn format(&self, rows: &[Row]) -> Vec<Transaction>;
}
