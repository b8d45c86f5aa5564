//! releve-core: layout inference and row extraction for column-aligned bank-statement text

pub mod boundary;
pub mod columns;
pub mod error;
pub mod parse;
pub mod rows;
pub mod template;
pub mod transaction;

pub use boundary::extract_blocks;
pub use columns::{ColumnSpan, infer_columns};
pub use error::ParseError;
pub use parse::{extract_transactions, parse_document};
pub use rows::{Row, merge_rows, parse_row, prepare_rows};
pub use template::{Template, TemplateConfig};
pub use transaction::{Transaction, debit_credit_value, parse_slash_date};
