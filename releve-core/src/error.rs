use thiserror::Error;

/// Fatal, per-document parse failures.
///
/// Either kind aborts the whole document: blocks already closed before the
/// failure are discarded. Row-level problems never show up here; short rows
/// degrade to placeholder transactions instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No start pattern ever matched in the document.
    #[error("no start boundary matched in document")]
    StartBoundaryNotFound,

    /// A start pattern matched but no end pattern followed before end of text.
    #[error("no end boundary matched ({blocks_closed} blocks closed before failure)")]
    EndBoundaryNotFound { blocks_closed: usize },
}
