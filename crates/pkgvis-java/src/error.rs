//! Errors surfaced by the check engine.

use crate::source::Position;

/// Errors raised while checking a single source file.
///
/// Everything here indicates either unparseable input or a violated tree
/// invariant; expected outcomes (marker found / not found) never produce an
/// error, only violations.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The Java grammar could not be loaded into the parser.
    #[error("failed to load Java grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// Tree-sitter produced no syntax tree for the input.
    #[error("tree-sitter produced no syntax tree")]
    Parse,

    /// A checked declaration has no name token.
    #[error("malformed tree: {kind} declaration at line {line} has no name token")]
    MissingName {
        /// Declaration kind (e.g. `"class"`).
        kind: &'static str,
        /// 1-indexed line of the declaration.
        line: usize,
    },

    /// A search window's start bound came after its end bound.
    #[error("search window out of order: start {start:?} after end {end:?}")]
    WindowOrder {
        /// Computed start bound.
        start: Position,
        /// Computed end bound.
        end: Position,
    },

    /// A position fell outside the actual line bounds while slicing.
    #[error("position outside line bounds: {0}")]
    SliceBounds(String),
}
