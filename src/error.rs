//! Error types for lispfmt

use thiserror::Error;

/// Parse errors for s-expression source
///
/// Only the parser produces errors. The reindenter is total over all text
/// inputs, including unbalanced nesting, and has no error surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A closing parenthesis with no open scope to close
    ///
    /// **Triggered by:** More `)` than open scopes at some point in the scan
    /// **Example:** `a)` or `(f x))`
    #[error("malformed input: unmatched ')' at line {line}, column {column}")]
    UnmatchedCloseParen {
        /// Line number of the stray `)` (1-indexed)
        line: usize,
        /// Column number of the stray `)` (1-indexed)
        column: usize,
    },

    /// One or more opening parentheses never closed before end of input
    ///
    /// **Triggered by:** Scopes still open when the source runs out
    /// **Example:** `(a (b)`
    #[error("malformed input: {count} unclosed '(' at end of input")]
    UnclosedParen {
        /// Number of scopes left open
        count: usize,
    },
}

/// Result type for lispfmt operations
pub type Result<T> = std::result::Result<T, Error>;
