//! lispfmt parser module
//!
//! Parses textual s-expressions into nested-list documents.

mod ast;
mod sexpr_parser;

pub use ast::{Document, Expr};
pub use sexpr_parser::SExprParser;

use crate::error::Result;

/// Parse one source string into a [`Document`]
///
/// Convenience wrapper over [`SExprParser`]. Fails on unbalanced
/// parentheses; see [`crate::error::Error`].
pub fn parse(source: &str) -> Result<Document> {
    let doc = SExprParser::new(source).parse()?;
    tracing::debug!("parsed {} top-level forms", doc.nodes.len());
    Ok(doc)
}
