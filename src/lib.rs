//! # lispfmt - S-Expression Parsing and Reindentation
//!
//! A small library (and command-line tool) for Lisp-family source text. It
//! does exactly two things, each a pure text-in transform with no shared
//! state:
//!
//! - **Parse**: turn parenthesized, whitespace-delimited source into a tree
//!   of nested ordered sequences ([`Document`] of [`Expr`] nodes).
//! - **Reindent**: rewrite raw source so every line is indented two spaces
//!   per parenthesis-nesting level, without ever building a tree.
//!
//! ## Quick Start
//!
//! Parse source into a tree:
//!
//! ```rust
//! use lispfmt::{parse, Expr};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = parse("(cons 1 2)")?;
//!
//! assert_eq!(
//!     doc.nodes,
//!     vec![Expr::list(vec![
//!         Expr::atom("cons"),
//!         Expr::atom("1"),
//!         Expr::atom("2"),
//!     ])]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Reindent source text:
//!
//! ```rust
//! use lispfmt::reindent;
//!
//! assert_eq!(reindent("(a\n(b\n)\n)"), "(a\n  (b\n    )\n  )");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Text → SExprParser → Document          (tree of atoms and lists)
//! Source Text → Reindenter  → Reformatted Text  (depth counter only)
//! ```
//!
//! The two components are independent: the reindenter never parses, and the
//! parser never formats. Both are synchronous, allocation-per-call pure
//! functions, safe to call concurrently from any number of threads.
//!
//! ## Error Handling
//!
//! Parsing is all-or-nothing: unbalanced parentheses produce a typed
//! [`Error`] rather than a partial tree.
//!
//! ```rust
//! use lispfmt::parse;
//!
//! assert!(parse("(a (b)").is_err());
//! assert!(parse("a)").is_err());
//! ```
//!
//! Reindenting is total: malformed nesting degrades gracefully, with emitted
//! indentation clamped at zero.

/// Version of the lispfmt crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod fmt;
pub mod parser;

// Re-export main types
pub use error::{Error, Result};
pub use fmt::{reindent, Reindenter};
pub use parser::{parse, Document, Expr, SExprParser};

/// Type alias for the s-expression parser.
/// Converts raw source text into a nested-list [`Document`].
pub type Parser = SExprParser;
