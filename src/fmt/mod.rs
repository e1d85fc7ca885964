//! lispfmt formatting module
//!
//! Canonical reindentation of raw s-expression text, driven purely by a
//! running parenthesis-depth counter.

mod reindent;

pub use reindent::Reindenter;

/// Reindent one source string
///
/// Convenience wrapper over [`Reindenter`]. Always succeeds; unbalanced
/// parentheses degrade gracefully rather than erroring.
pub fn reindent(source: &str) -> String {
    Reindenter::new(source).reindent()
}
