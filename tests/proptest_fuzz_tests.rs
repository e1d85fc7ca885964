//! Property-based fuzzing tests for the lispfmt parser and reindenter
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. The parser never panics on arbitrary input
//! 2. The reindenter is total and idempotent over all inputs
//! 3. Generated trees survive a render-then-parse trip unchanged

use lispfmt::{parse, reindent, Expr};
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Generate random strings that might break the scanners
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F]{0,500}").unwrap()
}

/// Generate strings built from s-expression-shaped fragments, balanced or not
fn sexp_like_string() -> impl Strategy<Value = String> {
    prop::collection::vec(sexp_fragment(), 0..50).prop_map(|parts| parts.join(" "))
}

fn sexp_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just("define".to_string()),
        Just("lambda".to_string()),
        Just("\n".to_string()),
        Just("\t".to_string()),
        (-1000i64..1000i64).prop_map(|n| n.to_string()),
        "[a-z][a-z0-9_?!]{0,8}",
    ]
}

/// Generate arbitrary expression trees, bounded in depth and fan-out
fn arbitrary_expr() -> impl Strategy<Value = Expr> {
    let leaf = "[a-z][a-z0-9]{0,6}".prop_map(Expr::atom);
    leaf.prop_recursive(6, 64, 8, |inner| {
        prop::collection::vec(inner, 0..8).prop_map(Expr::list)
    })
}

// =============================================================================
// PARSER FUZZ TESTS
// =============================================================================

proptest! {
    /// The parser should never panic, only succeed or return an error
    #[test]
    fn parser_never_panics(source in arbitrary_source_string()) {
        let _ = parse(&source);
    }

    /// S-expression-shaped input never panics either
    #[test]
    fn parser_handles_sexp_like(source in sexp_like_string()) {
        let _ = parse(&source);
    }

    /// Deep uniform nesting parses and records its depth exactly
    #[test]
    fn parser_handles_deep_nesting(depth in 1usize..200) {
        let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
        let doc = parse(&source).unwrap();
        prop_assert_eq!(doc.nodes[0].max_depth(), depth);
    }

    /// A rendered tree parses back to the identical tree: the explicit stack
    /// restores every enclosing scope, whatever the shape
    #[test]
    fn render_then_parse_is_identity(expr in arbitrary_expr()) {
        let rendered = expr.to_string();
        let doc = parse(&rendered).unwrap();
        prop_assert_eq!(doc.nodes, vec![expr]);
    }

    /// Atom count equals the whitespace-delimited, paren-stripped token count
    #[test]
    fn atom_count_matches_tokens(expr in arbitrary_expr()) {
        let rendered = expr.to_string();
        let tokens = rendered.replace(['(', ')'], " ").split_whitespace().count();
        let doc = parse(&rendered).unwrap();
        prop_assert_eq!(doc.atom_count(), tokens);
    }

    /// Unbalanced variants of balanced sources fail instead of mis-parsing
    #[test]
    fn extra_closer_always_errors(expr in arbitrary_expr()) {
        let rendered = format!("{})", expr);
        prop_assert!(parse(&rendered).is_err());
    }
}

// =============================================================================
// REINDENTER FUZZ TESTS
// =============================================================================

proptest! {
    /// The reindenter is total: no input makes it panic or error
    #[test]
    fn reindent_never_panics(source in arbitrary_source_string()) {
        let _ = reindent(&source);
    }

    /// Reindenting twice equals reindenting once, for every input
    #[test]
    fn reindent_is_idempotent(source in arbitrary_source_string()) {
        let once = reindent(&source);
        prop_assert_eq!(reindent(&once), once);
    }

    /// Reindenting only touches leading whitespace: stripping each line's
    /// leading spaces and tabs from input and output gives the same text
    #[test]
    fn reindent_preserves_content(source in sexp_like_string()) {
        let strip = |text: &str| -> String {
            text.split('\n')
                .map(|line| line.trim_start_matches([' ', '\t']))
                .collect::<Vec<_>>()
                .join("\n")
        };
        prop_assert_eq!(strip(&reindent(&source)), strip(&source));
    }
}
