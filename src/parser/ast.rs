use serde::{Deserialize, Serialize};
use std::fmt;

/// A single node in a parsed s-expression tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// An indivisible token: a maximal run of non-paren, non-whitespace
    /// characters, kept verbatim (no numeric or quote interpretation)
    Atom(String),
    /// One matched `( ... )` pair, children in source order
    List(Vec<Expr>),
}

impl Expr {
    /// Build an atom from anything string-like
    pub fn atom(token: impl Into<String>) -> Self {
        Expr::Atom(token.into())
    }

    /// Build a list from its children
    pub fn list(children: Vec<Expr>) -> Self {
        Expr::List(children)
    }

    /// Check whether this node is an atom
    pub fn is_atom(&self) -> bool {
        matches!(self, Expr::Atom(_))
    }

    /// Check whether this node is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Expr::List(_))
    }

    /// Total number of atoms in this subtree
    pub fn atom_count(&self) -> usize {
        match self {
            Expr::Atom(_) => 1,
            Expr::List(children) => children.iter().map(Expr::atom_count).sum(),
        }
    }

    /// Nesting depth of the deepest list under this node
    ///
    /// An atom has depth 0; a list is one deeper than its deepest child.
    pub fn max_depth(&self) -> usize {
        match self {
            Expr::Atom(_) => 0,
            Expr::List(children) => {
                1 + children.iter().map(Expr::max_depth).max().unwrap_or(0)
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Atom(token) => write!(f, "{}", token),
            Expr::List(children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// The full parse result of one source string
///
/// Holds the implicit top-level sequence: zero or more expressions in source
/// order. Owns its entire subtree exclusively; parenthesis nesting is
/// strictly tree-shaped, so there is no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Document {
    /// Top-level expressions in source order
    pub nodes: Vec<Expr>,
}

impl Document {
    /// Create a document from its top-level expressions
    pub fn new(nodes: Vec<Expr>) -> Self {
        Document { nodes }
    }

    /// Total number of atoms across all top-level expressions
    pub fn atom_count(&self) -> usize {
        self.nodes.iter().map(Expr::atom_count).sum()
    }

    /// True when the source held no atoms and no lists
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}
