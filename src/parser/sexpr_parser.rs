use super::ast::{Document, Expr};
use crate::error::{Error, Result};

/// Stack-based parser for s-expression source text
///
/// Builds the nested-list tree in a single forward scan. An explicit stack of
/// open-list frames keeps the parser correct at arbitrary nesting depth: a
/// `)` restores the grandparent scope by popping, which a single
/// parent-pointer scheme cannot do beyond two levels.
pub struct SExprParser {
    /// Source code as character vector
    source: Vec<char>,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
}

impl SExprParser {
    /// Creates a new parser from source code
    pub fn new(source: &str) -> Self {
        SExprParser {
            source: source.chars().collect(),
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Parses the entire source into a [`Document`]
    ///
    /// All-or-nothing per input string: unbalanced parentheses surface as a
    /// typed error, never as a partial tree.
    pub fn parse(&mut self) -> Result<Document> {
        // stack[0] is the implicit top-level sequence; it is never popped.
        let mut stack: Vec<Vec<Expr>> = vec![Vec::new()];
        let mut word = String::new();

        while !self.is_at_end() {
            let line = self.line;
            let column = self.column;
            let c = self.advance();

            match c {
                '(' => {
                    Self::flush_word(&mut word, &mut stack);
                    stack.push(Vec::new());
                }
                ')' => {
                    Self::flush_word(&mut word, &mut stack);
                    if stack.len() == 1 {
                        return Err(Error::UnmatchedCloseParen { line, column });
                    }
                    // Restore the enclosing scope; the finished list becomes
                    // a child of it.
                    let finished = stack.pop().unwrap_or_default();
                    if let Some(parent) = stack.last_mut() {
                        parent.push(Expr::List(finished));
                    }
                }
                c if c.is_whitespace() => {
                    Self::flush_word(&mut word, &mut stack);
                }
                c => word.push(c),
            }
        }

        Self::flush_word(&mut word, &mut stack);

        if stack.len() != 1 {
            return Err(Error::UnclosedParen {
                count: stack.len() - 1,
            });
        }

        Ok(Document::new(stack.pop().unwrap_or_default()))
    }

    /// Move a completed word into the innermost open list, if any word is
    /// pending
    fn flush_word(word: &mut String, stack: &mut Vec<Vec<Expr>>) {
        if word.is_empty() {
            return;
        }
        if let Some(top) = stack.last_mut() {
            top.push(Expr::Atom(std::mem::take(word)));
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }
}
