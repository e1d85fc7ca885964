//! Depth-driven reindentation of s-expression source
//!
//! Rewrites each line's leading whitespace to two spaces per parenthesis
//! nesting level, leaving every other character untouched. No tree is built;
//! a running depth counter is the only state.

/// Indent emitted per nesting level
const INDENT_UNIT: &str = "  ";

/// Reindents s-expression source by paren-nesting depth
///
/// Total over all inputs: unbalanced nesting never fails, the running depth
/// simply drifts and emitted indentation is clamped at zero. The transform is
/// idempotent, since the strip pass removes exactly the indentation the
/// reflow pass emits.
pub struct Reindenter {
    /// Original source code
    source: String,
}

impl Reindenter {
    /// Create a new reindenter over the given source
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Produce the reindented text
    pub fn reindent(&self) -> String {
        let stripped = self.strip_leading_whitespace();
        Self::apply_indentation(&stripped)
    }

    /// First pass: drop each line's existing leading spaces and tabs
    ///
    /// A per-line flag records whether the line has produced a
    /// non-whitespace character yet; it starts false and resets at every
    /// newline. Interior whitespace and the newlines themselves pass through.
    fn strip_leading_whitespace(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut line_started = false;

        for c in self.source.chars() {
            match c {
                ' ' | '\t' if !line_started => {}
                '\n' => {
                    out.push(c);
                    line_started = false;
                }
                _ => {
                    out.push(c);
                    line_started = true;
                }
            }
        }

        out
    }

    /// Second pass: copy through, appending indent after every newline
    ///
    /// Depth counts `(` up and `)` down as characters are emitted, so the
    /// indent written after a newline reflects the nesting in effect at the
    /// start of the next line. Negative depth contributes no indent.
    fn apply_indentation(stripped: &str) -> String {
        let mut out = String::with_capacity(stripped.len());
        let mut depth: i32 = 0;

        for c in stripped.chars() {
            out.push(c);
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                '\n' => {
                    for _ in 0..depth.max(0) {
                        out.push_str(INDENT_UNIT);
                    }
                }
                _ => {}
            }
        }

        if depth != 0 {
            tracing::debug!("unbalanced input while reindenting (final depth {})", depth);
        }

        out
    }
}
