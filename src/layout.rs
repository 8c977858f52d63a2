//! Line buffer used by the renderer.
//!
//! A [`Writer`] receives pieces of text together with their syntactic role
//! and decides the spacing between them. It also runs in a measuring mode,
//! where it only tracks the width of a single line and records whether any
//! line break was requested.

/// Syntactic role of a piece of output, used for spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Piece {
    /// Identifiers, literals, parameters; `operand: false` for keywords.
    Word { operand: bool },
    /// Opening bracket. `attached` openers follow their operand without a
    /// space (`count(`, `arr[`).
    Open { attached: bool },
    Close,
    Comma,
    Operator { dense: bool },
    Comment,
    Semicolon,
}

/// What the current line ends with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    LineStart,
    Open,
    Operand,
    Keyword,
    Operator { dense: bool, unary: bool },
    Comma,
    Comment,
}

fn needs_space(prev: Prev, piece: Piece) -> bool {
    match (prev, piece) {
        (Prev::LineStart, _) => false,
        (_, Piece::Comment) => true,
        (_, Piece::Close | Piece::Comma | Piece::Semicolon) => false,
        (Prev::Open, _) => false,
        (_, Piece::Open { attached: true }) => false,
        (Prev::Operator { .. }, Piece::Operator { .. }) => true,
        (Prev::Operator { unary: true, .. }, _) => false,
        (Prev::Operator { dense: true, .. }, _) | (_, Piece::Operator { dense: true }) => false,
        _ => true,
    }
}

pub(crate) struct Writer {
    unit: String,
    lines: Vec<String>,
    line: String,
    prev: Prev,
    level: usize,
    pending_break: bool,
    inline_depth: usize,
    measuring: bool,
    broken: bool,
}

impl Writer {
    pub(crate) fn new(unit: &str) -> Self {
        Self {
            unit: unit.to_string(),
            lines: Vec::new(),
            line: String::new(),
            prev: Prev::LineStart,
            level: 0,
            pending_break: false,
            inline_depth: 0,
            measuring: false,
            broken: false,
        }
    }

    /// A writer that lays everything out on one line and reports its width.
    pub(crate) fn measuring() -> Self {
        Self {
            inline_depth: 1,
            measuring: true,
            ..Self::new("")
        }
    }

    /// Width of the measured line, or `None` when a break was required.
    pub(crate) fn measured_width(&self) -> Option<usize> {
        (!self.broken).then(|| self.column())
    }

    pub(crate) fn is_inline(&self) -> bool {
        self.inline_depth > 0
    }

    pub(crate) fn begin_inline(&mut self) {
        self.inline_depth += 1;
    }

    pub(crate) fn end_inline(&mut self) {
        self.inline_depth = self.inline_depth.saturating_sub(1);
    }

    pub(crate) fn level(&self) -> usize {
        self.level
    }

    /// Indentation level used by a pending line break.
    pub(crate) fn set_level(&mut self, level: usize) {
        self.level = level;
    }

    pub(crate) fn at_line_start(&self) -> bool {
        self.prev == Prev::LineStart
    }

    pub(crate) fn prev_is_operand(&self) -> bool {
        self.prev == Prev::Operand
    }

    /// Characters on the current line, indentation included.
    pub(crate) fn column(&self) -> usize {
        let last = self.line.rsplit('\n').next().unwrap_or("");
        last.chars().count()
    }

    /// Start a new line at `level`. An empty current line is re-indented
    /// instead, so no blank lines are produced.
    pub(crate) fn newline(&mut self, level: usize) {
        self.pending_break = false;
        if self.measuring {
            self.broken = true;
            return;
        }
        if self.prev != Prev::LineStart {
            let line = std::mem::take(&mut self.line);
            self.lines.push(line.trim_end().to_string());
        }
        self.line = self.unit.repeat(level);
        self.level = level;
        self.prev = Prev::LineStart;
    }

    /// Require a line break before the next piece.
    pub(crate) fn break_after(&mut self) {
        if self.measuring {
            self.broken = true;
        }
        self.pending_break = true;
    }

    /// Mark the current measurement as not fitting on one line.
    pub(crate) fn force_break(&mut self) {
        if self.measuring {
            self.broken = true;
        }
    }

    pub(crate) fn push(&mut self, text: &str, piece: Piece) {
        if self.pending_break {
            self.newline(self.level);
        }
        if needs_space(self.prev, piece) || self.would_glue(text) {
            self.line.push(' ');
        }
        self.line.push_str(text);
        self.prev = match piece {
            Piece::Word { operand: true } | Piece::Close | Piece::Semicolon => Prev::Operand,
            Piece::Word { operand: false } => Prev::Keyword,
            Piece::Open { .. } => Prev::Open,
            Piece::Comma => Prev::Comma,
            Piece::Comment => Prev::Comment,
            Piece::Operator { dense } => Prev::Operator {
                dense,
                unary: matches!(text, "+" | "-") && self.prev != Prev::Operand,
            },
        };
    }

    /// Whether appending `text` directly would form a comment opener.
    fn would_glue(&self, text: &str) -> bool {
        match (self.line.chars().last(), text.chars().next()) {
            (Some(a), Some(b)) => matches!((a, b), ('-', '-') | ('/', '*')),
            _ => false,
        }
    }

    /// Pad the current line with spaces up to `column` characters.
    pub(crate) fn pad_to(&mut self, column: usize) {
        let current = self.column();
        if column > current {
            self.line.extend(std::iter::repeat(' ').take(column - current));
        }
    }

    pub(crate) fn finish(mut self) -> String {
        if self.prev != Prev::LineStart {
            let line = std::mem::take(&mut self.line);
            self.lines.push(line.trim_end().to_string());
        }
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORD: Piece = Piece::Word { operand: true };
    const KEYWORD: Piece = Piece::Word { operand: false };

    #[test]
    fn test_basic_spacing() {
        let mut w = Writer::new("  ");
        w.push("SELECT", KEYWORD);
        w.push("count", WORD);
        w.push("(", Piece::Open { attached: true });
        w.push("*", WORD);
        w.push(")", Piece::Close);
        w.push(",", Piece::Comma);
        w.push("a", WORD);
        w.push(".", Piece::Operator { dense: true });
        w.push("b", WORD);
        assert_eq!(w.finish(), "SELECT count(*), a.b");
    }

    #[test]
    fn test_unary_minus() {
        let mut w = Writer::new("  ");
        w.push("SELECT", KEYWORD);
        w.push("-", Piece::Operator { dense: false });
        w.push("1", WORD);
        w.push("-", Piece::Operator { dense: false });
        w.push("-", Piece::Operator { dense: false });
        w.push("x", WORD);
        assert_eq!(w.finish(), "SELECT -1 - -x");
    }

    #[test]
    fn test_dense_operators_never_glue_comments() {
        let mut w = Writer::new("  ");
        w.push("a", WORD);
        w.push("/", Piece::Operator { dense: true });
        w.push("*", WORD);
        assert_eq!(w.finish(), "a/ *");
    }

    #[test]
    fn test_newlines_and_indent() {
        let mut w = Writer::new("  ");
        w.push("SELECT", KEYWORD);
        w.newline(1);
        w.newline(1);
        w.push("a", WORD);
        w.push("-- note", Piece::Comment);
        w.break_after();
        w.push(",", Piece::Comma);
        assert_eq!(w.finish(), "SELECT\n  a -- note\n  ,");
    }

    #[test]
    fn test_measuring() {
        let mut m = Writer::measuring();
        m.push("SELECT", KEYWORD);
        m.push("a", WORD);
        assert_eq!(m.measured_width(), Some(8));
        m.push("-- x", Piece::Comment);
        m.break_after();
        assert_eq!(m.measured_width(), None);
    }

    #[test]
    fn test_pad_to() {
        let mut w = Writer::new("  ");
        w.push("a", WORD);
        w.pad_to(5);
        w.push("AS", KEYWORD);
        assert_eq!(w.finish(), "a     AS");
    }
}
