//! Layout of the structural tree.
//!
//! Each clause, group and CASE expression is first measured on a single
//! line. If it fits within `expression_width` it is written inline;
//! otherwise it is broken over lines and its children are laid out the
//! same way, one indentation level deeper.

use std::borrow::Cow;
use std::ops::Range;

use compact_str::CompactString;

use crate::dialect::DialectConfig;
use crate::layout::{Piece, Writer};
use crate::node::{Ast, CaseExpression, Group, Node, Statement, TokenIndex};
use crate::options::{
    CommaPosition, FormatOptions, IndentStyle, KeywordCase, LogicalOperatorNewline, TABULAR_GUTTER,
};
use crate::token::TokenKind;

/// Keywords followed by an expression; a sign after them is unary.
const EXPECTS_OPERAND: &[&str] = &[
    "ALL", "AND", "ANY", "AS", "BETWEEN", "BY", "CASE", "DEFAULT", "DISTINCT", "ESCAPE", "EXISTS",
    "ILIKE", "IN", "INTERVAL", "IS", "LIKE", "NOT", "ON", "OR", "OVER", "REGEXP", "RETURN", "RLIKE",
    "SIMILAR", "SOME", "THEN", "TO", "TOP", "USING", "XOR",
];

/// One entry of a list broken at commas or logical operators.
struct Item {
    nodes: Range<usize>,
    /// The separator following the item.
    sep: Option<usize>,
    /// Comments after the separator on the same source line.
    trailing: Range<usize>,
}

pub(crate) struct Renderer<'a> {
    ast: &'a Ast,
    config: &'a DialectConfig,
    options: &'a FormatOptions,
    substitutions: Vec<Option<CompactString>>,
    unit: String,
}

impl<'a> Renderer<'a> {
    pub(crate) fn new(
        ast: &'a Ast,
        config: &'a DialectConfig,
        options: &'a FormatOptions,
        substitutions: Vec<Option<CompactString>>,
    ) -> Self {
        Self {
            ast,
            config,
            options,
            substitutions,
            unit: options.indent_unit(),
        }
    }

    pub(crate) fn render_statement(&self, statement: &Statement) -> String {
        let mut w = Writer::new(&self.unit);
        self.block(&mut w, &statement.children, 0);
        if let Some(semicolon) = statement.semicolon {
            if self.options.newline_before_semicolon {
                w.newline(0);
            }
            w.push(self.text(semicolon), Piece::Semicolon);
        }
        for &comment in &statement.trailing_comments {
            self.comment(&mut w, comment);
        }
        w.finish()
    }

    fn text(&self, index: TokenIndex) -> &'a str {
        let ast: &'a Ast = self.ast;
        ast.token(index).text.as_str()
    }

    /// Token text with the keyword case applied to reserved words and
    /// function names.
    fn word_text(&self, index: TokenIndex) -> Cow<'a, str> {
        let ast: &'a Ast = self.ast;
        let token = ast.token(index);
        if !token.kind.is_case_folded() {
            return Cow::Borrowed(token.text.as_str());
        }
        match self.options.keyword_case {
            KeywordCase::Preserve if token.text.contains(char::is_whitespace) => {
                Cow::Owned(token.text.split_whitespace().collect::<Vec<_>>().join(" "))
            }
            KeywordCase::Preserve => Cow::Borrowed(token.text.as_str()),
            KeywordCase::Upper => Cow::Borrowed(token.value.as_str()),
            KeywordCase::Lower => Cow::Owned(token.value.as_str().to_lowercase()),
        }
    }

    /// Whether the word can end an operand, so that a following `+`/`-` is
    /// binary. Clause words and keywords that introduce an expression
    /// cannot; other keywords (`NULL`, `END`, type names) can.
    fn is_operand_word(&self, index: TokenIndex) -> bool {
        let token = self.ast.token(index);
        match token.kind {
            kind if !kind.is_reserved() => true,
            TokenKind::Keyword => !EXPECTS_OPERAND.contains(&token.value.as_str()),
            _ => false,
        }
    }

    fn is_dense(&self, op: &str) -> bool {
        op == "."
            || self.config.is_always_dense(op)
            || (self.options.dense_operators && !(op == "-" && self.config.dashed_identifiers()))
    }

    fn push_word(&self, w: &mut Writer, index: TokenIndex) {
        let operand = self.is_operand_word(index);
        w.push(&self.word_text(index), Piece::Word { operand });
    }

    /// Whether `f` lays out on a single line within `expression_width`.
    fn fits(&self, f: impl FnOnce(&Self, &mut Writer)) -> bool {
        let mut m = Writer::measuring();
        f(self, &mut m);
        m.measured_width()
            .is_some_and(|width| width <= self.options.expression_width)
    }

    /// Clauses each on their own line, with loose nodes between them.
    fn block(&self, w: &mut Writer, nodes: &[Node], level: usize) {
        let mut rest = nodes;
        while let Some(first) = rest.first() {
            if let Node::Clause { keyword, children } = first {
                self.clause(w, *keyword, children, level);
                rest = &rest[1..];
                continue;
            }
            let run = rest
                .iter()
                .position(|n| matches!(n, Node::Clause { .. }))
                .unwrap_or(rest.len());
            if !w.is_inline() {
                w.newline(level);
            }
            self.flow(w, &rest[..run], level);
            rest = &rest[run..];
        }
    }

    fn clause(&self, w: &mut Writer, keyword: TokenIndex, body: &[Node], level: usize) {
        let padded = !body.is_empty();
        if w.is_inline() {
            self.push_keyword(w, keyword, padded);
            self.flow(w, body, level);
            return;
        }
        w.newline(level);
        if self.is_set_operation_subquery(keyword, body) {
            self.push_keyword(w, keyword, false);
            w.newline(level);
            self.flow(w, body, level);
            return;
        }
        let oneline = self.config.is_oneline_clause(&self.ast.token(keyword).value);
        // Comments ending the body on the same line do not count against it.
        let tail = body
            .iter()
            .rev()
            .take_while(|n| matches!(n, Node::Comment(i) if !self.ast.token(*i).starts_line()))
            .count();
        let measured = &body[..body.len() - tail];
        let inline = oneline
            || self.fits(|r, m| {
                r.push_keyword(m, keyword, padded);
                r.flow(m, measured, level);
            });
        tracing::trace!(keyword = %self.ast.token(keyword).value, inline, "clause layout");

        self.push_keyword(w, keyword, padded);
        if inline {
            if !oneline {
                w.begin_inline();
            }
            self.flow(w, body, level);
            if !oneline {
                w.end_inline();
            }
            return;
        }
        let lead = body
            .iter()
            .take_while(|n| matches!(n, Node::Comment(i) if !self.ast.token(*i).starts_line()))
            .count();
        self.flow(w, &body[..lead], level);
        let tabular = self.options.indent_style.is_tabular();
        self.items(w, &body[lead..], level + 1, tabular);
    }

    /// `UNION (SELECT ..)`: the parenthesized query lines up with the one
    /// before the set operation.
    fn is_set_operation_subquery(&self, keyword: TokenIndex, body: &[Node]) -> bool {
        self.ast.token(keyword).kind == TokenKind::ReservedSetOperation
            && matches!(body, [Node::Parenthesis(group)]
                if group.children.iter().any(|n| n.holds_subquery(self.ast)))
    }

    /// The clause keyword; tabular styles pad it to the keyword column.
    fn push_keyword(&self, w: &mut Writer, keyword: TokenIndex, padded: bool) {
        let text = self.word_text(keyword);
        let width = TABULAR_GUTTER - 1;
        let right = match self.options.indent_style {
            IndentStyle::Standard => return self.push_word(w, keyword),
            _ if !padded => return self.push_word(w, keyword),
            IndentStyle::TabularLeft => false,
            IndentStyle::TabularRight => true,
        };
        let (head, tail) = if text.chars().count() > width {
            text.split_once(' ').unwrap_or((text.as_ref(), ""))
        } else {
            (text.as_ref(), "")
        };
        let head = if right {
            format!("{head:>width$}")
        } else {
            format!("{head:<width$}")
        };
        w.push(&head, Piece::Word { operand: false });
        if !tail.is_empty() {
            w.push(tail, Piece::Word { operand: false });
        }
    }

    /// Split `nodes` at top-level commas, or failing that at AND/OR/XOR.
    /// The AND of a BETWEEN is not a separator.
    fn split_items(&self, nodes: &[Node]) -> (Vec<Item>, bool) {
        let by_comma = nodes.iter().any(|n| matches!(n, Node::Comma(_)));
        let mut between = false;
        let separators: Vec<bool> = nodes
            .iter()
            .map(|node| {
                if by_comma {
                    return matches!(node, Node::Comma(_));
                }
                let Node::Keyword(i) = node else {
                    return false;
                };
                let value = self.ast.token(*i).value.as_str();
                if value == "BETWEEN" || value.ends_with(" BETWEEN") {
                    between = true;
                    return false;
                }
                if value == "AND" && between {
                    between = false;
                    return false;
                }
                matches!(value, "AND" | "OR" | "XOR")
            })
            .collect();

        let mut items = Vec::new();
        let mut start = 0;
        let mut i = 0;
        while i < nodes.len() {
            if !separators[i] {
                i += 1;
                continue;
            }
            let mut end = i + 1;
            while matches!(nodes.get(end), Some(Node::Comment(c)) if !self.ast.token(*c).starts_line())
            {
                end += 1;
            }
            items.push(Item {
                nodes: start..i,
                sep: Some(i),
                trailing: i + 1..end,
            });
            start = end;
            i = end;
        }
        items.push(Item {
            nodes: start..nodes.len(),
            sep: None,
            trailing: nodes.len()..nodes.len(),
        });
        (items, by_comma)
    }

    /// One item per line at `level`. With `first_on_line` the first item
    /// continues the current line.
    fn items(&self, w: &mut Writer, nodes: &[Node], level: usize, first_on_line: bool) {
        let (items, by_comma) = self.split_items(nodes);
        let before = if by_comma {
            self.options.comma_position == CommaPosition::Before
        } else {
            self.options.logical_operator_newline == LogicalOperatorNewline::Before
        };
        let alias_column = if by_comma && self.options.tabulate_alias {
            self.alias_column(nodes, &items, level, before)
        } else {
            None
        };

        w.set_level(level);
        for (i, item) in items.iter().enumerate() {
            if i > 0 || !first_on_line {
                w.newline(level);
            }
            if before && i > 0 {
                if let Some(sep) = items[i - 1].sep {
                    self.flow_node(w, &nodes[sep], level);
                }
            }
            let body = &nodes[item.nodes.clone()];
            let tail = body.iter().rev().take_while(|n| n.is_comment()).count();
            let (core, tail) = body.split_at(body.len() - tail);
            match alias_column.zip(alias_split(core, self.ast)) {
                Some((column, at)) => {
                    self.flow(w, &core[..at], level);
                    w.pad_to(column);
                    self.flow(w, &core[at..], level);
                }
                None => self.flow(w, core, level),
            }
            if !before {
                if let Some(sep) = item.sep {
                    self.flow_node(w, &nodes[sep], level);
                }
            }
            self.flow(w, tail, level);
            self.flow(w, &nodes[item.trailing.clone()], level);
        }
    }

    /// Column at which `AS` aliases line up, if any item has one.
    fn alias_column(&self, nodes: &[Node], items: &[Item], level: usize, before: bool) -> Option<usize> {
        let indent = self.unit.chars().count() * level;
        items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| {
                let body = &nodes[item.nodes.clone()];
                let at = alias_split(body, self.ast)?;
                let mut m = Writer::measuring();
                self.flow(&mut m, &body[..at], level);
                let lead = if before && i > 0 { 2 } else { 0 };
                Some(indent + lead + m.measured_width()?)
            })
            .max()
    }

    fn flow(&self, w: &mut Writer, nodes: &[Node], level: usize) {
        for node in nodes {
            self.flow_node(w, node, level);
        }
    }

    fn flow_node(&self, w: &mut Writer, node: &Node, level: usize) {
        match node {
            Node::Clause { keyword, children } => self.clause(w, *keyword, children, level),
            Node::Parenthesis(group) => self.group(w, None, group, level),
            Node::FunctionCall { name, args } => self.group(w, Some(*name), args, level),
            Node::Case(case) => self.case(w, case, level),
            Node::Comment(i) => self.comment(w, *i),
            Node::Operator(i) => {
                let op = self.text(*i);
                w.push(op, Piece::Operator { dense: self.is_dense(op) });
            }
            Node::Comma(i) => w.push(self.text(*i), Piece::Comma),
            Node::Placeholder(i) => {
                let text = self.substitutions[*i].as_deref().unwrap_or(self.text(*i));
                w.push(text, Piece::Word { operand: true });
            }
            Node::Keyword(i) | Node::Identifier(i) | Node::Literal(i) => self.push_word(w, *i),
        }
    }

    fn comment(&self, w: &mut Writer, index: TokenIndex) {
        let token = self.ast.token(index);
        if token.starts_line() && !w.is_inline() && !w.at_line_start() {
            w.newline(w.level());
        }
        let line = token.kind == TokenKind::LineComment;
        let text = if line { token.text.trim_end() } else { token.text.as_str() };
        w.push(text, Piece::Comment);
        if line || token.is_multiline() {
            w.break_after();
        }
    }

    fn group(&self, w: &mut Writer, name: Option<TokenIndex>, group: &Group, level: usize) {
        let subquery = group.children.iter().any(|n| n.holds_subquery(self.ast));
        if w.is_inline() {
            if subquery {
                w.force_break();
            }
            self.group_inline(w, name, group, level);
            return;
        }
        if !subquery && self.fits(|r, m| r.group_inline(m, name, group, level)) {
            w.begin_inline();
            self.group_inline(w, name, group, level);
            w.end_inline();
            return;
        }
        self.open(w, name, group);
        if group.children.iter().any(|n| matches!(n, Node::Clause { .. })) {
            self.block(w, &group.children, level + 1);
        } else {
            self.items(w, &group.children, level + 1, false);
        }
        w.newline(level);
        w.push(self.text(group.close), Piece::Close);
    }

    fn group_inline(&self, w: &mut Writer, name: Option<TokenIndex>, group: &Group, level: usize) {
        self.open(w, name, group);
        self.block(w, &group.children, level + 1);
        w.push(self.text(group.close), Piece::Close);
    }

    fn open(&self, w: &mut Writer, name: Option<TokenIndex>, group: &Group) {
        let open = self.text(group.open);
        let attached = match name {
            Some(name) => {
                self.push_word(w, name);
                true
            }
            None => (open == "[" && w.prev_is_operand()) || self.follows_keyword(group.open),
        };
        w.push(open, Piece::Open { attached });
    }

    /// An opener written directly against a keyword (`VARCHAR(10)`,
    /// `ARRAY[1]`) stays attached to it.
    fn follows_keyword(&self, open: TokenIndex) -> bool {
        open > 0
            && self.ast.token(open).whitespace_before.is_empty()
            && self.ast.token(open - 1).kind == TokenKind::Keyword
    }

    fn case(&self, w: &mut Writer, case: &CaseExpression, level: usize) {
        if w.is_inline() {
            self.case_inline(w, case, level);
            return;
        }
        if self.fits(|r, m| r.case_inline(m, case, level)) {
            w.begin_inline();
            self.case_inline(w, case, level);
            w.end_inline();
            return;
        }
        self.push_word(w, case.case_kw);
        self.flow(w, &case.operand, level);
        for branch in &case.branches {
            w.newline(level + 1);
            self.push_word(w, branch.when_kw);
            self.flow(w, &branch.condition, level + 1);
            self.push_word(w, branch.then_kw);
            self.flow(w, &branch.result, level + 1);
        }
        if let Some(else_branch) = &case.else_branch {
            w.newline(level + 1);
            self.push_word(w, else_branch.else_kw);
            self.flow(w, &else_branch.result, level + 1);
        }
        w.newline(level);
        self.push_word(w, case.end_kw);
    }

    fn case_inline(&self, w: &mut Writer, case: &CaseExpression, level: usize) {
        self.push_word(w, case.case_kw);
        self.flow(w, &case.operand, level);
        for branch in &case.branches {
            self.push_word(w, branch.when_kw);
            self.flow(w, &branch.condition, level);
            self.push_word(w, branch.then_kw);
            self.flow(w, &branch.result, level);
        }
        if let Some(else_branch) = &case.else_branch {
            self.push_word(w, else_branch.else_kw);
            self.flow(w, &else_branch.result, level);
        }
        self.push_word(w, case.end_kw);
    }
}

/// Index of the last top-level `AS` in an item, if it has something before it.
fn alias_split(nodes: &[Node], ast: &Ast) -> Option<usize> {
    nodes
        .iter()
        .rposition(|n| n.is_keyword(ast, "AS"))
        .filter(|&at| at > 0)
}

#[cfg(test)]
mod tests {
    use crate::formatter::QueryFormatter;
    use crate::options::{
        CommaPosition, FormatOptions, IndentStyle, KeywordCase, ParamValues,
    };

    fn fmt_with(sql: &str, options: FormatOptions) -> String {
        QueryFormatter::new(options).unwrap().format(sql).unwrap()
    }

    fn fmt(sql: &str) -> String {
        fmt_with(sql, FormatOptions::default())
    }

    fn narrow(width: usize) -> FormatOptions {
        FormatOptions {
            expression_width: width,
            ..FormatOptions::default()
        }
    }

    #[test]
    fn test_short_clauses_stay_inline() {
        assert_eq!(fmt("SELECT a FROM t"), "SELECT a\nFROM t");
        assert_eq!(
            fmt("select count(*) , b from t where a=1"),
            "select count(*), b\nfrom t\nwhere a = 1"
        );
    }

    #[test]
    fn test_long_clause_breaks_at_commas() {
        assert_eq!(
            fmt_with("SELECT a, b, c FROM t", narrow(10)),
            "SELECT\n  a,\n  b,\n  c\nFROM t"
        );
    }

    #[test]
    fn test_keyword_case() {
        let upper = FormatOptions {
            keyword_case: KeywordCase::Upper,
            ..FormatOptions::default()
        };
        assert_eq!(
            fmt_with("select count(x) from t group   by x", upper),
            "SELECT COUNT(x)\nFROM t\nGROUP BY x"
        );
        let lower = FormatOptions {
            keyword_case: KeywordCase::Lower,
            ..FormatOptions::default()
        };
        assert_eq!(fmt_with("SELECT A FROM T", lower), "select A\nfrom T");
        assert_eq!(fmt("select a from t group\n by a"), "select a\nfrom t\ngroup by a");
    }

    #[test]
    fn test_subquery_is_always_broken() {
        assert_eq!(
            fmt("SELECT * FROM (SELECT id FROM t) AS s"),
            "SELECT *\nFROM\n  (\n    SELECT id\n    FROM t\n  ) AS s"
        );
    }

    #[test]
    fn test_long_function_call_breaks_arguments() {
        assert_eq!(
            fmt_with("SELECT f(aaaaaaaaaa, bbbbbbbbbb) FROM t", narrow(20)),
            "SELECT\n  f(\n    aaaaaaaaaa,\n    bbbbbbbbbb\n  )\nFROM t"
        );
    }

    #[test]
    fn test_case_layout() {
        let sql = "SELECT CASE WHEN a = 1 THEN 'one' ELSE 'other' END AS lbl FROM t";
        assert_eq!(
            fmt_with(sql, narrow(30)),
            "SELECT\n  CASE\n    WHEN a = 1 THEN 'one'\n    ELSE 'other'\n  END AS lbl\nFROM t"
        );
        assert_eq!(
            fmt(sql),
            "SELECT\n  CASE WHEN a = 1 THEN 'one' ELSE 'other' END AS lbl\nFROM t"
        );
        assert_eq!(
            fmt("SELECT CASE x WHEN 1 THEN 2 END FROM t"),
            "SELECT CASE x WHEN 1 THEN 2 END\nFROM t"
        );
    }

    #[test]
    fn test_logical_operators_and_between() {
        let sql = "SELECT a FROM t WHERE x = 1 AND y BETWEEN 1 AND 5 OR z IS NULL";
        assert_eq!(
            fmt_with(sql, narrow(20)),
            "SELECT a\nFROM t\nWHERE\n  x = 1\n  AND y BETWEEN 1 AND 5\n  OR z IS NULL"
        );
        let after = FormatOptions {
            expression_width: 20,
            logical_operator_newline: crate::options::LogicalOperatorNewline::After,
            ..FormatOptions::default()
        };
        assert_eq!(
            fmt_with(sql, after),
            "SELECT a\nFROM t\nWHERE\n  x = 1 AND\n  y BETWEEN 1 AND 5 OR\n  z IS NULL"
        );
    }

    #[test]
    fn test_comma_before() {
        let options = FormatOptions {
            expression_width: 10,
            comma_position: CommaPosition::Before,
            ..FormatOptions::default()
        };
        assert_eq!(
            fmt_with("SELECT a, b FROM t", options),
            "SELECT\n  a\n  , b\nFROM t"
        );
    }

    #[test]
    fn test_tabular_left() {
        let options = FormatOptions {
            expression_width: 10,
            indent_style: IndentStyle::TabularLeft,
            ..FormatOptions::default()
        };
        assert_eq!(
            fmt_with("SELECT a, b FROM t LEFT OUTER JOIN u ON t.id = u.id", options),
            "SELECT    a,\n          b\nFROM      t\nLEFT      OUTER JOIN u ON t.id = u.id"
        );
    }

    #[test]
    fn test_tabular_right() {
        let options = FormatOptions {
            indent_style: IndentStyle::TabularRight,
            ..FormatOptions::default()
        };
        assert_eq!(
            fmt_with("SELECT a FROM t", options),
            "   SELECT a\n     FROM t"
        );
    }

    #[test]
    fn test_tabulate_alias() {
        let options = FormatOptions {
            expression_width: 10,
            tabulate_alias: true,
            ..FormatOptions::default()
        };
        let out = fmt_with("SELECT a AS x, long_name AS y FROM t", options);
        let columns: Vec<usize> = out.lines().filter_map(|l| l.find(" AS ")).collect();
        assert_eq!(columns.len(), 2);
        assert!(columns.iter().all(|&c| c == columns[0]), "{out}");
    }

    #[test]
    fn test_line_comments_force_breaks() {
        assert_eq!(
            fmt("SELECT a, -- first\n b FROM t"),
            "SELECT\n  a, -- first\n  b\nFROM t"
        );
        assert_eq!(
            fmt("SELECT a -- first\n, b FROM t"),
            "SELECT\n  a, -- first\n  b\nFROM t"
        );
        assert_eq!(fmt("-- header\nSELECT 1"), "-- header\nSELECT 1");
        assert_eq!(fmt("SELECT a FROM t -- all rows"), "SELECT a\nFROM t -- all rows");
    }

    #[test]
    fn test_statements_and_semicolons() {
        assert_eq!(fmt("SELECT 1; SELECT 2;"), "SELECT 1;\n\nSELECT 2;");
        let options = FormatOptions {
            lines_between_queries: 0,
            newline_before_semicolon: true,
            ..FormatOptions::default()
        };
        assert_eq!(fmt_with("SELECT 1; SELECT 2", options), "SELECT 1\n;\nSELECT 2");
        assert_eq!(fmt("SELECT 1; -- done"), "SELECT 1; -- done");
    }

    #[test]
    fn test_params_and_dense_operators() {
        let options = FormatOptions {
            params: Some(ParamValues::Positional(vec!["1".into(), "'b'".into()])),
            dense_operators: true,
            ..FormatOptions::default()
        };
        assert_eq!(
            fmt_with("SELECT a + ? FROM t WHERE b = ?", options),
            "SELECT a+1\nFROM t\nWHERE b='b'"
        );
    }

    #[test]
    fn test_unary_and_member_access() {
        assert_eq!(fmt("SELECT - 1, t . col, -x FROM t"), "SELECT -1, t.col, -x\nFROM t");
    }

    #[test]
    fn test_minus_after_operand_keyword_is_binary() {
        assert_eq!(
            fmt("SELECT date - 1, value - 2 FROM t"),
            "SELECT date - 1, value - 2\nFROM t"
        );
        assert_eq!(
            fmt("SELECT CASE WHEN x THEN -1 ELSE -2 END - 3"),
            "SELECT CASE WHEN x THEN -1 ELSE -2 END - 3"
        );
        assert_eq!(
            fmt("SELECT a FROM t WHERE b IS NOT NULL AND c = -1"),
            "SELECT a\nFROM t\nWHERE b IS NOT NULL AND c = -1"
        );
    }

    #[test]
    fn test_keyword_brackets_keep_attachment() {
        assert_eq!(
            fmt("SELECT CAST(a AS VARCHAR(10)), b = ANY(c) FROM t"),
            "SELECT CAST(a AS VARCHAR(10)), b = ANY(c)\nFROM t"
        );
        assert_eq!(fmt("SELECT b = ANY (c)"), "SELECT b = ANY (c)");
        let postgres = FormatOptions {
            language: "postgresql".to_string(),
            ..FormatOptions::default()
        };
        assert_eq!(fmt_with("SELECT ARRAY[1,2]", postgres), "SELECT ARRAY[1, 2]");
    }

    #[test]
    fn test_set_operation_between_subqueries() {
        assert_eq!(
            fmt("(SELECT 1) UNION (SELECT 2)"),
            "(\n  SELECT 1\n)\nUNION\n(\n  SELECT 2\n)"
        );
        assert_eq!(
            fmt("SELECT 1 UNION ALL SELECT 2"),
            "SELECT 1\nUNION ALL\nSELECT 2"
        );
    }
}
