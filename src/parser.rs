//! Groups a token stream into statements, clauses, bracketed groups and
//! CASE expressions.
//!
//! The parser is a single left-to-right pass over an explicit stack of open
//! frames, so input nesting never grows the call stack. Nesting of groups and
//! CASE expressions is capped by `max_depth`.

use std::mem;

use smallvec::{smallvec, SmallVec};

use crate::error::StructuralError;
use crate::node::{Ast, CaseExpression, ElseBranch, Group, Node, Statement, TokenIndex, WhenBranch};
use crate::token::{Token, TokenKind};

/// Which part of a CASE expression is being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseSection {
    Operand,
    Condition,
    Result,
    Else,
}

#[derive(Debug)]
struct OpenBranch {
    when_kw: TokenIndex,
    condition: Vec<Node>,
    then_kw: Option<TokenIndex>,
}

#[derive(Debug)]
struct CaseFrame {
    case_kw: TokenIndex,
    operand: Vec<Node>,
    branches: Vec<WhenBranch>,
    open_branch: Option<OpenBranch>,
    else_kw: Option<TokenIndex>,
    section: CaseSection,
}

#[derive(Debug)]
enum FrameKind {
    Root,
    Clause { keyword: TokenIndex },
    Group { open: TokenIndex, name: Option<TokenIndex> },
    Case(Box<CaseFrame>),
}

#[derive(Debug)]
struct Frame {
    kind: FrameKind,
    /// Nodes collected for the frame's current section.
    children: Vec<Node>,
}

impl Frame {
    fn new(kind: FrameKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }
}

struct Parser<'t> {
    tokens: &'t [Token],
    max_depth: usize,
    stack: SmallVec<[Frame; 8]>,
    depth: usize,
    statements: Vec<Statement>,
    after_semicolon: bool,
}

/// Build the structural tree for a token stream ending in `EndOfInput`.
pub fn parse(tokens: Vec<Token>, max_depth: usize) -> Result<Ast, StructuralError> {
    let statements = {
        let mut parser = Parser {
            tokens: &tokens,
            max_depth,
            stack: smallvec![Frame::new(FrameKind::Root)],
            depth: 0,
            statements: Vec::new(),
            after_semicolon: false,
        };
        for index in 0..tokens.len() {
            parser.step(index)?;
        }
        parser.statements
    };
    tracing::debug!(statements = statements.len(), "parsed query");
    Ok(Ast { tokens, statements })
}

impl<'t> Parser<'t> {
    fn step(&mut self, index: TokenIndex) -> Result<(), StructuralError> {
        let tokens = self.tokens;
        let token = &tokens[index];
        if token.kind.is_comment() {
            if self.after_semicolon && !token.starts_line() {
                if let Some(statement) = self.statements.last_mut() {
                    statement.trailing_comments.push(index);
                    return Ok(());
                }
            }
            self.after_semicolon = false;
            self.push(Node::Comment(index));
            return Ok(());
        }
        self.after_semicolon = false;

        match token.kind {
            TokenKind::EndOfInput => {
                if let Some(open) = self.innermost_open() {
                    return Err(self.unclosed(open, index));
                }
                self.finish_statement(None);
                Ok(())
            }
            TokenKind::Semicolon => {
                if let Some(open) = self.innermost_open() {
                    return Err(self.unclosed(open, index));
                }
                self.finish_statement(Some(index));
                self.after_semicolon = true;
                Ok(())
            }
            TokenKind::OpenParen => self.open_group(index),
            TokenKind::CloseParen => self.close_group(index),
            kind if kind.starts_clause() => {
                self.close_clauses();
                if matches!(self.top().kind, FrameKind::Case(_)) {
                    return Err(self.error(
                        index,
                        format!("unexpected `{}` inside CASE expression", token.text),
                        Some("END"),
                    ));
                }
                self.stack
                    .push(Frame::new(FrameKind::Clause { keyword: index }));
                Ok(())
            }
            TokenKind::Keyword if token.is_word("CASE") => {
                self.enter(index)?;
                self.stack.push(Frame::new(FrameKind::Case(Box::new(CaseFrame {
                    case_kw: index,
                    operand: Vec::new(),
                    branches: Vec::new(),
                    open_branch: None,
                    else_kw: None,
                    section: CaseSection::Operand,
                }))));
                Ok(())
            }
            kind if kind.is_reserved() && self.in_case() => self.case_word(index),
            _ => {
                let node = self.leaf(index);
                self.push(node);
                Ok(())
            }
        }
    }

    fn leaf(&self, index: TokenIndex) -> Node {
        let tokens = self.tokens;
        let token = &tokens[index];
        match token.kind {
            TokenKind::Operator if token.text == "*" && self.operand_expected() => {
                Node::Identifier(index)
            }
            TokenKind::Operator => Node::Operator(index),
            TokenKind::Comma => Node::Comma(index),
            TokenKind::Identifier | TokenKind::QuotedIdentifier | TokenKind::FunctionName => {
                Node::Identifier(index)
            }
            TokenKind::StringLiteral | TokenKind::NumberLiteral => Node::Literal(index),
            kind if kind.is_parameter() => Node::Placeholder(index),
            _ => Node::Keyword(index),
        }
    }

    fn top(&self) -> &Frame {
        // The root frame is never popped.
        &self.stack[self.stack.len() - 1]
    }

    fn top_mut(&mut self) -> &mut Frame {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn push(&mut self, node: Node) {
        self.top_mut().children.push(node);
    }

    fn in_case(&self) -> bool {
        matches!(self.top().kind, FrameKind::Case(_))
    }

    /// Whether the next token sits where an operand is expected, so that
    /// `*` is a wildcard rather than multiplication.
    fn operand_expected(&self) -> bool {
        match self.top().children.iter().rev().find(|n| !n.is_comment()) {
            None => true,
            Some(Node::Operator(_) | Node::Comma(_) | Node::Keyword(_)) => true,
            Some(_) => false,
        }
    }

    fn innermost_open(&self) -> Option<TokenIndex> {
        self.stack.iter().rev().find_map(|frame| match &frame.kind {
            FrameKind::Group { open, .. } => Some(*open),
            FrameKind::Case(case) => Some(case.case_kw),
            _ => None,
        })
    }

    fn error(&self, index: TokenIndex, message: String, expected: Option<&str>) -> StructuralError {
        let token = &self.tokens[index];
        StructuralError {
            position: token.start,
            found: token.text.to_string(),
            expected: expected.map(str::to_string),
            message,
        }
    }

    /// Error for a group or CASE still open when `found` arrives.
    fn unclosed(&self, open: TokenIndex, found: TokenIndex) -> StructuralError {
        let opener = &self.tokens[open];
        let expected = if opener.is_word("CASE") {
            "END".to_string()
        } else {
            closer_for(opener).to_string()
        };
        StructuralError {
            position: opener.start,
            found: self.tokens[found].text.to_string(),
            message: format!("unclosed `{}`", opener.text),
            expected: Some(expected),
        }
    }

    fn enter(&mut self, index: TokenIndex) -> Result<(), StructuralError> {
        if self.depth >= self.max_depth {
            return Err(self.error(
                index,
                format!("nesting exceeds the maximum depth of {}", self.max_depth),
                None,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    /// Close open clauses down to the nearest group, CASE or root frame.
    fn close_clauses(&mut self) {
        while matches!(self.top().kind, FrameKind::Clause { .. }) {
            if let Some(frame) = self.stack.pop() {
                if let FrameKind::Clause { keyword } = frame.kind {
                    self.push(Node::Clause {
                        keyword,
                        children: frame.children,
                    });
                }
            }
        }
    }

    fn open_group(&mut self, index: TokenIndex) -> Result<(), StructuralError> {
        self.enter(index)?;
        let tokens = self.tokens;
        let open = &tokens[index];
        let name = match self.top().children.last() {
            Some(Node::Identifier(name)) => {
                let name_token = &tokens[*name];
                let attached = open.text == "(" && open.whitespace_before.is_empty();
                (name_token.kind == TokenKind::FunctionName
                    || (attached && name_token.kind != TokenKind::Operator))
                    .then_some(*name)
            }
            _ => None,
        };
        if name.is_some() {
            self.top_mut().children.pop();
        }
        self.stack
            .push(Frame::new(FrameKind::Group { open: index, name }));
        Ok(())
    }

    fn close_group(&mut self, index: TokenIndex) -> Result<(), StructuralError> {
        self.close_clauses();
        let tokens = self.tokens;
        let close = &tokens[index];
        match &self.top().kind {
            FrameKind::Group { open, .. } => {
                let expected = closer_for(&tokens[*open]);
                if !close.text.starts_with(expected) {
                    return Err(self.error(
                        index,
                        format!("mismatched `{}`", close.text),
                        Some(&expected.to_string()),
                    ));
                }
            }
            FrameKind::Case(case) => {
                let case_kw = case.case_kw;
                return Err(self.unclosed(case_kw, index));
            }
            _ => {
                return Err(self.error(index, format!("unmatched `{}`", close.text), None));
            }
        }
        if let Some(frame) = self.stack.pop() {
            if let FrameKind::Group { open, name } = frame.kind {
                let group = Group {
                    open,
                    children: frame.children,
                    close: index,
                };
                self.depth -= 1;
                self.push(match name {
                    Some(name) => Node::FunctionCall { name, args: group },
                    None => Node::Parenthesis(group),
                });
            }
        }
        Ok(())
    }

    /// WHEN, THEN, ELSE and END directly inside a CASE expression.
    fn case_word(&mut self, index: TokenIndex) -> Result<(), StructuralError> {
        let tokens = self.tokens;
        let token = &tokens[index];
        let word = token.value.as_str();
        if !matches!(word, "WHEN" | "THEN" | "ELSE" | "END") {
            let node = self.leaf(index);
            self.push(node);
            return Ok(());
        }
        let top = self.stack.len() - 1;
        let frame = &mut self.stack[top];
        let FrameKind::Case(case) = &mut frame.kind else {
            return Ok(());
        };
        let section = case.section;
        let unexpected = |expected: &str| Some(expected.to_string());
        let misplaced = match (word, section) {
            ("WHEN", CaseSection::Operand) => {
                case.operand = mem::take(&mut frame.children);
                None
            }
            ("WHEN", CaseSection::Result) | ("ELSE", CaseSection::Result) | ("END", CaseSection::Result) => {
                if let Some(branch) = case.open_branch.take() {
                    case.branches.push(WhenBranch {
                        when_kw: branch.when_kw,
                        condition: branch.condition,
                        then_kw: branch.then_kw.unwrap_or(branch.when_kw),
                        result: mem::take(&mut frame.children),
                    });
                }
                None
            }
            ("THEN", CaseSection::Condition) => {
                if let Some(branch) = case.open_branch.as_mut() {
                    branch.condition = mem::take(&mut frame.children);
                    branch.then_kw = Some(index);
                }
                case.section = CaseSection::Result;
                return Ok(());
            }
            ("END", CaseSection::Else) => None,
            (_, CaseSection::Operand) => unexpected("WHEN"),
            (_, CaseSection::Condition) => unexpected("THEN"),
            (_, CaseSection::Result) => unexpected("END"),
            (_, CaseSection::Else) => unexpected("END"),
        };
        if let Some(expected) = misplaced {
            return Err(self.error(
                index,
                format!("unexpected `{}` in CASE expression", token.text),
                Some(&expected),
            ));
        }

        match word {
            "WHEN" => {
                case.open_branch = Some(OpenBranch {
                    when_kw: index,
                    condition: Vec::new(),
                    then_kw: None,
                });
                case.section = CaseSection::Condition;
            }
            "ELSE" => {
                case.else_kw = Some(index);
                case.section = CaseSection::Else;
            }
            _ => {
                let else_result = mem::take(&mut frame.children);
                if let Some(FrameKind::Case(case)) = self.stack.pop().map(|f| f.kind) {
                    let case = *case;
                    self.depth -= 1;
                    self.push(Node::Case(CaseExpression {
                        case_kw: case.case_kw,
                        operand: case.operand,
                        branches: case.branches,
                        else_branch: case.else_kw.map(|else_kw| ElseBranch {
                            else_kw,
                            result: else_result,
                        }),
                        end_kw: index,
                    }));
                }
            }
        }
        Ok(())
    }

    fn finish_statement(&mut self, semicolon: Option<TokenIndex>) {
        self.close_clauses();
        let children = mem::take(&mut self.top_mut().children);
        if children.is_empty() && semicolon.is_none() {
            return;
        }
        self.statements.push(Statement {
            children,
            semicolon,
            trailing_comments: Vec::new(),
        });
    }
}

fn closer_for(opener: &Token) -> char {
    match opener.text.as_str() {
        "[" => ']',
        "{" => '}',
        _ => ')',
    }
}
