use serde::Serialize;

use crate::token::{Token, TokenKind};

/// Index into [`Ast::tokens`].
pub type TokenIndex = usize;

/// The structural tree of a query. Nodes refer to tokens by index; the
/// tokens themselves are owned here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ast {
    pub tokens: Vec<Token>,
    pub statements: Vec<Statement>,
}

impl Ast {
    pub fn token(&self, index: TokenIndex) -> &Token {
        &self.tokens[index]
    }
}

/// One `;`-terminated statement (the last one may lack the semicolon).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Statement {
    pub children: Vec<Node>,
    pub semicolon: Option<TokenIndex>,
    /// Comments on the same line as the terminating semicolon.
    pub trailing_comments: Vec<TokenIndex>,
}

/// A bracketed group: `( ... )`, `[ ... ]` or `{ ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub open: TokenIndex,
    pub children: Vec<Node>,
    pub close: TokenIndex,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhenBranch {
    pub when_kw: TokenIndex,
    pub condition: Vec<Node>,
    pub then_kw: TokenIndex,
    pub result: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElseBranch {
    pub else_kw: TokenIndex,
    pub result: Vec<Node>,
}

/// `CASE [operand] WHEN .. THEN .. [ELSE ..] END`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseExpression {
    pub case_kw: TokenIndex,
    pub operand: Vec<Node>,
    pub branches: Vec<WhenBranch>,
    pub else_branch: Option<ElseBranch>,
    pub end_kw: TokenIndex,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Node {
    /// A command, clause, join or set operation and the nodes up to the
    /// next clause boundary.
    Clause {
        keyword: TokenIndex,
        children: Vec<Node>,
    },
    Parenthesis(Group),
    FunctionCall {
        name: TokenIndex,
        args: Group,
    },
    Case(CaseExpression),
    /// Reserved words that do not open a clause.
    Keyword(TokenIndex),
    Operator(TokenIndex),
    Identifier(TokenIndex),
    Literal(TokenIndex),
    Placeholder(TokenIndex),
    Comma(TokenIndex),
    Comment(TokenIndex),
}

impl Node {
    pub fn is_comment(&self) -> bool {
        matches!(self, Node::Comment(_))
    }

    /// A leaf keyword with the given normalized value.
    pub fn is_keyword(&self, ast: &Ast, word: &str) -> bool {
        matches!(self, Node::Keyword(i) if ast.token(*i).is_word(word))
    }

    /// A statement-level clause or set operation. A group holding one is a
    /// subquery.
    pub fn holds_subquery(&self, ast: &Ast) -> bool {
        match self {
            Node::Clause { keyword, .. } => matches!(
                ast.token(*keyword).kind,
                TokenKind::ReservedCommand | TokenKind::ReservedSetOperation
            ),
            _ => false,
        }
    }
}
