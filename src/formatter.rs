use crate::dialect::{dialect_from_name, DialectConfig};
use crate::error::Result;
use crate::expression::Renderer;
use crate::lexer::tokenize;
use crate::node::Ast;
use crate::options::FormatOptions;
use crate::params;
use crate::parser::parse;

/// QueryFormatter runs the formatting pipeline for one dialect and one set
/// of options:
///   1. Tokenize
///   2. Build the structural tree
///   3. Resolve placeholder values
///   4. Lay out each statement and join them
pub struct QueryFormatter<'d> {
    dialect: &'d DialectConfig,
    options: FormatOptions,
}

impl QueryFormatter<'static> {
    /// Formatter for the built-in dialect named by `options.language`.
    pub fn new(options: FormatOptions) -> Result<Self> {
        let dialect = dialect_from_name(&options.language)?;
        QueryFormatter::with_dialect(dialect, options)
    }
}

impl<'d> QueryFormatter<'d> {
    /// Formatter for an explicit dialect; `options.language` is ignored.
    pub fn with_dialect(dialect: &'d DialectConfig, options: FormatOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { dialect, options })
    }

    pub fn dialect(&self) -> &DialectConfig {
        self.dialect
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Stages 1 and 2.
    pub fn parse(&self, query: &str) -> Result<Ast> {
        let tokens = tokenize(query, self.dialect)?;
        Ok(parse(tokens, self.options.max_depth)?)
    }

    /// Run the full pipeline.
    pub fn format(&self, query: &str) -> Result<String> {
        let ast = self.parse(query)?;
        Ok(self.render(&ast))
    }

    /// Stages 3 and 4.
    pub fn render(&self, ast: &Ast) -> String {
        let substitutions = params::resolve(&ast.tokens, self.options.params.as_ref());
        let renderer = Renderer::new(ast, self.dialect, &self.options, substitutions);
        let separator = "\n".repeat(self.options.lines_between_queries + 1);
        ast.statements
            .iter()
            .map(|statement| renderer.render_statement(statement))
            .collect::<Vec<_>>()
            .join(&separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    #[test]
    fn test_unknown_language() {
        let options = FormatOptions {
            language: "cobol".to_string(),
            ..FormatOptions::default()
        };
        let err = QueryFormatter::new(options).err().unwrap();
        assert!(matches!(err, FormatError::Config(_)));
        assert!(err.to_string().contains("cobol"));
    }

    #[test]
    fn test_invalid_option_rejected_before_tokenizing() {
        let options = FormatOptions {
            tab_width: 0,
            ..FormatOptions::default()
        };
        assert!(matches!(
            QueryFormatter::new(options),
            Err(FormatError::Config(_))
        ));
    }

    #[test]
    fn test_errors_propagate() {
        let formatter = QueryFormatter::new(FormatOptions::default()).unwrap();
        assert!(matches!(formatter.format("SELECT 'abc"), Err(FormatError::Lex(_))));
        match formatter.format("SELECT (a FROM t") {
            Err(FormatError::Structural(err)) => assert_eq!(err.position, 7),
            other => panic!("expected structural error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input() {
        let formatter = QueryFormatter::new(FormatOptions::default()).unwrap();
        assert_eq!(formatter.format("").unwrap(), "");
        assert_eq!(formatter.format("  \n ").unwrap(), "");
    }

    #[test]
    fn test_render_is_stable_on_its_output() {
        let formatter = QueryFormatter::new(FormatOptions::default()).unwrap();
        let once = formatter
            .format("select a,b from t where x in (1,2) and y = 'z'; select 2")
            .unwrap();
        assert_eq!(formatter.format(&once).unwrap(), once);
    }
}
