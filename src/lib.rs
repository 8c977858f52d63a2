pub mod api;
pub mod config;
pub mod dialect;
pub mod dialects;
pub mod error;
mod expression;
pub mod formatter;
mod layout;
pub mod lexer;
pub mod mode;
pub mod node;
pub mod options;
pub mod params;
pub mod parser;
pub mod phrase;
pub mod report;
pub mod string_utils;
pub mod token;

// Re-export the main public API
pub use api::{
    describe_error, format, format_dialect, get_ast, get_matching_paths, print_diff, run,
};
pub use config::load_config;
pub use dialect::{dialect_from_name, supported_dialects, DialectConfig, DialectSpec};
pub use error::{FormatError, LexError, LexErrorKind, Result, StructuralError, TemplateError};
pub use node::Ast;
pub use options::FormatOptions;
