use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FormatError;

/// Declares a style enum whose values parse case-insensitively, ignoring
/// `_` and `-`, so `tabularLeft`, `tabular_left` and `tabular-left` agree.
macro_rules! style_enum {
    ($(#[$meta:meta])* $name:ident, $option:literal { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = FormatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key: String = s
                    .chars()
                    .filter(|c| *c != '_' && *c != '-')
                    .flat_map(char::to_lowercase)
                    .collect();
                $(
                    if key == $text.to_ascii_lowercase() {
                        return Ok($name::$variant);
                    }
                )+
                Err(FormatError::Config(format!(
                    "invalid value for {}: {:?} (expected one of: {})",
                    $option,
                    s,
                    [$($text),+].join(", ")
                )))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

// The first variant listed is the default.
style_enum!(
    /// Casing applied to reserved words and function names.
    KeywordCase, "keyword_case" {
        Preserve => "preserve",
        Upper => "upper",
        Lower => "lower",
    }
);

style_enum!(
    /// How clause bodies are indented.
    IndentStyle, "indent_style" {
        Standard => "standard",
        TabularLeft => "tabularLeft",
        TabularRight => "tabularRight",
    }
);

style_enum!(
    /// Where AND/OR go when a condition is broken over lines.
    LogicalOperatorNewline, "logical_operator_newline" {
        Before => "before",
        After => "after",
    }
);

style_enum!(
    /// Where commas go when a list is broken over lines.
    CommaPosition, "comma_position" {
        After => "after",
        Before => "before",
    }
);

impl IndentStyle {
    pub fn is_tabular(self) -> bool {
        self != IndentStyle::Standard
    }
}

/// Values substituted for placeholders: a list consumed in order by `?`
/// (numbered placeholders index it from 1), or a map keyed by placeholder
/// name or number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ParamValues {
    Positional(Vec<String>),
    Named(BTreeMap<String, String>),
}

/// Formatting options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormatOptions {
    /// Dialect name, see [`crate::supported_dialects`].
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    #[serde(default)]
    pub use_tabs: bool,

    #[serde(default)]
    pub keyword_case: KeywordCase,

    #[serde(default)]
    pub indent_style: IndentStyle,

    #[serde(default)]
    pub logical_operator_newline: LogicalOperatorNewline,

    /// Align `AS` aliases in broken column lists.
    #[serde(default)]
    pub tabulate_alias: bool,

    #[serde(default)]
    pub comma_position: CommaPosition,

    /// Longest single-line rendering of a clause or group, in characters.
    #[serde(default = "default_expression_width")]
    pub expression_width: usize,

    #[serde(default = "default_lines_between_queries")]
    pub lines_between_queries: usize,

    /// Render every operator without surrounding spaces.
    #[serde(default)]
    pub dense_operators: bool,

    #[serde(default)]
    pub newline_before_semicolon: bool,

    #[serde(default)]
    pub params: Option<ParamValues>,

    /// Deepest allowed nesting of brackets and CASE expressions.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_language() -> String {
    "sql".to_string()
}
fn default_tab_width() -> usize {
    2
}
fn default_expression_width() -> usize {
    50
}
fn default_lines_between_queries() -> usize {
    1
}
fn default_max_depth() -> usize {
    256
}

/// Width of the keyword column in tabular indent styles.
pub const TABULAR_GUTTER: usize = 10;

impl FormatOptions {
    /// Reject values outside their valid range.
    pub fn validate(&self) -> Result<(), FormatError> {
        let invalid = |option: &str, message: &str| {
            Err(FormatError::Config(format!("invalid value for {option}: {message}")))
        };
        if !(1..=32).contains(&self.tab_width) {
            return invalid("tab_width", "must be between 1 and 32");
        }
        if self.expression_width == 0 {
            return invalid("expression_width", "must be at least 1");
        }
        if self.lines_between_queries > 100 {
            return invalid("lines_between_queries", "must be at most 100");
        }
        if self.max_depth == 0 {
            return invalid("max_depth", "must be at least 1");
        }
        Ok(())
    }

    /// The string for one level of indentation.
    pub fn indent_unit(&self) -> String {
        if self.indent_style.is_tabular() {
            " ".repeat(TABULAR_GUTTER)
        } else if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.tab_width)
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            language: default_language(),
            tab_width: default_tab_width(),
            use_tabs: false,
            keyword_case: KeywordCase::default(),
            indent_style: IndentStyle::default(),
            logical_operator_newline: LogicalOperatorNewline::default(),
            tabulate_alias: false,
            comma_position: CommaPosition::default(),
            expression_width: default_expression_width(),
            lines_between_queries: default_lines_between_queries(),
            dense_operators: false,
            newline_before_semicolon: false,
            params: None,
            max_depth: default_max_depth(),
        }
    }
}
