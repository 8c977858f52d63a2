use sqlformatter::format;
use sqlformatter::options::{CommaPosition, FormatOptions, IndentStyle, KeywordCase, LogicalOperatorNewline};
use std::fs;

const SENTINEL: &str = ")))))__SQLFORMATTER_OUTPUT__(((((";

/// Read a golden test data file and return a (source, expected) tuple.
///
/// - If the file contains the sentinel, lines above are the source and lines
///   below are the expected output
/// - Without a sentinel the file is preformatted: expected = source
/// - Both sides are compared without a trailing newline
fn read_test_data(path: &str) -> (String, String) {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test file {}: {}", path, e));

    let mut source_lines: Vec<&str> = Vec::new();
    let mut formatted_lines: Vec<&str> = Vec::new();
    let mut found_sentinel = false;

    for line in content.lines() {
        if line.trim() == SENTINEL {
            found_sentinel = true;
            continue;
        }
        if found_sentinel {
            formatted_lines.push(line);
        } else {
            source_lines.push(line);
        }
    }

    if !found_sentinel {
        formatted_lines = source_lines.clone();
    }

    let source = source_lines.join("\n").trim().to_string();
    let expected = formatted_lines.join("\n").trim_end().to_string();
    (source, expected)
}

fn default_mode() -> FormatOptions {
    FormatOptions::default()
}

fn upper_mode() -> FormatOptions {
    FormatOptions {
        keyword_case: KeywordCase::Upper,
        ..FormatOptions::default()
    }
}

fn tabular_left_mode() -> FormatOptions {
    FormatOptions {
        indent_style: IndentStyle::TabularLeft,
        ..FormatOptions::default()
    }
}

fn comma_before_mode() -> FormatOptions {
    FormatOptions {
        expression_width: 20,
        comma_position: CommaPosition::Before,
        logical_operator_newline: LogicalOperatorNewline::After,
        ..FormatOptions::default()
    }
}

fn dialect_mode(language: &str) -> FormatOptions {
    FormatOptions {
        language: language.to_string(),
        ..FormatOptions::default()
    }
}

fn postgresql_mode() -> FormatOptions {
    dialect_mode("postgresql")
}

fn transactsql_mode() -> FormatOptions {
    dialect_mode("transactsql")
}

fn bigquery_mode() -> FormatOptions {
    dialect_mode("bigquery")
}

fn run_golden_test(path: &str, options: &FormatOptions) {
    let (source, expected) = read_test_data(path);
    let actual = format(&source, options).unwrap_or_else(|e| {
        panic!("format failed for {}: {}", path, e);
    });
    assert_eq!(
        expected, actual,
        "\n\nFormatting mismatch for {}\n\n--- expected ---\n{}\n--- actual ---\n{}\n",
        path, expected, actual
    );
    // Idempotency check
    let second = format(&actual, options).unwrap_or_else(|e| {
        panic!("Idempotency format failed for {}: {}", path, e);
    });
    assert_eq!(
        expected, second,
        "\n\nIdempotency failed for {}\n\n--- expected ---\n{}\n--- second pass ---\n{}\n",
        path, expected, second
    );
}

fn run_golden_error_test(path: &str) {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read error test file {}: {}", path, e));
    let result = format(content.trim(), &default_mode());
    assert!(
        result.is_err(),
        "Expected error for {} but got Ok:\n{}",
        path,
        result.unwrap()
    );
}

macro_rules! golden_tests {
    (mode: $mode_fn:ident, $($name:ident => $path:expr),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                run_golden_test($path, &$mode_fn());
            }
        )*
    };
}

macro_rules! golden_error_tests {
    ($($name:ident => $path:expr),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                run_golden_error_test($path);
            }
        )*
    };
}

// =============================================================================
// Standard SQL, default options
// =============================================================================

golden_tests! {
    mode: default_mode,
    golden_sql_001_select_basic => "tests/data/sql/001_select_basic.sql",
    golden_sql_002_long_select_list => "tests/data/sql/002_long_select_list.sql",
    golden_sql_003_subquery_case => "tests/data/sql/003_subquery_case.sql",
    golden_sql_004_comments => "tests/data/sql/004_comments.sql",
    golden_sql_005_preformatted => "tests/data/sql/005_preformatted.sql",
    golden_sql_009_union_and_window => "tests/data/sql/009_union_and_window.sql",
}

// =============================================================================
// Style options
// =============================================================================

golden_tests! {
    mode: upper_mode,
    golden_sql_006_keyword_case_upper => "tests/data/sql/006_keyword_case_upper.sql",
}

golden_tests! {
    mode: tabular_left_mode,
    golden_sql_007_tabular_left => "tests/data/sql/007_tabular_left.sql",
}

golden_tests! {
    mode: comma_before_mode,
    golden_sql_008_comma_before_operator_after => "tests/data/sql/008_comma_before_operator_after.sql",
}

// =============================================================================
// Dialects
// =============================================================================

golden_tests! {
    mode: postgresql_mode,
    golden_postgresql_001_casts_and_operators => "tests/data/postgresql/001_casts_and_operators.sql",
}

golden_tests! {
    mode: transactsql_mode,
    golden_transactsql_001_bracket_identifiers => "tests/data/transactsql/001_bracket_identifiers.sql",
}

golden_tests! {
    mode: bigquery_mode,
    golden_bigquery_001_dashed_table_hash_comment => "tests/data/bigquery/001_dashed_table_hash_comment.sql",
}

// =============================================================================
// Inputs that must be rejected
// =============================================================================

golden_error_tests! {
    golden_error_001_unclosed_paren => "tests/data/errors/001_unclosed_paren.sql",
    golden_error_002_unmatched_close => "tests/data/errors/002_unmatched_close.sql",
    golden_error_003_unterminated_string => "tests/data/errors/003_unterminated_string.sql",
    golden_error_004_case_without_end => "tests/data/errors/004_case_without_end.sql",
    golden_error_005_unterminated_comment => "tests/data/errors/005_unterminated_comment.sql",
}
