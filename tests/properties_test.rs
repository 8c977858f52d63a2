//! Property tests: the tokenizer loses nothing, and formatting its own
//! output changes nothing.

use proptest::prelude::*;

use sqlformatter::lexer::tokenize;
use sqlformatter::options::{CommaPosition, FormatOptions, IndentStyle, KeywordCase};
use sqlformatter::token::reconstruct;
use sqlformatter::{dialect_from_name, format};

fn ident() -> impl Strategy<Value = String> {
    "c_[a-z0-9]{1,6}"
}

fn expr() -> impl Strategy<Value = String> {
    prop_oneof![
        ident(),
        (ident(), ident()).prop_map(|(t, c)| format!("{t}.{c}")),
        (ident(), 0u32..1000).prop_map(|(a, n)| format!("{a} + {n}")),
        prop::collection::vec(ident(), 1..4).prop_map(|args| format!("coalesce({})", args.join(", "))),
        (ident(), 0u32..10).prop_map(|(a, n)| format!("case when {a} = {n} then 'x' else 'y' end")),
    ]
}

fn condition() -> impl Strategy<Value = String> {
    (expr(), prop::sample::select(vec!["=", "<>", "<", ">="]), expr())
        .prop_map(|(l, op, r)| format!("{l} {op} {r}"))
}

fn conditions() -> impl Strategy<Value = String> {
    prop::collection::vec((condition(), prop::sample::select(vec!["and", "or"])), 1..4).prop_map(
        |parts| {
            let mut out = String::new();
            for (i, (cond, joiner)) in parts.iter().enumerate() {
                if i > 0 {
                    out.push_str(&format!(" {joiner} "));
                }
                out.push_str(cond);
            }
            out
        },
    )
}

fn select() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(expr(), 1..6),
        ident(),
        prop::option::of(conditions()),
        prop::option::of(ident()),
    )
        .prop_map(|(columns, table, filter, order)| {
            let mut q = format!("select {} from {table}", columns.join(", "));
            if let Some(filter) = filter {
                q.push_str(&format!(" where {filter}"));
            }
            if let Some(order) = order {
                q.push_str(&format!(" order by {order}"));
            }
            q
        })
}

fn query() -> impl Strategy<Value = String> {
    prop_oneof![
        select(),
        (select(), ident(), prop::collection::vec(expr(), 1..3)).prop_map(|(inner, alias, cols)| {
            format!("select {} from ({inner}) as {alias}", cols.join(", "))
        }),
        (select(), select()).prop_map(|(a, b)| format!("{a} union all {b}; {b}")),
    ]
}

fn options() -> impl Strategy<Value = FormatOptions> {
    (
        10usize..80,
        any::<bool>(),
        prop::sample::select(vec![KeywordCase::Preserve, KeywordCase::Upper, KeywordCase::Lower]),
        prop::sample::select(vec![
            IndentStyle::Standard,
            IndentStyle::TabularLeft,
            IndentStyle::TabularRight,
        ]),
    )
        .prop_map(|(width, comma_before, keyword_case, indent_style)| FormatOptions {
            expression_width: width,
            comma_position: if comma_before {
                CommaPosition::Before
            } else {
                CommaPosition::After
            },
            keyword_case,
            indent_style,
            ..FormatOptions::default()
        })
}

proptest! {
    #[test]
    fn tokens_reconstruct_input(input in "[a-zA-Z0-9_ ,.()'\"\n\t+*=<>;-]{0,80}") {
        for name in ["sql", "postgresql", "mysql"] {
            if let Ok(tokens) = tokenize(&input, dialect_from_name(name).unwrap()) {
                prop_assert_eq!(reconstruct(&tokens), input.clone());
            }
        }
    }

    #[test]
    fn generated_queries_tokenize_losslessly(q in query()) {
        let tokens = tokenize(&q, dialect_from_name("sql").unwrap()).unwrap();
        prop_assert_eq!(reconstruct(&tokens), q);
    }

    #[test]
    fn formatting_is_idempotent(q in query(), options in options()) {
        let first = format(&q, &options).unwrap();
        let second = format(&first, &options).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn output_has_no_trailing_whitespace(q in query(), options in options()) {
        let out = format(&q, &options).unwrap();
        prop_assert!(out.lines().all(|l| l == l.trim_end()), "{}", out);
        prop_assert!(!out.ends_with('\n'));
    }
}
