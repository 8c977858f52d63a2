//! Compiles reserved-phrase templates such as `CREATE [OR REPLACE] {TABLE | VIEW}`
//! into the flat list of word sequences the tokenizer matches against.
//!
//! Template grammar:
//! - a bare word is a literal;
//! - `[A B]` is an optional segment, `[A | B]` an optional choice;
//! - `{A | B}` is exactly one of the alternatives.
//!
//! Groups nest freely. Templates are parsed into [`Segment`]s once, at
//! dialect build time.

use std::collections::HashSet;
use std::fmt;

use compact_str::CompactString;

use crate::error::TemplateError;

/// Parsed form of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(CompactString),
    /// Zero or one of the alternatives.
    Optional(Vec<Vec<Segment>>),
    /// Exactly one of the alternatives.
    OneOf(Vec<Vec<Segment>>),
}

/// One concrete word sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpandedPhrase(Box<[CompactString]>);

impl ExpandedPhrase {
    pub fn words(&self) -> &[CompactString] {
        &self.0
    }

    pub fn word_count(&self) -> usize {
        self.0.len()
    }

    /// Length of the phrase written with single spaces.
    pub fn char_len(&self) -> usize {
        self.0.iter().map(|w| w.chars().count()).sum::<usize>() + self.0.len().saturating_sub(1)
    }
}

impl fmt::Display for ExpandedPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sym<'a> {
    Word(&'a str),
    OpenOptional,
    CloseOptional,
    OpenOneOf,
    CloseOneOf,
    Bar,
}

fn scan(template: &str) -> Vec<(usize, Sym<'_>)> {
    let bytes = template.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let sym = match bytes[i] {
            b'[' => Sym::OpenOptional,
            b']' => Sym::CloseOptional,
            b'{' => Sym::OpenOneOf,
            b'}' => Sym::CloseOneOf,
            b'|' => Sym::Bar,
            b if b.is_ascii_whitespace() => {
                i += 1;
                continue;
            }
            _ => {
                let start = i;
                while i < bytes.len()
                    && !matches!(bytes[i], b'[' | b']' | b'{' | b'}' | b'|')
                    && !bytes[i].is_ascii_whitespace()
                {
                    i += 1;
                }
                out.push((start, Sym::Word(&template[start..i])));
                continue;
            }
        };
        out.push((i, sym));
        i += 1;
    }
    out
}

struct TemplateParser<'a> {
    template: &'a str,
    syms: Vec<(usize, Sym<'a>)>,
    pos: usize,
}

impl<'a> TemplateParser<'a> {
    fn error(&self, position: usize, message: impl Into<String>) -> TemplateError {
        TemplateError {
            template: self.template.to_string(),
            position,
            message: message.into(),
        }
    }

    fn peek(&self) -> Option<(usize, Sym<'a>)> {
        self.syms.get(self.pos).copied()
    }

    fn sequence(&mut self) -> Result<Vec<Segment>, TemplateError> {
        let mut segments = Vec::new();
        while let Some((at, sym)) = self.peek() {
            match sym {
                Sym::Word(w) => {
                    self.pos += 1;
                    segments.push(Segment::Literal(CompactString::from(w.to_ascii_uppercase())));
                }
                Sym::OpenOptional | Sym::OpenOneOf => {
                    self.pos += 1;
                    let alts = self.alternatives()?;
                    let (close, closer) = match sym {
                        Sym::OpenOptional => (Sym::CloseOptional, ']'),
                        _ => (Sym::CloseOneOf, '}'),
                    };
                    match self.peek() {
                        Some((_, s)) if s == close => self.pos += 1,
                        Some((p, _)) => {
                            return Err(self.error(p, format!("expected `{closer}`")));
                        }
                        None => {
                            return Err(self.error(at, "unclosed group"));
                        }
                    }
                    if alts.iter().any(Vec::is_empty) {
                        return Err(self.error(at, "empty alternative"));
                    }
                    segments.push(match sym {
                        Sym::OpenOptional => Segment::Optional(alts),
                        _ => Segment::OneOf(alts),
                    });
                }
                _ => break,
            }
        }
        Ok(segments)
    }

    fn alternatives(&mut self) -> Result<Vec<Vec<Segment>>, TemplateError> {
        let mut alts = vec![self.sequence()?];
        while let Some((_, Sym::Bar)) = self.peek() {
            self.pos += 1;
            alts.push(self.sequence()?);
        }
        Ok(alts)
    }
}

/// Parse a template into segments.
pub fn parse_template(template: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut parser = TemplateParser {
        template,
        syms: scan(template),
        pos: 0,
    };
    let segments = parser.sequence()?;
    if let Some((at, sym)) = parser.peek() {
        let message = match sym {
            Sym::Bar => "`|` outside of a group",
            _ => "unbalanced closing bracket",
        };
        return Err(parser.error(at, message));
    }
    if segments.is_empty() {
        return Err(parser.error(0, "empty template"));
    }
    Ok(segments)
}

fn expand_sequence(segments: &[Segment]) -> Vec<Vec<CompactString>> {
    let mut acc: Vec<Vec<CompactString>> = vec![Vec::new()];
    for segment in segments {
        let options: Vec<Vec<CompactString>> = match segment {
            Segment::Literal(word) => vec![vec![word.clone()]],
            Segment::Optional(alts) => std::iter::once(Vec::new())
                .chain(alts.iter().flat_map(|alt| expand_sequence(alt)))
                .collect(),
            Segment::OneOf(alts) => alts.iter().flat_map(|alt| expand_sequence(alt)).collect(),
        };
        acc = acc
            .iter()
            .flat_map(|prefix| {
                options.iter().map(move |option| {
                    let mut words = prefix.clone();
                    words.extend(option.iter().cloned());
                    words
                })
            })
            .collect();
    }
    acc
}

/// Expand parsed segments, omitted branches first, duplicates removed.
pub fn expand_segments(segments: &[Segment]) -> Vec<ExpandedPhrase> {
    let mut seen = HashSet::new();
    expand_sequence(segments)
        .into_iter()
        .filter(|words| !words.is_empty())
        .map(|words| ExpandedPhrase(words.into_boxed_slice()))
        .filter(|phrase| seen.insert(phrase.clone()))
        .collect()
}

/// Expand a list of templates into phrases in first-production order.
pub fn expand(templates: &[&str]) -> Result<Vec<ExpandedPhrase>, TemplateError> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for template in templates {
        for phrase in expand_segments(&parse_template(template)?) {
            if seen.insert(phrase.clone()) {
                out.push(phrase);
            }
        }
    }
    Ok(out)
}
