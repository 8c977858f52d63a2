use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

use crate::dialect::DialectConfig;
use crate::error::{line_col, FormatError, Result};
use crate::formatter::QueryFormatter;
use crate::mode::Mode;
use crate::node::Ast;
use crate::options::FormatOptions;
use crate::report::{FileResult, Report};

/// Format a query with the built-in dialect named by `options.language`.
pub fn format(query: &str, options: &FormatOptions) -> Result<String> {
    QueryFormatter::new(options.clone())?.format(query)
}

/// Format a query with an explicit dialect; `options.language` is ignored.
pub fn format_dialect(query: &str, dialect: &DialectConfig, options: &FormatOptions) -> Result<String> {
    QueryFormatter::with_dialect(dialect, options.clone())?.format(query)
}

/// Tokenize and parse a query without laying it out.
pub fn get_ast(query: &str, options: &FormatOptions) -> Result<Ast> {
    QueryFormatter::new(options.clone())?.parse(query)
}

/// Render an error against its source, adding a line and column when the
/// error has a position.
pub fn describe_error(source: &str, error: &FormatError) -> String {
    match error.position() {
        Some(position) => {
            let (line, col) = line_col(source, position);
            format!("{error} (line {line}, column {col})")
        }
        None => error.to_string(),
    }
}

/// Run the formatter on a collection of files and directories.
pub fn run(files: &[PathBuf], mode: &Mode) -> Result<Report> {
    let formatter = QueryFormatter::new(mode.options.clone())?;
    let matching_paths = get_matching_paths(files, mode);
    tracing::debug!(files = matching_paths.len(), "formatting files");
    let mut report = Report::new();

    if mode.single_process || matching_paths.len() <= 1 {
        for path in &matching_paths {
            report.add(format_file(path, &formatter, mode));
        }
        return Ok(report);
    }

    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(mode.threads)
        .build()
        .map_err(|e| FormatError::Config(format!("failed to start worker threads: {e}")))?;
    let results: Vec<FileResult> = pool.install(|| {
        matching_paths
            .par_iter()
            .map(|path| format_file(path, &formatter, mode))
            .collect()
    });
    for result in results {
        report.add(result);
    }
    Ok(report)
}

/// Format a single file, writing it back unless checking or diffing.
pub fn format_file(path: &Path, formatter: &QueryFormatter, mode: &Mode) -> FileResult {
    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => return FileResult::error(path, format!("Read error: {e}")),
    };

    let formatted = match formatter.format(&source) {
        Ok(f) if f.is_empty() => f,
        Ok(f) => f + "\n",
        Err(e) => return FileResult::error(path, describe_error(&source, &e)),
    };

    if source == formatted {
        return FileResult::unchanged(path);
    }
    if mode.diff {
        if let Err(e) = print_diff(path, &source, &formatted, mode.color_choice()) {
            tracing::warn!(path = %path.display(), error = %e, "failed to print diff");
        }
    }
    if !mode.writes_files() {
        return FileResult::changed(path);
    }
    match std::fs::write(path, &formatted) {
        Ok(()) => FileResult::changed(path),
        Err(e) => FileResult::error(path, format!("Write error: {e}")),
    }
}

/// All SQL files named by `paths`, walking directories, sorted.
pub fn get_matching_paths(paths: &[PathBuf], mode: &Mode) -> Vec<PathBuf> {
    let extensions = mode.sql_extensions();
    let exclude: Vec<glob::Pattern> = mode
        .exclude
        .iter()
        .filter_map(|pattern| match glob::Pattern::new(pattern) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!(pattern = %pattern, error = %e, "ignoring invalid exclude pattern");
                None
            }
        })
        .collect();
    let mut result = HashSet::new();

    for path in paths {
        if path.is_file() {
            if is_sql_file(path, extensions) && !is_excluded(path, &exclude) {
                result.insert(path.clone());
            }
        } else if path.is_dir() {
            collect_sql_files(path, extensions, &exclude, &mut result);
        } else {
            tracing::warn!(path = %path.display(), "no such file or directory");
        }
    }

    let mut sorted: Vec<PathBuf> = result.into_iter().collect();
    sorted.sort();
    sorted
}

fn is_sql_file(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| extensions.contains(&ext.as_str()))
}

/// An exclude pattern matches the file name or the whole path.
fn is_excluded(path: &Path, exclude: &[glob::Pattern]) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    exclude
        .iter()
        .any(|pattern| pattern.matches(&name) || pattern.matches_path(path))
}

fn collect_sql_files(
    dir: &Path,
    extensions: &[&str],
    exclude: &[glob::Pattern],
    result: &mut HashSet<PathBuf>,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!(path = %dir.display(), error = %e, "cannot read directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let hidden = path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().starts_with('.'));
        if hidden || is_excluded(&path, exclude) {
            continue;
        }
        if path.is_dir() {
            collect_sql_files(&path, extensions, exclude, result);
        } else if is_sql_file(&path, extensions) {
            result.insert(path);
        }
    }
}

/// Print a coloured unified diff between original and formatted content to
/// stderr. Each file's diff is written in one piece.
pub fn print_diff(path: &Path, original: &str, formatted: &str, color: ColorChoice) -> std::io::Result<()> {
    use similar::{ChangeTag, TextDiff};

    let writer = BufferWriter::stderr(color);
    let mut out = writer.buffer();
    writeln!(out, "--- {}", path.display())?;
    writeln!(out, "+++ {}", path.display())?;

    let diff = TextDiff::from_lines(original, formatted);
    for change in diff.iter_all_changes() {
        let (sign, fg) = match change.tag() {
            ChangeTag::Delete => ("-", Some(Color::Red)),
            ChangeTag::Insert => ("+", Some(Color::Green)),
            ChangeTag::Equal => (" ", None),
        };
        out.set_color(ColorSpec::new().set_fg(fg))?;
        write!(out, "{sign}{change}")?;
        if change.missing_newline() {
            writeln!(out)?;
        }
    }
    out.reset()?;
    writer.print(&out)
}
