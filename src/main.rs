use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::Level;

use sqlformatter::mode::Mode;
use sqlformatter::options::{
    CommaPosition, IndentStyle, KeywordCase, LogicalOperatorNewline, ParamValues,
};
use sqlformatter::report::{FileStatus, Report};

/// sqlformatter - a multi-dialect SQL formatter.
///
/// Reads stdin when no files are given (or "-"), otherwise formats files
/// and directories in place.
#[derive(Parser, Debug)]
#[command(name = "sqlformatter", version, about)]
struct Cli {
    /// Files or directories to format. Use "-" to read from stdin.
    files: Vec<PathBuf>,

    /// SQL dialect, e.g. sql, postgresql, bigquery, tsql.
    #[arg(short = 'l', long)]
    language: Option<String>,

    /// Report files that would change and exit 1 if any would.
    #[arg(long)]
    check: bool,

    /// Print a diff of the changes instead of writing them.
    #[arg(long)]
    diff: bool,

    /// Print the structural tree of stdin as JSON.
    #[arg(long)]
    ast: bool,

    /// Glob patterns to exclude.
    #[arg(long)]
    exclude: Vec<String>,

    /// Path to a config file (default: nearest .sqlformatter.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    tab_width: Option<usize>,

    #[arg(long)]
    use_tabs: bool,

    /// preserve, upper or lower.
    #[arg(long)]
    keyword_case: Option<KeywordCase>,

    /// standard, tabularLeft or tabularRight.
    #[arg(long)]
    indent_style: Option<IndentStyle>,

    /// before or after.
    #[arg(long)]
    logical_operator_newline: Option<LogicalOperatorNewline>,

    /// Align AS aliases in broken column lists.
    #[arg(long)]
    tabulate_alias: bool,

    /// after or before.
    #[arg(long)]
    comma_position: Option<CommaPosition>,

    #[arg(long)]
    expression_width: Option<usize>,

    #[arg(long)]
    lines_between_queries: Option<usize>,

    #[arg(long)]
    dense_operators: bool,

    #[arg(long)]
    newline_before_semicolon: bool,

    /// Deepest allowed nesting of brackets and CASE expressions.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Placeholder values as JSON: a list, or an object keyed by name.
    #[arg(long)]
    params: Option<String>,

    /// More logging (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Errors only.
    #[arg(short, long)]
    quiet: bool,

    #[arg(long)]
    no_color: bool,

    #[arg(long)]
    force_color: bool,

    /// Worker threads for many files (0 = all cores).
    #[arg(short = 't', long, default_value_t = 0)]
    threads: usize,

    #[arg(long)]
    single_process: bool,
}

impl Cli {
    fn reads_stdin(&self) -> bool {
        self.files.is_empty() || (self.files.len() == 1 && self.files[0] == Path::new("-"))
    }

    /// Command-line values override the config file.
    fn apply(&self, mode: &mut Mode) -> anyhow::Result<()> {
        let options = &mut mode.options;
        if let Some(language) = &self.language {
            options.language = language.clone();
        }
        if let Some(n) = self.tab_width {
            options.tab_width = n;
        }
        options.use_tabs |= self.use_tabs;
        if let Some(case) = self.keyword_case {
            options.keyword_case = case;
        }
        if let Some(style) = self.indent_style {
            options.indent_style = style;
        }
        if let Some(placement) = self.logical_operator_newline {
            options.logical_operator_newline = placement;
        }
        options.tabulate_alias |= self.tabulate_alias;
        if let Some(position) = self.comma_position {
            options.comma_position = position;
        }
        if let Some(n) = self.expression_width {
            options.expression_width = n;
        }
        if let Some(n) = self.lines_between_queries {
            options.lines_between_queries = n;
        }
        options.dense_operators |= self.dense_operators;
        options.newline_before_semicolon |= self.newline_before_semicolon;
        if let Some(n) = self.max_depth {
            options.max_depth = n;
        }
        if let Some(json) = &self.params {
            let params: ParamValues =
                serde_json::from_str(json).context("--params must be a JSON list or object")?;
            options.params = Some(params);
        }
        options.validate()?;

        mode.check = self.check;
        mode.diff = self.diff;
        if !self.exclude.is_empty() {
            mode.exclude = self.exclude.clone();
        }
        mode.verbose = self.verbose > 0;
        mode.quiet = self.quiet;
        mode.no_color = self.no_color;
        mode.force_color = self.force_color;
        mode.threads = self.threads;
        mode.single_process = self.single_process;
        Ok(())
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let search_from = if cli.reads_stdin() {
        vec![std::env::current_dir().context("cannot determine the current directory")?]
    } else {
        cli.files.clone()
    };
    let mut mode = sqlformatter::load_config(&search_from, cli.config.as_deref())
        .context("Configuration error")?;
    cli.apply(&mut mode)?;

    if cli.reads_stdin() {
        return format_stdin(cli, &mode);
    }
    if cli.ast {
        bail!("--ast reads the query from stdin");
    }

    let report = sqlformatter::run(&cli.files, &mode)?;
    if !mode.quiet {
        print_verbose_results(&report, &mode);
        eprintln!("{}", report.summary(mode.check || mode.diff));
    }
    report.print_errors();
    Ok(report.exit_code(mode.check))
}

fn format_stdin(cli: &Cli, mode: &Mode) -> anyhow::Result<u8> {
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .context("Error reading stdin")?;

    if cli.ast {
        let ast = sqlformatter::get_ast(&source, &mode.options)
            .map_err(|e| anyhow::anyhow!(sqlformatter::describe_error(&source, &e)))?;
        println!("{}", serde_json::to_string_pretty(&ast)?);
        return Ok(0);
    }

    let formatted = sqlformatter::format(&source, &mode.options)
        .map_err(|e| anyhow::anyhow!(sqlformatter::describe_error(&source, &e)))?;
    let formatted = if formatted.is_empty() {
        formatted
    } else {
        formatted + "\n"
    };
    if mode.check || mode.diff {
        if mode.diff && formatted != source {
            sqlformatter::print_diff(Path::new("<stdin>"), &source, &formatted, mode.color_choice())?;
        }
        return Ok(u8::from(mode.check && formatted != source));
    }
    print!("{formatted}");
    Ok(0)
}

fn print_verbose_results(report: &Report, mode: &Mode) {
    if !mode.verbose {
        return;
    }
    for result in &report.results {
        match result.status {
            FileStatus::Changed if mode.writes_files() => {
                eprintln!("reformatted {}", result.path.display());
            }
            FileStatus::Changed => eprintln!("would reformat {}", result.path.display()),
            FileStatus::Unchanged => eprintln!("unchanged {}", result.path.display()),
            FileStatus::Error => {}
        }
    }
}
