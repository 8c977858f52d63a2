use termcolor::ColorChoice;

use crate::options::FormatOptions;

/// Mode holds everything the file runner needs: the formatting options plus
/// how files are selected, checked and reported.
#[derive(Debug, Clone, Default)]
pub struct Mode {
    pub options: FormatOptions,

    /// Report files that would change instead of writing them.
    pub check: bool,

    /// Print a diff for files that would change.
    pub diff: bool,

    /// Glob patterns matched against file and directory names.
    pub exclude: Vec<String>,

    pub verbose: bool,

    pub quiet: bool,

    pub no_color: bool,

    pub force_color: bool,

    /// Worker threads for formatting many files (0 = all cores).
    pub threads: usize,

    pub single_process: bool,
}

impl Mode {
    pub fn color_choice(&self) -> ColorChoice {
        if self.force_color {
            ColorChoice::Always
        } else if self.no_color || std::env::var_os("NO_COLOR").is_some() {
            ColorChoice::Never
        } else {
            ColorChoice::Auto
        }
    }

    /// Files are written unless checking or diffing.
    pub fn writes_files(&self) -> bool {
        !self.check && !self.diff
    }

    /// File extensions picked up when walking directories.
    pub fn sql_extensions(&self) -> &[&str] {
        &["sql", "ddl", "dml"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode() {
        let mode = Mode::default();
        assert_eq!(mode.options.language, "sql");
        assert!(mode.writes_files());
        assert_eq!(mode.threads, 0);
    }

    #[test]
    fn test_color_choice() {
        let mode = Mode {
            force_color: true,
            no_color: true,
            ..Mode::default()
        };
        assert_eq!(mode.color_choice(), ColorChoice::Always);
        let mode = Mode {
            no_color: true,
            ..Mode::default()
        };
        assert_eq!(mode.color_choice(), ColorChoice::Never);
    }
}
