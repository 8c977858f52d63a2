use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of formatting one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Already formatted.
    Unchanged,
    /// Reformatted, or would be in check and diff modes.
    Changed,
    Error,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FileStatus::Unchanged => "unchanged",
            FileStatus::Changed => "changed",
            FileStatus::Error => "error",
        })
    }
}

#[derive(Debug, Clone)]
pub struct FileResult {
    pub path: PathBuf,
    pub status: FileStatus,
    pub error: Option<String>,
}

impl FileResult {
    pub fn unchanged(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            status: FileStatus::Unchanged,
            error: None,
        }
    }

    pub fn changed(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            status: FileStatus::Changed,
            error: None,
        }
    }

    pub fn error(path: &Path, error: impl fmt::Display) -> Self {
        Self {
            path: path.to_path_buf(),
            status: FileStatus::Error,
            error: Some(error.to_string()),
        }
    }
}

/// Results of a run over many files.
#[derive(Debug, Default)]
pub struct Report {
    pub results: Vec<FileResult>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: FileResult) {
        self.results.push(result);
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    fn count(&self, status: FileStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    pub fn unchanged(&self) -> usize {
        self.count(FileStatus::Unchanged)
    }

    pub fn changed(&self) -> usize {
        self.count(FileStatus::Changed)
    }

    pub fn errors(&self) -> usize {
        self.count(FileStatus::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors() > 0
    }

    pub fn has_changes(&self) -> bool {
        self.changed() > 0
    }

    /// Process exit code: 2 on any error, 1 when checking found changes.
    pub fn exit_code(&self, check: bool) -> u8 {
        if self.has_errors() {
            2
        } else if check && self.has_changes() {
            1
        } else {
            0
        }
    }

    /// One-line summary. `check` words changes as pending.
    pub fn summary(&self, check: bool) -> String {
        let mut parts = vec![format!("{} file(s) processed", self.total())];
        if self.changed() > 0 {
            let verb = if check { "would be reformatted" } else { "reformatted" };
            parts.push(format!("{} {verb}", self.changed()));
        }
        if self.unchanged() > 0 {
            parts.push(format!("{} unchanged", self.unchanged()));
        }
        if self.errors() > 0 {
            parts.push(format!("{} error(s)", self.errors()));
        }
        parts.join(", ")
    }

    pub fn print_errors(&self) {
        for result in &self.results {
            if let Some(error) = &result.error {
                eprintln!("error: {}: {}", result.path.display(), error);
            }
        }
    }
}
