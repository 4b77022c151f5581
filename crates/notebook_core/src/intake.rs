use std::path::{Path, PathBuf};

/// Only dropped files whose name ends with this literal suffix are accepted.
pub const CSV_SUFFIX: &str = ".csv";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A file picked by the user. Lives only in page memory and is superseded by
/// the next selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            path: path.into(),
        }
    }

    /// Builds a selection named after the last component of `path`.
    pub fn from_path(path: &Path, size_bytes: u64) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(name, size_bytes, path)
    }

    pub fn summary(&self) -> String {
        format!("{} ({} MB)", self.name, format_size_mb(self.size_bytes))
    }
}

pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / BYTES_PER_MB)
}

/// Drop acceptance policy: case-sensitive `.csv` suffix, nothing else.
pub fn accepts_drop(name: &str) -> bool {
    name.ends_with(CSV_SUFFIX)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileIntake {
    chooser: Option<SelectedFile>,
    drag_highlight: bool,
}

impl FileIntake {
    pub fn on_file_chosen(&mut self, file: SelectedFile) {
        self.chooser = Some(file);
    }

    /// Returns `true` when the drop was accepted into the chooser.
    pub fn on_file_dropped(&mut self, file: SelectedFile) -> bool {
        self.drag_highlight = false;
        if !accepts_drop(&file.name) {
            return false;
        }
        self.on_file_chosen(file);
        true
    }

    /// Returns `true` when the highlight changed.
    pub fn on_drag_over(&mut self) -> bool {
        !std::mem::replace(&mut self.drag_highlight, true)
    }

    /// Returns `true` when the highlight changed.
    pub fn on_drag_leave(&mut self) -> bool {
        std::mem::replace(&mut self.drag_highlight, false)
    }

    pub fn chosen(&self) -> Option<&SelectedFile> {
        self.chooser.as_ref()
    }

    pub fn summary(&self) -> Option<String> {
        self.chooser.as_ref().map(SelectedFile::summary)
    }

    pub fn is_highlighted(&self) -> bool {
        self.drag_highlight
    }
}
