use crate::{NotebookSummary, SubmissionState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub submission: SubmissionState,
    pub drop_highlighted: bool,
    /// Name of the file held by the chooser input.
    pub chooser_value: Option<String>,
    /// `Some` when the file-info region is visible.
    pub file_summary: Option<String>,
    pub submit_enabled: bool,
    /// `Some` when the progress region is visible.
    pub progress: Option<ProgressView>,
    pub result: Option<ResultView>,
    pub error: Option<String>,
    /// `None` until the first non-empty refresh; the host document's list stays as-is.
    pub notebooks: Option<Vec<NotebookSummary>>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressView {
    pub percent: u8,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub message: String,
    pub download_url: String,
}
