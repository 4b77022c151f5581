/// Rows beyond this are dropped client-side.
pub const NOTEBOOK_LIST_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookSummary {
    pub filename: String,
    /// Timestamp text as sent by the server; formatting happens at render time.
    pub created: String,
    pub size_bytes: u64,
    pub download_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotebookList {
    entries: Option<Vec<NotebookSummary>>,
}

impl NotebookList {
    /// Replaces the list with the first `NOTEBOOK_LIST_LIMIT` entries in source
    /// order. An empty refresh leaves the current list untouched and returns `false`.
    pub fn replace(&mut self, mut entries: Vec<NotebookSummary>) -> bool {
        if entries.is_empty() {
            return false;
        }
        entries.truncate(NOTEBOOK_LIST_LIMIT);
        self.entries = Some(entries);
        true
    }

    /// `None` until the first non-empty refresh.
    pub fn entries(&self) -> Option<&[NotebookSummary]> {
        self.entries.as_deref()
    }
}
