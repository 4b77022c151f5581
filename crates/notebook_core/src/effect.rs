use crate::{SelectedFile, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the notebook index and report back with `Msg::NotebooksLoaded`/`NotebooksFailed`.
    RefreshNotebooks,
    /// Begin the repeating progress tick for a submission.
    StartProgress { submission_id: SubmissionId },
    /// Cancel the progress tick. Emitted exactly once per submission.
    StopProgress { submission_id: SubmissionId },
    /// Post the multipart payload to the generate endpoint.
    Generate {
        submission_id: SubmissionId,
        payload: SubmissionPayload,
    },
    /// Report `Msg::SettleElapsed` after the cosmetic settle delay.
    ScheduleSettle { submission_id: SubmissionId },
}

/// Multipart body of one generation request: the chooser's file plus the
/// sibling form fields, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionPayload {
    pub file: Option<SelectedFile>,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
