#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Host finished wiring the page.
    PageLoaded,
    /// User picked a file through the file chooser.
    FileChosen(crate::SelectedFile),
    /// A drag is hovering the drop target.
    DragOver,
    /// The drag left the drop target without dropping.
    DragLeave,
    /// A file was dropped onto the drop target.
    FileDropped(crate::SelectedFile),
    /// User submitted the form with its non-file fields.
    SubmitClicked { fields: Vec<crate::FormField> },
    /// Progress timer fired for a submission.
    ProgressTick { submission_id: crate::SubmissionId },
    /// The generate call resolved. `Err` carries the user-facing message.
    GenerationFinished {
        submission_id: crate::SubmissionId,
        result: Result<crate::GenerationResult, String>,
    },
    /// The settle delay after a successful submission elapsed.
    SettleElapsed { submission_id: crate::SubmissionId },
    /// The notebook index arrived, in server order.
    NotebooksLoaded(Vec<crate::NotebookSummary>),
    /// The notebook index could not be fetched.
    NotebooksFailed(String),
    /// Fallback for placeholder wiring.
    NoOp,
}
