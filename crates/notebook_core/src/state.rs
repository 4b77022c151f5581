use crate::view_model::{AppViewModel, ProgressView, ResultView};
use crate::{
    FileIntake, GenerationResult, NotebookList, Outcome, ProgressSimulator, ResultPresenter,
    SubmissionController, SubmissionId, SubmissionState,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) intake: FileIntake,
    pub(crate) progress: ProgressSimulator,
    pub(crate) submission: SubmissionController,
    pub(crate) presenter: ResultPresenter,
    pub(crate) notebooks: NotebookList,
    progress_visible: bool,
    /// Successful result waiting for the settle delay before it is shown.
    pending_result: Option<(SubmissionId, GenerationResult)>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let progress = self.progress_visible.then(|| ProgressView {
            percent: self.progress.percent(),
            label: self.progress.label().map(ToOwned::to_owned),
        });
        let (result, error) = match self.presenter.outcome() {
            Outcome::Hidden => (None, None),
            Outcome::Success(result) => (
                Some(ResultView {
                    message: result.message(),
                    download_url: result.download_url.clone(),
                }),
                None,
            ),
            Outcome::Error(message) => (None, Some(message.clone())),
        };

        AppViewModel {
            submission: self.submission.state(),
            drop_highlighted: self.intake.is_highlighted(),
            chooser_value: self.intake.chosen().map(|file| file.name.clone()),
            file_summary: self.intake.summary(),
            submit_enabled: self.submission.can_submit(),
            progress,
            result,
            error,
            notebooks: self.notebooks.entries().map(<[_]>::to_vec),
            dirty: self.dirty,
        }
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.submission.state()
    }

    pub fn intake(&self) -> &FileIntake {
        &self.intake
    }

    pub fn progress(&self) -> &ProgressSimulator {
        &self.progress
    }

    pub fn outcome(&self) -> &Outcome {
        self.presenter.outcome()
    }

    /// Returns and clears the render flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_progress_visible(&mut self, visible: bool) {
        self.progress_visible = visible;
    }

    pub(crate) fn hold_result(&mut self, id: SubmissionId, result: GenerationResult) {
        self.pending_result = Some((id, result));
    }

    pub(crate) fn take_pending_result(&mut self, id: SubmissionId) -> Option<GenerationResult> {
        match self.pending_result.take() {
            Some((pending_id, result)) if pending_id == id => Some(result),
            other => {
                self.pending_result = other;
                None
            }
        }
    }

    pub(crate) fn discard_pending_result(&mut self) {
        self.pending_result = None;
    }
}
