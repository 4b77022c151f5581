//! Notebook page core: pure state machine and view-model helpers.
mod effect;
mod intake;
mod msg;
mod notebooks;
mod presenter;
mod progress;
mod state;
mod submission;
mod update;
mod view_model;

pub use effect::{Effect, FormField, SubmissionPayload};
pub use intake::{accepts_drop, format_size_mb, FileIntake, SelectedFile, CSV_SUFFIX};
pub use msg::Msg;
pub use notebooks::{NotebookList, NotebookSummary, NOTEBOOK_LIST_LIMIT};
pub use presenter::{GenerationResult, Outcome, ResultPresenter};
pub use progress::{ProgressSimulator, ProgressStep, COMPLETE_PERCENT, PROGRESS_STEPS};
pub use state::AppState;
pub use submission::{SubmissionController, SubmissionId, SubmissionState};
pub use update::update;
pub use view_model::{AppViewModel, ProgressView, ResultView};
