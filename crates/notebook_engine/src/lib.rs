//! Notebook engine: HTTP collaborators, page timers and effect execution.
mod api;
mod engine;
mod timers;
mod types;

pub use api::{ClientSettings, NotebookApi, ReqwestNotebookApi, GENERATE_PATH, NOTEBOOKS_PATH};
pub use engine::{EngineHandle, EngineSettings};
pub use timers::TimerSettings;
pub use types::{
    ApiError, EngineError, EngineEvent, GenerateRequest, GenerateResponse, NotebookEntry,
    NotebookIndex, SubmissionId, UploadFile,
};
