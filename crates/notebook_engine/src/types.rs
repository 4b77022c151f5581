use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

pub type SubmissionId = u64;

/// File part of a generate request. The bytes are read when the request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub path: PathBuf,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerateRequest {
    pub file: Option<UploadFile>,
    /// Sibling form fields in form order.
    pub fields: Vec<(String, String)>,
}

/// Success body of `POST /api/generate`. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    pub sections_generated: u32,
    pub notebook_filename: String,
    pub download_url: String,
}

/// Body of `GET /api/notebooks`. A missing `notebooks` key reads as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct NotebookIndex {
    #[serde(default)]
    pub notebooks: Vec<NotebookEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotebookEntry {
    pub filename: String,
    pub created: String,
    pub size: u64,
    pub download_url: String,
}

/// Failure body of the collaborator: `{ "detail": "..." }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid url {url}: {message}")]
    InvalidUrl { url: String, message: String },
    #[error("could not read {path}: {message}")]
    Upload { path: String, message: String },
    #[error("server rejected the request with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    #[error("{0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown to the user: the server's detail verbatim when it sent one,
    /// a generic line otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Rejected {
                status,
                detail: None,
            } => format!("Notebook generation failed (HTTP {status})"),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ProgressTick {
        submission_id: SubmissionId,
    },
    GenerateCompleted {
        submission_id: SubmissionId,
        result: Result<GenerateResponse, ApiError>,
    },
    SettleElapsed {
        submission_id: SubmissionId,
    },
    NotebooksLoaded(Result<NotebookIndex, ApiError>),
}
