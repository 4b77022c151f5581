use std::time::Duration;

use engine_logging::{engine_debug, engine_info};
use reqwest::multipart::{Form, Part};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use crate::types::ErrorBody;
use crate::{ApiError, GenerateRequest, GenerateResponse, NotebookIndex};

pub const GENERATE_PATH: &str = "/api/generate";
pub const NOTEBOOKS_PATH: &str = "/api/notebooks";

const CSV_MIME: &str = "text/csv";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// `None` lets a request run until it resolves, however long that takes.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

/// The two endpoints of the remote collaborator.
#[async_trait::async_trait]
pub trait NotebookApi: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError>;

    async fn list_notebooks(&self) -> Result<NotebookIndex, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestNotebookApi {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestNotebookApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let base_url = Url::parse(&settings.base_url).map_err(|err| ApiError::InvalidUrl {
            url: settings.base_url.clone(),
            message: err.to_string(),
        })?;

        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|err| ApiError::InvalidUrl {
            url: format!("{}{}", self.base_url, path),
            message: err.to_string(),
        })
    }

    async fn build_form(request: &GenerateRequest) -> Result<Form, ApiError> {
        let mut form = Form::new();
        if let Some(upload) = &request.file {
            let bytes = tokio::fs::read(&upload.path)
                .await
                .map_err(|err| ApiError::Upload {
                    path: upload.path.display().to_string(),
                    message: err.to_string(),
                })?;
            let part = Part::bytes(bytes)
                .file_name(upload.file_name.clone())
                .mime_str(CSV_MIME)
                .map_err(map_reqwest_error)?;
            form = form.part("file", part);
        }
        for (name, value) in &request.fields {
            form = form.text(name.clone(), value.clone());
        }
        Ok(form)
    }
}

#[async_trait::async_trait]
impl NotebookApi for ReqwestNotebookApi {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
        let url = self.endpoint(GENERATE_PATH)?;
        let form = Self::build_form(request).await?;
        engine_info!(
            "POST {} file={:?} fields={}",
            url,
            request.file.as_ref().map(|file| file.file_name.as_str()),
            request.fields.len()
        );

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json(response).await
    }

    async fn list_notebooks(&self) -> Result<NotebookIndex, ApiError> {
        let url = self.endpoint(NOTEBOOKS_PATH)?;
        engine_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_reqwest_error)?;

    if !status.is_success() {
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            detail: extract_detail(&body),
        });
    }

    serde_json::from_slice(&body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Only a string `detail` counts; validation errors may send a list instead.
fn extract_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) => Some(detail),
        _ => None,
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}
