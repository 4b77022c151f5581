use std::time::Duration;

use engine_logging::{engine_debug, engine_info};
use notebook_core::{Effect, GenerationResult, Msg, NotebookSummary, SubmissionPayload};
use notebook_engine::{
    EngineEvent, EngineHandle, GenerateRequest, GenerateResponse, NotebookIndex, UploadFile,
};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RefreshNotebooks => {
                    engine_debug!("RefreshNotebooks");
                    self.engine.refresh_notebooks();
                }
                Effect::StartProgress { submission_id } => {
                    self.engine.start_progress(submission_id);
                }
                Effect::StopProgress { submission_id } => {
                    self.engine.stop_progress(submission_id);
                }
                Effect::Generate {
                    submission_id,
                    payload,
                } => {
                    engine_info!(
                        "Generate submission_id={} file={:?} fields={}",
                        submission_id,
                        payload.file.as_ref().map(|file| file.name.as_str()),
                        payload.fields.len()
                    );
                    self.engine.generate(submission_id, to_request(payload));
                }
                Effect::ScheduleSettle { submission_id } => {
                    self.engine.schedule_settle(submission_id);
                }
            }
        }
    }

    /// Waits up to `timeout` for the next engine event.
    pub fn recv_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn to_request(payload: SubmissionPayload) -> GenerateRequest {
    GenerateRequest {
        file: payload.file.map(|file| UploadFile {
            path: file.path,
            file_name: file.name,
        }),
        fields: payload
            .fields
            .into_iter()
            .map(|field| (field.name, field.value))
            .collect(),
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ProgressTick { submission_id } => Msg::ProgressTick { submission_id },
        EngineEvent::GenerateCompleted {
            submission_id,
            result,
        } => Msg::GenerationFinished {
            submission_id,
            result: result
                .map(map_generation)
                .map_err(|err| err.user_message()),
        },
        EngineEvent::SettleElapsed { submission_id } => Msg::SettleElapsed { submission_id },
        EngineEvent::NotebooksLoaded(Ok(index)) => Msg::NotebooksLoaded(map_notebooks(index)),
        EngineEvent::NotebooksLoaded(Err(err)) => Msg::NotebooksFailed(err.to_string()),
    }
}

fn map_generation(response: GenerateResponse) -> GenerationResult {
    GenerationResult {
        sections_generated: response.sections_generated,
        notebook_filename: response.notebook_filename,
        download_url: response.download_url,
    }
}

fn map_notebooks(index: NotebookIndex) -> Vec<NotebookSummary> {
    index
        .notebooks
        .into_iter()
        .map(|entry| NotebookSummary {
            filename: entry.filename,
            created: entry.created,
            size_bytes: entry.size,
            download_url: entry.download_url,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notebook_core::{FormField, SelectedFile};
    use notebook_engine::ApiError;

    #[test]
    fn payload_maps_onto_multipart_request() {
        let payload = SubmissionPayload {
            file: Some(SelectedFile::new("sales.csv", 10, "/data/sales.csv")),
            fields: vec![FormField::new("task_description", "trend")],
        };

        let request = to_request(payload);

        assert_eq!(
            request.file,
            Some(UploadFile {
                path: "/data/sales.csv".into(),
                file_name: "sales.csv".to_string(),
            })
        );
        assert_eq!(
            request.fields,
            vec![("task_description".to_string(), "trend".to_string())]
        );
    }

    #[test]
    fn failed_generation_carries_the_user_message() {
        let msg = map_event(EngineEvent::GenerateCompleted {
            submission_id: 3,
            result: Err(ApiError::Rejected {
                status: 422,
                detail: Some("Missing target column".into()),
            }),
        });

        assert_eq!(
            msg,
            Msg::GenerationFinished {
                submission_id: 3,
                result: Err("Missing target column".to_string()),
            }
        );
    }

    #[test]
    fn failed_refresh_becomes_notebooks_failed() {
        let msg = map_event(EngineEvent::NotebooksLoaded(Err(ApiError::Network(
            "connection refused".into(),
        ))));

        assert_eq!(msg, Msg::NotebooksFailed("connection refused".to_string()));
    }
}
