use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_debug, engine_warn};

use crate::timers::{schedule_settle, ProgressTicker};
use crate::{
    ClientSettings, EngineError, EngineEvent, GenerateRequest, NotebookApi, ReqwestNotebookApi,
    SubmissionId, TimerSettings,
};

#[derive(Debug, Clone, Default)]
pub struct EngineSettings {
    pub client: ClientSettings,
    pub timers: TimerSettings,
}

enum EngineCommand {
    Generate {
        submission_id: SubmissionId,
        request: GenerateRequest,
    },
    RefreshNotebooks,
    StartProgress {
        submission_id: SubmissionId,
    },
    StopProgress {
        submission_id: SubmissionId,
    },
    ScheduleSettle {
        submission_id: SubmissionId,
    },
}

/// Bridge between the single-threaded page loop and the async side. Commands
/// go in, `EngineEvent`s come out; the tokio runtime lives on its own thread.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings) -> Result<Self, EngineError> {
        let api = ReqwestNotebookApi::new(settings.client)?;
        Self::with_api(Arc::new(api), settings.timers)
    }

    pub fn with_api(api: Arc<dyn NotebookApi>, timers: TimerSettings) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("notebook-engine")
            .build()?;

        thread::spawn(move || {
            let mut ticker = ProgressTicker::new(timers.progress_interval);
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::StartProgress { submission_id } => {
                        ticker.start(runtime.handle(), submission_id, event_tx.clone());
                    }
                    EngineCommand::StopProgress { submission_id } => ticker.stop(submission_id),
                    EngineCommand::ScheduleSettle { submission_id } => schedule_settle(
                        runtime.handle(),
                        timers.settle_delay,
                        submission_id,
                        event_tx.clone(),
                    ),
                    command => {
                        let api = api.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            handle_request(api.as_ref(), command, event_tx).await;
                        });
                    }
                }
            }
            engine_debug!("Engine command channel closed; shutting down");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn generate(&self, submission_id: SubmissionId, request: GenerateRequest) {
        self.send(EngineCommand::Generate {
            submission_id,
            request,
        });
    }

    pub fn refresh_notebooks(&self) {
        self.send(EngineCommand::RefreshNotebooks);
    }

    pub fn start_progress(&self, submission_id: SubmissionId) {
        self.send(EngineCommand::StartProgress { submission_id });
    }

    pub fn stop_progress(&self, submission_id: SubmissionId) {
        self.send(EngineCommand::StopProgress { submission_id });
    }

    pub fn schedule_settle(&self, submission_id: SubmissionId) {
        self.send(EngineCommand::ScheduleSettle { submission_id });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            engine_warn!("Engine thread is gone; dropping command");
        }
    }
}

async fn handle_request(
    api: &dyn NotebookApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Generate {
            submission_id,
            request,
        } => EngineEvent::GenerateCompleted {
            submission_id,
            result: api.generate(&request).await,
        },
        EngineCommand::RefreshNotebooks => EngineEvent::NotebooksLoaded(api.list_notebooks().await),
        EngineCommand::StartProgress { .. }
        | EngineCommand::StopProgress { .. }
        | EngineCommand::ScheduleSettle { .. } => return,
    };
    let _ = event_tx.send(event);
}
