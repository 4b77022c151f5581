use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use engine_logging::{engine_debug, engine_info, engine_warn};
use notebook_core::{update, AppState, AppViewModel, Effect, FormField, Msg, SelectedFile, SubmissionState};
use notebook_engine::EngineHandle;

use super::effects::EffectRunner;
use super::settings::AppSettings;
use super::ui::{self, PageSurface, TerminalSurface};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What the host binary was asked to do.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub file: PathBuf,
    /// Route the file through the drop target instead of the chooser.
    pub dropped: bool,
    pub fields: Vec<FormField>,
    pub config: Option<PathBuf>,
}

pub fn run_app(request: RunRequest) -> anyhow::Result<ExitCode> {
    let loaded = AppSettings::load(request.config.as_deref());
    let settings = loaded.as_ref().cloned().unwrap_or_default();
    if let Some(destination) = settings.log_destination() {
        engine_logging::initialize(destination, settings.level_filter());
    }
    if let Err(err) = loaded {
        engine_warn!("{}; using defaults", err);
    }

    let engine = EngineHandle::new(settings.engine_settings()).context("starting engine")?;
    let surface = TerminalSurface::stdout(settings.base_url.clone());
    let mut page = Page::new(EffectRunner::new(engine), surface);
    page.dispatch(Msg::PageLoaded);

    let metadata = std::fs::metadata(&request.file)
        .with_context(|| format!("reading {}", request.file.display()))?;
    let file = SelectedFile::from_path(&request.file, metadata.len());
    if request.dropped {
        page.dispatch(Msg::DragOver);
        page.dispatch(Msg::FileDropped(file));
    } else {
        page.dispatch(Msg::FileChosen(file));
    }

    page.dispatch(Msg::SubmitClicked {
        fields: request.fields,
    });
    page.run_until_quiet();

    match page.view().submission {
        SubmissionState::Failed => Ok(ExitCode::FAILURE),
        _ => Ok(ExitCode::SUCCESS),
    }
}

/// Single-threaded page loop: owns the core state, executes effects through
/// the runner and renders dirty views into the injected surface.
pub struct Page<S: PageSurface> {
    state: AppState,
    runner: EffectRunner,
    surface: S,
    /// Requests and timers whose completion has not come back yet.
    outstanding: usize,
}

impl<S: PageSurface> Page<S> {
    pub fn new(runner: EffectRunner, surface: S) -> Self {
        let mut page = Self {
            state: AppState::new(),
            runner,
            surface,
            outstanding: 0,
        };
        let initial_view = page.state.view();
        page.render(&initial_view);
        page
    }

    pub fn dispatch(&mut self, msg: Msg) {
        if is_completion(&msg) {
            self.outstanding = self.outstanding.saturating_sub(1);
        }

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.view();
        let was_dirty = state.consume_dirty();
        self.state = state;

        self.outstanding += effects.iter().filter(|effect| awaits_completion(effect)).count();
        self.runner.enqueue(effects);

        if was_dirty {
            self.render(&view);
        }
    }

    /// Handles at most one engine event. Returns `false` when none arrived in time.
    pub fn pump(&mut self, timeout: Duration) -> bool {
        match self.runner.recv_msg(timeout) {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    /// Runs until every request and timer has reported back. There is no
    /// deadline: a hung request keeps the loop waiting.
    pub fn run_until_quiet(&mut self) {
        while self.outstanding > 0 {
            self.pump(POLL_INTERVAL);
        }
        engine_info!("Page idle in state {:?}", self.state.submission_state());
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn render(&mut self, view: &AppViewModel) {
        let commands = ui::render(view);
        engine_debug!("Rendering {} page commands", commands.len());
        for command in commands {
            self.surface.apply(command);
        }
    }
}

fn awaits_completion(effect: &Effect) -> bool {
    matches!(
        effect,
        Effect::RefreshNotebooks | Effect::Generate { .. } | Effect::ScheduleSettle { .. }
    )
}

fn is_completion(msg: &Msg) -> bool {
    matches!(
        msg,
        Msg::GenerationFinished { .. }
            | Msg::SettleElapsed { .. }
            | Msg::NotebooksLoaded(_)
            | Msg::NotebooksFailed(_)
    )
}
