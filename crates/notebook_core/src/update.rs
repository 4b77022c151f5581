use engine_logging::{engine_debug, engine_warn};

use crate::{AppState, Effect, FormField, GenerationResult, Msg, SubmissionId, SubmissionPayload};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageLoaded => vec![Effect::RefreshNotebooks],
        Msg::FileChosen(file) => {
            state.intake.on_file_chosen(file);
            state.mark_dirty();
            Vec::new()
        }
        Msg::DragOver => {
            if state.intake.on_drag_over() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DragLeave => {
            if state.intake.on_drag_leave() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FileDropped(file) => {
            let was_highlighted = state.intake.is_highlighted();
            // Rejected drops are ignored without feedback.
            let accepted = state.intake.on_file_dropped(file);
            if accepted || was_highlighted {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SubmitClicked { fields } => begin_submission(&mut state, fields),
        Msg::ProgressTick { submission_id } => {
            if state.submission.is_in_flight(submission_id) && state.progress.tick() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::GenerationFinished {
            submission_id,
            result,
        } => finish_submission(&mut state, submission_id, result),
        Msg::SettleElapsed { submission_id } => match state.take_pending_result(submission_id) {
            Some(result) => {
                state.set_progress_visible(false);
                state.presenter.show_success(result);
                state.mark_dirty();
                vec![Effect::RefreshNotebooks]
            }
            None => {
                engine_debug!("Ignoring settle for superseded submission {}", submission_id);
                Vec::new()
            }
        },
        Msg::NotebooksLoaded(entries) => {
            if state.notebooks.replace(entries) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NotebooksFailed(reason) => {
            engine_warn!("Failed to load notebooks: {}", reason);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn begin_submission(state: &mut AppState, fields: Vec<FormField>) -> Vec<Effect> {
    let Some(submission_id) = state.submission.begin() else {
        engine_debug!("Submit ignored while a submission is in flight");
        return Vec::new();
    };

    state.presenter.clear();
    state.discard_pending_result();
    state.set_progress_visible(true);
    state.progress.start();
    state.mark_dirty();

    let payload = SubmissionPayload {
        file: state.intake.chosen().cloned(),
        fields,
    };
    vec![
        Effect::StartProgress { submission_id },
        Effect::Generate {
            submission_id,
            payload,
        },
    ]
}

fn finish_submission(
    state: &mut AppState,
    submission_id: SubmissionId,
    result: Result<GenerationResult, String>,
) -> Vec<Effect> {
    if !state.submission.is_in_flight(submission_id) {
        engine_debug!("Ignoring completion for stale submission {}", submission_id);
        return Vec::new();
    }

    // Stop before touching anything else so a late tick cannot overwrite the outcome.
    state.progress.stop();
    let mut effects = vec![Effect::StopProgress { submission_id }];

    match result {
        Ok(result) => {
            state.submission.succeed(submission_id);
            state.progress.complete();
            state.hold_result(submission_id, result);
            effects.push(Effect::ScheduleSettle { submission_id });
        }
        Err(message) => {
            state.submission.fail(submission_id);
            state.set_progress_visible(false);
            state.presenter.show_error(message);
        }
    }
    state.mark_dirty();
    effects
}
