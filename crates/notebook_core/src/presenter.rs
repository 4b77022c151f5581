/// Returned by the remote collaborator on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub sections_generated: u32,
    pub notebook_filename: String,
    pub download_url: String,
}

impl GenerationResult {
    pub fn message(&self) -> String {
        format!(
            "Generated {} sections in {}",
            self.sections_generated, self.notebook_filename
        )
    }
}

/// What the result area shows. Success and error share one slot so they can
/// never be visible together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Hidden,
    Success(GenerationResult),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultPresenter {
    outcome: Outcome,
}

impl ResultPresenter {
    pub fn show_success(&mut self, result: GenerationResult) {
        self.outcome = Outcome::Success(result);
    }

    /// `message` is kept as plain text.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.outcome = Outcome::Error(message.into());
    }

    pub fn clear(&mut self) {
        self.outcome = Outcome::Hidden;
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}
