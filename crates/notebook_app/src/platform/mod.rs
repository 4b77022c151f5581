mod app;
mod effects;
pub mod settings;
pub mod ui;

pub use app::{run_app, Page, RunRequest};
pub use effects::EffectRunner;
