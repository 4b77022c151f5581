use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use notebook_app::platform::{run_app, RunRequest};
use notebook_core::FormField;

/// Upload a CSV and generate an analysis notebook.
#[derive(Parser, Debug)]
#[command(name = "notebook_app", version)]
struct Cli {
    /// Dataset to upload.
    file: PathBuf,
    /// What the notebook should explore.
    #[arg(long)]
    task: String,
    /// Extra form field as `name=value`; may be repeated.
    #[arg(long = "field", value_parser = parse_field)]
    fields: Vec<FormField>,
    /// Treat the file as dropped onto the page (only `.csv` names are accepted).
    #[arg(long)]
    drop: bool,
    /// Settings file (defaults to ./notebook_app.ron when present).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_field(raw: &str) -> Result<FormField, String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got `{raw}`"))?;
    if name.is_empty() {
        return Err(format!("field name is empty in `{raw}`"));
    }
    Ok(FormField::new(name, value))
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut fields = vec![FormField::new("task_description", cli.task)];
    fields.extend(cli.fields);

    run_app(RunRequest {
        file: cli.file,
        dropped: cli.drop,
        fields,
        config: cli.config,
    })
}
