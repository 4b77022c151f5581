use chrono::{DateTime, Local, NaiveDateTime};
use notebook_core::{format_size_mb, AppViewModel, NotebookSummary};

use super::regions::Region;

const CREATED_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const NAIVE_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// One mutation of the host document. Text is always plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCommand {
    SetVisible { region: Region, visible: bool },
    SetEnabled { region: Region, enabled: bool },
    SetHighlighted { region: Region, highlighted: bool },
    SetValue { region: Region, value: Option<String> },
    SetText { region: Region, text: String },
    SetWidthPercent { region: Region, percent: u8 },
    SetLinkTarget { region: Region, href: String },
    ReplaceList { region: Region, rows: Vec<NotebookRow> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookRow {
    pub title: String,
    pub meta: String,
    pub href: String,
}

#[allow(clippy::vec_init_then_push)]
pub fn render(view: &AppViewModel) -> Vec<PageCommand> {
    let mut cmds = Vec::new();

    cmds.push(PageCommand::SetHighlighted {
        region: Region::DropTarget,
        highlighted: view.drop_highlighted,
    });
    cmds.push(PageCommand::SetValue {
        region: Region::FileInput,
        value: view.chooser_value.clone(),
    });
    cmds.push(PageCommand::SetVisible {
        region: Region::FileInfo,
        visible: view.file_summary.is_some(),
    });
    if let Some(summary) = &view.file_summary {
        cmds.push(PageCommand::SetText {
            region: Region::FileInfo,
            text: summary.clone(),
        });
    }

    cmds.push(PageCommand::SetEnabled {
        region: Region::GenerateButton,
        enabled: view.submit_enabled,
    });

    cmds.push(PageCommand::SetVisible {
        region: Region::ProgressSection,
        visible: view.progress.is_some(),
    });
    if let Some(progress) = &view.progress {
        cmds.push(PageCommand::SetWidthPercent {
            region: Region::ProgressFill,
            percent: progress.percent,
        });
        cmds.push(PageCommand::SetText {
            region: Region::ProgressStatus,
            text: progress
                .label
                .as_ref()
                .map(|label| format!("{label}..."))
                .unwrap_or_default(),
        });
    }

    cmds.push(PageCommand::SetVisible {
        region: Region::ResultSection,
        visible: view.result.is_some(),
    });
    if let Some(result) = &view.result {
        cmds.push(PageCommand::SetText {
            region: Region::ResultMessage,
            text: result.message.clone(),
        });
        cmds.push(PageCommand::SetLinkTarget {
            region: Region::DownloadLink,
            href: result.download_url.clone(),
        });
    }

    cmds.push(PageCommand::SetVisible {
        region: Region::ErrorSection,
        visible: view.error.is_some(),
    });
    if let Some(message) = &view.error {
        cmds.push(PageCommand::SetText {
            region: Region::ErrorMessage,
            text: message.clone(),
        });
    }

    if let Some(notebooks) = &view.notebooks {
        cmds.push(PageCommand::ReplaceList {
            region: Region::NotebooksList,
            rows: notebooks.iter().map(notebook_row).collect(),
        });
    }

    cmds
}

fn notebook_row(notebook: &NotebookSummary) -> NotebookRow {
    NotebookRow {
        title: notebook.filename.clone(),
        meta: format!(
            "{} • {} MB",
            format_created(&notebook.created),
            format_size_mb(notebook.size_bytes)
        ),
        href: notebook.download_url.clone(),
    }
}

/// Local, human-readable timestamp. Offset-less timestamps are taken as local
/// time already; anything unparsable is shown as sent.
pub fn format_created(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed
            .with_timezone(&Local)
            .format(CREATED_DISPLAY_FORMAT)
            .to_string();
    }
    match NaiveDateTime::parse_from_str(raw, NAIVE_ISO_FORMAT) {
        Ok(naive) => naive.format(CREATED_DISPLAY_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}
