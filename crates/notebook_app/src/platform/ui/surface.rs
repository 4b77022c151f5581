use std::collections::BTreeMap;
use std::io::Write;

use super::regions::Region;
use super::render::{NotebookRow, PageCommand};

/// Rendering surface injected into the page. Implementations own the named regions.
pub trait PageSurface {
    fn apply(&mut self, command: PageCommand);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionState {
    pub visible: bool,
    pub enabled: bool,
    pub highlighted: bool,
    pub value: Option<String>,
    pub text: String,
    pub width_percent: u8,
    pub href: Option<String>,
    pub rows: Vec<NotebookRow>,
}

/// Headless document: keeps the current state of every region plus the
/// command history.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    regions: BTreeMap<Region, RegionState>,
    history: Vec<PageCommand>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        let regions = Region::ALL
            .into_iter()
            .map(|region| {
                let state = RegionState {
                    visible: !region.initially_hidden(),
                    enabled: true,
                    ..RegionState::default()
                };
                (region, state)
            })
            .collect();
        Self {
            regions,
            history: Vec::new(),
        }
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the list region with rows the host document shipped with.
    pub fn with_rows(mut self, rows: Vec<NotebookRow>) -> Self {
        self.region_mut(Region::NotebooksList).rows = rows;
        self
    }

    pub fn region(&self, region: Region) -> &RegionState {
        // Every region is inserted at construction.
        &self.regions[&region]
    }

    pub fn history(&self) -> &[PageCommand] {
        &self.history
    }

    /// Applies a command and reports whether any region changed.
    pub fn update(&mut self, command: PageCommand) -> bool {
        let before = self.regions.clone();
        match &command {
            PageCommand::SetVisible { region, visible } => self.region_mut(*region).visible = *visible,
            PageCommand::SetEnabled { region, enabled } => self.region_mut(*region).enabled = *enabled,
            PageCommand::SetHighlighted {
                region,
                highlighted,
            } => self.region_mut(*region).highlighted = *highlighted,
            PageCommand::SetValue { region, value } => self.region_mut(*region).value = value.clone(),
            PageCommand::SetText { region, text } => self.region_mut(*region).text = text.clone(),
            PageCommand::SetWidthPercent { region, percent } => {
                self.region_mut(*region).width_percent = *percent
            }
            PageCommand::SetLinkTarget { region, href } => {
                self.region_mut(*region).href = Some(href.clone())
            }
            PageCommand::ReplaceList { region, rows } => self.region_mut(*region).rows = rows.clone(),
        }
        self.history.push(command);
        before != self.regions
    }

    fn region_mut(&mut self, region: Region) -> &mut RegionState {
        self.regions.entry(region).or_default()
    }
}

impl PageSurface for MemorySurface {
    fn apply(&mut self, command: PageCommand) {
        self.update(command);
    }
}

/// Prints region changes as terminal lines. Download links are resolved
/// against `base_url` for display.
pub struct TerminalSurface<W: Write> {
    document: MemorySurface,
    base_url: String,
    out: W,
}

impl TerminalSurface<std::io::Stdout> {
    pub fn stdout(base_url: impl Into<String>) -> Self {
        Self::new(base_url, std::io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(base_url: impl Into<String>, out: W) -> Self {
        Self {
            document: MemorySurface::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line_for(&self, command: &PageCommand) -> Option<String> {
        match command {
            PageCommand::SetText {
                region: Region::FileInfo,
                text,
            } => Some(format!("Selected {text}")),
            // Steps change the label too; only the forced completion moves the bar alone.
            PageCommand::SetWidthPercent {
                region: Region::ProgressFill,
                percent: 100,
            }
            | PageCommand::SetText {
                region: Region::ProgressStatus,
                ..
            } => {
                let percent = self.document.region(Region::ProgressFill).width_percent;
                let status = &self.document.region(Region::ProgressStatus).text;
                Some(format!("[{percent:>3}%] {status}").trim_end().to_string())
            }
            PageCommand::SetText {
                region: Region::ResultMessage,
                text,
            } => Some(text.clone()),
            PageCommand::SetLinkTarget {
                region: Region::DownloadLink,
                href,
            } => Some(format!("Download: {}", self.absolute(href))),
            PageCommand::SetText {
                region: Region::ErrorMessage,
                text,
            } => Some(format!("Error: {text}")),
            PageCommand::ReplaceList { rows, .. } => {
                let mut lines = vec!["Recent notebooks:".to_string()];
                lines.extend(rows.iter().map(|row| {
                    format!("  {} ({}) {}", row.title, row.meta, self.absolute(&row.href))
                }));
                Some(lines.join("\n"))
            }
            _ => None,
        }
    }

    fn absolute(&self, href: &str) -> String {
        if href.starts_with('/') {
            format!("{}{}", self.base_url, href)
        } else {
            href.to_string()
        }
    }
}

impl<W: Write> PageSurface for TerminalSurface<W> {
    fn apply(&mut self, command: PageCommand) {
        if !self.document.update(command.clone()) {
            return;
        }
        if let Some(line) = self.line_for(&command) {
            let _ = writeln!(self.out, "{line}");
        }
    }
}
