/// Named regions of the host document the page writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    FileInput,
    DropTarget,
    FileInfo,
    UploadForm,
    GenerateButton,
    ProgressSection,
    ProgressFill,
    ProgressStatus,
    ResultSection,
    ResultMessage,
    DownloadLink,
    ErrorSection,
    ErrorMessage,
    NotebooksList,
}

impl Region {
    pub const ALL: [Region; 14] = [
        Region::FileInput,
        Region::DropTarget,
        Region::FileInfo,
        Region::UploadForm,
        Region::GenerateButton,
        Region::ProgressSection,
        Region::ProgressFill,
        Region::ProgressStatus,
        Region::ResultSection,
        Region::ResultMessage,
        Region::DownloadLink,
        Region::ErrorSection,
        Region::ErrorMessage,
        Region::NotebooksList,
    ];

    /// Sections that start hidden in the host document.
    pub fn initially_hidden(self) -> bool {
        matches!(
            self,
            Region::FileInfo | Region::ProgressSection | Region::ResultSection | Region::ErrorSection
        )
    }
}
