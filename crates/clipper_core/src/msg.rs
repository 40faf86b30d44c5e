use crate::FileEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box (raw text; validation is debounced).
    InputChanged(String),
    /// User submitted the current URL input for extraction.
    SubmitRequested,
    /// User asked for a detailed listing refresh.
    RefreshRequested,
    /// User asked to purge recently extracted files.
    PurgeRequested,
    /// The purge confirmation dialog was answered.
    PurgeAnswered { accepted: bool },
    /// User asked to download the selected file.
    DownloadRequested,
    /// User asked to delete the selected file.
    DeleteRequested,
    /// List selection moved by the given amount.
    SelectionMoved(isize),
    /// Extraction call finished; Err carries the failure message.
    ExtractionFinished { result: Result<(), String> },
    /// Plain file listing finished.
    FilesFetched { result: Result<Vec<FileEntry>, String> },
    /// Detailed file listing finished.
    ListingFetched { result: Result<Vec<FileEntry>, String> },
    /// Download finished for the named file; Ok carries the local path.
    DownloadFinished {
        name: String,
        result: Result<String, String>,
    },
    /// Delete finished for the named file.
    DeleteFinished {
        name: String,
        result: Result<(), String>,
    },
    /// Bulk purge finished; Ok carries the server-provided message.
    PurgeFinished { result: Result<String, String> },
    /// Retention sweep finished with the number of files removed.
    SweepFinished { removed: usize },
    /// UI/render tick driving debounce and notice timers.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
