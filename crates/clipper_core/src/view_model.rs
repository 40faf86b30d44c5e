use crate::notice::NoticeKind;
use crate::state::Status;

/// Projection of [`crate::AppState`] consumed by rendering. Carries no
/// business decisions, only what to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub status: Status,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub input: String,
    pub input_valid: bool,
    pub files: Vec<FileRowView>,
    /// The results section is shown only while there are files to list.
    pub results_visible: bool,
    pub selected: usize,
    pub notices: Vec<NoticeView>,
    pub purge_confirm_visible: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRowView {
    pub name: String,
    pub size_display: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub text: String,
    pub kind: NoticeKind,
    /// True during the exit period; rendered dimmed.
    pub leaving: bool,
}
