use crate::debounce::Debouncer;
use crate::format::{format_file_size, is_valid_url};
use crate::notice::{Notice, NoticeKind, NoticePhase};
use crate::view_model::{AppViewModel, FileRowView, NoticeView};

/// Ticks of input silence before the URL is re-validated (300 ms at the
/// 75 ms tick cadence).
pub const INPUT_DEBOUNCE_TICKS: u8 = 4;

/// One file as reported by the backend listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
    /// ISO-8601 modification timestamp, when the backend provided one.
    pub modified: Option<String>,
}

/// Persistent status region below the URL input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    None,
    Loading(String),
    Success(String),
    Error(String),
}

/// The whole application state. Mutated only through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    input: String,
    input_valid: bool,
    debounce: Debouncer,
    is_extracting: bool,
    current_files: Vec<FileEntry>,
    selected: usize,
    status: Status,
    notices: Vec<Notice>,
    purge_confirm: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            // An empty input is not flagged as invalid.
            input_valid: true,
            debounce: Debouncer::new(INPUT_DEBOUNCE_TICKS),
            is_extracting: false,
            current_files: Vec::new(),
            selected: 0,
            status: Status::None,
            notices: Vec::new(),
            purge_confirm: false,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_valid(&self) -> bool {
        self.input_valid
    }

    pub fn is_extracting(&self) -> bool {
        self.is_extracting
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.current_files
    }

    pub fn selected_file(&self) -> Option<&FileEntry> {
        self.current_files.get(self.selected)
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn purge_confirm_open(&self) -> bool {
        self.purge_confirm
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was = self.dirty;
        self.dirty = false;
        was
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            status: self.status.clone(),
            submit_enabled: !self.is_extracting,
            submit_label: if self.is_extracting {
                "Extracting..."
            } else {
                "Extract text"
            },
            input: self.input.clone(),
            input_valid: self.input_valid,
            files: self
                .current_files
                .iter()
                .map(|entry| FileRowView {
                    name: entry.name.clone(),
                    size_display: format_file_size(entry.size),
                })
                .collect(),
            results_visible: !self.current_files.is_empty(),
            selected: self.selected,
            notices: self
                .notices
                .iter()
                .map(|notice| NoticeView {
                    text: notice.text.clone(),
                    kind: notice.kind,
                    leaving: notice.phase() == NoticePhase::Leaving,
                })
                .collect(),
            purge_confirm_visible: self.purge_confirm,
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.debounce.push(text.clone());
        self.input = text;
        self.mark_dirty();
    }

    pub(crate) fn begin_extraction(&mut self) {
        self.is_extracting = true;
        self.mark_dirty();
    }

    pub(crate) fn finish_extraction(&mut self) {
        self.is_extracting = false;
        self.mark_dirty();
    }

    /// Replaces the cached snapshot wholesale. The list is never patched
    /// incrementally, so a failed fetch leaves the previous snapshot intact.
    pub(crate) fn replace_files(&mut self, files: Vec<FileEntry>) {
        self.current_files = files;
        if self.selected >= self.current_files.len() {
            self.selected = self.current_files.len().saturating_sub(1);
        }
        self.mark_dirty();
    }

    pub(crate) fn move_selection(&mut self, delta: isize) {
        if self.current_files.is_empty() {
            return;
        }
        let last = self.current_files.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
        self.mark_dirty();
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
        self.mark_dirty();
    }

    pub(crate) fn push_notice(&mut self, text: impl Into<String>, kind: NoticeKind) {
        self.notices.push(Notice::new(text, kind));
        self.mark_dirty();
    }

    pub(crate) fn set_purge_confirm(&mut self, open: bool) {
        self.purge_confirm = open;
        self.mark_dirty();
    }

    /// Advances the tick-driven timers: debounced validation and notices.
    pub(crate) fn apply_tick(&mut self) {
        if let Some(text) = self.debounce.tick() {
            let trimmed = text.trim();
            self.input_valid = trimmed.is_empty() || is_valid_url(trimmed);
            self.mark_dirty();
        }
        if !self.notices.is_empty() {
            self.notices.retain_mut(Notice::tick);
            self.mark_dirty();
        }
    }
}
