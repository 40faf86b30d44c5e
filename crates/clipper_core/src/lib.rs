//! Clipper core: pure state machine and view-model helpers.
mod debounce;
mod effect;
mod format;
mod msg;
mod notice;
mod state;
mod update;
mod view_model;

pub use debounce::Debouncer;
pub use effect::Effect;
pub use format::{format_file_size, is_valid_url};
pub use msg::Msg;
pub use notice::{
    Notice, NoticeKind, NoticePhase, NOTICE_LEAVING_TICKS, NOTICE_VISIBLE_TICKS,
};
pub use state::{AppState, FileEntry, Status, INPUT_DEBOUNCE_TICKS};
pub use update::{update, DRIVER_MISCONFIG_MARKER};
pub use view_model::{AppViewModel, FileRowView, NoticeView};
