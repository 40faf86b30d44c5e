use crate::format::is_valid_url;
use crate::notice::NoticeKind;
use crate::state::Status;
use crate::{AppState, Effect, Msg};

/// Marker the backend emits when its browser-automation driver cannot start.
pub const DRIVER_MISCONFIG_MARKER: &str = "WinError 193";

const DRIVER_MISCONFIG_HINT: &str =
    "The extraction driver on the server is misconfigured. Check the Chrome installation on the backend host.";

/// Days covered by the bulk purge triggered from the UI.
const PURGE_DAYS: u32 = 1;

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitRequested => {
            let url = state.input().trim().to_string();
            if url.is_empty() {
                state.push_notice("Enter a URL to extract", NoticeKind::Warning);
                Vec::new()
            } else if !is_valid_url(&url) {
                state.push_notice("Enter a valid URL", NoticeKind::Error);
                Vec::new()
            } else if state.is_extracting() {
                // One extraction at a time; a second submit is silently dropped.
                Vec::new()
            } else {
                state.begin_extraction();
                state.set_status(Status::Loading("Starting extraction...".to_string()));
                vec![Effect::SubmitExtraction { url }]
            }
        }
        Msg::ExtractionFinished { result } => {
            // The guard is released on every exit path, success or failure.
            state.finish_extraction();
            match result {
                Ok(()) => {
                    state.set_status(Status::Success(
                        "Extraction completed successfully!".to_string(),
                    ));
                    state.push_notice("Text extracted successfully!", NoticeKind::Success);
                    vec![Effect::RefreshAfterExtraction]
                }
                Err(message) => {
                    if message.contains(DRIVER_MISCONFIG_MARKER) {
                        state.set_status(Status::Error(DRIVER_MISCONFIG_HINT.to_string()));
                        state.push_notice("Server-side configuration error", NoticeKind::Error);
                    } else {
                        state.set_status(Status::Error(format!("Error: {message}")));
                        state.push_notice("Text extraction failed", NoticeKind::Error);
                    }
                    Vec::new()
                }
            }
        }
        Msg::RefreshRequested => vec![Effect::ListFiles],
        Msg::FilesFetched { result } => {
            match result {
                Ok(files) => state.replace_files(files),
                // Detail is logged at the boundary; the old snapshot stays.
                Err(_) => state.push_notice("Failed to load file list", NoticeKind::Error),
            }
            Vec::new()
        }
        Msg::ListingFetched { result } => {
            match result {
                Ok(files) => {
                    state.replace_files(files);
                    state.push_notice("File list updated", NoticeKind::Success);
                }
                Err(_) => state.push_notice("Failed to load files", NoticeKind::Error),
            }
            Vec::new()
        }
        Msg::DownloadRequested => match state.selected_file() {
            Some(entry) => vec![Effect::DownloadFile {
                name: entry.name.clone(),
            }],
            None => Vec::new(),
        },
        Msg::DownloadFinished { name, result } => {
            match result {
                Ok(path) => state.push_notice(
                    format!("Downloaded {name} to {path}"),
                    NoticeKind::Success,
                ),
                Err(_) => state.push_notice("Download failed", NoticeKind::Error),
            }
            Vec::new()
        }
        Msg::DeleteRequested => match state.selected_file() {
            Some(entry) => vec![Effect::DeleteFile {
                name: entry.name.clone(),
            }],
            None => Vec::new(),
        },
        Msg::DeleteFinished { name, result } => match result {
            Ok(()) => {
                state.push_notice(format!("Deleted {name}"), NoticeKind::Success);
                vec![Effect::FetchFiles]
            }
            Err(_) => {
                state.push_notice("Failed to delete file", NoticeKind::Error);
                Vec::new()
            }
        },
        Msg::PurgeRequested => {
            state.set_purge_confirm(true);
            Vec::new()
        }
        Msg::PurgeAnswered { accepted } => {
            state.set_purge_confirm(false);
            if accepted {
                vec![Effect::PurgeRecent { days: PURGE_DAYS }]
            } else {
                Vec::new()
            }
        }
        Msg::PurgeFinished { result } => match result {
            Ok(message) => {
                state.push_notice(message, NoticeKind::Success);
                vec![Effect::FetchFiles]
            }
            Err(message) => {
                state.push_notice(
                    format!("Failed to purge files: {message}"),
                    NoticeKind::Error,
                );
                Vec::new()
            }
        },
        Msg::SweepFinished { removed } => {
            if removed > 0 {
                state.push_notice(
                    format!("{removed} old file(s) removed automatically"),
                    NoticeKind::Info,
                );
            }
            Vec::new()
        }
        Msg::SelectionMoved(delta) => {
            state.move_selection(delta);
            Vec::new()
        }
        Msg::Tick => {
            state.apply_tick();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
