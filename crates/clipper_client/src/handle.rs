use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use client_logging::client_error;

use crate::api::{BackendApi, HttpBackend};
use crate::retention::sweep_excess;
use crate::settings::ClientSettings;
use crate::types::{ApiError, ClientEvent};

/// Delay between a successful extraction and the follow-up refresh, giving
/// the backend time to finish writing the result file.
const POST_EXTRACTION_REFRESH_DELAY: Duration = Duration::from_secs(1);

enum ClientCommand {
    Extract { url: String },
    FetchFiles,
    ListFiles,
    Download { name: String },
    Delete { name: String },
    Purge { days: u32 },
    RefreshAfterExtraction,
}

/// Runs backend calls on a background runtime and reports completions as
/// [`ClientEvent`]s drained by the UI loop.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let max_files = settings.max_files;
        let api: Arc<dyn BackendApi> = Arc::new(HttpBackend::new(settings)?);
        Ok(Self::with_api(api, max_files))
    }

    /// Test seam: run the handle against any [`BackendApi`].
    pub fn with_api(api: Arc<dyn BackendApi>, max_files: usize) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    client_error!("Failed to start client runtime: {err}");
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(&*api, command, max_files, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit_extraction(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Extract { url: url.into() });
    }

    pub fn fetch_files(&self) {
        let _ = self.cmd_tx.send(ClientCommand::FetchFiles);
    }

    pub fn list_files(&self) {
        let _ = self.cmd_tx.send(ClientCommand::ListFiles);
    }

    pub fn download(&self, name: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Download { name: name.into() });
    }

    pub fn delete(&self, name: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Delete { name: name.into() });
    }

    pub fn purge(&self, days: u32) {
        let _ = self.cmd_tx.send(ClientCommand::Purge { days });
    }

    pub fn refresh_after_extraction(&self) {
        let _ = self.cmd_tx.send(ClientCommand::RefreshAfterExtraction);
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn BackendApi,
    command: ClientCommand,
    ceiling: usize,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Extract { url } => {
            let result = api.extract(&url, None).await;
            let _ = event_tx.send(ClientEvent::ExtractionFinished { result });
        }
        ClientCommand::FetchFiles => {
            let result = api.fetch_files().await;
            let _ = event_tx.send(ClientEvent::FilesFetched { result });
        }
        ClientCommand::ListFiles => {
            let result = api.list_files().await;
            let _ = event_tx.send(ClientEvent::ListingFetched { result });
        }
        ClientCommand::Download { name } => {
            let result = api.download(&name).await;
            let _ = event_tx.send(ClientEvent::DownloadFinished { name, result });
        }
        ClientCommand::Delete { name } => {
            let result = api.delete(&name).await;
            let _ = event_tx.send(ClientEvent::DeleteFinished { name, result });
        }
        ClientCommand::Purge { days } => {
            let result = api.purge_recent(days).await;
            let _ = event_tx.send(ClientEvent::PurgeFinished { result });
        }
        ClientCommand::RefreshAfterExtraction => {
            tokio::time::sleep(POST_EXTRACTION_REFRESH_DELAY).await;
            match sweep_excess(api, ceiling).await {
                Ok(report) => {
                    if report.removed > 0 {
                        let _ = event_tx.send(ClientEvent::SweepFinished {
                            removed: report.removed,
                        });
                    }
                    let _ = event_tx.send(ClientEvent::FilesFetched {
                        result: Ok(report.files),
                    });
                }
                Err(err) => {
                    let _ = event_tx.send(ClientEvent::FilesFetched { result: Err(err) });
                }
            }
        }
    }
}
