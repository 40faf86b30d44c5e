use std::path::PathBuf;
use std::time::Duration;

/// Relative endpoint paths of the backend contract.
pub mod endpoints {
    pub const EXTRACT: &str = "/extrair";
    pub const FILES: &str = "/arquivos";
    pub const LIST_FILES: &str = "/listar_arquivos";
    pub const DOWNLOAD: &str = "/download";
    pub const DOWNLOAD_ALL: &str = "/download-all";
    pub const DELETE: &str = "/delete";
    pub const PURGE: &str = "/excluir_arquivos";
}

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Overall request deadline. `None` leaves the transport default in
    /// place, which matters for extractions that can run for minutes.
    pub request_timeout: Option<Duration>,
    /// Reserved for a future listing poller; nothing polls today.
    pub polling_interval: Duration,
    /// Retention ceiling enforced by the sweep.
    pub max_files: usize,
    /// Where downloaded files land.
    pub download_dir: PathBuf,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            polling_interval: Duration::from_secs(2),
            max_files: 10,
            download_dir: PathBuf::from("downloads"),
        }
    }
}
