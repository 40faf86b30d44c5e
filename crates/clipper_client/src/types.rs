use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::persist::PersistError;

/// One file as reported by the listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteFile {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tamanho")]
    pub size: u64,
    /// ISO-8601 local timestamp. The plain listing endpoint uses the key
    /// `data`; the detailed one uses `data_modificacao`. Both are accepted.
    #[serde(rename = "data_modificacao", alias = "data", default)]
    pub modified: Option<String>,
}

/// Successful extraction report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOutcome {
    /// Server-provided human-readable message.
    pub message: Option<String>,
    /// Name of the file the backend produced.
    pub file: Option<String>,
    /// Size of the extracted content in bytes.
    pub size: Option<u64>,
}

/// Detailed listing result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileListing {
    pub files: Vec<RemoteFile>,
    pub total: usize,
}

/// Bulk purge report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeSummary {
    /// Server-provided human-readable message.
    pub message: String,
    pub removed: Option<usize>,
    pub total: Option<usize>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    /// Failure reported by the backend itself; carries the server message.
    #[error("{0}")]
    Backend(String),
    #[error("timeout")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Completion events delivered back to the UI loop.
#[derive(Debug)]
pub enum ClientEvent {
    ExtractionFinished {
        result: Result<ExtractOutcome, ApiError>,
    },
    FilesFetched {
        result: Result<Vec<RemoteFile>, ApiError>,
    },
    ListingFetched {
        result: Result<FileListing, ApiError>,
    },
    DownloadFinished {
        name: String,
        result: Result<PathBuf, ApiError>,
    },
    DeleteFinished {
        name: String,
        result: Result<(), ApiError>,
    },
    PurgeFinished {
        result: Result<PurgeSummary, ApiError>,
    },
    SweepFinished {
        removed: usize,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ExtractPayload {
    #[serde(rename = "sucesso")]
    pub success: bool,
    #[serde(rename = "erro", default)]
    pub error: Option<String>,
    #[serde(rename = "mensagem", default)]
    pub message: Option<String>,
    #[serde(rename = "arquivo", default)]
    pub file: Option<String>,
    #[serde(rename = "tamanho", default)]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PlainListingPayload {
    #[serde(rename = "arquivos", default)]
    pub files: Vec<RemoteFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DetailedListingPayload {
    #[serde(rename = "sucesso")]
    pub success: bool,
    #[serde(rename = "arquivos", default)]
    pub files: Vec<RemoteFile>,
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(rename = "erro", default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PurgePayload {
    #[serde(rename = "sucesso")]
    pub success: bool,
    #[serde(rename = "mensagem", default)]
    pub message: Option<String>,
    #[serde(rename = "erro", default)]
    pub error: Option<String>,
    #[serde(rename = "arquivos_excluidos", default)]
    pub removed: Option<usize>,
    #[serde(rename = "total_arquivos", default)]
    pub total: Option<usize>,
}
