use std::path::PathBuf;

use bytes::BytesMut;
use futures_util::StreamExt;

use crate::persist::AtomicFileWriter;
use crate::settings::{endpoints, ClientSettings};
use crate::types::{
    ApiError, DetailedListingPayload, ExtractOutcome, ExtractPayload, FileListing,
    PlainListingPayload, PurgePayload, PurgeSummary, RemoteFile,
};

/// Local name given to the all-files archive download.
const ARCHIVE_FILENAME: &str = "extracted_files.zip";

/// The backend contract, behind a trait so the sweep and the UI loop can be
/// exercised against a fake in tests.
#[async_trait::async_trait]
pub trait BackendApi: Send + Sync {
    /// Submits a URL for extraction, optionally naming the result file.
    async fn extract(
        &self,
        url: &str,
        filename: Option<&str>,
    ) -> Result<ExtractOutcome, ApiError>;

    /// Plain listing of every extracted file.
    async fn fetch_files(&self) -> Result<Vec<RemoteFile>, ApiError>;

    /// Detailed listing, guarded by the backend's success flag.
    async fn list_files(&self) -> Result<FileListing, ApiError>;

    /// Downloads one file into the download directory, keeping its name.
    async fn download(&self, name: &str) -> Result<PathBuf, ApiError>;

    /// Downloads the all-files archive into the download directory.
    async fn download_all(&self) -> Result<PathBuf, ApiError>;

    /// Deletes one file on the backend.
    async fn delete(&self, name: &str) -> Result<(), ApiError>;

    /// Bulk-deletes files extracted within the last `days` days.
    async fn purge_recent(&self, days: u32) -> Result<PurgeSummary, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        url::Url::parse(&settings.base_url)
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))?;

        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;

        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    fn file_endpoint(&self, base: &str, name: &str) -> String {
        format!("{}/{name}", self.endpoint(base))
    }

    async fn stream_to_file(&self, url: String, filename: &str) -> Result<PathBuf, ApiError> {
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        let mut content = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            content.extend_from_slice(&chunk);
        }

        let writer = AtomicFileWriter::new(self.settings.download_dir.clone());
        Ok(writer.write(filename, &content)?)
    }
}

#[async_trait::async_trait]
impl BackendApi for HttpBackend {
    async fn extract(
        &self,
        url: &str,
        filename: Option<&str>,
    ) -> Result<ExtractOutcome, ApiError> {
        let mut body = serde_json::json!({ "url": url });
        if let Some(name) = filename {
            body["filename"] = serde_json::Value::from(name);
        }

        let response = self
            .client
            .post(self.endpoint(endpoints::EXTRACT))
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;
        let payload = serde_json::from_str::<ExtractPayload>(&text).ok();

        if !status.is_success() {
            // Prefer the server's own description of what went wrong.
            return Err(match payload.and_then(|p| p.error.or(p.message)) {
                Some(message) => ApiError::Backend(message),
                None => ApiError::HttpStatus(status.as_u16()),
            });
        }

        let payload =
            payload.ok_or_else(|| ApiError::Decode("unparseable extraction response".into()))?;
        if payload.success {
            Ok(ExtractOutcome {
                message: payload.message,
                file: payload.file,
                size: payload.size,
            })
        } else {
            Err(ApiError::Backend(
                payload
                    .error
                    .or(payload.message)
                    .unwrap_or_else(|| "extraction failed".to_string()),
            ))
        }
    }

    async fn fetch_files(&self) -> Result<Vec<RemoteFile>, ApiError> {
        let response = self
            .client
            .get(self.endpoint(endpoints::FILES))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        let payload: PlainListingPayload = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(payload.files)
    }

    async fn list_files(&self) -> Result<FileListing, ApiError> {
        let response = self
            .client
            .get(self.endpoint(endpoints::LIST_FILES))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        let payload: DetailedListingPayload = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        if payload.success {
            let total = payload.total.unwrap_or(payload.files.len());
            Ok(FileListing {
                files: payload.files,
                total,
            })
        } else {
            Err(ApiError::Backend(
                payload
                    .error
                    .unwrap_or_else(|| "failed to list files".to_string()),
            ))
        }
    }

    async fn download(&self, name: &str) -> Result<PathBuf, ApiError> {
        self.stream_to_file(self.file_endpoint(endpoints::DOWNLOAD, name), name)
            .await
    }

    async fn download_all(&self) -> Result<PathBuf, ApiError> {
        self.stream_to_file(self.endpoint(endpoints::DOWNLOAD_ALL), ARCHIVE_FILENAME)
            .await
    }

    async fn delete(&self, name: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.file_endpoint(endpoints::DELETE, name))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }
        Ok(())
    }

    async fn purge_recent(&self, days: u32) -> Result<PurgeSummary, ApiError> {
        let response = self
            .client
            .post(self.endpoint(endpoints::PURGE))
            .json(&serde_json::json!({ "dias": days }))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        let payload: PurgePayload = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        if payload.success {
            Ok(PurgeSummary {
                message: payload
                    .message
                    .unwrap_or_else(|| "files purged".to_string()),
                removed: payload.removed,
                total: payload.total,
            })
        } else {
            Err(ApiError::Backend(
                payload
                    .error
                    .unwrap_or_else(|| "failed to purge files".to_string()),
            ))
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    ApiError::Network(err.to_string())
}
