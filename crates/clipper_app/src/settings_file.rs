use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use client_logging::client_warn;
use clipper_client::ClientSettings;
use serde::{Deserialize, Serialize};

const SETTINGS_FILENAME: &str = "clipper.ron";

/// On-disk settings. Every field is optional; anything missing falls back
/// to the built-in default.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
struct PersistedSettings {
    base_url: Option<String>,
    connect_timeout_secs: Option<u64>,
    request_timeout_secs: Option<u64>,
    max_files: Option<usize>,
    download_dir: Option<PathBuf>,
}

/// Loads `clipper.ron` from `dir`. A missing file is normal; a malformed
/// one is logged and ignored.
pub fn load_settings(dir: &Path) -> ClientSettings {
    let path = dir.join(SETTINGS_FILENAME);
    let persisted = match fs::read_to_string(&path) {
        Ok(text) => match ron::from_str::<PersistedSettings>(&text) {
            Ok(persisted) => persisted,
            Err(err) => {
                client_warn!("Failed to parse settings from {:?}: {}", path, err);
                PersistedSettings::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => PersistedSettings::default(),
        Err(err) => {
            client_warn!("Failed to read settings from {:?}: {}", path, err);
            PersistedSettings::default()
        }
    };

    let mut settings = ClientSettings::default();
    if let Some(base_url) = persisted.base_url {
        settings.base_url = base_url;
    }
    if let Some(secs) = persisted.connect_timeout_secs {
        settings.connect_timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = persisted.request_timeout_secs {
        settings.request_timeout = Some(Duration::from_secs(secs));
    }
    if let Some(max_files) = persisted.max_files {
        settings.max_files = max_files;
    }
    if let Some(download_dir) = persisted.download_dir {
        settings.download_dir = download_dir;
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(dir.path());
        assert_eq!(settings.base_url, ClientSettings::default().base_url);
        assert_eq!(settings.max_files, 10);
    }

    #[test]
    fn partial_file_overrides_only_what_it_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILENAME),
            r#"(base_url: Some("http://backend:8080"), max_files: Some(25))"#,
        )
        .unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings.base_url, "http://backend:8080");
        assert_eq!(settings.max_files, 25);
        assert_eq!(settings.request_timeout, None);
    }

    #[test]
    fn malformed_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILENAME), "not ron at all }{").unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings.base_url, ClientSettings::default().base_url);
    }
}
