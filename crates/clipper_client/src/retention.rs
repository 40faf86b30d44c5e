use chrono::NaiveDateTime;
use client_logging::{client_info, client_warn};

use crate::api::BackendApi;
use crate::types::{ApiError, RemoteFile};

/// Outcome of a retention sweep: how many files were removed and the
/// listing as it stands afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    pub removed: usize,
    pub files: Vec<RemoteFile>,
}

/// Returns the names that must go for `files` to fit under `ceiling`: the
/// oldest by modification timestamp first. A missing or unparseable
/// timestamp sorts earliest; ties keep the original listing order.
pub fn plan_retention_sweep(files: &[RemoteFile], ceiling: usize) -> Vec<String> {
    if files.len() <= ceiling {
        return Vec::new();
    }
    let excess = files.len() - ceiling;

    let mut order: Vec<(Option<NaiveDateTime>, &RemoteFile)> = files
        .iter()
        .map(|file| (file.modified.as_deref().and_then(parse_modified), file))
        .collect();
    // Stable sort, and None orders before any timestamp.
    order.sort_by_key(|(stamp, _)| *stamp);

    order
        .iter()
        .take(excess)
        .map(|(_, file)| file.name.clone())
        .collect()
}

/// Fetches the listing and, when it exceeds `ceiling`, deletes the oldest
/// files one at a time until the count is back at the ceiling. A failed
/// delete is logged and skipped; the sweep continues with the rest.
pub async fn sweep_excess(api: &dyn BackendApi, ceiling: usize) -> Result<SweepReport, ApiError> {
    let files = api.fetch_files().await?;
    let victims = plan_retention_sweep(&files, ceiling);
    if victims.is_empty() {
        return Ok(SweepReport { removed: 0, files });
    }

    client_info!(
        "Retention ceiling of {} exceeded; removing {} oldest file(s)",
        ceiling,
        victims.len()
    );

    let mut removed = 0;
    for name in &victims {
        match api.delete(name).await {
            Ok(()) => {
                removed += 1;
                client_info!("Removed {name} during retention sweep");
            }
            Err(err) => {
                client_warn!("Failed to remove {name} during retention sweep: {err}");
            }
        }
    }

    let files = api.fetch_files().await?;
    Ok(SweepReport { removed, files })
}

/// The backend writes naive local timestamps like `2024-05-01T12:30:00.123456`.
fn parse_modified(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok()
}
