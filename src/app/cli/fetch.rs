//! Fetch command implementation.

use std::path::Path;

use crate::domain::{AppError, DownloadStatus};

pub fn run_fetch(root: &Path, config: Option<&Path>) -> Result<i32, AppError> {
    let report = crate::app::api::fetch_at(root, config)?;

    for outcome in &report.outcomes {
        let name = outcome
            .destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| outcome.url.to_string());
        match &outcome.status {
            DownloadStatus::Cached => println!("✅ {name}: cached"),
            DownloadStatus::Downloaded { bytes } => {
                println!("✅ {name}: downloaded {bytes} bytes")
            }
            DownloadStatus::Failed { error } => eprintln!("❌ {name}: failed: {error}"),
        }
    }

    println!(
        "{} downloaded, {} cached, {} failed",
        report.downloaded(),
        report.cached(),
        report.failed()
    );

    if !report.is_success() {
        let err = AppError::FetchIncomplete {
            failed: report.failed(),
            total: report.outcomes.len(),
        };
        eprintln!("Error: {}", err);
        return Ok(1);
    }
    Ok(0)
}
