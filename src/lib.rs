//! envstage: fetch, stage, and package an embeddable Python runtime for an application build.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    PackagedArchive, StageOutcome, StagedEnvironment, fetch_at, resolve_layout, stage_at,
};
pub use domain::{AppError, DirectoryLayout, DownloadOutcome, DownloadStatus, FetchReport};
