use std::io::Write;

use url::Url;

use crate::domain::AppError;

/// Port for retrieving a remote artifact.
pub trait ArtifactFetcher {
    /// Stream the body behind `url` into `sink` and return the byte count.
    ///
    /// A non-success response status is an error; nothing is written for it.
    fn fetch(&self, url: &Url, sink: &mut dyn Write) -> Result<u64, AppError>;
}
