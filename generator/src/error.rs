use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaviconError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
