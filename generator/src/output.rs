use crate::error::FaviconError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes `bytes` to `path`, replacing any existing file.
///
/// A failure part way through may leave a truncated file behind.
pub fn write(path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), FaviconError> {
    let path = path.as_ref();
    let to_error = |source| FaviconError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(to_error)?;
    file.write_all(bytes).map_err(to_error)?;

    tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
