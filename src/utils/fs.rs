use std::fs;
use std::path::Path;

use crate::error::AppError;
use crate::utils::debug_log;

/// Create `dir` (with any missing parents) and write `body` to `target`.
///
/// An existing file at `target` is overwritten. Nothing here guards against
/// another process creating `target` after the collision probe ran.
pub(crate) fn write_report(dir: &Path, target: &Path, body: &str) -> Result<(), AppError> {
    fs::create_dir_all(dir).map_err(|source| AppError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    debug_log!("ensured directory {}", dir.display());

    fs::write(target, body).map_err(|source| AppError::WriteFile {
        path: target.to_path_buf(),
        source,
    })?;
    debug_log!("wrote {} bytes to {}", body.len(), target.display());
    Ok(())
}
