//! Target path allocation
//!
//! Builds `<base>/<date>_<slug>.md` and, when that is taken, probes
//! `-2` through `-999` on the stem. The probe is check-then-use: another
//! process can still create the chosen path before it is written.

use std::path::{Path, PathBuf};

use crate::consts::{MAX_SUFFIX, REPORT_EXTENSION};
use crate::error::AppError;
use crate::utils::debug_log;

/// Pick the first free report path for `date` and `slug` under `base_dir`.
///
/// `exists` decides whether a candidate is occupied; the binary passes
/// `Path::exists`.
pub(crate) fn allocate_path<F>(
    base_dir: &Path,
    date: &str,
    slug: &str,
    exists: F,
) -> Result<PathBuf, AppError>
where
    F: Fn(&Path) -> bool,
{
    let stem = format!("{date}_{slug}");

    let first = base_dir.join(format!("{stem}.{REPORT_EXTENSION}"));
    if !exists(&first) {
        return Ok(first);
    }
    debug_log!("path taken: {}", first.display());

    for index in 2..=MAX_SUFFIX {
        let candidate = base_dir.join(format!("{stem}-{index}.{REPORT_EXTENSION}"));
        if !exists(&candidate) {
            return Ok(candidate);
        }
        debug_log!("path taken: {}", candidate.display());
    }

    Err(AppError::Exhausted {
        attempts: MAX_SUFFIX,
    })
}
