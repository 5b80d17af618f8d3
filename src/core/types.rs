//! Pipeline data types
//!
//! The parsed invocation, the process environment it runs against, and the
//! resolved plan and outcome of a single report.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::path::PathBuf;

use crate::error::AppError;

/// What the user asked for, immutable once parsed
#[derive(Debug, Clone)]
pub(crate) struct Invocation {
    pub(crate) topic: String,
    /// Relative paths are resolved against `Environment::cwd`
    pub(crate) base_dir: PathBuf,
    pub(crate) date: Option<String>,
    pub(crate) dry_run: bool,
}

/// Ambient inputs captured once at startup and passed down explicitly
#[derive(Debug, Clone)]
pub(crate) struct Environment {
    pub(crate) cwd: PathBuf,
    pub(crate) today: NaiveDate,
}

impl Environment {
    pub(crate) fn capture() -> Result<Self, AppError> {
        let cwd = std::env::current_dir().map_err(AppError::CurrentDir)?;
        Ok(Self {
            cwd,
            today: Local::now().date_naive(),
        })
    }
}

/// Everything resolved before any side effect happens
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReportPlan {
    pub(crate) dir: PathBuf,
    pub(crate) path: PathBuf,
    pub(crate) date: String,
    pub(crate) slug: String,
}

/// Result of a run, printed as a bare path or as JSON
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ReportOutcome {
    pub(crate) path: PathBuf,
    pub(crate) date: String,
    pub(crate) slug: String,
    pub(crate) written: bool,
}

impl ReportOutcome {
    pub(crate) fn new(plan: &ReportPlan, written: bool) -> Self {
        Self {
            path: plan.path.clone(),
            date: plan.date.clone(),
            slug: plan.slug.clone(),
            written,
        }
    }
}
