//! Core module - the pure stages of report creation

mod path;
mod slug;
mod template;
mod types;

pub(crate) use path::allocate_path;
pub(crate) use slug::topic_slug;
pub(crate) use template::render_body;
pub(crate) use types::{Environment, Invocation, ReportOutcome, ReportPlan};
