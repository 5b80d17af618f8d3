pub(crate) mod date;
pub(crate) mod debug;
pub(crate) mod fs;

pub(crate) use date::resolve_date;
pub(crate) use debug::{debug_enabled, debug_log, set_debug};
pub(crate) use fs::write_report;
