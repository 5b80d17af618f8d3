use chrono::NaiveDate;

use crate::consts::DATE_FORMAT;
use crate::error::AppError;
use crate::utils::debug_log;

/// Resolve the report date: the validated override, or `today` when absent.
///
/// The override is returned unchanged. Only the strict `YYYY-MM-DD` shape is
/// accepted; compact or single-digit forms are rejected even when chrono
/// could parse them.
pub(crate) fn resolve_date(raw: Option<&str>, today: NaiveDate) -> Result<String, AppError> {
    let Some(raw) = raw else {
        let date = today.format(DATE_FORMAT).to_string();
        debug_log!("date: {date} (local today)");
        return Ok(date);
    };

    if !has_iso_shape(raw) || NaiveDate::parse_from_str(raw, DATE_FORMAT).is_err() {
        debug_log!("date: rejected override {raw:?}");
        return Err(AppError::InvalidDate);
    }

    debug_log!("date: {raw} (override)");
    Ok(raw.to_string())
}

fn has_iso_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
