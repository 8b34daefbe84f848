//! Crawl date parsing and window computation
//!
//! The match history query covers exactly one calendar day. The window is
//! computed in UTC so results do not depend on the timezone of the machine
//! running the crawl.

use crate::constants::SECONDS_PER_DAY;
use crate::error::AppError;
use chrono::NaiveDate;

/// Input date format accepted on the command line
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Computes the `[start, end)` epoch-second window covering one UTC day.
///
/// # Arguments
/// * `date` - The crawl date in `dd/mm/yyyy` format
///
/// # Returns
/// * `Ok((start, end))` - Midnight UTC of `date` and midnight of the next day
/// * `Err(AppError)` - The input did not parse as a date
pub fn day_window_utc(date: &str) -> Result<(i64, i64), AppError> {
    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|e| {
        AppError::datetime_parse_error(format!("invalid date '{date}' (expected dd/mm/yyyy): {e}"))
    })?;

    // and_hms_opt(0, 0, 0) is always valid for a NaiveDate
    let start = parsed
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::datetime_parse_error(format!("invalid midnight for '{date}'")))?
        .and_utc()
        .timestamp();

    Ok((start, start + SECONDS_PER_DAY))
}
