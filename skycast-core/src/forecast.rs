use chrono::NaiveDate;

use crate::model::{Forecast, ForecastEntry};

/// Entries of `forecast` whose timestamp falls on the UTC calendar day
/// `day`, in source order (the provider returns 3-hour increments in
/// ascending time order, so source order is chronological).
///
/// Returns `None` rather than an empty vector when the forecast is absent,
/// its list is empty, or no entry matches: callers show a different message
/// for "nothing loaded" than for "nothing on this day", and the `Option`
/// keeps that distinction explicit.
///
/// Pure and stateless; the same inputs always produce the same output.
pub fn select_for_date(forecast: Option<&Forecast>, day: NaiveDate) -> Option<Vec<&ForecastEntry>> {
    let list = &forecast?.list;

    let matching: Vec<&ForecastEntry> = list
        .iter()
        .filter(|entry| entry.day_utc() == Some(day))
        .collect();

    if matching.is_empty() { None } else { Some(matching) }
}
