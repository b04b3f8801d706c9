use chrono::{Days, NaiveDate};

/// Returns `days` consecutive calendar dates starting at `start` (inclusive).
///
/// Dates past the end of chrono's supported range are dropped rather than
/// wrapped, which only matters for starts near year 262143.
#[must_use]
pub fn date_window(start: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..u64::from(days))
        .map_while(|offset| start.checked_add_days(Days::new(offset)))
        .collect()
}
