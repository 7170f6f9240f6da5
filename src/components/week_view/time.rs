use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use super::models::CalendarDay;

/// Build the week strip for the week containing `now` (Monday to Sunday)
///
/// Weeks start on Monday regardless of any locale default. Returns an empty
/// list when the week interval cannot be resolved, so callers render
/// nothing instead of crashing.
pub fn current_week<T: TimeZone>(now: &DateTime<T>) -> Vec<CalendarDay> {
    let today = now.date_naive();

    // Calculate Monday of the current week
    let days_since_monday = today.weekday().num_days_from_monday() as i64;
    let monday = match today.checked_sub_signed(Duration::days(days_since_monday)) {
        Some(date) => date,
        None => return Vec::new(),
    };

    let mut week = Vec::with_capacity(7);
    for offset in 0..7 {
        match monday.checked_add_signed(Duration::days(offset)) {
            Some(date) => week.push(CalendarDay {
                date,
                is_today: date == today,
            }),
            None => return Vec::new(),
        }
    }

    week
}

/// Week strip for the current instant in the given timezone
pub fn current_week_in(tz: Tz) -> Vec<CalendarDay> {
    current_week(&Utc::now().with_timezone(&tz))
}

/// Today's start-of-day key in the given timezone
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}
