use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry of the seven-day week strip
///
/// A fresh set of seven is built every time the current week is requested;
/// entries carry no identity beyond their date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Start-of-day key for this entry
    pub date: NaiveDate,
    /// Whether the entry falls on the same calendar day as "now"
    pub is_today: bool,
}

impl CalendarDay {
    /// Short weekday label for the strip ("Mon")
    pub fn short_day_name(&self) -> String {
        self.date.format("%a").to_string()
    }

    /// Day-of-month label for the strip ("14")
    pub fn day_number(&self) -> String {
        self.date.format("%-d").to_string()
    }

    /// Full header label ("Monday, 14 July")
    pub fn full_day_name(&self) -> String {
        self.date.format("%A, %-d %B").to_string()
    }
}
