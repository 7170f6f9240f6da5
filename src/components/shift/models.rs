use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::time::format_amount;

/// Shift length in hours above which the unpaid break is deducted
pub const BREAK_THRESHOLD_HOURS: f64 = 5.0;

/// Length of the unpaid break in hours
pub const BREAK_HOURS: f64 = 0.5;

/// One day's shift: start, end and the hourly pay rate
///
/// Hours and salary are derived from these fields on every read and are
/// never stored. Ranges are not validated; an end before the start yields
/// negative hours and a negative salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub pay_per_hour: f64,
}

impl ShiftRecord {
    /// Create a new shift record
    pub fn new(start_time: NaiveDateTime, end_time: NaiveDateTime, pay_per_hour: f64) -> Self {
        Self {
            start_time,
            end_time,
            pay_per_hour,
        }
    }

    /// Elapsed hours from start to end, fractional
    pub fn total_hours(&self) -> f64 {
        let worked = self.end_time.signed_duration_since(self.start_time);
        worked.num_seconds() as f64 / 3600.0
    }

    /// Salary for the shift
    ///
    /// Shifts of at most five hours are paid in full; longer shifts have a
    /// fixed half-hour unpaid break deducted once. The boundary is inclusive
    /// on the no-deduction side.
    pub fn total_salary(&self) -> f64 {
        let hours = self.total_hours();
        if hours > BREAK_THRESHOLD_HOURS {
            (hours - BREAK_HOURS) * self.pay_per_hour
        } else {
            hours * self.pay_per_hour
        }
    }

    /// Format the shift as a human-readable string
    pub fn format(&self) -> String {
        format!(
            "{} - {} ({} h, {})",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M"),
            format_amount(self.total_hours()),
            format_amount(self.total_salary()),
        )
    }
}
