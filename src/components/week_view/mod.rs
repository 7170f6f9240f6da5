pub mod models;
mod session;
pub mod time;

pub use models::CalendarDay;
pub use session::{DaySelection, ShiftDefaults, WeekSession};
