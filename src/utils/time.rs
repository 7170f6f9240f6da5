use chrono::NaiveTime;

/// Parse time string in HH:MM format
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Build a time of day out of an HH:MM string
pub fn naive_time_from_str(time_str: &str) -> Option<NaiveTime> {
    let (hour, minute) = parse_time(time_str)?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Format a time of day as HH:MM
pub fn format_clock(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Format a derived quantity with the shortest decimal representation
///
/// Whole numbers lose the trailing ".0", everything else keeps only the
/// digits needed to round-trip (6.5 -> "6.5", 111.0 -> "111").
pub fn format_amount(value: f64) -> String {
    format!("{}", value)
}
