use crate::error::{calendar_error, config_error, env_error, AppResult};
use crate::utils::time::naive_time_from_str;
use chrono::NaiveTime;
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

/// Default hourly pay rate when nothing else is configured
pub const DEFAULT_PAY_PER_HOUR: f64 = 22.2;

/// Default start time seeded into the edit form (HH:MM)
pub const DEFAULT_SHIFT_START: &str = "10:30";

/// Default end time seeded into the edit form (HH:MM)
pub const DEFAULT_SHIFT_END: &str = "17:00";

/// Main configuration structure for the tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Timezone the week view is computed in
    pub timezone: String,
    /// Hourly pay rate used for new shifts
    pub pay_per_hour: f64,
    /// Start time seeded into the edit form for days without a shift (HH:MM)
    pub default_shift_start: String,
    /// End time seeded into the edit form for days without a shift (HH:MM)
    pub default_shift_end: String,
}

/// Optional overrides read from `config/defaults.toml`
#[derive(Debug, Clone, Default, Deserialize)]
struct FileDefaults {
    timezone: Option<String>,
    pay_per_hour: Option<f64>,
    default_shift_start: Option<String>,
    default_shift_end: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            timezone: String::from("UTC"),
            pay_per_hour: DEFAULT_PAY_PER_HOUR,
            default_shift_start: String::from(DEFAULT_SHIFT_START),
            default_shift_end: String::from(DEFAULT_SHIFT_END),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let timezone = env::var("TIMEZONE").unwrap_or_else(|_| String::from("UTC"));

        let pay_per_hour = match env::var("PAY_PER_HOUR") {
            Ok(value) => value
                .parse::<f64>()
                .map_err(|_| env_error("Invalid PAY_PER_HOUR format"))?,
            Err(_) => DEFAULT_PAY_PER_HOUR,
        };

        let default_shift_start =
            env::var("DEFAULT_SHIFT_START").unwrap_or_else(|_| String::from(DEFAULT_SHIFT_START));
        let default_shift_end =
            env::var("DEFAULT_SHIFT_END").unwrap_or_else(|_| String::from(DEFAULT_SHIFT_END));

        let mut config = Config {
            timezone,
            pay_per_hour,
            default_shift_start,
            default_shift_end,
        };

        // Load overrides from file if it exists
        if let Ok(content) = fs::read_to_string("config/defaults.toml") {
            if let Ok(file_defaults) = toml::from_str::<FileDefaults>(&content) {
                config.merge(file_defaults);
            }
        }

        // Fail early on values the session cannot work with
        config.tz()?;
        config.shift_start()?;
        config.shift_end()?;

        Ok(config)
    }

    fn merge(&mut self, file_defaults: FileDefaults) {
        if let Some(timezone) = file_defaults.timezone {
            self.timezone = timezone;
        }
        if let Some(pay_per_hour) = file_defaults.pay_per_hour {
            self.pay_per_hour = pay_per_hour;
        }
        if let Some(start) = file_defaults.default_shift_start {
            self.default_shift_start = start;
        }
        if let Some(end) = file_defaults.default_shift_end {
            self.default_shift_end = end;
        }
    }

    /// Resolve the configured timezone
    pub fn tz(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| calendar_error(&format!("Unknown timezone: {}", self.timezone)))
    }

    /// Resolve the configured default shift start time
    pub fn shift_start(&self) -> AppResult<NaiveTime> {
        naive_time_from_str(&self.default_shift_start).ok_or_else(|| {
            config_error(&format!(
                "Invalid default shift start time: {}",
                self.default_shift_start
            ))
        })
    }

    /// Resolve the configured default shift end time
    pub fn shift_end(&self) -> AppResult<NaiveTime> {
        naive_time_from_str(&self.default_shift_end).ok_or_else(|| {
            config_error(&format!(
                "Invalid default shift end time: {}",
                self.default_shift_end
            ))
        })
    }
}
