use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::errors::AppError;
use crate::helpers::format_hm_12h;

/// The runner's intended start time, in the forecast's local clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTime {
    hour: u32,
    minute: u32,
}

impl RunTime {
    /// 5:30 AM.
    pub const DEFAULT: RunTime = RunTime {
        hour: 5,
        minute: 30,
    };

    pub fn new(hour: u32, minute: u32) -> Result<Self, AppError> {
        if hour > 23 {
            return Err(AppError::BadRequest(format!(
                "Run hour must be between 0 and 23, got {}",
                hour
            )));
        }
        if minute > 59 {
            return Err(AppError::BadRequest(format!(
                "Run minute must be between 0 and 59, got {}",
                minute
            )));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// The hourly sample closest to this time: minutes 30–59 round up to the
    /// next hour, wrapping 23 → 0. The calendar day is not advanced.
    pub fn api_hour(&self) -> u32 {
        if self.minute >= 30 {
            (self.hour + 1) % 24
        } else {
            self.hour
        }
    }

    /// Move the hour by `delta`, wrapping around midnight. Minutes are kept.
    pub fn shifted(&self, delta: i32) -> Self {
        let hour = (self.hour as i32 + delta).rem_euclid(24) as u32;
        Self {
            hour,
            minute: self.minute,
        }
    }
}

impl Default for RunTime {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for RunTime {
    type Err = AppError;

    /// Parse `H:MM` or `HH:MM` (24-hour).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::BadRequest(format!("Invalid run time '{}', expected HH:MM", s));

        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        if m.len() != 2 {
            return Err(invalid());
        }
        let hour = h.parse::<u32>().map_err(|_| invalid())?;
        let minute = m.parse::<u32>().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for RunTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hm_12h(self.hour, self.minute))
    }
}

impl Serialize for RunTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:02}:{:02}", self.hour, self.minute))
    }
}
