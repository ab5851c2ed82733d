use sqlx::FromRow;

use crate::services::run_time::RunTime;

/// A stored preference row.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)] // updated_at populated by FromRow; only read when debugging the store
pub struct Preference {
    pub key: String,
    pub value: String,
    /// RFC 3339 timestamp of the last write.
    pub updated_at: String,
}

/// Saved run preferences. `None` means "use the built-in default".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunPreferences {
    pub location: Option<String>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
}

impl RunPreferences {
    /// Saved run time, filling gaps from the 5:30 AM default.
    pub fn run_time(&self) -> RunTime {
        let hour = self.hour.unwrap_or(RunTime::DEFAULT.hour());
        let minute = self.minute.unwrap_or(RunTime::DEFAULT.minute());
        RunTime::new(hour, minute).unwrap_or_else(|e| {
            tracing::warn!("Ignoring saved run time: {}", e);
            RunTime::DEFAULT
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_time_defaults() {
        assert_eq!(RunPreferences::default().run_time(), RunTime::DEFAULT);
    }

    #[test]
    fn test_run_time_partial() {
        let prefs = RunPreferences {
            hour: Some(7),
            ..Default::default()
        };
        assert_eq!(prefs.run_time(), RunTime::new(7, 30).unwrap());
    }

    #[test]
    fn test_run_time_out_of_range_uses_default() {
        let prefs = RunPreferences {
            location: None,
            hour: Some(31),
            minute: Some(0),
        };
        assert_eq!(prefs.run_time(), RunTime::DEFAULT);
    }
}
