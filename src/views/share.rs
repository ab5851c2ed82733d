use crate::errors::AppError;
use crate::services::recommend::{Recommendation, RunDaySummary};
use crate::services::run_time::RunTime;

/// Plain-text report for one day, suitable for pasting into a message.
pub fn share_report(location: &str, run_time: RunTime, day: &RunDaySummary) -> String {
    [
        format!("WeatherRun Report for {}", location),
        format!("{} at {}", day.day_label, run_time),
        format!("Temp: {}F / Feels Like: {}F", day.temp, day.feelslike),
        format!("Wind: {} mph / Humidity: {}%", day.windspeed, day.humidity),
        format!("Precip: {}% / {}", day.precipprob, day.conditions),
        format!("Sunrise: {} / Sunset: {}", day.sunrise, day.sunset),
        format!("Gear: {}", day.gear),
    ]
    .join("\n")
}

/// Report for the 1-based day `number` as shown on the cards.
pub fn share_day(rec: &Recommendation, number: usize) -> Result<String, AppError> {
    let day = number
        .checked_sub(1)
        .and_then(|i| rec.days.get(i))
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "No day {} to share; pick between 1 and {}",
                number,
                rec.days.len()
            ))
        })?;
    Ok(share_report(&rec.location, rec.run_time, day))
}
