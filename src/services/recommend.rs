//! Run-day recommendation.
//!
//! Turns one forecast document into up to five scored day summaries for the
//! requested run time:
//!
//! 1. Round the run time to the nearest hourly sample
//! 2. Skip days (including today) whose run time has already passed
//! 3. Resolve each day's conditions at that hour, falling back to the day
//!    aggregates field by field
//! 4. Score each day and flag the single best one
//!
//! Everything here is pure: "now" is passed in as a reference instant.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::helpers::{format_clock_12h, round_display};
use crate::services::conditions::ConditionCategory;
use crate::services::gear::recommend_gear;
use crate::services::run_time::RunTime;
use crate::services::visual_crossing::{Alert, DayForecast, ForecastDocument, HourSample};

/// Feels-like temperature (°F) with a score of zero.
const IDEAL_FEELS_LIKE_F: f64 = 55.0;

/// Score added per percentage point of precipitation probability.
const PRECIP_PENALTY_PER_PCT: f64 = 0.5;

/// Maximum number of days in a recommendation window.
const WINDOW_DAYS: usize = 5;

/// Conditions at the run hour, before display rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConditions {
    pub temp: f64,
    pub feelslike: f64,
    pub humidity: f64,
    pub windspeed: f64,
    pub winddir: Option<f64>,
    pub precipprob: f64,
    pub uvindex: Option<f64>,
    pub severerisk: Option<f64>,
    pub conditions: String,
}

/// One day in the recommendation window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunDaySummary {
    /// Provider date string, `YYYY-MM-DD`.
    pub date: String,
    /// "Today", "Tomorrow" or e.g. "Wednesday, Jan 3".
    pub day_label: String,
    pub temp: i64,
    pub feelslike: i64,
    pub humidity: i64,
    pub windspeed: i64,
    pub precipprob: i64,
    /// Wind direction in degrees (0 = north).
    pub winddir: Option<f64>,
    pub uvindex: Option<f64>,
    pub severerisk: Option<f64>,
    pub conditions: String,
    pub category: ConditionCategory,
    /// 12-hour local clock, e.g. "7:13 AM". Empty when the provider omits it.
    pub sunrise: String,
    pub sunset: String,
    pub gear: String,
    /// Lower is better.
    pub score: f64,
    pub is_top_pick: bool,
}

/// Everything the presentation layer needs for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub location: String,
    pub alerts: Vec<Alert>,
    pub run_time: RunTime,
    pub days: Vec<RunDaySummary>,
}

/// Runnability score: distance from the ideal feels-like temperature plus a
/// half-weight precipitation penalty.
pub fn calculate_score(feelslike: f64, precipprob: f64) -> f64 {
    (feelslike - IDEAL_FEELS_LIKE_F).abs() + precipprob * PRECIP_PENALTY_PER_PCT
}

/// Exact match on the sample's `HH:00:00` clock string.
fn find_hour_sample(day: &DayForecast, hour: u32) -> Option<&HourSample> {
    let padded = format!("{:02}:00:00", hour);
    day.hours.iter().find(|h| h.datetime == padded)
}

/// Resolve the conditions for `day` at `api_hour`.
///
/// Each field comes from the matching hour sample when present, otherwise
/// from the day aggregate, otherwise 0 / empty.
pub fn resolve_conditions(day: &DayForecast, api_hour: u32) -> RunConditions {
    let hour = find_hour_sample(day, api_hour);
    let pick = |h: Option<f64>, d: Option<f64>| h.or(d);

    RunConditions {
        temp: pick(hour.and_then(|h| h.temp), day.temp).unwrap_or(0.0),
        feelslike: pick(hour.and_then(|h| h.feelslike), day.feelslike).unwrap_or(0.0),
        humidity: pick(hour.and_then(|h| h.humidity), day.humidity).unwrap_or(0.0),
        windspeed: pick(hour.and_then(|h| h.windspeed), day.windspeed).unwrap_or(0.0),
        winddir: pick(hour.and_then(|h| h.winddir), day.winddir),
        precipprob: pick(hour.and_then(|h| h.precipprob), day.precipprob).unwrap_or(0.0),
        uvindex: pick(hour.and_then(|h| h.uvindex), day.uvindex),
        severerisk: pick(hour.and_then(|h| h.severerisk), day.severerisk),
        conditions: hour
            .and_then(|h| h.conditions.clone())
            .or_else(|| day.conditions.clone())
            .unwrap_or_default(),
    }
}

/// Index of the first day whose run time is still ahead of `reference`.
///
/// Dates compare as ISO strings. Today qualifies only when the run hour is
/// strictly after the current hour.
pub fn find_window_start(
    days: &[DayForecast],
    run_time: RunTime,
    reference: NaiveDateTime,
) -> Option<usize> {
    let today = reference.date().format("%Y-%m-%d").to_string();
    let current_hour = reference.hour();

    days.iter().position(|d| {
        if d.datetime == today {
            run_time.hour() > current_hour
        } else {
            d.datetime.as_str() > today.as_str()
        }
    })
}

/// Human label for the day at `index` in the window.
///
/// The index-1 "Tomorrow" rule repeats part of the index-0 rule; the two only
/// diverge for forecasts with gaps between dates.
pub fn day_label(date: &str, index: usize, today: NaiveDate) -> String {
    let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        tracing::warn!("Unparseable forecast date '{}', using it as label", date);
        return date.to_string();
    };
    let tomorrow = today.succ_opt();

    if index == 0 {
        if parsed == today {
            return "Today".to_string();
        }
        if Some(parsed) == tomorrow {
            return "Tomorrow".to_string();
        }
    }
    if index == 1 && Some(parsed) == tomorrow {
        return "Tomorrow".to_string();
    }

    parsed.format("%A, %b %-d").to_string()
}

fn summarize_day(
    day: &DayForecast,
    index: usize,
    api_hour: u32,
    today: NaiveDate,
) -> RunDaySummary {
    let resolved = resolve_conditions(day, api_hour);
    let score = calculate_score(resolved.feelslike, resolved.precipprob);

    RunDaySummary {
        date: day.datetime.clone(),
        day_label: day_label(&day.datetime, index, today),
        temp: round_display(resolved.temp),
        feelslike: round_display(resolved.feelslike),
        humidity: round_display(resolved.humidity),
        windspeed: round_display(resolved.windspeed),
        precipprob: round_display(resolved.precipprob),
        winddir: resolved.winddir,
        uvindex: resolved.uvindex,
        severerisk: resolved.severerisk,
        category: ConditionCategory::classify(&resolved.conditions),
        conditions: resolved.conditions,
        sunrise: day.sunrise.as_deref().map(format_clock_12h).unwrap_or_default(),
        sunset: day.sunset.as_deref().map(format_clock_12h).unwrap_or_default(),
        gear: recommend_gear(resolved.feelslike).to_string(),
        score,
        is_top_pick: false,
    }
}

/// Flag the lowest-scoring day. Ties keep the earliest.
fn mark_top_pick(days: &mut [RunDaySummary]) {
    let mut best: Option<(usize, f64)> = None;
    for (i, day) in days.iter().enumerate() {
        match best {
            Some((_, best_score)) if day.score >= best_score => {}
            _ => best = Some((i, day.score)),
        }
    }
    if let Some((i, _)) = best {
        days[i].is_top_pick = true;
    }
}

/// Select the upcoming window and score each day at the requested run time.
///
/// Returns 0–5 summaries in chronological order, exactly one flagged as the
/// top pick when non-empty. An empty result means nothing is left to
/// recommend this week.
pub fn select_and_score(
    forecast: &ForecastDocument,
    run_time: RunTime,
    reference: NaiveDateTime,
) -> Vec<RunDaySummary> {
    let Some(start) = find_window_start(&forecast.days, run_time, reference) else {
        tracing::info!("No forecast days left after {} at {}", reference, run_time);
        return Vec::new();
    };

    let api_hour = run_time.api_hour();
    let today = reference.date();

    let mut days: Vec<RunDaySummary> = forecast
        .days
        .iter()
        .skip(start)
        .take(WINDOW_DAYS)
        .enumerate()
        .map(|(i, day)| summarize_day(day, i, api_hour, today))
        .collect();

    mark_top_pick(&mut days);

    tracing::debug!(
        "Scored {} days from {} at hour {:02}",
        days.len(),
        forecast.days[start].datetime,
        api_hour
    );

    days
}

/// Full pipeline output: scored days plus the echoed location and alerts.
pub fn build_recommendation(
    forecast: &ForecastDocument,
    run_time: RunTime,
    reference: NaiveDateTime,
) -> Recommendation {
    Recommendation {
        location: forecast.resolved_address.clone(),
        alerts: forecast.alerts.clone().unwrap_or_default(),
        run_time,
        days: select_and_score(forecast, run_time, reference),
    }
}
