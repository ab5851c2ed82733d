use crate::helpers::{compass_point, severe_risk_label, uv_label};
use crate::services::recommend::{Recommendation, RunDaySummary};
use crate::services::visual_crossing::Alert;

use super::NO_DAYS_LEFT;

const FOOTER: &str = "WeatherRun · Powered by Visual Crossing";

/// One line per alert, event name first.
fn render_alert(alert: &Alert) -> Option<String> {
    match (alert.event.as_deref(), alert.headline.as_deref()) {
        (Some(event), Some(headline)) => Some(format!("! {}: {}", event, headline)),
        (Some(text), None) | (None, Some(text)) => Some(format!("! {}", text)),
        (None, None) => None,
    }
}

/// Render one day card. `number` is the 1-based position used by `--share`.
pub fn render_day(day: &RunDaySummary, number: usize) -> Vec<String> {
    let mut lines = Vec::new();

    let badge = if day.is_top_pick { "  ★ TOP PICK" } else { "" };
    lines.push(format!("[{}] {}{}", number, day.day_label, badge));
    let conditions = if day.conditions.is_empty() {
        day.category.description()
    } else {
        day.conditions.as_str()
    };
    lines.push(format!("    {} {}", day.category.glyph(), conditions));
    lines.push(format!("    {}°  Feels {}°", day.temp, day.feelslike));

    let wind = match day.winddir {
        Some(deg) => format!("Wind {} mph {}", day.windspeed, compass_point(deg)),
        None => format!("Wind {} mph", day.windspeed),
    };
    lines.push(format!("    {} · Humidity {}%", wind, day.humidity));

    let mut precip = vec![format!("Precip {}%", day.precipprob)];
    if let Some(uv) = day.uvindex {
        precip.push(format!("UV {} ({})", uv, uv_label(uv)));
    }
    if let Some(risk) = day.severerisk {
        precip.push(format!("Severe risk {}", severe_risk_label(risk)));
    }
    lines.push(format!("    {}", precip.join(" · ")));

    if !day.sunrise.is_empty() || !day.sunset.is_empty() {
        lines.push(format!("    Sunrise {} · Sunset {}", day.sunrise, day.sunset));
    }
    lines.push(format!("    Gear: {}", day.gear));

    lines
}

/// Full terminal view: location header, alerts, day cards, footer.
pub fn render_recommendation(rec: &Recommendation) -> String {
    let mut lines = Vec::new();

    lines.push(rec.location.to_uppercase());
    lines.push(format!("Run time {}", rec.run_time));

    let alerts: Vec<String> = rec.alerts.iter().filter_map(render_alert).collect();
    if !alerts.is_empty() {
        lines.push(String::new());
        lines.extend(alerts);
    }

    lines.push(String::new());
    if rec.days.is_empty() {
        lines.push(NO_DAYS_LEFT.to_string());
    } else {
        for (i, day) in rec.days.iter().enumerate() {
            lines.extend(render_day(day, i + 1));
            lines.push(String::new());
        }
    }

    lines.push(FOOTER.to_string());
    lines.join("\n")
}
