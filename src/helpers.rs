//! Shared display helpers.
//!
//! - `round_display`: nearest integer, halves rounding up (2.5 → 3, -2.5 → -2)
//! - `format_clock_12h`: provider `HH:MM:SS` clock strings → `h:MM AM/PM`
//! - small label lookups for wind direction, UV index and severe risk

/// Round a measurement to the nearest integer for display.
///
/// Returns 0 for non-finite inputs (NaN, ±Inf).
pub(crate) fn round_display(v: f64) -> i64 {
    if !v.is_finite() {
        tracing::warn!("round_display received non-finite value {}, defaulting to 0", v);
        return 0;
    }
    (v + 0.5).floor() as i64
}

/// Format an hour/minute pair as a 12-hour clock string, e.g. `5:30 AM`.
pub(crate) fn format_hm_12h(hour: u32, minute: u32) -> String {
    let ampm = if hour >= 12 { "PM" } else { "AM" };
    let h12 = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{}:{:02} {}", h12, minute, ampm)
}

/// Format a provider clock string (`HH:MM` or `HH:MM:SS`) as `h:MM AM/PM`.
///
/// Malformed input is returned unchanged.
pub(crate) fn format_clock_12h(time24: &str) -> String {
    let mut parts = time24.split(':');
    let hour = parts.next().and_then(|h| h.trim().parse::<u32>().ok());
    let minute = parts.next().and_then(|m| m.trim().parse::<u32>().ok());

    match (hour, minute) {
        (Some(h), Some(m)) if h < 24 && m < 60 => format_hm_12h(h, m),
        _ => time24.to_string(),
    }
}

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Map a wind direction in degrees (0 = north) to a 16-point compass label.
pub(crate) fn compass_point(degrees: f64) -> &'static str {
    if !degrees.is_finite() {
        return "N";
    }
    let normalized = degrees.rem_euclid(360.0);
    let index = ((normalized / 22.5) + 0.5).floor() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

/// WHO UV index bands.
pub(crate) fn uv_label(uv_index: f64) -> &'static str {
    if uv_index < 3.0 {
        "Low"
    } else if uv_index < 6.0 {
        "Moderate"
    } else if uv_index < 8.0 {
        "High"
    } else if uv_index < 11.0 {
        "Very High"
    } else {
        "Extreme"
    }
}

/// Visual Crossing severe-risk score (0–100) as a coarse label.
pub(crate) fn severe_risk_label(risk: f64) -> &'static str {
    if risk < 30.0 {
        "Low"
    } else if risk < 70.0 {
        "Moderate"
    } else {
        "High"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_display_half_rounds_up() {
        assert_eq!(round_display(54.5), 55);
        assert_eq!(round_display(54.49), 54);
        assert_eq!(round_display(-2.5), -2);
        assert_eq!(round_display(-2.6), -3);
    }

    #[test]
    fn test_round_display_non_finite() {
        assert_eq!(round_display(f64::NAN), 0);
        assert_eq!(round_display(f64::INFINITY), 0);
        assert_eq!(round_display(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_format_hm_12h() {
        assert_eq!(format_hm_12h(5, 30), "5:30 AM");
        assert_eq!(format_hm_12h(0, 0), "12:00 AM");
        assert_eq!(format_hm_12h(12, 5), "12:05 PM");
        assert_eq!(format_hm_12h(23, 45), "11:45 PM");
    }

    #[test]
    fn test_format_clock_12h() {
        assert_eq!(format_clock_12h("06:42:13"), "6:42 AM");
        assert_eq!(format_clock_12h("19:05:00"), "7:05 PM");
        assert_eq!(format_clock_12h("00:15"), "12:15 AM");
    }

    #[test]
    fn test_format_clock_12h_malformed_passthrough() {
        assert_eq!(format_clock_12h(""), "");
        assert_eq!(format_clock_12h("late"), "late");
        assert_eq!(format_clock_12h("25:00:00"), "25:00:00");
    }

    #[test]
    fn test_compass_point() {
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(11.0), "N");
        assert_eq!(compass_point(12.0), "NNE");
        assert_eq!(compass_point(90.0), "E");
        assert_eq!(compass_point(225.0), "SW");
        assert_eq!(compass_point(350.0), "N");
        assert_eq!(compass_point(-90.0), "W");
    }

    #[test]
    fn test_uv_label() {
        assert_eq!(uv_label(0.0), "Low");
        assert_eq!(uv_label(3.0), "Moderate");
        assert_eq!(uv_label(7.9), "High");
        assert_eq!(uv_label(10.0), "Very High");
        assert_eq!(uv_label(11.0), "Extreme");
    }

    #[test]
    fn test_severe_risk_label() {
        assert_eq!(severe_risk_label(10.0), "Low");
        assert_eq!(severe_risk_label(30.0), "Moderate");
        assert_eq!(severe_risk_label(75.0), "High");
    }
}
