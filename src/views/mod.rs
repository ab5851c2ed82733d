//! Terminal output for a recommendation.
//!
//! - `cards`: one card per day, top pick highlighted
//! - `share`: the plain-text report for a single day
//! - `json`: the recommendation (or error) as JSON

pub mod cards;
pub mod json;
pub mod share;

/// Shown when no location has been entered or saved yet.
pub const EMPTY_STATE_HINT: &str = "Enter a location to find your best run day.";

/// Shown when the forecast has no days left to recommend.
pub const NO_DAYS_LEFT: &str = "No upcoming run days left in this forecast.";
