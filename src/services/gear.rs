//! Clothing advice from the feels-like temperature (°F).

/// Gear tiers from lightest to heaviest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GearTier {
    Hot,
    Warm,
    Mild,
    Cool,
    Cold,
    Frigid,
}

/// Inclusive lower bounds, evaluated top-down; first match wins.
const TIER_THRESHOLDS: [(f64, GearTier); 5] = [
    (75.0, GearTier::Hot),
    (60.0, GearTier::Warm),
    (45.0, GearTier::Mild),
    (30.0, GearTier::Cool),
    (15.0, GearTier::Cold),
];

impl GearTier {
    /// Tier for a feels-like temperature. NaN lands in the heaviest tier.
    pub fn for_feels_like(feelslike: f64) -> Self {
        TIER_THRESHOLDS
            .iter()
            .find(|(lower, _)| feelslike >= *lower)
            .map(|(_, tier)| *tier)
            .unwrap_or(GearTier::Frigid)
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Self::Hot => "Singlet, split shorts, sunglasses. Stay hydrated.",
            Self::Warm => "T-shirt and shorts. Light and fast.",
            Self::Mild => "Long sleeve, shorts or tights. Arm sleeves optional.",
            Self::Cool => "Base layer, tights, gloves, headband.",
            Self::Cold => "Insulated jacket, tights, gloves, hat, buff.",
            Self::Frigid => "Full winter kit. Double-layer gloves, balaclava, insulated tights.",
        }
    }
}

/// Recommended kit for a feels-like temperature. Total over all inputs.
pub fn recommend_gear(feelslike: f64) -> &'static str {
    GearTier::for_feels_like(feelslike).advice()
}
