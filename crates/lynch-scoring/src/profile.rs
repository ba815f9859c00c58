//! Risk profiles
//!
//! A profile bundles the thresholds that make the hard-fail gate and the growth
//! floor stricter or looser. The set is fixed; lookups never fail.

use serde::Serialize;

/// Named bundle of gate thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskProfile {
    pub name: &'static str,
    /// Debt/equity above this hard-fails
    pub max_debt_to_equity: f64,
    /// Interest coverage below this hard-fails
    pub min_interest_coverage: f64,
    /// Current ratio below this only warns
    pub min_current_ratio: f64,
    /// FCF margin (%) below this hard-fails
    pub min_fcf_margin: f64,
    /// Combined growth (%) at or above this still earns the "low" growth tier
    pub growth_floor: f64,
}

pub const CONSERVATIVE: RiskProfile = RiskProfile {
    name: "conservative",
    max_debt_to_equity: 1.0,
    min_interest_coverage: 4.0,
    min_current_ratio: 1.2,
    min_fcf_margin: 2.0,
    growth_floor: 6.0,
};

pub const BALANCED: RiskProfile = RiskProfile {
    name: "balanced",
    max_debt_to_equity: 1.5,
    min_interest_coverage: 3.0,
    min_current_ratio: 1.0,
    min_fcf_margin: 1.0,
    growth_floor: 4.0,
};

pub const AGGRESSIVE: RiskProfile = RiskProfile {
    name: "aggressive",
    max_debt_to_equity: 2.0,
    min_interest_coverage: 2.0,
    min_current_ratio: 0.8,
    min_fcf_margin: 0.0,
    growth_floor: 2.0,
};

const PROFILES: [RiskProfile; 3] = [CONSERVATIVE, BALANCED, AGGRESSIVE];

impl RiskProfile {
    /// Resolve a risk-tolerance key. Unrecognized keys fall back to `balanced`.
    pub fn resolve(key: &str) -> RiskProfile {
        match PROFILES.iter().find(|p| p.name == key) {
            Some(profile) => *profile,
            None => {
                tracing::warn!("Unrecognized risk tolerance {:?}, using balanced", key);
                BALANCED
            }
        }
    }

    /// All profiles, strictest first.
    pub fn all() -> &'static [RiskProfile] {
        &PROFILES
    }

    pub fn is_recognized(key: &str) -> bool {
        PROFILES.iter().any(|p| p.name == key)
    }
}

impl Default for RiskProfile {
    fn default() -> Self {
        BALANCED
    }
}
