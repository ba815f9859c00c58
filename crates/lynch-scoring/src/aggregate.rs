//! Final score and rating.

use screener_core::{DimensionBreakdown, Rating};

pub const STRONG_THRESHOLD: u8 = 80;
pub const WATCH_THRESHOLD: u8 = 60;

/// Integer score in `[0, 100]`; zero whenever the gate failed.
pub fn final_score(breakdown: &DimensionBreakdown, hard_fail: bool) -> u8 {
    if hard_fail {
        return 0;
    }
    let raw = breakdown.total();
    if !raw.is_finite() {
        return 0;
    }
    // Ties go to the even neighbour: 82.5 -> 82, 83.5 -> 84
    raw.round_ties_even().clamp(0.0, 100.0) as u8
}

pub fn rating_for(score: u8, hard_fail: bool) -> Rating {
    if hard_fail {
        Rating::Fail
    } else if score >= STRONG_THRESHOLD {
        Rating::Strong
    } else if score >= WATCH_THRESHOLD {
        Rating::Watch
    } else {
        Rating::Caution
    }
}
