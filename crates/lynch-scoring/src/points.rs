//! Fixed-points rubric (0 to 10)
//!
//! A quick checklist kept alongside the weighted rubric: PEG on earnings growth,
//! preferred growth rate, leverage and liquidity each earn a few points.
//! Results from the two rubrics are never mixed.

use screener_core::Rating;
use serde::{Deserialize, Serialize};

pub const MAX_POINTS: u8 = 10;

/// PEG from a percent growth rate. Unknown when either input is unknown or not positive.
pub fn compute_peg_ratio(pe_ratio: Option<f64>, growth_pct: Option<f64>) -> Option<f64> {
    match (pe_ratio, growth_pct) {
        (Some(pe), Some(growth)) if pe > 0.0 && growth > 0.0 => Some(pe / growth),
        _ => None,
    }
}

pub fn compute_debt_to_equity(total_debt: Option<f64>, total_equity: Option<f64>) -> Option<f64> {
    safe_ratio(total_debt, total_equity)
}

pub fn compute_current_ratio(
    current_assets: Option<f64>,
    current_liabilities: Option<f64>,
) -> Option<f64> {
    safe_ratio(current_assets, current_liabilities)
}

fn safe_ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if d != 0.0 => Some(n / d),
        _ => None,
    }
}

/// Earnings growth, falling back to revenue growth.
pub fn prefer_growth_rate(earnings_growth_pct: Option<f64>, revenue_growth_pct: Option<f64>) -> Option<f64> {
    earnings_growth_pct.or(revenue_growth_pct)
}

/// Inputs to the points rubric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointsMetrics {
    pub pe_ratio: Option<f64>,
    pub earnings_growth_pct: Option<f64>,
    pub revenue_growth_pct: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub current_ratio: Option<f64>,
}

impl PointsMetrics {
    pub fn peg_ratio(&self) -> Option<f64> {
        compute_peg_ratio(self.pe_ratio, self.earnings_growth_pct)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsScore {
    pub score: u8,
    pub rating: Rating,
    pub notes: Vec<String>,
}

pub fn score_points(metrics: &PointsMetrics) -> PointsScore {
    let mut score = 0u8;
    let mut notes = Vec::with_capacity(4);

    let (points, note) = match metrics.peg_ratio() {
        None => (0, "PEG unavailable or invalid"),
        Some(peg) if peg <= 1.0 => (3, "PEG <= 1 (attractive valuation vs growth)"),
        Some(peg) if peg <= 1.5 => (2, "PEG between 1 and 1.5"),
        Some(peg) if peg <= 2.0 => (1, "PEG between 1.5 and 2"),
        Some(_) => (0, "PEG above 2"),
    };
    score += points;
    notes.push(note.to_string());

    let growth = prefer_growth_rate(metrics.earnings_growth_pct, metrics.revenue_growth_pct);
    let (points, note) = match growth {
        None => (0, "Growth unavailable"),
        Some(g) if g >= 15.0 => (3, "Growth >= 15%"),
        Some(g) if g >= 8.0 => (2, "Growth between 8% and 15%"),
        Some(g) if g >= 4.0 => (1, "Growth between 4% and 8%"),
        Some(_) => (0, "Low growth"),
    };
    score += points;
    notes.push(note.to_string());

    let (points, note) = match metrics.debt_to_equity {
        None => (0, "Debt-to-equity unavailable"),
        Some(de) if de <= 0.5 => (2, "Low leverage (D/E <= 0.5)"),
        Some(de) if de <= 1.0 => (1, "Moderate leverage (D/E <= 1)"),
        Some(_) => (0, "High leverage"),
    };
    score += points;
    notes.push(note.to_string());

    let (points, note) = match metrics.current_ratio {
        None => (0, "Current ratio unavailable"),
        Some(cr) if cr >= 1.5 => (2, "Healthy current ratio"),
        Some(cr) if cr >= 1.0 => (1, "Adequate current ratio"),
        Some(_) => (0, "Weak current ratio"),
    };
    score += points;
    notes.push(note.to_string());

    PointsScore {
        score,
        rating: points_rating(score),
        notes,
    }
}

fn points_rating(score: u8) -> Rating {
    if score >= 8 {
        Rating::Strong
    } else if score >= 5 {
        Rating::Watch
    } else {
        Rating::Caution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_peg_helper() {
        assert_relative_eq!(compute_peg_ratio(Some(20.0), Some(25.0)).unwrap(), 0.8);
        assert!(compute_peg_ratio(Some(-5.0), Some(10.0)).is_none());
        assert!(compute_peg_ratio(Some(15.0), Some(0.0)).is_none());
        assert!(compute_peg_ratio(None, Some(10.0)).is_none());
    }

    #[test]
    fn test_ratio_helpers_guard_zero_denominator() {
        assert_relative_eq!(compute_debt_to_equity(Some(50.0), Some(100.0)).unwrap(), 0.5);
        assert!(compute_debt_to_equity(Some(50.0), Some(0.0)).is_none());
        assert!(compute_current_ratio(None, Some(3.0)).is_none());
        assert!(compute_current_ratio(Some(3.0), None).is_none());
        assert_relative_eq!(compute_current_ratio(Some(3.0), Some(2.0)).unwrap(), 1.5);
    }

    #[test]
    fn test_prefers_earnings_growth() {
        assert_eq!(prefer_growth_rate(Some(12.0), Some(5.0)), Some(12.0));
        assert_eq!(prefer_growth_rate(None, Some(5.0)), Some(5.0));
        assert_eq!(prefer_growth_rate(None, None), None);
    }

    #[test]
    fn test_perfect_checklist() {
        let result = score_points(&PointsMetrics {
            pe_ratio: Some(15.0),
            earnings_growth_pct: Some(20.0),
            revenue_growth_pct: Some(10.0),
            debt_to_equity: Some(0.3),
            current_ratio: Some(2.0),
        });
        assert_eq!(result.score, MAX_POINTS);
        assert_eq!(result.rating, Rating::Strong);
        assert_eq!(result.notes.len(), 4);
        assert_eq!(result.notes[0], "PEG <= 1 (attractive valuation vs growth)");
    }

    #[test]
    fn test_middling_checklist() {
        let result = score_points(&PointsMetrics {
            pe_ratio: Some(18.0),
            earnings_growth_pct: Some(10.0),
            revenue_growth_pct: None,
            debt_to_equity: Some(0.8),
            current_ratio: Some(1.2),
        });
        // PEG 1.8 -> 1, growth 10 -> 2, D/E -> 1, current -> 1
        assert_eq!(result.score, 5);
        assert_eq!(result.rating, Rating::Watch);
    }

    #[test]
    fn test_empty_metrics_score_zero() {
        let result = score_points(&PointsMetrics::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.rating, Rating::Caution);
        assert_eq!(
            result.notes,
            vec![
                "PEG unavailable or invalid",
                "Growth unavailable",
                "Debt-to-equity unavailable",
                "Current ratio unavailable"
            ]
        );
    }
}
