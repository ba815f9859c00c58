//! Hard-fail gate
//!
//! Missing required data and disqualifying balance-sheet readings. Every check
//! runs on its own, so one snapshot can collect several gate reasons.

use crate::profile::RiskProfile;
use screener_core::{Fundamentals, ReasonCode, ReasonKind, ReasonLevel};

/// Fields that must be known for a company to pass the gate, in report order.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "pe_ratio",
    "revenue_cagr_5y",
    "eps_growth_5y",
    "debt_to_equity",
    "interest_coverage",
    "current_ratio",
    "fcf_margin",
];

fn required_values(f: &Fundamentals) -> [Option<f64>; 7] {
    [
        f.pe_ratio,
        f.revenue_cagr_5y,
        f.eps_growth_5y,
        f.debt_to_equity,
        f.interest_coverage,
        f.current_ratio,
        f.fcf_margin,
    ]
}

/// Names of required fields that are absent.
pub fn missing_fields(f: &Fundamentals) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .zip(required_values(f))
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect()
}

/// Run the gate, appending its reasons. Returns `true` on hard-fail.
pub fn evaluate(f: &Fundamentals, profile: &RiskProfile, reasons: &mut Vec<ReasonCode>) -> bool {
    let mut hard_fail = false;

    let missing = missing_fields(f);
    if !missing.is_empty() {
        reasons.push(ReasonCode::new(
            ReasonLevel::Negative,
            ReasonKind::MissingData,
            format!("Missing required data: {}", missing.join(", ")),
        ));
        hard_fail = true;
    }

    if let Some(de) = f.debt_to_equity {
        if de > profile.max_debt_to_equity {
            reasons.push(
                ReasonCode::new(
                    ReasonLevel::Negative,
                    ReasonKind::DebtHigh,
                    format!("Debt/Equity {:.2} exceeds {:.2}", de, profile.max_debt_to_equity),
                )
                .measured(de, profile.max_debt_to_equity),
            );
            hard_fail = true;
        }
    }

    if let Some(coverage) = f.interest_coverage {
        if coverage < profile.min_interest_coverage {
            reasons.push(
                ReasonCode::new(
                    ReasonLevel::Negative,
                    ReasonKind::InterestCoverageLow,
                    format!(
                        "Interest coverage {:.1} below {:.1}x",
                        coverage, profile.min_interest_coverage
                    ),
                )
                .measured(coverage, profile.min_interest_coverage),
            );
            hard_fail = true;
        }
    }

    // Liquidity alone never disqualifies
    if let Some(current) = f.current_ratio {
        if current < profile.min_current_ratio {
            reasons.push(
                ReasonCode::new(
                    ReasonLevel::Warning,
                    ReasonKind::CurrentRatioLow,
                    format!("Current ratio {:.2} below {:.2}", current, profile.min_current_ratio),
                )
                .measured(current, profile.min_current_ratio),
            );
        }
    }

    if let Some(fcf) = f.fcf_margin {
        if fcf < profile.min_fcf_margin {
            reasons.push(
                ReasonCode::new(
                    ReasonLevel::Negative,
                    ReasonKind::FcfWeak,
                    format!("FCF margin {:.2}% below {:.2}%", fcf, profile.min_fcf_margin),
                )
                .measured(fcf, profile.min_fcf_margin),
            );
            hard_fail = true;
        }
    }

    hard_fail
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{AGGRESSIVE, BALANCED, CONSERVATIVE};

    fn complete() -> Fundamentals {
        let mut f = Fundamentals::empty("GATE", "Gate Co");
        f.pe_ratio = Some(15.0);
        f.revenue_cagr_5y = Some(10.0);
        f.eps_growth_5y = Some(12.0);
        f.debt_to_equity = Some(0.8);
        f.interest_coverage = Some(6.0);
        f.current_ratio = Some(1.3);
        f.fcf_margin = Some(8.0);
        f
    }

    #[test]
    fn test_complete_snapshot_passes() {
        let mut reasons = Vec::new();
        assert!(!evaluate(&complete(), &BALANCED, &mut reasons));
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_missing_fields_listed_in_order() {
        let mut f = complete();
        f.current_ratio = None;
        f.pe_ratio = None;

        let mut reasons = Vec::new();
        assert!(evaluate(&f, &BALANCED, &mut reasons));
        assert_eq!(reasons.len(), 1);
        assert_eq!(reasons[0].code, ReasonKind::MissingData);
        assert_eq!(reasons[0].message, "Missing required data: pe_ratio, current_ratio");
    }

    #[test]
    fn test_checks_are_independent() {
        let mut f = complete();
        f.pe_ratio = None;
        f.debt_to_equity = Some(1.8);
        f.fcf_margin = Some(-3.0);

        let mut reasons = Vec::new();
        assert!(evaluate(&f, &BALANCED, &mut reasons));
        let codes: Vec<_> = reasons.iter().map(|r| r.code).collect();
        assert_eq!(
            codes,
            vec![ReasonKind::MissingData, ReasonKind::DebtHigh, ReasonKind::FcfWeak]
        );
        assert_eq!(reasons[1].message, "Debt/Equity 1.80 exceeds 1.50");
        assert_eq!(reasons[2].message, "FCF margin -3.00% below 1.00%");
    }

    #[test]
    fn test_low_current_ratio_only_warns() {
        let mut f = complete();
        f.current_ratio = Some(0.9);

        let mut reasons = Vec::new();
        assert!(!evaluate(&f, &BALANCED, &mut reasons));
        assert_eq!(reasons[0].code, ReasonKind::CurrentRatioLow);
        assert_eq!(reasons[0].level, ReasonLevel::Warning);
        assert_eq!(reasons[0].threshold, Some(1.0));
    }

    #[test]
    fn test_profile_changes_outcome() {
        let mut f = complete();
        f.debt_to_equity = Some(1.2);
        f.interest_coverage = Some(3.5);

        assert!(evaluate(&f, &CONSERVATIVE, &mut Vec::new()));
        assert!(!evaluate(&f, &BALANCED, &mut Vec::new()));
        assert!(!evaluate(&f, &AGGRESSIVE, &mut Vec::new()));
    }

    #[test]
    fn test_boundaries_are_inclusive_passes() {
        let mut f = complete();
        f.debt_to_equity = Some(1.5);
        f.interest_coverage = Some(3.0);
        f.fcf_margin = Some(1.0);
        f.current_ratio = Some(1.0);

        let mut reasons = Vec::new();
        assert!(!evaluate(&f, &BALANCED, &mut reasons));
        assert!(reasons.is_empty());
    }
}
