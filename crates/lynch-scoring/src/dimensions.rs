//! Dimension scorers
//!
//! Each scorer awards a fraction of its dimension weight per tier and appends
//! the reason for the tier it landed in. Missing inputs never error.

use crate::config::ScoringConfig;
use crate::profile::RiskProfile;
use screener_core::{ReasonCode, ReasonKind, ReasonLevel};

/// Value from PEG.
pub fn score_value(peg: Option<f64>, config: &ScoringConfig, reasons: &mut Vec<ReasonCode>) -> f64 {
    let weight = config.value_weight;
    let Some(peg) = peg else {
        reasons.push(ReasonCode::new(
            ReasonLevel::Warning,
            ReasonKind::PegMissing,
            "PEG ratio unavailable",
        ));
        return 0.0;
    };

    let (fraction, level, code, threshold, message) = if peg <= config.peg_attractive {
        (
            1.0,
            ReasonLevel::Positive,
            ReasonKind::PegAttractive,
            config.peg_attractive,
            format!("PEG {:.2} <= {:?}", peg, config.peg_attractive),
        )
    } else if peg <= config.peg_fair {
        (
            0.8,
            ReasonLevel::Positive,
            ReasonKind::PegFair,
            config.peg_fair,
            format!("PEG {:.2} between {:?}-{:?}", peg, config.peg_attractive, config.peg_fair),
        )
    } else if peg <= config.peg_rich {
        (
            0.55,
            ReasonLevel::Warning,
            ReasonKind::PegRich,
            config.peg_rich,
            format!("PEG {:.2} between {:?}-{:?}", peg, config.peg_fair, config.peg_rich),
        )
    } else {
        (
            0.25,
            ReasonLevel::Negative,
            ReasonKind::PegExpensive,
            config.peg_rich,
            format!("PEG {:.2} above {:?}", peg, config.peg_rich),
        )
    };

    reasons.push(ReasonCode::new(level, code, message).measured(peg, threshold));
    weight * fraction
}

/// Growth from the combined growth rate; the lowest tiers depend on the profile floor.
pub fn score_growth(
    growth: Option<f64>,
    profile: &RiskProfile,
    config: &ScoringConfig,
    reasons: &mut Vec<ReasonCode>,
) -> f64 {
    let weight = config.growth_weight;
    let Some(growth) = growth else {
        reasons.push(ReasonCode::new(
            ReasonLevel::Warning,
            ReasonKind::GrowthMissing,
            "Growth metrics missing",
        ));
        return 0.0;
    };

    let (fraction, level, code, threshold) = if growth >= config.growth_strong {
        (1.0, ReasonLevel::Positive, ReasonKind::GrowthStrong, config.growth_strong)
    } else if growth >= config.growth_healthy {
        (0.8, ReasonLevel::Positive, ReasonKind::GrowthHealthy, config.growth_healthy)
    } else if growth >= config.growth_moderate {
        (0.6, ReasonLevel::Warning, ReasonKind::GrowthModerate, config.growth_moderate)
    } else if growth >= profile.growth_floor {
        (0.32, ReasonLevel::Warning, ReasonKind::GrowthLow, profile.growth_floor)
    } else {
        (0.08, ReasonLevel::Negative, ReasonKind::GrowthWeak, profile.growth_floor)
    };

    reasons.push(
        ReasonCode::new(level, code, format!("Growth {:.1}%", growth)).measured(growth, threshold),
    );
    weight * fraction
}

/// Three-tier quality sub-metric: strong, ok, or below ok.
struct QualityTier {
    label: &'static str,
    strong: f64,
    ok: f64,
    fractions: [f64; 3],
    codes: [ReasonKind; 3],
}

impl QualityTier {
    fn score(&self, value: Option<f64>, weight: f64, reasons: &mut Vec<ReasonCode>) -> f64 {
        let Some(value) = value else {
            return 0.0;
        };
        let (tier, level, threshold) = if value >= self.strong {
            (0, ReasonLevel::Positive, self.strong)
        } else if value >= self.ok {
            (1, ReasonLevel::Warning, self.ok)
        } else {
            (2, ReasonLevel::Warning, self.ok)
        };
        reasons.push(
            ReasonCode::new(level, self.codes[tier], format!("{} {:.1}%", self.label, value))
                .measured(value, threshold),
        );
        weight * self.fractions[tier]
    }
}

/// Quality from operating margin, FCF margin and ROE.
pub fn score_quality(
    operating_margin: Option<f64>,
    fcf_margin: Option<f64>,
    roe: Option<f64>,
    config: &ScoringConfig,
    reasons: &mut Vec<ReasonCode>,
) -> f64 {
    let weight = config.quality_weight;
    let margin = QualityTier {
        label: "Operating margin",
        strong: config.op_margin_strong,
        ok: config.op_margin_ok,
        fractions: [0.40, 0.28, 0.16],
        codes: [ReasonKind::MarginStrong, ReasonKind::MarginOk, ReasonKind::MarginThin],
    };
    let fcf = QualityTier {
        label: "FCF margin",
        strong: config.fcf_margin_strong,
        ok: config.fcf_margin_ok,
        fractions: [0.32, 0.20, 0.08],
        codes: [ReasonKind::FcfStrong, ReasonKind::FcfOk, ReasonKind::FcfThin],
    };
    let roe_tier = QualityTier {
        label: "ROE",
        strong: config.roe_strong,
        ok: config.roe_ok,
        fractions: [0.28, 0.20, 0.08],
        codes: [ReasonKind::RoeStrong, ReasonKind::RoeOk, ReasonKind::RoeWeak],
    };

    let total = margin.score(operating_margin, weight, reasons)
        + fcf.score(fcf_margin, weight, reasons)
        + roe_tier.score(roe, weight, reasons);
    total.min(weight)
}

/// Balance-sheet inputs scored by [`score_balance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceInputs {
    pub debt_to_equity: Option<f64>,
    pub net_debt_to_ebitda: Option<f64>,
    pub interest_coverage: Option<f64>,
    pub current_ratio: Option<f64>,
}

/// Balance from leverage, net debt, coverage and liquidity.
///
/// Readings the gate already rejects (debt above the profile ceiling, coverage
/// or liquidity under the profile minimum) earn nothing here and add no reason.
pub fn score_balance(
    inputs: BalanceInputs,
    profile: &RiskProfile,
    config: &ScoringConfig,
    reasons: &mut Vec<ReasonCode>,
) -> f64 {
    let weight = config.balance_weight;
    let mut total = 0.0;

    if let Some(de) = inputs.debt_to_equity {
        let message = format!("Debt/Equity {:.2}", de);
        if de <= config.debt_light {
            total += weight * 0.3;
            reasons.push(
                ReasonCode::new(ReasonLevel::Positive, ReasonKind::DebtLight, message)
                    .measured(de, config.debt_light),
            );
        } else if de <= profile.max_debt_to_equity {
            total += weight * 0.2;
            reasons.push(
                ReasonCode::new(ReasonLevel::Warning, ReasonKind::DebtManageable, message)
                    .measured(de, profile.max_debt_to_equity),
            );
        }
    }

    if let Some(net_debt) = inputs.net_debt_to_ebitda {
        let message = format!("Net debt/EBITDA {:.1}x", net_debt);
        if net_debt <= config.net_debt_low {
            total += weight * 0.3;
            reasons.push(
                ReasonCode::new(ReasonLevel::Positive, ReasonKind::NetDebtLow, message)
                    .measured(net_debt, config.net_debt_low),
            );
        } else if net_debt <= config.net_debt_ok {
            total += weight * 0.2;
            reasons.push(
                ReasonCode::new(ReasonLevel::Warning, ReasonKind::NetDebtOk, message)
                    .measured(net_debt, config.net_debt_ok),
            );
        } else {
            reasons.push(
                ReasonCode::new(ReasonLevel::Negative, ReasonKind::NetDebtHigh, message)
                    .measured(net_debt, config.net_debt_ok),
            );
        }
    }

    if let Some(coverage) = inputs.interest_coverage {
        let message = format!("Interest coverage {:.1}x", coverage);
        if coverage >= config.interest_strong {
            total += weight * 0.25;
            reasons.push(
                ReasonCode::new(ReasonLevel::Positive, ReasonKind::CoverageStrong, message)
                    .measured(coverage, config.interest_strong),
            );
        } else if coverage >= profile.min_interest_coverage {
            total += weight * 0.15;
            reasons.push(
                ReasonCode::new(ReasonLevel::Warning, ReasonKind::CoverageOk, message)
                    .measured(coverage, profile.min_interest_coverage),
            );
        }
    }

    if let Some(current) = inputs.current_ratio {
        let message = format!("Current ratio {:.2}", current);
        if current >= config.current_strong {
            total += weight * 0.15;
            reasons.push(
                ReasonCode::new(ReasonLevel::Positive, ReasonKind::CurrentStrong, message)
                    .measured(current, config.current_strong),
            );
        } else if current >= profile.min_current_ratio {
            total += weight * 0.1;
            reasons.push(
                ReasonCode::new(ReasonLevel::Warning, ReasonKind::CurrentOk, message)
                    .measured(current, profile.min_current_ratio),
            );
        }
    }

    f64::min(total, weight)
}
