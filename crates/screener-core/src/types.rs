use serde::{Deserialize, Serialize};
use std::fmt;

/// Point-in-time fundamentals for one company.
///
/// Every metric is optional: providers leave a field `None` when the value is
/// unknown. Percent metrics use percent units (12.0 means 12%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fundamentals {
    pub ticker: String,
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub pe_ratio: Option<f64>,
    #[serde(default)]
    pub revenue_cagr_5y: Option<f64>,
    #[serde(default)]
    pub eps_growth_5y: Option<f64>,
    #[serde(default)]
    pub operating_margin: Option<f64>,
    #[serde(default)]
    pub fcf_margin: Option<f64>,
    #[serde(default)]
    pub roe: Option<f64>,
    #[serde(default)]
    pub debt_to_equity: Option<f64>,
    #[serde(default)]
    pub net_debt_to_ebitda: Option<f64>,
    #[serde(default)]
    pub interest_coverage: Option<f64>,
    #[serde(default)]
    pub current_ratio: Option<f64>,
    #[serde(default)]
    pub shares_outstanding: Option<f64>,
    #[serde(default)]
    pub free_cash_flow: Option<f64>,
}

impl Fundamentals {
    /// Snapshot with identity only; every metric unknown.
    pub fn empty(ticker: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
            price: None,
            market_cap: None,
            pe_ratio: None,
            revenue_cagr_5y: None,
            eps_growth_5y: None,
            operating_margin: None,
            fcf_margin: None,
            roe: None,
            debt_to_equity: None,
            net_debt_to_ebitda: None,
            interest_coverage: None,
            current_ratio: None,
            shares_outstanding: None,
            free_cash_flow: None,
        }
    }

    /// Replace non-finite metrics with `None`.
    ///
    /// Providers parse loosely typed upstream payloads; a NaN or infinity
    /// must never reach the scorer as a number.
    pub fn sanitized(mut self) -> Self {
        for field in [
            &mut self.price,
            &mut self.market_cap,
            &mut self.pe_ratio,
            &mut self.revenue_cagr_5y,
            &mut self.eps_growth_5y,
            &mut self.operating_margin,
            &mut self.fcf_margin,
            &mut self.roe,
            &mut self.debt_to_equity,
            &mut self.net_debt_to_ebitda,
            &mut self.interest_coverage,
            &mut self.current_ratio,
            &mut self.shares_outstanding,
            &mut self.free_cash_flow,
        ] {
            if matches!(*field, Some(v) if !v.is_finite()) {
                *field = None;
            }
        }
        self
    }
}

/// Severity attached to a reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasonLevel {
    Positive,
    Warning,
    Negative,
}

impl ReasonLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonLevel::Positive => "positive",
            ReasonLevel::Warning => "warning",
            ReasonLevel::Negative => "negative",
        }
    }
}

/// Machine-readable reason codes emitted by the gate and the dimension scorers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonKind {
    // Hard-fail gate
    MissingData,
    DebtHigh,
    InterestCoverageLow,
    CurrentRatioLow,
    FcfWeak,
    // Value
    PegMissing,
    PegAttractive,
    PegFair,
    PegRich,
    PegExpensive,
    // Growth
    GrowthMissing,
    GrowthStrong,
    GrowthHealthy,
    GrowthModerate,
    GrowthLow,
    GrowthWeak,
    // Quality
    MarginStrong,
    MarginOk,
    MarginThin,
    FcfStrong,
    FcfOk,
    FcfThin,
    RoeStrong,
    RoeOk,
    RoeWeak,
    // Balance
    DebtLight,
    DebtManageable,
    NetDebtLow,
    NetDebtOk,
    NetDebtHigh,
    CoverageStrong,
    CoverageOk,
    CurrentStrong,
    CurrentOk,
}

impl ReasonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonKind::MissingData => "MISSING_DATA",
            ReasonKind::DebtHigh => "DEBT_HIGH",
            ReasonKind::InterestCoverageLow => "INTEREST_COVERAGE_LOW",
            ReasonKind::CurrentRatioLow => "CURRENT_RATIO_LOW",
            ReasonKind::FcfWeak => "FCF_WEAK",
            ReasonKind::PegMissing => "PEG_MISSING",
            ReasonKind::PegAttractive => "PEG_ATTRACTIVE",
            ReasonKind::PegFair => "PEG_FAIR",
            ReasonKind::PegRich => "PEG_RICH",
            ReasonKind::PegExpensive => "PEG_EXPENSIVE",
            ReasonKind::GrowthMissing => "GROWTH_MISSING",
            ReasonKind::GrowthStrong => "GROWTH_STRONG",
            ReasonKind::GrowthHealthy => "GROWTH_HEALTHY",
            ReasonKind::GrowthModerate => "GROWTH_MODERATE",
            ReasonKind::GrowthLow => "GROWTH_LOW",
            ReasonKind::GrowthWeak => "GROWTH_WEAK",
            ReasonKind::MarginStrong => "MARGIN_STRONG",
            ReasonKind::MarginOk => "MARGIN_OK",
            ReasonKind::MarginThin => "MARGIN_THIN",
            ReasonKind::FcfStrong => "FCF_STRONG",
            ReasonKind::FcfOk => "FCF_OK",
            ReasonKind::FcfThin => "FCF_THIN",
            ReasonKind::RoeStrong => "ROE_STRONG",
            ReasonKind::RoeOk => "ROE_OK",
            ReasonKind::RoeWeak => "ROE_WEAK",
            ReasonKind::DebtLight => "DEBT_LIGHT",
            ReasonKind::DebtManageable => "DEBT_MANAGEABLE",
            ReasonKind::NetDebtLow => "NET_DEBT_LOW",
            ReasonKind::NetDebtOk => "NET_DEBT_OK",
            ReasonKind::NetDebtHigh => "NET_DEBT_HIGH",
            ReasonKind::CoverageStrong => "COVERAGE_STRONG",
            ReasonKind::CoverageOk => "COVERAGE_OK",
            ReasonKind::CurrentStrong => "CURRENT_STRONG",
            ReasonKind::CurrentOk => "CURRENT_OK",
        }
    }
}

impl fmt::Display for ReasonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One justification entry attached to a screen result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonCode {
    pub level: ReasonLevel,
    pub code: ReasonKind,
    pub message: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub threshold: Option<f64>,
}

impl ReasonCode {
    pub fn new(level: ReasonLevel, code: ReasonKind, message: impl Into<String>) -> Self {
        Self {
            level,
            code,
            message: message.into(),
            value: None,
            threshold: None,
        }
    }

    /// Attach the metric value and the tier boundary that produced this reason.
    pub fn measured(mut self, value: f64, threshold: f64) -> Self {
        self.value = Some(value);
        self.threshold = Some(threshold);
        self
    }
}

/// Qualitative label derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Strong,
    Watch,
    Caution,
    Fail,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Strong => "Strong",
            Rating::Watch => "Watch",
            Rating::Caution => "Caution",
            Rating::Fail => "Fail",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lynch's stock categories, keyed off blended growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "fast grower")]
    FastGrower,
    #[serde(rename = "stalwart")]
    Stalwart,
    #[serde(rename = "slow grower")]
    SlowGrower,
    #[serde(rename = "turnaround")]
    Turnaround,
    #[serde(rename = "asset play")]
    AssetPlay,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FastGrower => "fast grower",
            Category::Stalwart => "stalwart",
            Category::SlowGrower => "slow grower",
            Category::Turnaround => "turnaround",
            Category::AssetPlay => "asset play",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Echo of the metrics the rubric looked at, including the derived PEG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub pe_ratio: Option<f64>,
    pub peg_ratio: Option<f64>,
    pub revenue_cagr_5y: Option<f64>,
    pub eps_growth_5y: Option<f64>,
    pub operating_margin: Option<f64>,
    pub fcf_margin: Option<f64>,
    pub roe: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub net_debt_to_ebitda: Option<f64>,
    pub interest_coverage: Option<f64>,
    pub current_ratio: Option<f64>,
}

impl MetricsSnapshot {
    /// `(name, value)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, Option<f64>); 11] {
        [
            ("pe_ratio", self.pe_ratio),
            ("peg_ratio", self.peg_ratio),
            ("revenue_cagr_5y", self.revenue_cagr_5y),
            ("eps_growth_5y", self.eps_growth_5y),
            ("operating_margin", self.operating_margin),
            ("fcf_margin", self.fcf_margin),
            ("roe", self.roe),
            ("debt_to_equity", self.debt_to_equity),
            ("net_debt_to_ebitda", self.net_debt_to_ebitda),
            ("interest_coverage", self.interest_coverage),
            ("current_ratio", self.current_ratio),
        ]
    }
}

/// Unrounded points contributed by each scoring dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionBreakdown {
    pub value: f64,
    pub growth: f64,
    pub quality: f64,
    pub balance: f64,
}

impl DimensionBreakdown {
    pub fn total(&self) -> f64 {
        self.value + self.growth + self.quality + self.balance
    }
}

/// Scored and labelled output for one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenResult {
    pub ticker: String,
    pub name: String,
    pub score: u8, // 0 to 100
    pub rating: Rating,
    pub category: Category,
    pub hard_fail: bool,
    pub breakdown: DimensionBreakdown,
    pub metrics: MetricsSnapshot,
    pub reasons: Vec<ReasonCode>,
}

impl ScreenResult {
    pub fn has_reason(&self, code: ReasonKind) -> bool {
        self.reasons.iter().any(|r| r.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_serializes_with_wire_names() {
        let reason = ReasonCode::new(ReasonLevel::Positive, ReasonKind::PegAttractive, "PEG 0.80 <= 1.0")
            .measured(0.8, 1.0);
        let json = serde_json::to_value(&reason).unwrap();
        assert_eq!(json["level"], "positive");
        assert_eq!(json["code"], "PEG_ATTRACTIVE");
        assert_eq!(json["threshold"], 1.0);
    }

    #[test]
    fn test_reason_kind_display_matches_serde() {
        for kind in [
            ReasonKind::InterestCoverageLow,
            ReasonKind::NetDebtHigh,
            ReasonKind::GrowthModerate,
        ] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json.as_str(), Some(kind.as_str()));
        }
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(serde_json::to_value(Category::AssetPlay).unwrap(), "asset play");
        assert_eq!(Category::FastGrower.to_string(), "fast grower");
        assert_eq!(serde_json::to_value(Rating::Fail).unwrap(), "Fail");
    }

    #[test]
    fn test_missing_metrics_deserialize_as_none() {
        let f: Fundamentals =
            serde_json::from_str(r#"{"ticker":"ABC","name":"Abc Corp","pe_ratio":12.5}"#).unwrap();
        assert_eq!(f.pe_ratio, Some(12.5));
        assert!(f.roe.is_none());
        assert!(f.free_cash_flow.is_none());
    }

    #[test]
    fn test_sanitized_drops_non_finite() {
        let mut f = Fundamentals::empty("ABC", "Abc Corp");
        f.pe_ratio = Some(f64::NAN);
        f.roe = Some(f64::INFINITY);
        f.current_ratio = Some(1.4);
        let f = f.sanitized();
        assert!(f.pe_ratio.is_none());
        assert!(f.roe.is_none());
        assert_eq!(f.current_ratio, Some(1.4));
    }
}
