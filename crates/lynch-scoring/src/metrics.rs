//! Derived metrics shared by the gate, the scorers and the categorizer.

use screener_core::Fundamentals;

/// Mean of whichever of revenue CAGR and EPS growth are known.
pub fn combined_growth(f: &Fundamentals) -> Option<f64> {
    match (f.revenue_cagr_5y, f.eps_growth_5y) {
        (Some(revenue), Some(eps)) => Some((revenue + eps) / 2.0),
        (Some(revenue), None) => Some(revenue),
        (None, Some(eps)) => Some(eps),
        (None, None) => None,
    }
}

/// P/E divided by combined growth. Unknown when growth is not positive.
pub fn peg_ratio(f: &Fundamentals) -> Option<f64> {
    let pe = f.pe_ratio?;
    let growth = combined_growth(f)?;
    if growth > 0.0 {
        Some(pe / growth)
    } else {
        None
    }
}
