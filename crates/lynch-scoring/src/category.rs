//! Lynch category from blended growth, with a P/E check for asset plays.

use crate::metrics::combined_growth;
use screener_core::{Category, Fundamentals};

const FAST_GROWER_MIN: f64 = 15.0;
const STALWART_MIN: f64 = 8.0;
const SLOW_GROWER_MIN: f64 = 3.0;
const ASSET_PLAY_MAX_PE: f64 = 12.0;

pub fn categorize(f: &Fundamentals) -> Category {
    let Some(growth) = combined_growth(f) else {
        return Category::Unknown;
    };

    if growth >= FAST_GROWER_MIN {
        Category::FastGrower
    } else if growth >= STALWART_MIN {
        Category::Stalwart
    } else if growth >= SLOW_GROWER_MIN {
        Category::SlowGrower
    } else if growth < 0.0 {
        Category::Turnaround
    } else if f.pe_ratio.is_some_and(|pe| pe <= ASSET_PLAY_MAX_PE) {
        Category::AssetPlay
    } else {
        Category::SlowGrower
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(growth: Option<f64>, pe: Option<f64>) -> Fundamentals {
        let mut f = Fundamentals::empty("CAT", "Category Co");
        f.revenue_cagr_5y = growth;
        f.eps_growth_5y = growth;
        f.pe_ratio = pe;
        f
    }

    #[test]
    fn test_growth_bands() {
        assert_eq!(categorize(&company(Some(22.0), Some(30.0))), Category::FastGrower);
        assert_eq!(categorize(&company(Some(15.0), None)), Category::FastGrower);
        assert_eq!(categorize(&company(Some(9.0), None)), Category::Stalwart);
        assert_eq!(categorize(&company(Some(3.0), None)), Category::SlowGrower);
        assert_eq!(categorize(&company(Some(-2.0), Some(8.0))), Category::Turnaround);
    }

    #[test]
    fn test_low_growth_cheap_is_asset_play() {
        assert_eq!(categorize(&company(Some(1.0), Some(9.0))), Category::AssetPlay);
        assert_eq!(categorize(&company(Some(0.0), Some(12.0))), Category::AssetPlay);
        assert_eq!(categorize(&company(Some(1.0), Some(18.0))), Category::SlowGrower);
        assert_eq!(categorize(&company(Some(1.0), None)), Category::SlowGrower);
    }

    #[test]
    fn test_unknown_growth() {
        assert_eq!(categorize(&company(None, Some(9.0))), Category::Unknown);
    }
}
