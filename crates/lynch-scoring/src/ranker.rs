//! Result ranking
//!
//! Orders screen results for presentation: best score first.

use screener_core::ScreenResult;
use std::cmp::Ordering;

/// Sort by score (descending), then ticker (ascending). The sort is stable, so
/// results that share both keep their input order.
pub fn rank(results: &mut [ScreenResult]) {
    results.sort_by(compare);
}

fn compare(a: &ScreenResult, b: &ScreenResult) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.ticker.cmp(&b.ticker))
}

/// First `n` results of an already ranked list.
pub fn top_n(results: &[ScreenResult], n: usize) -> Vec<ScreenResult> {
    results.iter().take(n).cloned().collect()
}
