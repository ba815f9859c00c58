//! Plain-text rendering for the terminal.

use lynch_scoring::RiskProfile;
use screener_core::ScreenResult;
use std::fmt::Write;

fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", (v * 100.0).round() / 100.0),
        None => "n/a".to_string(),
    }
}

/// One result as a labelled block.
pub fn format_report(result: &ScreenResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Ticker: {} ({})", result.ticker, result.name);
    let _ = writeln!(out, "Score: {} ({})", result.score, result.rating);
    let _ = writeln!(out, "Category: {}", result.category);
    out.push_str("Metrics:\n");
    for (key, value) in result.metrics.entries() {
        let _ = writeln!(out, "  {}: {}", key, format_metric(value));
    }
    out.push_str("Reasons:");
    for reason in &result.reasons {
        let _ = write!(out, "\n  - {}", reason.message);
    }
    out
}

/// Every result, separated by a `-` line.
pub fn format_results(results: &[ScreenResult]) -> String {
    results
        .iter()
        .map(|r| format!("{}\n-", format_report(r)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_profiles(profiles: &[RiskProfile]) -> String {
    let mut out = format!(
        "{:<14}{:>9}{:>14}{:>13}{:>10}{:>14}",
        "profile", "max D/E", "min coverage", "min current", "min FCF%", "growth floor%"
    );
    for p in profiles {
        let _ = write!(
            out,
            "\n{:<14}{:>9.2}{:>14.1}{:>13.2}{:>10.1}{:>14.1}",
            p.name,
            p.max_debt_to_equity,
            p.min_interest_coverage,
            p.min_current_ratio,
            p.min_fcf_margin,
            p.growth_floor
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lynch_scoring::Screener;
    use screener_core::Fundamentals;

    fn sample() -> ScreenResult {
        let mut f = Fundamentals::empty("ABC", "Abc Corp");
        f.pe_ratio = Some(14.0);
        f.revenue_cagr_5y = Some(12.0);
        f.eps_growth_5y = Some(16.0);
        Screener::for_risk("balanced").score_one(&f)
    }

    #[test]
    fn test_report_layout() {
        let report = format_report(&sample());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Ticker: ABC (Abc Corp)");
        assert_eq!(lines[1], "Score: 0 (Fail)");
        assert_eq!(lines[2], "Category: stalwart");
        assert_eq!(lines[3], "Metrics:");
        assert_eq!(lines[4], "  pe_ratio: 14");
        assert_eq!(lines[5], "  peg_ratio: 1");
        assert_eq!(lines[14], "  current_ratio: n/a");
        assert_eq!(lines[15], "Reasons:");
        assert_eq!(
            lines[16],
            "  - Missing required data: debt_to_equity, interest_coverage, current_ratio, fcf_margin"
        );
    }

    #[test]
    fn test_results_separated() {
        let text = format_results(&[sample(), sample()]);
        assert_eq!(text.lines().filter(|l| *l == "-").count(), 2);
        assert!(text.ends_with("\n-"));
    }

    #[test]
    fn test_profiles_table() {
        let table = format_profiles(RiskProfile::all());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("conservative"));
        assert!(lines[2].contains("1.50"));
    }
}
