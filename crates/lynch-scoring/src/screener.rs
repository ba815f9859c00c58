//! Batch screener
//!
//! Wires the gate, the four dimension scorers, aggregation and categorization
//! into one [`ScreenResult`] per company, then ranks the batch.

use crate::aggregate::{final_score, rating_for};
use crate::category::categorize;
use crate::config::ScoringConfig;
use crate::dimensions::{score_balance, score_growth, score_quality, score_value, BalanceInputs};
use crate::error::{ConfigError, ScreenError};
use crate::gate;
use crate::metrics::{combined_growth, peg_ratio};
use crate::profile::RiskProfile;
use crate::ranker::rank;
use screener_core::{DimensionBreakdown, Fundamentals, MetricsSnapshot, ScreenResult};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Scores companies against one risk profile and rubric.
#[derive(Debug, Clone)]
pub struct Screener {
    profile: RiskProfile,
    config: Arc<ScoringConfig>,
}

impl Default for Screener {
    fn default() -> Self {
        Self::with_default_rubric(RiskProfile::default())
    }
}

impl Screener {
    /// Build a screener for a custom rubric. The rubric must pass
    /// [`ScoringConfig::validate`].
    pub fn new(profile: RiskProfile, config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            profile,
            config: Arc::new(config),
        })
    }

    /// Screener for a risk-tolerance key with the default rubric.
    pub fn for_risk(risk_tolerance: &str) -> Self {
        Self::with_default_rubric(RiskProfile::resolve(risk_tolerance))
    }

    fn with_default_rubric(profile: RiskProfile) -> Self {
        Self {
            profile,
            config: Arc::new(ScoringConfig::default()),
        }
    }

    pub fn profile(&self) -> &RiskProfile {
        &self.profile
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a single company. Never fails; missing data surfaces as reasons.
    pub fn score_one(&self, fundamentals: &Fundamentals) -> ScreenResult {
        let f = fundamentals.clone().sanitized();
        let config = self.config.as_ref();
        let mut reasons = Vec::new();

        let hard_fail = gate::evaluate(&f, &self.profile, &mut reasons);

        let peg = peg_ratio(&f);
        let breakdown = DimensionBreakdown {
            value: score_value(peg, config, &mut reasons),
            growth: score_growth(combined_growth(&f), &self.profile, config, &mut reasons),
            quality: score_quality(f.operating_margin, f.fcf_margin, f.roe, config, &mut reasons),
            balance: score_balance(
                BalanceInputs {
                    debt_to_equity: f.debt_to_equity,
                    net_debt_to_ebitda: f.net_debt_to_ebitda,
                    interest_coverage: f.interest_coverage,
                    current_ratio: f.current_ratio,
                },
                &self.profile,
                config,
                &mut reasons,
            ),
        };

        let score = final_score(&breakdown, hard_fail);
        if hard_fail {
            tracing::debug!("{} hard-failed the {} gate", f.ticker, self.profile.name);
        }

        ScreenResult {
            rating: rating_for(score, hard_fail),
            category: categorize(&f),
            metrics: MetricsSnapshot {
                pe_ratio: f.pe_ratio,
                peg_ratio: peg,
                revenue_cagr_5y: f.revenue_cagr_5y,
                eps_growth_5y: f.eps_growth_5y,
                operating_margin: f.operating_margin,
                fcf_margin: f.fcf_margin,
                roe: f.roe,
                debt_to_equity: f.debt_to_equity,
                net_debt_to_ebitda: f.net_debt_to_ebitda,
                interest_coverage: f.interest_coverage,
                current_ratio: f.current_ratio,
            },
            ticker: f.ticker,
            name: f.name,
            score,
            hard_fail,
            breakdown,
            reasons,
        }
    }

    /// Score and rank a batch.
    pub fn screen(&self, batch: &[Fundamentals]) -> Vec<ScreenResult> {
        tracing::info!(
            "📊 Screening {} companies with {} profile",
            batch.len(),
            self.profile.name
        );

        let mut results: Vec<ScreenResult> = batch.iter().map(|f| self.score_one(f)).collect();
        rank(&mut results);
        self.log_summary(&results);
        results
    }

    /// Score a batch on the blocking pool, one task per company, and rank once
    /// every task has joined. Produces the same output as [`Screener::screen`].
    pub async fn screen_concurrent(
        &self,
        batch: Vec<Fundamentals>,
    ) -> Result<Vec<ScreenResult>, ScreenError> {
        tracing::info!(
            "📊 Screening {} companies concurrently with {} profile",
            batch.len(),
            self.profile.name
        );

        let mut tasks = JoinSet::new();
        for (index, fundamentals) in batch.into_iter().enumerate() {
            let screener = self.clone();
            tasks.spawn_blocking(move || (index, screener.score_one(&fundamentals)));
        }

        let mut scored = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            scored.push(joined?);
        }

        // Restore input order so ties rank exactly as in the sequential path
        scored.sort_by_key(|(index, _)| *index);
        let mut results: Vec<ScreenResult> = scored.into_iter().map(|(_, r)| r).collect();
        rank(&mut results);
        self.log_summary(&results);
        Ok(results)
    }

    fn log_summary(&self, results: &[ScreenResult]) {
        let failed = results.iter().filter(|r| r.hard_fail).count();
        tracing::info!(
            "✅ Screen complete: {}/{} passed the gate",
            results.len() - failed,
            results.len()
        );
    }
}

/// Screen a batch for a risk-tolerance key, optionally with a custom rubric.
/// A custom rubric that fails validation is rejected before anything is scored.
pub fn screen_fundamentals(
    batch: &[Fundamentals],
    risk_tolerance: &str,
    config: Option<&ScoringConfig>,
) -> Result<Vec<ScreenResult>, ConfigError> {
    let profile = RiskProfile::resolve(risk_tolerance);
    let screener = match config {
        Some(config) => Screener::new(profile, config.clone())?,
        None => Screener::with_default_rubric(profile),
    };
    Ok(screener.screen(batch))
}
