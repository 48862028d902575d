pub mod errors;
pub mod models;
pub mod services;

use std::collections::HashMap;

use uuid::Uuid;

use errors::CoreError;
use models::{
    analytics::{AllocationReport, GoalValidation, HoldingMetrics, PortfolioSummary},
    category::Category,
    holding::Holding,
};
use services::{
    allocation_service::AllocationService, currency_service::CurrencyService,
    goal_service::GoalService, metrics_service::MetricsService,
    summary_service::SummaryService,
};

/// Main entry point for the Portfolio Tracker core library.
///
/// Wires the analytics services together around a single currency-rate
/// snapshot. The tracker holds no portfolio data of its own: every method
/// takes the caller's current holdings/goals snapshot, never mutates it,
/// and returns a freshly allocated result — repeated calls on the same
/// input produce identical output.
#[must_use]
#[derive(Debug)]
pub struct PortfolioTracker {
    currency_service: CurrencyService,
    summary_service: SummaryService,
    allocation_service: AllocationService,
    goal_service: GoalService,
    metrics_service: MetricsService,
}

impl PortfolioTracker {
    /// Tracker using the built-in fallback USD→INR rate.
    pub fn new() -> Self {
        Self::build(CurrencyService::new())
    }

    /// Tracker using a caller-supplied (live) USD→INR rate, so invested
    /// totals are converted at the same rate the upstream pricing layer
    /// used for current values.
    pub fn with_usd_inr_rate(rate: f64) -> Self {
        Self::build(CurrencyService::with_usd_inr_rate(rate))
    }

    /// The USD→INR rate this tracker converts with.
    #[must_use]
    pub fn usd_inr_rate(&self) -> f64 {
        self.currency_service.usd_inr_rate()
    }

    // ── Analytics ───────────────────────────────────────────────────

    /// Aggregate a holdings snapshot into totals, gain/loss, best/worst
    /// performers, and conviction counts.
    pub fn portfolio_summary(&self, holdings: &[Holding]) -> Result<PortfolioSummary, CoreError> {
        self.summary_service.compute(holdings, &self.currency_service)
    }

    /// Break the portfolio down by category and compare current allocation
    /// against the target goals.
    pub fn allocation_report(
        &self,
        holdings: &[Holding],
        categories: &[Category],
        goals: &HashMap<Uuid, f64>,
    ) -> Result<AllocationReport, CoreError> {
        self.allocation_service.compute(holdings, categories, goals)
    }

    /// Check a set of allocation goals for invalid entries and
    /// oversubscription.
    pub fn validate_goals(&self, goals: &HashMap<Uuid, f64>) -> Result<GoalValidation, CoreError> {
        self.goal_service.validate(goals)
    }

    /// Derive a single holding's reporting-currency metrics from its
    /// native prices.
    pub fn holding_metrics(&self, holding: &Holding) -> Result<HoldingMetrics, CoreError> {
        self.metrics_service.compute(holding, &self.currency_service)
    }

    /// Derive and write back a holding's reporting-currency fields.
    pub fn refresh_holding(&self, holding: &mut Holding) -> Result<HoldingMetrics, CoreError> {
        self.metrics_service.apply(holding, &self.currency_service)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(currency_service: CurrencyService) -> Self {
        Self {
            currency_service,
            summary_service: SummaryService::new(),
            allocation_service: AllocationService::new(),
            goal_service: GoalService::new(),
            metrics_service: MetricsService::new(),
        }
    }
}

impl Default for PortfolioTracker {
    fn default() -> Self {
        Self::new()
    }
}
