use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::holding::Holding;

/// Aggregate view of the whole portfolio, freshly computed per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Total amount invested, in INR (native cost basis × conversion rate)
    pub total_invested: f64,

    /// Total current market value in INR (sum of supplied `current_value`)
    pub total_current_value: f64,

    /// Total unrealized gain/loss in INR (sum of supplied `unrealized_pnl`)
    pub total_gain_loss: f64,

    /// Percentage return: (total_gain_loss / total_invested) × 100.
    /// Defined as 0 when nothing is invested.
    pub total_gain_loss_percent: f64,

    /// Number of holdings in the portfolio
    pub total_holdings: usize,

    /// Holding with the greatest `unrealized_pnl_percent`.
    /// `None` for an empty portfolio; ties keep the first-seen holding.
    pub best_performer: Option<Holding>,

    /// Holding with the least `unrealized_pnl_percent`.
    /// `None` for an empty portfolio; ties keep the first-seen holding.
    pub worst_performer: Option<Holding>,

    /// Count of holdings tagged High conviction
    pub high_conviction_count: usize,

    /// Count of holdings tagged Medium conviction
    pub medium_conviction_count: usize,

    /// Count of holdings tagged Low conviction
    pub low_conviction_count: usize,
}

/// Current-versus-target allocation breakdown, keyed by category name.
///
/// Key iteration order is insignificant; consumers must not rely on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    /// Total current value across ALL holdings (categorized or not), in INR
    pub total_current_value: f64,

    /// Category name → summed current value of its holdings, in INR
    pub current_value_by_category: HashMap<String, f64>,

    /// Category name → percent of total current value (0 when the total is 0)
    pub current_percent_by_category: HashMap<String, f64>,

    /// Category name → user-set target percent (0 when no goal is set)
    pub target_percent_by_category: HashMap<String, f64>,
}

/// Outcome of checking a set of allocation goals.
///
/// Oversubscription is a validation outcome, not an error: the caller
/// decides whether to block a save. The engine never clamps the targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalValidation {
    /// Sum of all target percentages
    pub sum: f64,

    /// `true` when the sum does not exceed 100
    pub is_valid: bool,
}

/// Reporting-currency metrics for a single holding, as the upstream
/// pricing collaborator derives them before aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingMetrics {
    /// units × current_price, converted to INR
    pub current_value: f64,

    /// units × avg_buy_price, converted to INR
    pub total_invested: f64,

    /// current_value − total_invested, in INR
    pub unrealized_pnl: f64,

    /// Percentage return on cost basis; 0 when nothing is invested
    pub unrealized_pnl_percent: f64,

    /// The USD→INR rate used, echoed for USD-denominated holdings only
    pub usd_inr_rate: Option<f64>,
}
