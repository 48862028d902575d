pub mod allocation_service;
pub mod currency_service;
pub mod goal_service;
pub mod metrics_service;
pub mod summary_service;

use crate::errors::CoreError;
use crate::models::holding::Holding;

/// Reject a holding whose numeric fields would corrupt aggregate totals.
///
/// Units and native prices must be finite and non-negative; the supplied
/// INR fields must be finite (`unrealized_pnl` and its percent may be
/// negative, `current_value` may not). One bad record fails the whole
/// computation — the caller decides whether to fix and retry.
pub(crate) fn validate_holding(holding: &Holding) -> Result<(), CoreError> {
    let invalid = |reason: String| CoreError::InvalidHolding {
        id: holding.id,
        ticker: holding.ticker.clone(),
        reason,
    };

    let non_negative = [
        ("units", holding.units),
        ("avg_buy_price", holding.avg_buy_price),
        ("current_price", holding.current_price),
        ("current_value", holding.current_value),
    ];
    for (field, value) in non_negative {
        if !value.is_finite() {
            return Err(invalid(format!("{field} is not a finite number")));
        }
        if value < 0.0 {
            return Err(invalid(format!("{field} is negative ({value})")));
        }
    }

    for (field, value) in [
        ("unrealized_pnl", holding.unrealized_pnl),
        ("unrealized_pnl_percent", holding.unrealized_pnl_percent),
    ] {
        if !value.is_finite() {
            return Err(invalid(format!("{field} is not a finite number")));
        }
    }

    Ok(())
}
