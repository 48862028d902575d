use crate::errors::CoreError;
use crate::models::analytics::HoldingMetrics;
use crate::models::holding::{Currency, Holding};
use crate::services::currency_service::CurrencyService;
use crate::services::validate_holding;

/// Derives the reporting-currency metrics for a single holding from its
/// native-currency prices.
///
/// This is the same derivation the upstream pricing collaborator performs
/// to fill a holding's `current_value` / `unrealized_pnl` fields before
/// aggregation. Exposed so callers can refresh those fields after a price
/// or rate change without a round trip.
#[derive(Debug)]
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        Self
    }

    /// Compute INR metrics from `units`, the native prices, and the
    /// configured conversion rate.
    ///
    /// A `current_price` of 0 ("price pending") simply produces a zero
    /// current value; the zero-invested guard keeps the percent at 0
    /// instead of dividing by zero. `usd_inr_rate` is echoed only for
    /// USD-denominated holdings.
    pub fn compute(
        &self,
        holding: &Holding,
        currency_service: &CurrencyService,
    ) -> Result<HoldingMetrics, CoreError> {
        validate_holding(holding)?;

        let value_native = holding.units * holding.current_price;
        let invested_native = holding.units * holding.avg_buy_price;

        let current_value = currency_service.to_inr(value_native, holding.currency);
        let total_invested = currency_service.to_inr(invested_native, holding.currency);

        let unrealized_pnl = current_value - total_invested;
        let unrealized_pnl_percent = if total_invested > 0.0 {
            (unrealized_pnl / total_invested) * 100.0
        } else {
            0.0
        };

        Ok(HoldingMetrics {
            current_value,
            total_invested,
            unrealized_pnl,
            unrealized_pnl_percent,
            usd_inr_rate: match holding.currency {
                Currency::Usd => Some(currency_service.usd_inr_rate()),
                Currency::Inr => None,
            },
        })
    }

    /// Compute metrics and write them back onto the holding, returning the
    /// metrics that were applied.
    pub fn apply(
        &self,
        holding: &mut Holding,
        currency_service: &CurrencyService,
    ) -> Result<HoldingMetrics, CoreError> {
        let metrics = self.compute(holding, currency_service)?;
        holding.current_value = metrics.current_value;
        holding.unrealized_pnl = metrics.unrealized_pnl;
        holding.unrealized_pnl_percent = metrics.unrealized_pnl_percent;
        Ok(metrics)
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}
