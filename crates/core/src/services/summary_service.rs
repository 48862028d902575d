use crate::errors::CoreError;
use crate::models::analytics::PortfolioSummary;
use crate::models::holding::{ConvictionLevel, Holding};
use crate::services::currency_service::CurrencyService;
use crate::services::validate_holding;

/// Computes portfolio-level aggregates: invested/current totals, gain/loss,
/// best and worst performers, conviction counts.
///
/// Pure aggregation — the supplied INR fields (`current_value`,
/// `unrealized_pnl`) are trusted, never re-derived. Only the invested
/// amount is converted here, since cost basis is stored in native currency.
#[derive(Debug)]
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate a snapshot of holdings into a `PortfolioSummary`.
    ///
    /// Input order does not affect the totals; it only decides which
    /// holding wins a best/worst tie (the first one seen). An empty slice
    /// yields zeroed totals and no performers.
    ///
    /// Fails with `CoreError::InvalidHolding` on the first malformed
    /// record; no partial result is produced.
    pub fn compute(
        &self,
        holdings: &[Holding],
        currency_service: &CurrencyService,
    ) -> Result<PortfolioSummary, CoreError> {
        let mut total_invested = 0.0;
        let mut total_current_value = 0.0;
        let mut total_gain_loss = 0.0;

        let mut best: Option<&Holding> = None;
        let mut worst: Option<&Holding> = None;

        let mut high = 0;
        let mut medium = 0;
        let mut low = 0;

        for holding in holdings {
            validate_holding(holding)?;

            let invested_native = holding.units * holding.avg_buy_price;
            total_invested += currency_service.to_inr(invested_native, holding.currency);
            total_current_value += holding.current_value;
            total_gain_loss += holding.unrealized_pnl;

            // Strict comparisons: ties keep the first-seen holding.
            match best {
                Some(b) if holding.unrealized_pnl_percent <= b.unrealized_pnl_percent => {}
                _ => best = Some(holding),
            }
            match worst {
                Some(w) if holding.unrealized_pnl_percent >= w.unrealized_pnl_percent => {}
                _ => worst = Some(holding),
            }

            match holding.conviction {
                ConvictionLevel::High => high += 1,
                ConvictionLevel::Medium => medium += 1,
                ConvictionLevel::Low => low += 1,
            }
        }

        let total_gain_loss_percent = if total_invested > 0.0 {
            (total_gain_loss / total_invested) * 100.0
        } else {
            0.0
        };

        Ok(PortfolioSummary {
            total_invested,
            total_current_value,
            total_gain_loss,
            total_gain_loss_percent,
            total_holdings: holdings.len(),
            best_performer: best.cloned(),
            worst_performer: worst.cloned(),
            high_conviction_count: high,
            medium_conviction_count: medium,
            low_conviction_count: low,
        })
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
