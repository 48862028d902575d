use crate::models::holding::Currency;

/// Fallback USD→INR exchange rate, used when the caller does not supply a
/// live rate. A static approximation — callers that already hold a live
/// rate (the same one used upstream to compute `current_value`) should
/// inject it via `with_usd_inr_rate` so invested totals use a consistent
/// rate.
pub const FALLBACK_USD_INR_RATE: f64 = 83.0;

/// Converts native-currency amounts to the INR reporting currency.
///
/// INR amounts pass through unchanged; USD amounts are multiplied by the
/// configured rate. The rate is fixed for the lifetime of the service —
/// one snapshot per computation, never refreshed mid-call.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyService {
    usd_inr_rate: f64,
}

impl CurrencyService {
    /// Service using the fallback rate.
    pub fn new() -> Self {
        Self {
            usd_inr_rate: FALLBACK_USD_INR_RATE,
        }
    }

    /// Service using a caller-supplied (typically live) USD→INR rate.
    pub fn with_usd_inr_rate(rate: f64) -> Self {
        Self { usd_inr_rate: rate }
    }

    /// The USD→INR rate this service applies.
    pub fn usd_inr_rate(&self) -> f64 {
        self.usd_inr_rate
    }

    /// Convert an amount quoted in `currency` to INR.
    pub fn to_inr(&self, amount: f64, currency: Currency) -> f64 {
        match currency {
            Currency::Inr => amount,
            Currency::Usd => amount * self.usd_inr_rate,
        }
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new()
    }
}
