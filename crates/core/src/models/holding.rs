use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Currency a holding's native prices are quoted in.
///
/// INR is the reporting currency: all aggregate totals are expressed in it.
/// Prices quoted in USD are converted via `CurrencyService`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Indian Rupee — the reporting currency
    Inr,
    /// US Dollar — foreign currency, converted at the configured rate
    Usd,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Inr => write!(f, "INR"),
            Currency::Usd => write!(f, "USD"),
        }
    }
}

/// User-assigned confidence tag on a holding. Used for grouping and
/// reporting only, never for arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConvictionLevel {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for ConvictionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvictionLevel::High => write!(f, "High"),
            ConvictionLevel::Medium => write!(f, "Medium"),
            ConvictionLevel::Low => write!(f, "Low"),
        }
    }
}

/// A single tracked investment position.
///
/// Native prices (`avg_buy_price`, `current_price`) are quoted in
/// `currency`. The reporting-currency fields (`current_value`,
/// `unrealized_pnl`, `unrealized_pnl_percent`) are supplied by the upstream
/// pricing collaborator — the aggregation services only sum them, they never
/// re-derive them. `MetricsService` is the in-crate implementation of that
/// derivation for callers that need it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Unique identifier, stable per holding
    pub id: Uuid,

    /// Human-readable name (e.g., "Reliance Industries", "Bitcoin")
    pub name: String,

    /// Ticker symbol (e.g., "RELIANCE.NS", "AAPL", "BTC-USD").
    /// Display/grouping only — never parsed by the engine.
    pub ticker: String,

    /// Free-form asset class tag (e.g., "Stock", "Crypto", "Mutual Fund").
    /// An open set; the engine carries it through without branching on it.
    pub asset_type: String,

    /// Quantity held. Fractional units are allowed (crypto-scale precision).
    pub units: f64,

    /// Currency both native prices are quoted in
    pub currency: Currency,

    /// Average purchase price per unit, in `currency`
    pub avg_buy_price: f64,

    /// Latest known price per unit, in `currency`. `0.0` means the price
    /// has not been fetched yet.
    pub current_price: f64,

    /// Current market value of the position in INR, supplied upstream
    pub current_value: f64,

    /// Unrealized profit/loss in INR, supplied upstream. Signed.
    pub unrealized_pnl: f64,

    /// Unrealized profit/loss as a percent of cost basis, supplied
    /// upstream. Signed.
    pub unrealized_pnl_percent: f64,

    /// User-assigned conviction tag
    pub conviction: ConvictionLevel,

    /// Category this holding belongs to, if assigned
    #[serde(default)]
    pub category_id: Option<Uuid>,

    /// Subcategory within the category, if assigned
    #[serde(default)]
    pub subcategory_id: Option<Uuid>,

    /// Date the position was opened (daily granularity). Carried through
    /// for display, never used in arithmetic.
    pub purchase_date: NaiveDate,

    /// Optional free-text rationale for the position
    #[serde(default)]
    pub investment_thesis: Option<String>,
}

impl Holding {
    /// Create a holding with a fresh id and no category assignment.
    /// The reporting-currency fields start at zero until the upstream
    /// pricing collaborator (or `MetricsService`) fills them in.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        ticker: impl Into<String>,
        asset_type: impl Into<String>,
        units: f64,
        currency: Currency,
        avg_buy_price: f64,
        conviction: ConvictionLevel,
        purchase_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            ticker: ticker.into(),
            asset_type: asset_type.into(),
            units,
            currency,
            avg_buy_price,
            current_price: 0.0,
            current_value: 0.0,
            unrealized_pnl: 0.0,
            unrealized_pnl_percent: 0.0,
            conviction,
            category_id: None,
            subcategory_id: None,
            purchase_date,
            investment_thesis: None,
        }
    }

    /// Assign this holding to a category (and optionally a subcategory).
    pub fn with_category(mut self, category_id: Uuid, subcategory_id: Option<Uuid>) -> Self {
        self.category_id = Some(category_id);
        self.subcategory_id = subcategory_id;
        self
    }

    /// Attach an investment thesis.
    pub fn with_thesis(mut self, thesis: impl Into<String>) -> Self {
        self.investment_thesis = Some(thesis.into());
        self
    }
}
