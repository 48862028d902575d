use thiserror::Error;
use uuid::Uuid;

/// Unified error type for the entire portfolio-tracker-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input Data ──────────────────────────────────────────────────
    /// A holding record carries a malformed numeric field. The whole
    /// computation is aborted rather than coercing the field to zero,
    /// which would corrupt aggregate totals without any signal.
    #[error("Invalid holding {id} ({ticker}): {reason}")]
    InvalidHolding {
        id: Uuid,
        ticker: String,
        reason: String,
    },

    /// An allocation-goal entry is negative or non-finite.
    #[error("Invalid allocation goal for category {category_id}: {reason}")]
    InvalidGoal { category_id: Uuid, reason: String },
}
