// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants and Display formatting
// ═══════════════════════════════════════════════════════════════════

use uuid::Uuid;

use portfolio_tracker_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_holding() {
        let id = Uuid::nil();
        let err = CoreError::InvalidHolding {
            id,
            ticker: "BTC-USD".into(),
            reason: "units is not a finite number".into(),
        };
        assert_eq!(
            err.to_string(),
            format!("Invalid holding {id} (BTC-USD): units is not a finite number")
        );
    }

    #[test]
    fn invalid_holding_empty_ticker() {
        let id = Uuid::nil();
        let err = CoreError::InvalidHolding {
            id,
            ticker: String::new(),
            reason: "current_value is negative (-1)".into(),
        };
        assert_eq!(
            err.to_string(),
            format!("Invalid holding {id} (): current_value is negative (-1)")
        );
    }

    #[test]
    fn invalid_goal() {
        let id = Uuid::nil();
        let err = CoreError::InvalidGoal {
            category_id: id,
            reason: "target percent is negative (-10)".into(),
        };
        assert_eq!(
            err.to_string(),
            format!("Invalid allocation goal for category {id}: target percent is negative (-10)")
        );
    }

    #[test]
    fn invalid_goal_empty_reason() {
        let id = Uuid::nil();
        let err = CoreError::InvalidGoal {
            category_id: id,
            reason: String::new(),
        };
        assert_eq!(
            err.to_string(),
            format!("Invalid allocation goal for category {id}: ")
        );
    }
}

// ── Trait coverage ──────────────────────────────────────────────────

mod traits {
    use super::*;

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        let err = CoreError::InvalidGoal {
            category_id: Uuid::nil(),
            reason: "x".into(),
        };
        assert_error(&err);
    }

    #[test]
    fn debug_names_the_variant() {
        let err = CoreError::InvalidGoal {
            category_id: Uuid::nil(),
            reason: "bad".into(),
        };
        let debug = format!("{err:?}");
        assert!(debug.contains("InvalidGoal"));
    }
}
