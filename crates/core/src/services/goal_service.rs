use std::collections::HashMap;

use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::analytics::GoalValidation;

/// Validates allocation-goal target percentages.
#[derive(Debug)]
pub struct GoalService;

impl GoalService {
    pub fn new() -> Self {
        Self
    }

    /// Check a goals mapping (category id → target percent).
    ///
    /// A negative or non-finite entry fails the call with
    /// `CoreError::InvalidGoal` naming the category. Otherwise the targets
    /// are summed and `is_valid` reports whether they stay within 100.
    /// Targets are never clamped or auto-corrected; acting on an
    /// oversubscribed set is the caller's decision.
    pub fn validate(&self, goals: &HashMap<Uuid, f64>) -> Result<GoalValidation, CoreError> {
        let mut sum = 0.0;
        for (&category_id, &target) in goals {
            if !target.is_finite() {
                return Err(CoreError::InvalidGoal {
                    category_id,
                    reason: "target percent is not a finite number".to_string(),
                });
            }
            if target < 0.0 {
                return Err(CoreError::InvalidGoal {
                    category_id,
                    reason: format!("target percent is negative ({target})"),
                });
            }
            sum += target;
        }

        Ok(GoalValidation {
            sum,
            is_valid: sum <= 100.0,
        })
    }
}

impl Default for GoalService {
    fn default() -> Self {
        Self::new()
    }
}
