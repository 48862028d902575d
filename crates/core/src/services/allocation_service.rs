use std::collections::HashMap;

use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::analytics::AllocationReport;
use crate::models::category::Category;
use crate::models::holding::Holding;
use crate::services::validate_holding;

/// Bucket label for holdings with no (or an unknown) category.
///
/// Uncategorized value is deliberately kept inside the totals and the
/// percent denominator so the report always accounts for the full
/// portfolio — nothing is silently dropped.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Computes current-versus-target allocation breakdowns per category.
#[derive(Debug)]
pub struct AllocationService;

impl AllocationService {
    pub fn new() -> Self {
        Self
    }

    /// Group holdings by category and compare against the target goals.
    ///
    /// Every category in `categories` appears in all three output maps,
    /// zero-valued when it holds nothing or has no goal set. Holdings
    /// whose `category_id` is unset or does not resolve land under
    /// `UNCATEGORIZED` (target 0). Goals keyed to unknown category ids
    /// are ignored. When the portfolio's total value is zero, every
    /// percent is zero.
    pub fn compute(
        &self,
        holdings: &[Holding],
        categories: &[Category],
        goals: &HashMap<Uuid, f64>,
    ) -> Result<AllocationReport, CoreError> {
        let names_by_id: HashMap<Uuid, &str> = categories
            .iter()
            .map(|c| (c.id, c.name.as_str()))
            .collect();

        // Goal lookup keyed by name, built once. Should two categories
        // share a name, the first-listed one's goal wins.
        let mut target_by_name: HashMap<&str, f64> = HashMap::with_capacity(categories.len());
        for category in categories {
            let target = goals.get(&category.id).copied().unwrap_or(0.0);
            target_by_name.entry(category.name.as_str()).or_insert(target);
        }

        // Seed every known category so empty ones still show up as 0.
        let mut value_by_category: HashMap<String, f64> = categories
            .iter()
            .map(|c| (c.name.clone(), 0.0))
            .collect();

        let mut total_current_value = 0.0;
        for holding in holdings {
            validate_holding(holding)?;

            let bucket = holding
                .category_id
                .and_then(|id| names_by_id.get(&id).copied())
                .unwrap_or(UNCATEGORIZED);

            *value_by_category.entry(bucket.to_string()).or_insert(0.0) +=
                holding.current_value;
            total_current_value += holding.current_value;
        }

        let current_percent_by_category: HashMap<String, f64> = value_by_category
            .iter()
            .map(|(name, value)| {
                let pct = if total_current_value > 0.0 {
                    (value / total_current_value) * 100.0
                } else {
                    0.0
                };
                (name.clone(), pct)
            })
            .collect();

        let target_percent_by_category: HashMap<String, f64> = value_by_category
            .keys()
            .map(|name| {
                let target = target_by_name.get(name.as_str()).copied().unwrap_or(0.0);
                (name.clone(), target)
            })
            .collect();

        Ok(AllocationReport {
            total_current_value,
            current_value_by_category: value_by_category,
            current_percent_by_category,
            target_percent_by_category,
        })
    }
}

impl Default for AllocationService {
    fn default() -> Self {
        Self::new()
    }
}
