use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A subdivision within a category (e.g., "Large Cap" under "IND Equity").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: Uuid,
    pub name: String,
}

/// A top-level allocation category (e.g., "IND Equity", "Crypto", "Debt").
///
/// Holdings reference categories by id; allocation goals are keyed by
/// category id as well. The ordering of `subcategories` is preserved for
/// display but carries no meaning for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            subcategories: Vec::new(),
        }
    }

    /// Append a subcategory, returning its id.
    pub fn add_subcategory(&mut self, name: impl Into<String>) -> Uuid {
        let sub = Subcategory {
            id: Uuid::new_v4(),
            name: name.into(),
        };
        let id = sub.id;
        self.subcategories.push(sub);
        id
    }
}
