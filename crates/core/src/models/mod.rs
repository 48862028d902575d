pub mod analytics;
pub mod category;
pub mod holding;
