// Service layer: owns the loaded dataset and answers aggregate queries on it.
pub mod listing_service;
pub mod report;

pub use listing_service::{ListingService, LoadResponse};
pub use report::Report;
