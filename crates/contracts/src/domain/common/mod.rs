//! Common types and traits for all aggregates

pub mod geo_point;

// Re-exports
pub use geo_point::GeoPoint;
