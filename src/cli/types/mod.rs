//! Type-safe wrappers for Blackout Rugby data.

pub mod ids;

pub use ids::TeamId;
