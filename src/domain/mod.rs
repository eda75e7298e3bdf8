//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod indicator;
pub mod target;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use indicator::{IndicatorSession, IndicatorState, Variant};
pub use target::TargetRegion;
