//! Port interfaces (traits) for external systems

mod config;
mod overlay;

pub use config::ConfigStore;
pub use overlay::{Overlay, OverlayError, OverlaySnapshot};
