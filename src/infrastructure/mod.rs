//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the filesystem and the overlay thread.

pub mod config;
pub mod overlay;

// Re-export adapters
pub use config::XdgConfigStore;
pub use overlay::{ChannelOverlay, OverlayCommand};
