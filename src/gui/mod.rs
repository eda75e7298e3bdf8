//! GUI module for the indicator overlay (Linux only)
//!
//! Uses Wayland layer-shell for proper overlay behavior on Linux.

pub mod layer_shell;
pub mod render;

pub use layer_shell::run_overlay;
