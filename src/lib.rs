//! Halo - pulsing glow indicator for Wayland desktops
//!
//! Anchors a single glowing circle with a white star glyph to the center of
//! a target screen region. The circle pulses on a two second loop and comes
//! in blue, gray, and purple variants.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Indicator session, color variants, pulse animation, target geometry
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (config store, overlay channel)
//! - **CLI**: Command-line interface, argument parsing, daemon and IPC
//! - **GUI**: The overlay surface itself (Linux only, uses Wayland layer-shell)

pub mod application;
pub mod cli;
pub mod domain;
#[cfg(target_os = "linux")]
pub mod gui;
pub mod infrastructure;
