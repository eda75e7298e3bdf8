//! Overlay adapters

mod channel;

pub use channel::{ChannelOverlay, OverlayCommand};
