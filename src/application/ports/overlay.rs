//! Overlay port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::indicator::IndicatorInstance;

/// Full desired on-screen state, pushed to the overlay after every
/// operation. `None` means no indicator element exists at all.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlaySnapshot {
    pub indicator: Option<IndicatorInstance>,
}

impl OverlaySnapshot {
    pub const fn empty() -> Self {
        Self { indicator: None }
    }
}

/// Errors from overlay adapters
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("Overlay is no longer running")]
    Closed,
}

/// Port for the on-screen overlay surface.
///
/// The adapter owns the presentation resources (surface, buffers, pulse
/// clock) and reconciles them against each snapshot it receives.
#[async_trait]
pub trait Overlay: Send + Sync {
    /// Apply a new desired state to the screen.
    async fn apply(&self, snapshot: OverlaySnapshot) -> Result<(), OverlayError>;
}
