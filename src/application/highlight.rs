//! Highlight use case: drives the indicator session and the overlay port

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::indicator::{IndicatorSession, IndicatorState, ShowEffect, Variant};
use crate::domain::target::TargetRegion;

use super::ports::{Overlay, OverlayError, OverlaySnapshot};

/// Highlight use case.
///
/// Owns the indicator session and pushes the resulting on-screen state to
/// the overlay after every operation. The session guarantees the
/// at-most-one-indicator invariant; this type adds the port plumbing.
pub struct HighlightUseCase<O>
where
    O: Overlay,
{
    overlay: O,
    session: Arc<Mutex<IndicatorSession>>,
}

impl<O> HighlightUseCase<O>
where
    O: Overlay,
{
    /// Create a new use case instance with an empty session
    pub fn new(overlay: O) -> Self {
        Self {
            overlay,
            session: Arc::new(Mutex::new(IndicatorSession::new())),
        }
    }

    /// Show the indicator anchored to `region`, creating it on first call
    pub async fn show(
        &self,
        region: TargetRegion,
        variant: Variant,
    ) -> Result<ShowEffect, OverlayError> {
        let snapshot;
        let effect;
        {
            let mut session = self.session.lock().await;
            effect = session.show(region, variant);
            snapshot = OverlaySnapshot {
                indicator: session.instance().copied(),
            };
        }
        self.overlay.apply(snapshot).await?;
        Ok(effect)
    }

    /// Hide the indicator, keeping it alive for a later show
    pub async fn hide(&self) -> Result<(), OverlayError> {
        let snapshot = {
            let mut session = self.session.lock().await;
            session.hide();
            OverlaySnapshot {
                indicator: session.instance().copied(),
            }
        };
        self.overlay.apply(snapshot).await
    }

    /// Tear the indicator down completely
    pub async fn destroy(&self) -> Result<(), OverlayError> {
        let snapshot = {
            let mut session = self.session.lock().await;
            session.destroy();
            OverlaySnapshot {
                indicator: session.instance().copied(),
            }
        };
        self.overlay.apply(snapshot).await
    }

    /// Current indicator state
    pub async fn state(&self) -> IndicatorState {
        self.session.lock().await.state()
    }
}
