//! Channel-backed overlay adapter
//!
//! The Wayland event loop runs on its own thread; this adapter bridges the
//! async command side to that thread over a plain mpsc channel.

use std::sync::mpsc;

use async_trait::async_trait;

use crate::application::ports::{Overlay, OverlayError, OverlaySnapshot};

/// Commands consumed by the overlay thread
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayCommand {
    /// Reconcile the on-screen surface against this desired state
    Apply(OverlaySnapshot),
    /// Exit the overlay event loop
    Shutdown,
}

/// Overlay adapter that forwards snapshots to the overlay thread.
/// Sending fails only when the overlay thread has exited.
#[derive(Clone)]
pub struct ChannelOverlay {
    tx: mpsc::Sender<OverlayCommand>,
}

impl ChannelOverlay {
    /// Create the adapter and the receiving end for the overlay thread
    pub fn new() -> (Self, mpsc::Receiver<OverlayCommand>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    /// Ask the overlay thread to exit
    pub fn shutdown(&self) {
        let _ = self.tx.send(OverlayCommand::Shutdown);
    }
}

#[async_trait]
impl Overlay for ChannelOverlay {
    async fn apply(&self, snapshot: OverlaySnapshot) -> Result<(), OverlayError> {
        self.tx
            .send(OverlayCommand::Apply(snapshot))
            .map_err(|_| OverlayError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn apply_forwards_snapshot() {
        let (overlay, rx) = ChannelOverlay::new();
        overlay.apply(OverlaySnapshot::empty()).await.unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            OverlayCommand::Apply(OverlaySnapshot::empty())
        );
    }

    #[tokio::test]
    async fn apply_fails_when_receiver_dropped() {
        let (overlay, rx) = ChannelOverlay::new();
        drop(rx);

        let err = overlay.apply(OverlaySnapshot::empty()).await.unwrap_err();
        assert!(matches!(err, OverlayError::Closed));
    }

    #[test]
    fn shutdown_sends_command() {
        let (overlay, rx) = ChannelOverlay::new();
        overlay.shutdown();
        assert_eq!(rx.try_recv().unwrap(), OverlayCommand::Shutdown);
    }
}
