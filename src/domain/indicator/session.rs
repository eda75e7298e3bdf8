//! Indicator session entity

use std::fmt;

use crate::domain::target::TargetRegion;

use super::Variant;

/// Observable indicator lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndicatorState {
    #[default]
    Absent,
    Visible,
    Hidden,
}

impl IndicatorState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Visible => "visible",
            Self::Hidden => "hidden",
        }
    }
}

impl fmt::Display for IndicatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a `show` call did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowEffect {
    /// First show: instance and pulse registration were created
    Created,
    /// Instance already existed and was made visible and refreshed
    Updated,
}

/// The single live indicator.
///
/// `glow` is fixed when the instance is created; a later `show` with a
/// different variant refreshes `gradient` (and position) but leaves the
/// glow untouched. That asymmetry is part of the behavioral contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorInstance {
    pub region: TargetRegion,
    pub gradient: Variant,
    pub glow: Variant,
    pub visible: bool,
}

/// Indicator session entity.
/// Owns the at-most-one indicator instance and the shared pulse
/// registration. Every operation is total: hide/destroy on an absent
/// indicator are defined no-ops, and show is an idempotent create.
#[derive(Debug, Default)]
pub struct IndicatorSession {
    instance: Option<IndicatorInstance>,
    pulse_registered: bool,
}

impl IndicatorSession {
    /// Create a new session with no indicator
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the indicator anchored to `region`.
    ///
    /// Creates the instance (and registers the shared pulse, once) on
    /// first call. On an existing instance it only makes it visible,
    /// refreshes the gradient to `variant`, and repositions.
    pub fn show(&mut self, region: TargetRegion, variant: Variant) -> ShowEffect {
        match &mut self.instance {
            None => {
                // Pulse registration is shared and guarded by presence
                if !self.pulse_registered {
                    self.pulse_registered = true;
                }
                self.instance = Some(IndicatorInstance {
                    region,
                    gradient: variant,
                    glow: variant,
                    visible: true,
                });
                ShowEffect::Created
            }
            Some(instance) => {
                instance.visible = true;
                instance.gradient = variant;
                instance.region = region;
                ShowEffect::Updated
            }
        }
    }

    /// Hide the indicator without tearing anything down. No-op when absent.
    pub fn hide(&mut self) {
        if let Some(instance) = &mut self.instance {
            instance.visible = false;
        }
    }

    /// Discard the indicator and the pulse registration. No-op when absent.
    pub fn destroy(&mut self) {
        self.instance = None;
        self.pulse_registered = false;
    }

    /// Current lifecycle state
    pub fn state(&self) -> IndicatorState {
        match &self.instance {
            None => IndicatorState::Absent,
            Some(i) if i.visible => IndicatorState::Visible,
            Some(_) => IndicatorState::Hidden,
        }
    }

    /// The live instance, if any
    pub fn instance(&self) -> Option<&IndicatorInstance> {
        self.instance.as_ref()
    }

    /// Whether the shared pulse registration exists
    pub fn is_pulse_registered(&self) -> bool {
        self.pulse_registered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> TargetRegion {
        TargetRegion::new(100, 200, 60, 40)
    }

    #[test]
    fn new_session_is_absent() {
        let session = IndicatorSession::new();
        assert_eq!(session.state(), IndicatorState::Absent);
        assert!(session.instance().is_none());
        assert!(!session.is_pulse_registered());
    }

    #[test]
    fn show_creates_single_instance() {
        let mut session = IndicatorSession::new();
        assert_eq!(session.show(region(), Variant::Blue), ShowEffect::Created);
        assert_eq!(session.state(), IndicatorState::Visible);
        assert!(session.is_pulse_registered());
    }

    #[test]
    fn second_show_is_idempotent_create() {
        let mut session = IndicatorSession::new();
        session.show(region(), Variant::Blue);
        assert_eq!(session.show(region(), Variant::Blue), ShowEffect::Updated);
        assert_eq!(session.state(), IndicatorState::Visible);
    }

    #[test]
    fn show_positions_at_target() {
        let mut session = IndicatorSession::new();
        session.show(region(), Variant::Blue);
        let instance = session.instance().unwrap();
        assert_eq!(instance.region.center(), (130.0, 220.0));
    }

    #[test]
    fn show_recomputes_position_on_existing_instance() {
        let mut session = IndicatorSession::new();
        session.show(region(), Variant::Blue);

        let moved = TargetRegion::new(500, 500, 80, 20);
        session.show(moved, Variant::Blue);

        let instance = session.instance().unwrap();
        assert_eq!(instance.region.center(), (540.0, 510.0));
    }

    #[test]
    fn reshow_refreshes_gradient_but_not_glow() {
        let mut session = IndicatorSession::new();
        session.show(region(), Variant::Blue);
        session.show(region(), Variant::Purple);

        let instance = session.instance().unwrap();
        assert_eq!(instance.gradient, Variant::Purple);
        assert_eq!(instance.glow, Variant::Blue);
    }

    #[test]
    fn hide_keeps_instance() {
        let mut session = IndicatorSession::new();
        session.show(region(), Variant::Blue);
        session.hide();

        assert_eq!(session.state(), IndicatorState::Hidden);
        assert!(session.instance().is_some());
        assert!(session.is_pulse_registered());
    }

    #[test]
    fn hide_when_absent_is_noop() {
        let mut session = IndicatorSession::new();
        session.hide();
        assert_eq!(session.state(), IndicatorState::Absent);
    }

    #[test]
    fn show_after_hide_restores_visibility_without_recreating() {
        let mut session = IndicatorSession::new();
        session.show(region(), Variant::Blue);
        session.hide();

        assert_eq!(session.show(region(), Variant::Blue), ShowEffect::Updated);
        assert_eq!(session.state(), IndicatorState::Visible);
    }

    #[test]
    fn destroy_clears_everything() {
        let mut session = IndicatorSession::new();
        session.show(region(), Variant::Gray);
        session.destroy();

        assert_eq!(session.state(), IndicatorState::Absent);
        assert!(session.instance().is_none());
        assert!(!session.is_pulse_registered());
    }

    #[test]
    fn destroy_when_absent_is_noop() {
        let mut session = IndicatorSession::new();
        session.destroy();
        assert_eq!(session.state(), IndicatorState::Absent);
    }

    #[test]
    fn show_after_destroy_recreates_from_scratch() {
        let mut session = IndicatorSession::new();
        session.show(region(), Variant::Blue);
        session.show(region(), Variant::Purple);
        session.destroy();

        assert_eq!(session.show(region(), Variant::Purple), ShowEffect::Created);
        let instance = session.instance().unwrap();
        // Fresh create sets both gradient and glow
        assert_eq!(instance.gradient, Variant::Purple);
        assert_eq!(instance.glow, Variant::Purple);
        assert!(session.is_pulse_registered());
    }

    #[test]
    fn state_display() {
        assert_eq!(IndicatorState::Absent.to_string(), "absent");
        assert_eq!(IndicatorState::Visible.to_string(), "visible");
        assert_eq!(IndicatorState::Hidden.to_string(), "hidden");
    }
}
