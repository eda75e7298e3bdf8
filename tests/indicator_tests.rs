//! Indicator lifecycle integration tests
//!
//! Drives the highlight use case over the real channel adapter and
//! asserts the command stream the overlay thread would consume.

use std::time::Duration;

use halo::application::HighlightUseCase;
use halo::domain::indicator::{pulse, IndicatorState, Variant, PULSE_PERIOD};
use halo::domain::target::TargetRegion;
use halo::infrastructure::{ChannelOverlay, OverlayCommand};

fn region() -> TargetRegion {
    "120x40+640+380".parse().expect("valid geometry")
}

#[tokio::test]
async fn full_lifecycle_command_stream() {
    let (overlay, rx) = ChannelOverlay::new();
    let use_case = HighlightUseCase::new(overlay.clone());

    use_case.show(region(), Variant::Blue).await.unwrap();
    use_case.hide().await.unwrap();
    use_case.show(region(), Variant::Purple).await.unwrap();
    use_case.destroy().await.unwrap();
    overlay.shutdown();

    let commands: Vec<_> = rx.try_iter().collect();
    assert_eq!(commands.len(), 5);

    // show: visible with blue gradient and blue glow
    let OverlayCommand::Apply(snapshot) = commands[0] else {
        panic!("expected apply");
    };
    let indicator = snapshot.indicator.unwrap();
    assert!(indicator.visible);
    assert_eq!(indicator.gradient, Variant::Blue);
    assert_eq!(indicator.glow, Variant::Blue);

    // hide: instance kept, not visible
    let OverlayCommand::Apply(snapshot) = commands[1] else {
        panic!("expected apply");
    };
    assert!(!snapshot.indicator.unwrap().visible);

    // re-show with a new variant: gradient refreshed, glow still blue
    let OverlayCommand::Apply(snapshot) = commands[2] else {
        panic!("expected apply");
    };
    let indicator = snapshot.indicator.unwrap();
    assert!(indicator.visible);
    assert_eq!(indicator.gradient, Variant::Purple);
    assert_eq!(indicator.glow, Variant::Blue);

    // destroy: nothing on screen
    let OverlayCommand::Apply(snapshot) = commands[3] else {
        panic!("expected apply");
    };
    assert!(snapshot.indicator.is_none());

    assert_eq!(commands[4], OverlayCommand::Shutdown);
}

#[tokio::test]
async fn state_reflects_every_operation() {
    let (overlay, _rx) = ChannelOverlay::new();
    let use_case = HighlightUseCase::new(overlay);

    assert_eq!(use_case.state().await, IndicatorState::Absent);

    use_case.show(region(), Variant::Gray).await.unwrap();
    assert_eq!(use_case.state().await, IndicatorState::Visible);

    use_case.hide().await.unwrap();
    assert_eq!(use_case.state().await, IndicatorState::Hidden);

    use_case.hide().await.unwrap();
    assert_eq!(use_case.state().await, IndicatorState::Hidden);

    use_case.destroy().await.unwrap();
    assert_eq!(use_case.state().await, IndicatorState::Absent);

    use_case.destroy().await.unwrap();
    assert_eq!(use_case.state().await, IndicatorState::Absent);
}

#[tokio::test]
async fn show_repositions_to_new_target() {
    let (overlay, rx) = ChannelOverlay::new();
    let use_case = HighlightUseCase::new(overlay);

    use_case.show(region(), Variant::Blue).await.unwrap();
    let moved: TargetRegion = "80x20+10+30".parse().unwrap();
    use_case.show(moved, Variant::Blue).await.unwrap();

    let commands: Vec<_> = rx.try_iter().collect();
    let OverlayCommand::Apply(snapshot) = commands[1] else {
        panic!("expected apply");
    };
    assert_eq!(snapshot.indicator.unwrap().region.center(), (50.0, 40.0));
}

#[test]
fn pulse_waveform_over_one_loop() {
    // Scale runs 0.9 -> 1.1 -> 0.9 while opacity runs 0.9 -> 0.7 -> 0.9
    let start = pulse::sample(Duration::ZERO);
    assert!((start.scale - 0.9).abs() < 1e-6);
    assert!((start.opacity - 0.9).abs() < 1e-6);

    let mid = pulse::sample(PULSE_PERIOD / 2);
    assert!((mid.scale - 1.1).abs() < 1e-6);
    assert!((mid.opacity - 0.7).abs() < 1e-6);

    let wrapped = pulse::sample(PULSE_PERIOD);
    assert!((wrapped.scale - 0.9).abs() < 1e-6);
    assert!((wrapped.opacity - 0.9).abs() < 1e-6);
}
