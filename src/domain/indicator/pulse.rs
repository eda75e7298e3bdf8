//! Pulse waveform for the looping breathe effect

use std::time::Duration;

/// Indicator circle diameter in logical units
pub const DIAMETER: f32 = 60.0;

/// One full pulse cycle
pub const PULSE_PERIOD: Duration = Duration::from_secs(2);

const SCALE_MIN: f32 = 0.9;
const SCALE_MAX: f32 = 1.1;
const OPACITY_MAX: f32 = 0.9;
const OPACITY_MIN: f32 = 0.7;

/// Sampled pulse state at a point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseFrame {
    pub scale: f32,
    pub opacity: f32,
}

/// Sample the pulse waveform at `elapsed` since the pulse was registered.
///
/// Over each 2-second cycle the scale goes 0.9 -> 1.1 -> 0.9 while the
/// opacity goes 0.9 -> 0.7 -> 0.9, repeating forever.
pub fn sample(elapsed: Duration) -> PulseFrame {
    let period = PULSE_PERIOD.as_secs_f32();
    let phase = (elapsed.as_secs_f32() % period) / period;

    // Triangle wave: 0 at cycle edges, 1 at the midpoint
    let tri = 1.0 - (2.0 * phase - 1.0).abs();

    PulseFrame {
        scale: SCALE_MIN + (SCALE_MAX - SCALE_MIN) * tri,
        opacity: OPACITY_MAX - (OPACITY_MAX - OPACITY_MIN) * tri,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "expected {b}, got {a}");
    }

    #[test]
    fn cycle_start_is_small_and_bright() {
        let frame = sample(Duration::ZERO);
        assert_close(frame.scale, 0.9);
        assert_close(frame.opacity, 0.9);
    }

    #[test]
    fn cycle_midpoint_is_large_and_dim() {
        let frame = sample(Duration::from_secs(1));
        assert_close(frame.scale, 1.1);
        assert_close(frame.opacity, 0.7);
    }

    #[test]
    fn quarter_cycle_is_halfway() {
        let frame = sample(Duration::from_millis(500));
        assert_close(frame.scale, 1.0);
        assert_close(frame.opacity, 0.8);
    }

    #[test]
    fn cycle_wraps_at_period() {
        let start = sample(Duration::ZERO);
        let wrapped = sample(PULSE_PERIOD);
        assert_close(wrapped.scale, start.scale);
        assert_close(wrapped.opacity, start.opacity);
    }

    #[test]
    fn loop_is_infinite() {
        let first = sample(Duration::from_millis(700));
        let later = sample(Duration::from_millis(700 + 4 * 2000));
        assert_close(later.scale, first.scale);
        assert_close(later.opacity, first.opacity);
    }

    #[test]
    fn scale_and_opacity_stay_in_range() {
        for ms in (0..4000).step_by(50) {
            let frame = sample(Duration::from_millis(ms));
            assert!((0.9..=1.1).contains(&frame.scale));
            assert!((0.7..=0.9).contains(&frame.opacity));
        }
    }
}
