//! Indicator lifecycle, variants, and pulse waveform

pub mod pulse;
mod session;
mod variant;

pub use pulse::{PulseFrame, DIAMETER, PULSE_PERIOD};
pub use session::{IndicatorInstance, IndicatorSession, IndicatorState, ShowEffect};
pub use variant::{Appearance, Glow, Gradient, Rgb, Variant};
