//! Color variants and their fixed appearance table

use std::fmt;

/// Named color scheme for the indicator.
/// Unrecognized names deliberately fall back to `Blue` rather than failing;
/// the indicator is a cosmetic affordance and show() is a total operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Blue,
    Gray,
    Purple,
}

impl Variant {
    /// Parse a variant name, case-insensitively.
    /// Anything unrecognized is treated as `Blue`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "gray" | "grey" => Self::Gray,
            "purple" => Self::Purple,
            _ => Self::Blue,
        }
    }

    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Gray => "gray",
            Self::Purple => "purple",
        }
    }

    /// Fixed (gradient, glow) pair for this variant
    pub const fn appearance(&self) -> Appearance {
        match self {
            Self::Blue => Appearance {
                gradient: Gradient {
                    center: Rgb::new(93, 173, 226),
                    edge: Rgb::new(41, 128, 185),
                },
                glow: Glow::medium(Rgb::new(52, 152, 219)),
            },
            Self::Gray => Appearance {
                gradient: Gradient {
                    center: Rgb::new(189, 195, 199),
                    edge: Rgb::new(127, 140, 141),
                },
                glow: Glow::medium(Rgb::new(149, 165, 166)),
            },
            Self::Purple => Appearance {
                gradient: Gradient {
                    center: Rgb::new(187, 143, 206),
                    edge: Rgb::new(142, 68, 173),
                },
                glow: Glow::strong(Rgb::new(155, 89, 182)),
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Plain RGB color, render-backend agnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Radial gradient, bright center fading to a saturated edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub center: Rgb,
    pub edge: Rgb,
}

/// Double-shadow glow around the circle: a tight inner halo and a wide
/// diffuse outer halo, both in the variant's color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Rgb,
    pub inner_spread: f32,
    pub inner_alpha: f32,
    pub outer_spread: f32,
    pub outer_alpha: f32,
}

impl Glow {
    const fn medium(color: Rgb) -> Self {
        Self {
            color,
            inner_spread: 6.0,
            inner_alpha: 0.55,
            outer_spread: 14.0,
            outer_alpha: 0.28,
        }
    }

    const fn strong(color: Rgb) -> Self {
        Self {
            color,
            inner_spread: 8.0,
            inner_alpha: 0.75,
            outer_spread: 18.0,
            outer_alpha: 0.40,
        }
    }
}

/// Combined visual appearance for a variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub gradient: Gradient,
    pub glow: Glow,
}
