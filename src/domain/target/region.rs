//! Target region value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::RegionParseError;

/// Value object for the screen region the indicator anchors to.
/// Coordinates are in logical screen units relative to the output's
/// top-left corner. The region is borrowed information: the controller
/// never owns or mutates the on-screen element it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl TargetRegion {
    /// Create a region from position and size
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Geometric center of the region (left + width/2, top + height/2).
    /// This is where the indicator's own center is placed.
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }
}

impl FromStr for TargetRegion {
    type Err = RegionParseError;

    /// Parse an X11-style geometry string: "WIDTHxHEIGHT+X+Y".
    /// Offsets may be negative (e.g., "120x40+-10+20").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || RegionParseError {
            input: s.to_string(),
        };

        let input = s.trim();
        let (size, offsets) = input.split_once('+').ok_or_else(err)?;
        let (w, h) = size.split_once('x').ok_or_else(err)?;
        let (x, y) = offsets.split_once('+').ok_or_else(err)?;

        let width: u32 = w.parse().map_err(|_| err())?;
        let height: u32 = h.parse().map_err(|_| err())?;
        let x: i32 = x.parse().map_err(|_| err())?;
        let y: i32 = y.parse().map_err(|_| err())?;

        if width == 0 || height == 0 {
            return Err(err());
        }

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }
}

impl fmt::Display for TargetRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_geometry() {
        let region: TargetRegion = "120x40+640+380".parse().unwrap();
        assert_eq!(region, TargetRegion::new(640, 380, 120, 40));
    }

    #[test]
    fn parses_negative_offsets() {
        let region: TargetRegion = "60x60+-30+-15".parse().unwrap();
        assert_eq!(region.x, -30);
        assert_eq!(region.y, -15);
    }

    #[test]
    fn parses_with_whitespace() {
        let region: TargetRegion = "  100x50+10+20  ".parse().unwrap();
        assert_eq!(region.width, 100);
    }

    #[test]
    fn rejects_zero_size() {
        assert!("0x40+10+10".parse::<TargetRegion>().is_err());
        assert!("40x0+10+10".parse::<TargetRegion>().is_err());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("".parse::<TargetRegion>().is_err());
        assert!("120x40".parse::<TargetRegion>().is_err());
        assert!("120+40+10".parse::<TargetRegion>().is_err());
        assert!("axb+c+d".parse::<TargetRegion>().is_err());
    }

    #[test]
    fn center_is_geometric_center() {
        let region = TargetRegion::new(100, 200, 60, 40);
        assert_eq!(region.center(), (130.0, 220.0));
    }

    #[test]
    fn center_with_odd_size() {
        let region = TargetRegion::new(0, 0, 15, 9);
        assert_eq!(region.center(), (7.5, 4.5));
    }

    #[test]
    fn display_round_trips() {
        let region = TargetRegion::new(640, 380, 120, 40);
        let parsed: TargetRegion = region.to_string().parse().unwrap();
        assert_eq!(region, parsed);
    }
}
