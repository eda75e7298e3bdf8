//! Target region geometry

mod region;

pub use region::TargetRegion;
