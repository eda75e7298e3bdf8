//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::indicator::{Variant, DIAMETER};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub variant: Option<String>,
    pub diameter: Option<u32>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            variant: Some("blue".to_string()),
            diameter: Some(DIAMETER as u32),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            variant: other.variant.or(self.variant),
            diameter: other.diameter.or(self.diameter),
        }
    }

    /// Get the default variant, falling back to blue when unset or unknown
    pub fn variant_or_default(&self) -> Variant {
        self.variant
            .as_deref()
            .map(Variant::from_name)
            .unwrap_or_default()
    }

    /// Get the indicator diameter, or the fixed default if not set
    pub fn diameter_or_default(&self) -> u32 {
        self.diameter.unwrap_or(DIAMETER as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.variant, Some("blue".to_string()));
        assert_eq!(config.diameter, Some(60));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.variant.is_none());
        assert!(config.diameter.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            variant: Some("gray".to_string()),
            diameter: Some(48),
        };
        let other = AppConfig {
            variant: Some("purple".to_string()),
            diameter: None, // Should not override
        };

        let merged = base.merge(other);
        assert_eq!(merged.variant, Some("purple".to_string()));
        assert_eq!(merged.diameter, Some(48)); // Kept from base
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            variant: Some("gray".to_string()),
            diameter: Some(72),
        };
        let merged = base.merge(AppConfig::empty());
        assert_eq!(merged.variant, Some("gray".to_string()));
        assert_eq!(merged.diameter, Some(72));
    }

    #[test]
    fn variant_or_default_parses() {
        let config = AppConfig {
            variant: Some("purple".to_string()),
            ..Default::default()
        };
        assert_eq!(config.variant_or_default(), Variant::Purple);
    }

    #[test]
    fn variant_or_default_falls_back_on_unknown() {
        let config = AppConfig {
            variant: Some("chartreuse".to_string()),
            ..Default::default()
        };
        assert_eq!(config.variant_or_default(), Variant::Blue);
    }

    #[test]
    fn variant_or_default_falls_back_on_none() {
        assert_eq!(AppConfig::empty().variant_or_default(), Variant::Blue);
    }

    #[test]
    fn diameter_or_default() {
        assert_eq!(AppConfig::empty().diameter_or_default(), 60);
        let config = AppConfig {
            diameter: Some(96),
            ..Default::default()
        };
        assert_eq!(config.diameter_or_default(), 96);
    }
}
