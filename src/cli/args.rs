//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::indicator::Variant;

/// Halo - glowing screen indicator for Wayland
#[derive(Parser, Debug)]
#[command(name = "halo")]
#[command(version)]
#[command(about = "Anchor a pulsing glow circle over a screen region")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the overlay daemon (control via: halo show/hide/destroy/status)
    Daemon,
    /// Show the indicator centered on a target region
    Show {
        /// Target region as WIDTHxHEIGHT+X+Y (e.g., 120x40+640+380)
        region: String,

        /// Color variant for the indicator
        #[arg(short = 'c', long, value_name = "COLOR")]
        color: Option<ColorArg>,
    },
    /// Hide the indicator without destroying it
    Hide,
    /// Destroy the indicator and release its resources
    Destroy,
    /// Show daemon and indicator status
    Status,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Color argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Blue,
    Gray,
    Purple,
}

impl From<ColorArg> for Variant {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Blue => Variant::Blue,
            ColorArg::Gray => Variant::Gray,
            ColorArg::Purple => Variant::Purple,
        }
    }
}

impl From<Variant> for ColorArg {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Blue => ColorArg::Blue,
            Variant::Gray => ColorArg::Gray,
            Variant::Purple => ColorArg::Purple,
        }
    }
}

/// Parsed daemon options
#[derive(Debug, Clone)]
pub struct DaemonOptions {
    pub diameter: u32,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["variant", "diameter"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
