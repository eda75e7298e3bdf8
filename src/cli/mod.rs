//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! and the daemon runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod daemon_app;
pub mod daemon_cmd;
pub mod ipc;
pub mod pid_file;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, ColorArg, Commands, ConfigAction, DaemonOptions};
pub use daemon_app::run_daemon;
pub use daemon_cmd::{handle_daemon_command, DaemonCommand};
pub use presenter::Presenter;
