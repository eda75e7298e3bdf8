//! Unix Domain Socket communication for daemon control

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::mpsc;

use super::{IpcClient, IpcServer, StateFn};
use crate::cli::signals::DaemonSignal;
use crate::domain::indicator::{IndicatorState, Variant};
use crate::domain::target::TargetRegion;

/// Socket path resolver
#[derive(Debug, Clone)]
pub struct SocketPath {
    path: PathBuf,
}

impl SocketPath {
    /// Create socket path, preferring XDG_RUNTIME_DIR
    pub fn new() -> Self {
        let path = std::env::var("XDG_RUNTIME_DIR")
            .map(|dir| PathBuf::from(dir).join("halo.sock"))
            .unwrap_or_else(|_| std::env::temp_dir().join("halo.sock"));
        Self { path }
    }

    /// Get the socket path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if socket file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove socket file if it exists
    pub fn cleanup(&self) -> io::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl Default for SocketPath {
    fn default() -> Self {
        Self::new()
    }
}

/// Unix Domain Socket server for daemon commands
pub struct UnixSocketServer {
    socket_path: SocketPath,
    listener: Option<UnixListener>,
}

impl UnixSocketServer {
    /// Create a new socket server
    pub fn new(socket_path: SocketPath) -> Self {
        Self {
            socket_path,
            listener: None,
        }
    }
}

impl Drop for UnixSocketServer {
    fn drop(&mut self) {
        self.cleanup();
    }
}

#[async_trait]
impl IpcServer for UnixSocketServer {
    fn bind(&mut self) -> io::Result<()> {
        // Remove stale socket file if it exists
        self.socket_path.cleanup()?;

        // Bind listener
        let listener = UnixListener::bind(self.socket_path.path())?;
        self.listener = Some(listener);
        Ok(())
    }

    fn path(&self) -> String {
        self.socket_path.path().to_string_lossy().to_string()
    }

    async fn run(&self, tx: mpsc::Sender<DaemonSignal>, state_fn: StateFn) -> io::Result<()> {
        let listener = self
            .listener
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "Socket not bound"))?;

        loop {
            match listener.accept().await {
                Ok((stream, _addr)) => {
                    let tx = tx.clone();
                    let state = state_fn();
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, tx, state).await {
                            eprintln!("Socket connection error: {}", e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("Socket accept error: {}", e);
                }
            }
        }
    }

    fn cleanup(&self) {
        let _ = self.socket_path.cleanup();
    }
}

/// Handle a single client connection
async fn handle_connection(
    stream: UnixStream,
    tx: mpsc::Sender<DaemonSignal>,
    current_state: IndicatorState,
) -> io::Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    // Read command
    reader.read_line(&mut line).await?;

    let response = match parse_command(line.trim()) {
        Ok(ParsedCommand::Signal(signal)) => {
            let _ = tx.send(signal).await;
            "ok\n".to_string()
        }
        Ok(ParsedCommand::Status) => format!("{}\n", current_state.as_str()),
        Err(message) => format!("error: {}\n", message),
    };

    writer.write_all(response.as_bytes()).await?;
    writer.flush().await?;

    Ok(())
}

/// A command decoded from the wire
#[derive(Debug, PartialEq, Eq)]
enum ParsedCommand {
    Signal(DaemonSignal),
    Status,
}

/// Parse a single protocol line into a command
fn parse_command(line: &str) -> Result<ParsedCommand, String> {
    let mut parts = line.split_whitespace();

    match parts.next() {
        Some("show") => {
            let geometry = parts.next().ok_or_else(|| {
                "show requires a region (e.g., show 120x40+640+380)".to_string()
            })?;
            let region: TargetRegion = geometry.parse().map_err(|e| format!("{}", e))?;
            // Unknown variant names fall back to blue
            let variant = Variant::from_name(parts.next().unwrap_or(""));
            Ok(ParsedCommand::Signal(DaemonSignal::Show { region, variant }))
        }
        Some("hide") => Ok(ParsedCommand::Signal(DaemonSignal::Hide)),
        Some("destroy") => Ok(ParsedCommand::Signal(DaemonSignal::Destroy)),
        Some("status") => Ok(ParsedCommand::Status),
        Some(other) => Err(format!("unknown command '{}'", other)),
        None => Err("empty command".to_string()),
    }
}

/// Unix Domain Socket client for sending commands to daemon
pub struct UnixSocketClient {
    socket_path: SocketPath,
}

impl UnixSocketClient {
    /// Create a new socket client
    pub fn new(socket_path: SocketPath) -> Self {
        Self { socket_path }
    }
}

#[async_trait]
impl IpcClient for UnixSocketClient {
    fn is_daemon_running(&self) -> bool {
        self.socket_path.exists()
    }

    async fn send_command(&self, cmd: &str) -> io::Result<String> {
        let stream = UnixStream::connect(self.socket_path.path()).await?;
        let (reader, mut writer) = stream.into_split();

        // Send command
        writer.write_all(format!("{}\n", cmd).as_bytes()).await?;
        writer.flush().await?;

        // Read response
        let mut reader = BufReader::new(reader);
        let mut response = String::new();
        reader.read_line(&mut response).await?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_path_uses_xdg_runtime_dir() {
        let path = std::env::var("XDG_RUNTIME_DIR")
            .map(|dir| PathBuf::from(dir).join("halo.sock"))
            .unwrap_or_else(|_| std::env::temp_dir().join("halo.sock"));

        let socket_path = SocketPath::new();
        assert_eq!(socket_path.path(), path.as_path());
    }

    #[test]
    fn parse_show_with_variant() {
        let cmd = parse_command("show 120x40+640+380 purple").unwrap();
        assert_eq!(
            cmd,
            ParsedCommand::Signal(DaemonSignal::Show {
                region: TargetRegion::new(640, 380, 120, 40),
                variant: Variant::Purple,
            })
        );
    }

    #[test]
    fn parse_show_without_variant_defaults_to_blue() {
        let cmd = parse_command("show 10x10+0+0").unwrap();
        assert_eq!(
            cmd,
            ParsedCommand::Signal(DaemonSignal::Show {
                region: TargetRegion::new(0, 0, 10, 10),
                variant: Variant::Blue,
            })
        );
    }

    #[test]
    fn parse_show_unknown_variant_falls_back_to_blue() {
        let cmd = parse_command("show 10x10+0+0 chartreuse").unwrap();
        assert!(matches!(
            cmd,
            ParsedCommand::Signal(DaemonSignal::Show {
                variant: Variant::Blue,
                ..
            })
        ));
    }

    #[test]
    fn parse_show_rejects_bad_geometry() {
        assert!(parse_command("show nonsense").is_err());
        assert!(parse_command("show").is_err());
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(
            parse_command("hide").unwrap(),
            ParsedCommand::Signal(DaemonSignal::Hide)
        );
        assert_eq!(
            parse_command("destroy").unwrap(),
            ParsedCommand::Signal(DaemonSignal::Destroy)
        );
        assert_eq!(parse_command("status").unwrap(), ParsedCommand::Status);
    }

    #[test]
    fn parse_rejects_unknown_command() {
        assert!(parse_command("explode").is_err());
        assert!(parse_command("").is_err());
    }
}
