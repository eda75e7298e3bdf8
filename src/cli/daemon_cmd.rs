//! Daemon command handler - sends commands to running daemon via IPC

use crate::domain::indicator::Variant;
use crate::domain::target::TargetRegion;

use super::ipc::create_ipc_client;
use super::presenter::Presenter;

/// A command destined for the running daemon
#[derive(Debug, Clone, Copy)]
pub enum DaemonCommand {
    Show {
        region: TargetRegion,
        variant: Variant,
    },
    Hide,
    Destroy,
    Status,
}

/// Handle show/hide/destroy/status subcommands
pub async fn handle_daemon_command(
    command: DaemonCommand,
    presenter: &Presenter,
) -> Result<(), String> {
    let client = create_ipc_client();

    // Check if daemon is running
    if !client.is_daemon_running() {
        return Err("No daemon running. Start with: halo daemon".to_string());
    }

    let cmd = match command {
        DaemonCommand::Show { region, variant } => format!("show {} {}", region, variant.as_str()),
        DaemonCommand::Hide => "hide".to_string(),
        DaemonCommand::Destroy => "destroy".to_string(),
        DaemonCommand::Status => "status".to_string(),
    };

    let response = client
        .send_command(&cmd)
        .await
        .map_err(|e| format!("Failed to communicate with daemon: {}", e))?;

    let response = response.trim();

    if let Some(stripped) = response.strip_prefix("error:") {
        return Err(stripped.trim().to_string());
    }

    match command {
        DaemonCommand::Status => {
            presenter.output(response);
        }
        _ => {
            presenter.success(&format!("Command sent: {}", cmd));
        }
    }

    Ok(())
}
