//! Daemon app runner

use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use crate::application::HighlightUseCase;
use crate::domain::indicator::{IndicatorState, ShowEffect};
use crate::infrastructure::ChannelOverlay;

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::args::DaemonOptions;
use super::ipc::create_ipc_server;
use super::pid_file::{PidFile, PidFileError};
use super::presenter::Presenter;
use super::signals::{DaemonSignal, DaemonSignalHandler};

/// Run daemon mode
#[cfg(target_os = "linux")]
pub async fn run_daemon(options: DaemonOptions) -> ExitCode {
    let presenter = Presenter::new();

    // Acquire PID file
    let pid_file = PidFile::new();
    if let Err(e) = pid_file.acquire() {
        match e {
            PidFileError::AlreadyRunning(pid) => {
                presenter.error(&format!("Another daemon is already running (PID: {})", pid));
            }
            _ => {
                presenter.error(&e.to_string());
            }
        }
        return ExitCode::from(EXIT_ERROR);
    }

    // Setup signal handler (returns handler + sender for socket server)
    let (mut signals, signal_tx) = match DaemonSignalHandler::new().await {
        Ok(s) => s,
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Setup socket server
    let mut ipc_server = create_ipc_server();
    if let Err(e) = ipc_server.bind() {
        presenter.error(&format!("Failed to bind socket: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }
    let socket_path = ipc_server.path();

    // Spawn the overlay thread. The Wayland event loop is synchronous, so
    // it gets a dedicated OS thread and a plain mpsc channel.
    let (overlay, overlay_rx) = ChannelOverlay::new();
    let diameter = options.diameter;
    let overlay_thread = std::thread::spawn(move || crate::gui::run_overlay(overlay_rx, diameter));

    let use_case = HighlightUseCase::new(overlay.clone());

    // Wrap state in Arc<Mutex> for sharing with socket server
    let state = Arc::new(Mutex::new(IndicatorState::Absent));
    let state_for_socket = Arc::clone(&state);

    // Spawn socket server task
    tokio::spawn(async move {
        let _ = ipc_server
            .run(
                signal_tx,
                Box::new(move || {
                    // Lock is held only for the copy
                    *state_for_socket.lock().unwrap_or_else(|e| e.into_inner())
                }),
            )
            .await;
    });

    presenter.daemon_status("Started, waiting for commands...");
    presenter.info(&format!(
        "PID: {} | Socket: {} | SIGINT: exit",
        std::process::id(),
        socket_path
    ));

    // Main signal loop
    let result = daemon_loop(&use_case, &mut signals, &presenter, &state).await;

    // Stop the overlay thread and wait for it to unmap the surface
    overlay.shutdown();
    if let Ok(Err(e)) = overlay_thread.join() {
        presenter.error(&format!("Overlay error: {}", e));
    }

    let _ = pid_file.release();

    if result {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

#[cfg(not(target_os = "linux"))]
pub async fn run_daemon(_options: DaemonOptions) -> ExitCode {
    let presenter = Presenter::new();
    presenter.error("The overlay daemon requires Linux with a Wayland compositor");
    ExitCode::from(EXIT_ERROR)
}

#[cfg(target_os = "linux")]
async fn daemon_loop(
    use_case: &HighlightUseCase<ChannelOverlay>,
    signals: &mut DaemonSignalHandler,
    presenter: &Presenter,
    shared_state: &Arc<Mutex<IndicatorState>>,
) -> bool {
    loop {
        // Publish state for the socket server's status queries
        let state = use_case.state().await;
        if let Ok(mut guard) = shared_state.lock() {
            *guard = state;
        }

        match signals.recv().await {
            Some(DaemonSignal::Show { region, variant }) => {
                match use_case.show(region, variant).await {
                    Ok(ShowEffect::Created) => {
                        presenter
                            .info(&format!("Indicator created at {} ({})", region, variant.as_str()));
                    }
                    Ok(ShowEffect::Updated) => {
                        presenter
                            .info(&format!("Indicator moved to {} ({})", region, variant.as_str()));
                    }
                    Err(e) => {
                        presenter.error(&format!("Show failed: {}", e));
                        return false;
                    }
                }
            }
            Some(DaemonSignal::Hide) => {
                if let Err(e) = use_case.hide().await {
                    presenter.error(&format!("Hide failed: {}", e));
                    return false;
                }
                presenter.info("Indicator hidden");
            }
            Some(DaemonSignal::Destroy) => {
                if let Err(e) = use_case.destroy().await {
                    presenter.error(&format!("Destroy failed: {}", e));
                    return false;
                }
                presenter.info("Indicator destroyed");
            }
            Some(DaemonSignal::Shutdown) => {
                presenter.daemon_status("Shutting down...");
                return true;
            }
            None => {
                // Channel closed
                return false;
            }
        }
    }
}
