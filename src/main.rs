//! Halo CLI entry point

use std::process::ExitCode;

use clap::Parser;

use halo::cli::{
    app::{load_merged_config, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, DaemonOptions},
    config_cmd::handle_config_command,
    daemon_app::run_daemon,
    daemon_cmd::{handle_daemon_command, DaemonCommand},
    presenter::Presenter,
};
use halo::domain::config::AppConfig;
use halo::domain::indicator::Variant;
use halo::domain::target::TargetRegion;
use halo::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Daemon => {
            let config = load_merged_config(AppConfig::empty()).await;
            let options = DaemonOptions {
                diameter: config.diameter_or_default(),
            };
            run_daemon(options).await
        }
        Commands::Show { region, color } => {
            let region: TargetRegion = match region.parse() {
                Ok(r) => r,
                Err(e) => {
                    presenter.error(&e.to_string());
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };

            // CLI color wins over the configured default variant
            let config = load_merged_config(AppConfig::empty()).await;
            let variant = color
                .map(Variant::from)
                .unwrap_or_else(|| config.variant_or_default());

            run_client_command(DaemonCommand::Show { region, variant }, &presenter).await
        }
        Commands::Hide => run_client_command(DaemonCommand::Hide, &presenter).await,
        Commands::Destroy => run_client_command(DaemonCommand::Destroy, &presenter).await,
        Commands::Status => run_client_command(DaemonCommand::Status, &presenter).await,
    }
}

async fn run_client_command(command: DaemonCommand, presenter: &Presenter) -> ExitCode {
    if let Err(e) = handle_daemon_command(command, presenter).await {
        presenter.error(&e);
        return ExitCode::from(EXIT_ERROR);
    }
    ExitCode::SUCCESS
}
