use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{ApiClient, Dashboard, POLL_INTERVAL};
use shared::domain::is_known_motor;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::broadcast::error::RecvError,
    task::JoinHandle,
    time::MissedTickBehavior,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod input;

use config::{load_settings, parse_server_url, DEFAULT_CONFIG_PATH};
use input::{parse_operator_input, OperatorInput, HELP};

#[derive(Parser, Debug)]
#[command(about = "Terminal dashboard for the boiler controller")]
struct Args {
    /// Controller API base URL; overrides the config file and environment.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Clear the terminal before every redraw.
    #[arg(long)]
    clear: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(&args.config)?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if args.clear {
        settings.clear_screen = true;
    }

    init_tracing(&settings.log_filter);
    let base_url = parse_server_url(&settings.server_url)?;
    info!(%base_url, "boiler dashboard starting");

    let dashboard = Dashboard::new(Arc::new(ApiClient::new(base_url)));
    let printer = spawn_view_printer(&dashboard, settings.clear_screen);
    println!("{HELP}");

    // The first tick completes immediately and doubles as the initial load.
    let mut ticker = tokio::time::interval(POLL_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;

    loop {
        tokio::select! {
            _ = ticker.tick() => spawn_refresh(&dashboard),
            line = lines.next_line(), if input_open => {
                match line.context("failed to read operator input")? {
                    Some(line) => match parse_operator_input(&line) {
                        Ok(Some(OperatorInput::Quit)) => break,
                        Ok(Some(OperatorInput::Help)) => println!("{HELP}"),
                        Ok(Some(input)) => dispatch_input(&dashboard, input),
                        Ok(None) => {}
                        Err(err) => println!("{err}"),
                    },
                    None => {
                        info!("operator input closed; polling continues");
                        input_open = false;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    printer.abort();
    info!("boiler dashboard stopped");
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn spawn_refresh(dashboard: &Arc<Dashboard>) {
    let dashboard = Arc::clone(dashboard);
    tokio::spawn(async move {
        dashboard.refresh_status().await;
    });
}

/// Runs one operator action in the background. Nothing waits for it, so it
/// may overlap with timer refreshes and other commands.
fn dispatch_input(dashboard: &Arc<Dashboard>, input: OperatorInput) {
    if let OperatorInput::Motor { motor, .. } | OperatorInput::Jam { motor } = &input {
        if !is_known_motor(motor) {
            warn!(%motor, "motor is not in the controller's motor list");
        }
    }

    let dashboard = Arc::clone(dashboard);
    tokio::spawn(async move {
        match input {
            OperatorInput::Command { action, value } => {
                dashboard.send_command(&action, &value).await
            }
            OperatorInput::Motor { motor, state } => dashboard.apply_motor(&motor, &state).await,
            OperatorInput::Jam { motor } => dashboard.jam_motor(&motor).await,
            OperatorInput::Raw(command) => dashboard.send_raw(&command).await,
            OperatorInput::Refresh => dashboard.refresh_status().await,
            OperatorInput::Health => dashboard.check_health().await,
            OperatorInput::Help | OperatorInput::Quit => {}
        }
    });
}

fn spawn_view_printer(dashboard: &Arc<Dashboard>, clear_screen: bool) -> JoinHandle<()> {
    let mut events = dashboard.subscribe_events();
    let dashboard = Arc::clone(dashboard);
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => debug!(?event, "dashboard updated"),
                Err(RecvError::Lagged(skipped)) => debug!(skipped, "view printer lagged"),
                Err(RecvError::Closed) => break,
            }
            let view = dashboard.view().await;
            if clear_screen {
                print!("\x1b[2J\x1b[H");
            }
            println!("{view}");
        }
    })
}
