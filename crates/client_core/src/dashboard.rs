use std::sync::Arc;

use chrono::Local;
use reqwest::Method;
use serde_json::Value;
use shared::protocol::{
    CommandRequest, HealthReport, RawCommandResponse, StatusSnapshot, HEALTH_ROUTE, STATUS_ROUTE,
};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, warn};

use crate::{
    api::ControllerApi,
    error::RequestError,
    render::{render_authority, render_motors, render_summary, SUMMARY_ORDER},
    view::DashboardView,
};

const COMMAND_ERROR: &str = "Command error";
const RAW_COMMAND_ERROR: &str = "Raw command error";
const MOTOR_COMMAND_ERROR: &str = "Motor command error";
const JAM_COMMAND_ERROR: &str = "JAM command error";
const HEALTH_CHECK_ERROR: &str = "Health check error";

/// Emitted after the shared view changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    StatusRendered,
    StatusFailed(String),
    CommandOutput(String),
}

/// Status refresh cycle and operator command dispatch over one view.
///
/// Refreshes and commands may overlap freely. The view lock is only taken to
/// write results, so whichever request finishes last owns the display.
pub struct Dashboard {
    api: Arc<dyn ControllerApi>,
    view: Mutex<DashboardView>,
    events: broadcast::Sender<DashboardEvent>,
}

impl Dashboard {
    pub fn new(api: Arc<dyn ControllerApi>) -> Arc<Self> {
        let (events, _) = broadcast::channel(64);
        Arc::new(Self {
            api,
            view: Mutex::new(DashboardView::default()),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<DashboardEvent> {
        self.events.subscribe()
    }

    pub async fn view(&self) -> DashboardView {
        self.view.lock().await.clone()
    }

    pub async fn refresh_status(&self) {
        match self.fetch_status().await {
            Ok(snapshot) => {
                let summary = snapshot.summary.unwrap_or_default();
                let motors = snapshot.motors.unwrap_or_default();
                {
                    let mut view = self.view.lock().await;
                    render_summary(&mut view.summary, &summary, SUMMARY_ORDER);
                    render_motors(&mut view.motors, &motors);
                    render_authority(&mut view.authority, snapshot.authority.as_ref());
                    view.status_ts.set(format!(
                        "Last update: {}",
                        Local::now().format("%H:%M:%S")
                    ));
                }
                let _ = self.events.send(DashboardEvent::StatusRendered);
            }
            Err(err) => {
                warn!(error = %err, "status refresh failed");
                let text = format!("Status error: {err}");
                self.view.lock().await.status_ts.set(text.clone());
                let _ = self.events.send(DashboardEvent::StatusFailed(text));
            }
        }
    }

    /// Dispatches one action from the single-value command table.
    ///
    /// Unrecognized actions send nothing but still refresh the status.
    pub async fn send_command(&self, action: &str, value: &str) {
        match CommandRequest::from_action(action, value) {
            Some(request) => {
                if let Err(err) = self.post_command(&request).await {
                    self.report_failure(COMMAND_ERROR, &request, &err).await;
                    return;
                }
            }
            None => debug!(action, "ignoring unrecognized dashboard action"),
        }
        self.refresh_status().await;
    }

    pub async fn apply_motor(&self, motor: &str, state: &str) {
        let request = CommandRequest::Motor {
            motor: motor.to_string(),
            state: state.to_string(),
        };
        self.run_command(request, MOTOR_COMMAND_ERROR).await;
    }

    pub async fn jam_motor(&self, motor: &str) {
        let request = CommandRequest::Jam {
            motor: motor.to_string(),
        };
        self.run_command(request, JAM_COMMAND_ERROR).await;
    }

    /// Forwards a free-text diagnostic command and shows the controller's
    /// reply. The status is refreshed whether or not the command succeeded.
    pub async fn send_raw(&self, input: &str) {
        let command = input.trim();
        if command.is_empty() {
            return;
        }

        let request = CommandRequest::Raw {
            command: command.to_string(),
        };
        let reply = self.post_command(&request).await.and_then(|value| {
            serde_json::from_value::<RawCommandResponse>(value)
                .map_err(|err| RequestError::Decode(err.to_string()))
        });
        match reply {
            Ok(response) => self.show_command_output(response.lines.join("\n")).await,
            Err(err) => self.report_failure(RAW_COMMAND_ERROR, &request, &err).await,
        }

        self.refresh_status().await;
    }

    pub async fn check_health(&self) {
        let report = self
            .api
            .request(Method::GET, HEALTH_ROUTE, None)
            .await
            .and_then(|value| {
                serde_json::from_value::<HealthReport>(value)
                    .map_err(|err| RequestError::Decode(err.to_string()))
            });
        let text = match report {
            Ok(report) => format!(
                "Backend health: ok={} serial={}@{} connected={}",
                report.ok, report.serial_port, report.serial_baud, report.serial_connected
            ),
            Err(err) => {
                warn!(error = %err, "health check failed");
                format!("{HEALTH_CHECK_ERROR}: {err}")
            }
        };
        self.show_command_output(text).await;
    }

    async fn fetch_status(&self) -> Result<StatusSnapshot, RequestError> {
        let value = self.api.request(Method::GET, STATUS_ROUTE, None).await?;
        serde_json::from_value(value).map_err(|err| RequestError::Decode(err.to_string()))
    }

    async fn run_command(&self, request: CommandRequest, error_prefix: &str) {
        if let Err(err) = self.post_command(&request).await {
            self.report_failure(error_prefix, &request, &err).await;
            return;
        }
        self.refresh_status().await;
    }

    async fn post_command(&self, request: &CommandRequest) -> Result<Value, RequestError> {
        debug!(
            action = request.action(),
            route = request.route(),
            "dispatching controller command"
        );
        self.api
            .request(Method::POST, request.route(), Some(request.body()))
            .await
    }

    async fn report_failure(&self, prefix: &str, request: &CommandRequest, err: &RequestError) {
        warn!(action = request.action(), error = %err, "controller command failed");
        self.show_command_output(format!("{prefix}: {err}")).await;
    }

    async fn show_command_output(&self, text: String) {
        self.view.lock().await.command_output.set(text.clone());
        let _ = self.events.send(DashboardEvent::CommandOutput(text));
    }
}

#[cfg(test)]
#[path = "tests/dashboard_tests.rs"]
mod tests;
