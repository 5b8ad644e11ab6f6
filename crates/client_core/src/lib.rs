//! Status polling, rendering and command dispatch for the boiler controller dashboard.

use std::time::Duration;

pub mod api;
pub mod dashboard;
pub mod error;
pub mod render;
pub mod view;

pub use api::{ApiClient, ControllerApi};
pub use dashboard::{Dashboard, DashboardEvent};
pub use error::RequestError;
pub use render::{render_authority, render_motors, render_summary, ControlAuthority, SUMMARY_ORDER};
pub use view::{DashboardView, MotorRow, MotorTable, SummaryCard, SummaryGrid, TextLine};

/// Interval between timer-driven status refreshes.
pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);
