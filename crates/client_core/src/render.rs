//! Pure renderers from status payload sections to view regions.

use std::fmt;

use serde_json::{Map, Value};
use shared::protocol::{display_value, is_truthy, MotorRecord};

use crate::view::{MotorRow, MotorTable, SummaryGrid, TextLine};

/// Display order of summary metrics. Keys outside this list are never shown.
pub const SUMMARY_ORDER: &[&str] = &[
    "mode", "safety", "phase", "bflt", "b_lock", "retry", "rrestart", "temp_ok", "b", "hw", "wg",
    "fan", "flame", "fl_ovr", "stg", "astg", "faults",
];

pub fn render_summary(grid: &mut SummaryGrid, summary: &Map<String, Value>, order: &[&str]) {
    grid.clear();
    for key in order {
        let Some(value) = summary.get(*key) else {
            continue;
        };
        grid.push(*key, display_value(value));
    }
}

pub fn render_motors(table: &mut MotorTable, motors: &[MotorRecord]) {
    table.clear();
    for motor in motors {
        table.push(MotorRow {
            name: motor.name.clone(),
            state: if motor.on { "ON" } else { "OFF" },
            fault: flag_label(motor.fault),
            recovery: flag_label(motor.recovery),
        });
    }
}

pub fn render_authority(line: &mut TextLine, authority: Option<&Value>) {
    line.set(ControlAuthority::from_value(authority).to_string());
}

fn flag_label(flag: bool) -> &'static str {
    if flag {
        "1"
    } else {
        "0"
    }
}

/// Who currently decides the controller's mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlAuthority {
    Unknown,
    /// The panel selector is in the remote position; dashboard commands win.
    Full { mode: String },
    LimitedByPanel { mode: String },
}

impl ControlAuthority {
    pub fn from_value(authority: Option<&Value>) -> Self {
        let Some(Value::Object(fields)) = authority else {
            return Self::Unknown;
        };

        let mode = fields
            .get("effective_mode")
            .filter(|mode| is_truthy(mode))
            .map(display_value)
            .unwrap_or_else(|| "UNKNOWN".to_string());

        if matches!(fields.get("app_full_control"), Some(Value::Bool(true))) {
            Self::Full { mode }
        } else {
            Self::LimitedByPanel { mode }
        }
    }
}

impl fmt::Display for ControlAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "Control authority: unknown"),
            Self::Full { mode } => write!(f, "Control authority: FULL (mode={mode})"),
            Self::LimitedByPanel { mode } => {
                write!(f, "Control authority: LIMITED by panel selector (mode={mode})")
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
