use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};

pub const STATUS_ROUTE: &str = "/api/status";
pub const HEALTH_ROUTE: &str = "/api/health";

/// Payload of `GET /api/status`.
///
/// Every section is optional on the wire; consumers substitute empty defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motors: Option<Vec<MotorRecord>>,
    /// Kept as raw JSON: anything other than an object renders as unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority: Option<Value>,
}

/// One motor row of the status payload. Flags are read by truthiness, so
/// `0`, `1` and `null` are accepted alongside booleans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotorRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "truthy_flag")]
    pub on: bool,
    #[serde(default, deserialize_with = "truthy_flag")]
    pub fault: bool,
    #[serde(default, deserialize_with = "truthy_flag")]
    pub recovery: bool,
}

fn truthy_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| is_truthy(&value))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| match value {
        Value::Null => String::new(),
        other => display_value(&other),
    })
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthReport {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub serial_port: String,
    #[serde(default)]
    pub serial_baud: u32,
    #[serde(default)]
    pub serial_connected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCommandResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    pub lines: Vec<String>,
}

/// One outbound operator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRequest {
    Mode { mode: String },
    Thermostat { state: String },
    Flame { state: String },
    Stage { stage: String },
    Reset { target: String },
    Fan { value: String },
    Motor { motor: String, state: String },
    Jam { motor: String },
    Raw { command: String },
}

impl CommandRequest {
    /// Builds a command from the single-value action table. Motor, jam and raw
    /// commands have dedicated constructors and are not reachable from here.
    pub fn from_action(action: &str, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let request = match action {
            "mode" => Self::Mode { mode: value },
            "thermostat" => Self::Thermostat { state: value },
            "flame" => Self::Flame { state: value },
            "stage" => Self::Stage { stage: value },
            "reset" => Self::Reset { target: value },
            "fan" => Self::Fan { value },
            _ => return None,
        };
        Some(request)
    }

    pub fn action(&self) -> &'static str {
        match self {
            Self::Mode { .. } => "mode",
            Self::Thermostat { .. } => "thermostat",
            Self::Flame { .. } => "flame",
            Self::Stage { .. } => "stage",
            Self::Reset { .. } => "reset",
            Self::Fan { .. } => "fan",
            Self::Motor { .. } => "motor",
            Self::Jam { .. } => "jam",
            Self::Raw { .. } => "raw",
        }
    }

    /// JSON body expected by the command's endpoint.
    pub fn body(&self) -> Value {
        match self {
            Self::Mode { mode } => json!({ "mode": mode }),
            Self::Thermostat { state } | Self::Flame { state } => json!({ "state": state }),
            Self::Stage { stage } => json!({ "stage": stage }),
            Self::Reset { target } => json!({ "target": target }),
            Self::Fan { value } => json!({ "value": value }),
            Self::Motor { motor, state } => json!({ "motor": motor, "state": state }),
            Self::Jam { motor } => json!({ "motor": motor }),
            Self::Raw { command } => json!({ "command": command }),
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            Self::Mode { .. } => "/api/mode",
            Self::Thermostat { .. } => "/api/thermostat",
            Self::Flame { .. } => "/api/flame",
            Self::Stage { .. } => "/api/stage",
            Self::Reset { .. } => "/api/reset",
            Self::Fan { .. } => "/api/fan",
            Self::Motor { .. } => "/api/motor",
            Self::Jam { .. } => "/api/jam",
            Self::Raw { .. } => "/api/raw",
        }
    }
}

/// Loose truthiness used when the controller omits or blanks a field.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text shown for a telemetry value: strings verbatim, whole floats without a
/// trailing `.0`, everything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => match number.as_f64() {
            Some(n) if number.is_f64() && n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                format!("{}", n as i64)
            }
            _ => number.to_string(),
        },
        other => other.to_string(),
    }
}
