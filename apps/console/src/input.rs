//! Operator input lines typed into the console.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorInput {
    /// Single-value action from the command table (`mode REMOTE`, `stage 2`, ...).
    Command { action: String, value: String },
    Motor { motor: String, state: String },
    Jam { motor: String },
    /// Free text forwarded verbatim.
    Raw(String),
    Refresh,
    Health,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown command '{0}'; type `help` for the list")]
    Unknown(String),
}

pub const HELP: &str = "\
commands:
  mode <AUTO|OFF|REMOTE>          set operating mode
  thermostat <AUTO|0|1>           set thermostat state
  flame <AUTO|ON>                 set flame state
  stage <AUTO|0|1|2|3>            set stage
  fan <AUTO|0-100>                set fan output
  reset <target>                  reset ALL, SAFETY, BOILER or a motor
  motor <name> <ON|OFF|AUTO>      override one motor
  jam <name>                      toggle a simulated jam on one motor
  raw <command...>                send a diagnostic command verbatim
  refresh                         poll status now
  health                          query backend health
  help                            show this list
  quit                            leave the console";

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// Structured values are upper-cased to match the controller vocabulary; raw
/// command text is passed through untouched apart from trimming.
pub fn parse_operator_input(line: &str) -> Result<Option<OperatorInput>, InputError> {
    let line = line.trim();
    let Some((head, rest)) = split_word(line) else {
        return Ok(None);
    };
    let head = head.to_ascii_lowercase();
    let args: Vec<&str> = rest.split_whitespace().collect();

    let input = match (head.as_str(), args.as_slice()) {
        ("raw", _) if rest.is_empty() => return Err(InputError::Usage("raw <command...>")),
        ("raw", _) => OperatorInput::Raw(rest.to_string()),
        ("motor", [motor, state]) => OperatorInput::Motor {
            motor: motor.to_ascii_uppercase(),
            state: state.to_ascii_uppercase(),
        },
        ("motor", _) => return Err(InputError::Usage("motor <name> <ON|OFF|AUTO>")),
        ("jam", [motor]) => OperatorInput::Jam {
            motor: motor.to_ascii_uppercase(),
        },
        ("jam", _) => return Err(InputError::Usage("jam <name>")),
        ("refresh", []) => OperatorInput::Refresh,
        ("health", []) => OperatorInput::Health,
        ("help" | "?", []) => OperatorInput::Help,
        ("quit" | "exit", []) => OperatorInput::Quit,
        ("refresh" | "health" | "help" | "?" | "quit" | "exit", _) => {
            return Err(InputError::Usage("<keyword> takes no arguments"))
        }
        ("mode" | "thermostat" | "flame" | "stage" | "reset" | "fan", []) => {
            return Err(InputError::Usage("<action> <value>"))
        }
        (_, []) => return Err(InputError::Unknown(head.clone())),
        (_, [value]) => OperatorInput::Command {
            action: head.clone(),
            value: value.to_ascii_uppercase(),
        },
        (_, _) => return Err(InputError::Usage("<action> <value>")),
    };
    Ok(Some(input))
}

fn split_word(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    match line.split_once(char::is_whitespace) {
        Some((head, rest)) => Some((head, rest.trim())),
        None => Some((line, "")),
    }
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
