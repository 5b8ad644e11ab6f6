use super::*;

fn parsed(line: &str) -> OperatorInput {
    parse_operator_input(line)
        .expect("valid input")
        .expect("non-blank input")
}

#[test]
fn blank_lines_are_ignored() {
    assert_eq!(parse_operator_input("").expect("blank"), None);
    assert_eq!(parse_operator_input("   \t").expect("blank"), None);
}

#[test]
fn table_actions_upper_case_their_value() {
    assert_eq!(
        parsed("mode remote"),
        OperatorInput::Command {
            action: "mode".into(),
            value: "REMOTE".into(),
        }
    );
    assert_eq!(
        parsed("  STAGE 2 "),
        OperatorInput::Command {
            action: "stage".into(),
            value: "2".into(),
        }
    );
}

#[test]
fn unlisted_actions_with_a_value_reach_the_dispatcher() {
    assert_eq!(
        parsed("ignite now"),
        OperatorInput::Command {
            action: "ignite".into(),
            value: "NOW".into(),
        }
    );
}

#[test]
fn motor_and_jam_take_named_arguments() {
    assert_eq!(
        parsed("motor sf on"),
        OperatorInput::Motor {
            motor: "SF".into(),
            state: "ON".into(),
        }
    );
    assert_eq!(
        parsed("jam crusher"),
        OperatorInput::Jam {
            motor: "CRUSHER".into(),
        }
    );
    assert_eq!(
        parse_operator_input("motor sf"),
        Err(InputError::Usage("motor <name> <ON|OFF|AUTO>"))
    );
    assert_eq!(
        parse_operator_input("jam"),
        Err(InputError::Usage("jam <name>"))
    );
}

#[test]
fn raw_keeps_the_remaining_text_verbatim() {
    assert_eq!(
        parsed("raw  SET sf   On "),
        OperatorInput::Raw("SET sf   On".into())
    );
    assert_eq!(
        parse_operator_input("raw   "),
        Err(InputError::Usage("raw <command...>"))
    );
}

#[test]
fn console_keywords() {
    assert_eq!(parsed("refresh"), OperatorInput::Refresh);
    assert_eq!(parsed("health"), OperatorInput::Health);
    assert_eq!(parsed("?"), OperatorInput::Help);
    assert_eq!(parsed("EXIT"), OperatorInput::Quit);
}

#[test]
fn bare_unknown_word_is_rejected() {
    assert_eq!(
        parse_operator_input("bogus"),
        Err(InputError::Unknown("bogus".into()))
    );
    assert_eq!(
        parse_operator_input("mode"),
        Err(InputError::Usage("<action> <value>"))
    );
    assert_eq!(
        parse_operator_input("reset all now"),
        Err(InputError::Usage("<action> <value>"))
    );
}

#[test]
fn console_keywords_reject_trailing_arguments() {
    for line in ["quit now", "refresh x", "health check", "help me", "exit 0"] {
        assert_eq!(
            parse_operator_input(line),
            Err(InputError::Usage("<keyword> takes no arguments")),
            "{line}"
        );
    }
}
