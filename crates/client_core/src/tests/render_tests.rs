use super::*;
use serde_json::json;

fn summary(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn motor(name: &str, on: bool, fault: bool, recovery: bool) -> MotorRecord {
    MotorRecord {
        name: name.to_string(),
        on,
        fault,
        recovery,
    }
}

#[test]
fn summary_cards_follow_fixed_order_and_skip_unknown_keys() {
    let mut grid = SummaryGrid::default();
    let input = summary(json!({
        "faults": 0,
        "unlisted": "dropped",
        "mode": "REMOTE",
        "fan": 45,
        "temp_ok": true,
    }));

    render_summary(&mut grid, &input, SUMMARY_ORDER);

    let rendered: Vec<(&str, &str)> = grid
        .cards()
        .iter()
        .map(|card| (card.key.as_str(), card.value.as_str()))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("mode", "REMOTE"),
            ("temp_ok", "true"),
            ("fan", "45"),
            ("faults", "0"),
        ]
    );
}

#[test]
fn summary_render_replaces_previous_cards_and_is_idempotent() {
    let mut grid = SummaryGrid::default();
    grid.push("stale", "value");
    let input = summary(json!({ "phase": "PURGE", "stg": 2 }));

    render_summary(&mut grid, &input, SUMMARY_ORDER);
    let first = grid.clone();
    render_summary(&mut grid, &input, SUMMARY_ORDER);

    assert_eq!(grid, first);
    assert_eq!(grid.cards().len(), 2);
    assert!(grid.cards().iter().all(|card| card.key != "stale"));
}

#[test]
fn summary_respects_caller_supplied_order() {
    let mut grid = SummaryGrid::default();
    let input = summary(json!({ "mode": "AUTO", "phase": "IDLE", "hw": 1 }));

    render_summary(&mut grid, &input, &["hw", "mode"]);

    let keys: Vec<&str> = grid.cards().iter().map(|card| card.key.as_str()).collect();
    assert_eq!(keys, vec!["hw", "mode"]);
}

#[test]
fn empty_summary_renders_no_cards() {
    let mut grid = SummaryGrid::default();
    render_summary(&mut grid, &Map::new(), SUMMARY_ORDER);
    assert!(grid.cards().is_empty());
}

#[test]
fn motor_rows_preserve_order_and_map_flags() {
    let mut table = MotorTable::default();
    let motors = vec![
        motor("PH", true, false, false),
        motor("SF", false, true, true),
        motor("CRUSHER", false, false, true),
    ];

    render_motors(&mut table, &motors);

    assert_eq!(table.rows().len(), motors.len());
    let rendered: Vec<(&str, &str, &str, &str)> = table
        .rows()
        .iter()
        .map(|row| (row.name.as_str(), row.state, row.fault, row.recovery))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("PH", "ON", "0", "0"),
            ("SF", "OFF", "1", "1"),
            ("CRUSHER", "OFF", "0", "1"),
        ]
    );
}

#[test]
fn motor_render_clears_rows_for_empty_input() {
    let mut table = MotorTable::default();
    render_motors(&mut table, &[motor("FC", true, false, false)]);
    render_motors(&mut table, &[]);
    assert!(table.rows().is_empty());
}

#[test]
fn authority_is_unknown_for_missing_or_non_object_values() {
    let null = Value::Null;
    let number = json!(42);
    let text = json!("REMOTE");
    for input in [None, Some(&null), Some(&number), Some(&text)] {
        let mut line = TextLine::default();
        render_authority(&mut line, input);
        assert_eq!(line.text(), "Control authority: unknown");
    }
}

#[test]
fn authority_full_requires_strict_true() {
    let mut line = TextLine::default();
    let full = json!({ "app_full_control": true, "effective_mode": "HEAT" });
    render_authority(&mut line, Some(&full));
    assert_eq!(line.text(), "Control authority: FULL (mode=HEAT)");

    let truthy_but_not_true = json!({ "app_full_control": 1, "effective_mode": "REMOTE" });
    render_authority(&mut line, Some(&truthy_but_not_true));
    assert_eq!(
        line.text(),
        "Control authority: LIMITED by panel selector (mode=REMOTE)"
    );
}

#[test]
fn authority_mode_defaults_to_unknown_when_missing_or_blank() {
    let mut line = TextLine::default();
    render_authority(&mut line, Some(&json!({ "app_full_control": false })));
    assert_eq!(
        line.text(),
        "Control authority: LIMITED by panel selector (mode=UNKNOWN)"
    );

    render_authority(
        &mut line,
        Some(&json!({ "app_full_control": true, "effective_mode": "" })),
    );
    assert_eq!(line.text(), "Control authority: FULL (mode=UNKNOWN)");
}

#[test]
fn control_authority_classifies_payloads() {
    let value = json!({ "app_full_control": true, "effective_mode": "REMOTE" });
    assert_eq!(
        ControlAuthority::from_value(Some(&value)),
        ControlAuthority::Full {
            mode: "REMOTE".into()
        }
    );
    assert_eq!(ControlAuthority::from_value(None), ControlAuthority::Unknown);
}
