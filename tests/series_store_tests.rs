use chart_viewport::ChartError;
use chart_viewport::core::{ChartInput, SeriesStore, TimeAxis};

fn input_json(columns: &str) -> String {
    format!(
        r##"{{
            "columns": {columns},
            "types": {{ "x": "x", "y0": "line", "y1": "line" }},
            "names": {{ "y0": "Joined", "y1": "Left" }},
            "colors": {{ "y0": "#3DC23F", "y1": "#F34C44" }}
        }}"##
    )
}

fn store() -> SeriesStore {
    let json = input_json(r#"[["x", 0, 1, 2, 3], ["y0", 1, 5, 3, 2], ["y1", 4, 0, 9, 1]]"#);
    SeriesStore::load(ChartInput::from_json_str(&json).expect("parse")).expect("load")
}

#[test]
fn load_partitions_axis_and_series() {
    let store = store();

    assert_eq!(store.axis().timestamps(), &[0, 1, 2, 3]);
    assert_eq!(store.series().len(), 2);
    assert_eq!(store.series()[0].key, "y0");
    assert_eq!(store.series()[0].name, "Joined");
    assert_eq!(store.series()[0].color.as_deref(), Some("#3DC23F"));
    assert_eq!(store.series()[1].values, vec![4.0, 0.0, 9.0, 1.0]);
}

#[test]
fn axis_column_may_follow_series_columns() {
    let json = input_json(r#"[["y0", 1, 2], ["x", 10, 20]]"#);
    let store = SeriesStore::load(ChartInput::from_json_str(&json).expect("parse")).expect("load");

    assert_eq!(store.axis().start(), 10);
    assert_eq!(store.axis().end(), 20);
    assert_eq!(store.series().len(), 1);
}

#[test]
fn missing_display_name_falls_back_to_key() {
    let json = r#"{ "columns": [["x", 0, 1], ["a", 1, 2]], "types": { "x": "x", "a": "line" } }"#;
    let store = SeriesStore::load(ChartInput::from_json_str(json).expect("parse")).expect("load");

    assert_eq!(store.series()[0].name, "a");
    assert_eq!(store.series()[0].color, None);
}

#[test]
fn missing_x_column_is_malformed() {
    let json = input_json(r#"[["y0", 1, 2, 3]]"#);
    let result = SeriesStore::load(ChartInput::from_json_str(&json).expect("parse"));

    assert!(matches!(result, Err(ChartError::MalformedInput(_))));
}

#[test]
fn series_length_mismatch_is_malformed() {
    let json = input_json(r#"[["x", 0, 1, 2], ["y0", 1, 2]]"#);
    let result = SeriesStore::load(ChartInput::from_json_str(&json).expect("parse"));

    assert!(matches!(result, Err(ChartError::MalformedInput(_))));
}

#[test]
fn duplicate_series_key_is_malformed() {
    let json = input_json(r#"[["x", 0, 1], ["y0", 1, 2], ["y0", 50, 60]]"#);
    let result = SeriesStore::load(ChartInput::from_json_str(&json).expect("parse"));

    assert!(matches!(
        result,
        Err(ChartError::MalformedInput(message)) if message.contains("y0")
    ));
}

#[test]
fn non_increasing_axis_is_malformed() {
    let json = input_json(r#"[["x", 0, 2, 2], ["y0", 1, 2, 3]]"#);
    let result = SeriesStore::load(ChartInput::from_json_str(&json).expect("parse"));

    assert!(matches!(result, Err(ChartError::MalformedInput(_))));
}

#[test]
fn undeclared_column_type_is_malformed() {
    let json = input_json(r#"[["x", 0, 1], ["z", 1, 2]]"#);
    let result = SeriesStore::load(ChartInput::from_json_str(&json).expect("parse"));

    assert!(matches!(result, Err(ChartError::MalformedInput(_))));
}

#[test]
fn non_numeric_value_is_malformed() {
    let json = input_json(r#"[["x", 0, 1], ["y0", 1, "two"]]"#);
    let result = SeriesStore::load(ChartInput::from_json_str(&json).expect("parse"));

    assert!(matches!(result, Err(ChartError::MalformedInput(_))));
}

#[test]
fn unknown_column_type_fails_to_parse() {
    let json = r#"{ "columns": [["x", 0, 1]], "types": { "x": "bar" } }"#;

    assert!(matches!(
        ChartInput::from_json_str(json),
        Err(ChartError::MalformedInput(_))
    ));
}

#[test]
fn single_sample_axis_is_rejected() {
    assert!(TimeAxis::new(vec![5]).is_err());
    assert!(TimeAxis::new(vec![5, 6]).is_ok());
}

#[test]
fn hidden_series_are_excluded_in_declaration_order() {
    let mut store = store();

    assert!(store.set_hidden("y0", true).expect("known series"));
    assert!(!store.set_hidden("y0", true).expect("already hidden"));
    let visible: Vec<&str> = store
        .visible_series()
        .iter()
        .map(|series| series.key.as_str())
        .collect();
    assert_eq!(visible, vec!["y1"]);
    assert!(store.is_hidden("y0"));
    assert_eq!(store.hidden_keys().collect::<Vec<_>>(), vec!["y0"]);
    assert_eq!(store.series_by_key("y0").map(|s| s.values.len()), Some(4));

    assert!(store.set_hidden("y0", false).expect("known series"));
    let visible: Vec<&str> = store
        .visible_series()
        .iter()
        .map(|series| series.key.as_str())
        .collect();
    assert_eq!(visible, vec!["y0", "y1"]);
}

#[test]
fn toggling_unknown_series_is_rejected() {
    let mut store = store();

    assert!(matches!(
        store.set_hidden("nope", true),
        Err(ChartError::UnknownSeries(key)) if key == "nope"
    ));
}
