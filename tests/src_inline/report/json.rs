use serde_json::{Value, json};

use super::*;
use crate::model::{CohortWindow, N_CONSTRUCTS, PopulationRow, PopulationTable, Query};
use crate::pipeline::compute_z_scores;

fn query() -> Query {
    Query {
        age: 30,
        iq: 101,
        scores: [100.0; N_CONSTRUCTS],
    }
}

fn matched_result() -> CohortResult {
    let rows = vec![
        PopulationRow {
            age: Some(30.0),
            iq: Some(100.0),
            constructs: [Some(90.0); N_CONSTRUCTS],
        },
        PopulationRow {
            age: Some(31.0),
            iq: Some(102.0),
            constructs: [Some(110.0); N_CONSTRUCTS],
        },
    ];
    compute_z_scores(&PopulationTable::new(rows), &query(), &CohortWindow::default())
}

#[test]
fn test_engine_json_shape() {
    let text = render_engine_json(&matched_result()).unwrap();
    let v: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["cohort_size"], json!(2));
    assert_eq!(v["filtered_age_range"], json!([30.0, 31.0]));
    assert_eq!(v["filtered_iq_range"], json!([100.0, 102.0]));
    let names: Vec<&str> = v["constructs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["PL", "PR", "SE", "CT", "AT", "ABPM", "EBPM", "TBPM", "AV"]
    );
    assert_eq!(v["constructs"][0]["z"], json!(0.0));
}

#[test]
fn test_engine_json_empty_cohort_nulls() {
    let result = compute_z_scores(&PopulationTable::default(), &query(), &CohortWindow::default());
    let v: Value = serde_json::from_str(&render_engine_json(&result).unwrap()).unwrap();
    assert_eq!(v["cohort_size"], json!(0));
    assert!(v["filtered_age_range"].is_null());
    assert!(v["filtered_iq_range"].is_null());
    assert_eq!(v["constructs"].as_array().unwrap().len(), 9);
}

#[test]
fn test_chart_json_shape() {
    let v: Value = serde_json::from_str(&render_chart_json(&matched_result()).unwrap()).unwrap();
    let trace = &v["plot_data"][0];
    assert_eq!(trace["type"], json!("bar"));
    assert_eq!(trace["x"].as_array().unwrap().len(), 9);
    assert_eq!(trace["y"].as_array().unwrap().len(), 9);
    assert_eq!(v["layout"]["title"], json!(CHART_TITLE));
    assert_eq!(v["layout"]["xaxis"], json!({"title": "Cognitive Constructs"}));
    assert_eq!(v["layout"]["yaxis"]["range"], json!([-5.0, 1.0]));
}

#[test]
fn test_chart_json_empty_title() {
    let result = compute_z_scores(&PopulationTable::default(), &query(), &CohortWindow::default());
    let v: Value = serde_json::from_str(&render_chart_json(&result).unwrap()).unwrap();
    assert_eq!(v["layout"]["title"], json!(CHART_TITLE_EMPTY));
    assert!(
        v["plot_data"][0]["y"]
            .as_array()
            .unwrap()
            .iter()
            .all(|y| y.as_f64() == Some(0.0))
    );
}

#[test]
fn test_error_json() {
    let text = render_error_json(
        "missing_field",
        "missing field: PL".to_string(),
        Some("PL".to_string()),
    )
    .unwrap();
    let v: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["error"]["kind"], json!("missing_field"));
    assert_eq!(v["error"]["field"], json!("PL"));

    let text = render_error_json("io", "disk full".to_string(), None).unwrap();
    assert!(!text.contains("field"));
}
