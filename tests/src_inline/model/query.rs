use serde_json::json;

use super::*;

fn full_query() -> Value {
    json!({
        "age": 30,
        "iq": "101",
        "PL": 100.0,
        "PR": 95.5,
        "SE": "104",
        "CT": 99,
        "AT": 100,
        "ABPM": 87.25,
        "EBPM": 110,
        "TBPM": 100,
        "AV": 92
    })
}

#[test]
fn test_decode_full_query() {
    let q = Query::from_json(&full_query()).unwrap();
    assert_eq!(q.age, 30);
    assert_eq!(q.iq, 101);
    assert_eq!(q.score(Construct::Pl), 100.0);
    assert_eq!(q.score(Construct::Se), 104.0);
    assert_eq!(q.score(Construct::Abpm), 87.25);
}

#[test]
fn test_canonical_iq_key_accepted() {
    let mut v = full_query();
    let obj = v.as_object_mut().unwrap();
    obj.remove("iq");
    obj.insert("IQ".to_string(), json!(99.9));
    let q = Query::from_json(&v).unwrap();
    assert_eq!(q.iq, 99);
}

#[test]
fn test_missing_construct_names_field() {
    let mut v = full_query();
    v.as_object_mut().unwrap().remove("TBPM");
    let err = Query::from_json(&v).unwrap_err();
    assert_eq!(err, QueryError::MissingField("TBPM".to_string()));
    assert_eq!(err.field(), Some("TBPM"));
}

#[test]
fn test_missing_iq_reports_canonical_name() {
    let mut v = full_query();
    v.as_object_mut().unwrap().remove("iq");
    let err = Query::from_json(&v).unwrap_err();
    assert_eq!(err, QueryError::MissingField("IQ".to_string()));
}

#[test]
fn test_null_is_missing() {
    let mut v = full_query();
    v.as_object_mut()
        .unwrap()
        .insert("age".to_string(), Value::Null);
    let err = Query::from_json(&v).unwrap_err();
    assert_eq!(err, QueryError::MissingField("age".to_string()));
}

#[test]
fn test_non_numeric_is_invalid() {
    let mut v = full_query();
    v.as_object_mut()
        .unwrap()
        .insert("AV".to_string(), json!("high"));
    let err = Query::from_json(&v).unwrap_err();
    assert!(matches!(err, QueryError::InvalidField { ref field, .. } if field == "AV"));
}

#[test]
fn test_not_an_object() {
    let err = Query::from_json(&json!([1, 2, 3])).unwrap_err();
    assert_eq!(err, QueryError::NotAnObject);
}

#[test]
fn test_out_of_range_age_is_invalid() {
    let mut v = full_query();
    v.as_object_mut()
        .unwrap()
        .insert("age".to_string(), json!(1e19));
    let err = Query::from_json(&v).unwrap_err();
    assert!(matches!(err, QueryError::InvalidField { ref field, .. } if field == "age"));
}

#[test]
fn test_out_of_range_iq_string_is_invalid() {
    let mut v = full_query();
    v.as_object_mut()
        .unwrap()
        .insert("iq".to_string(), json!("-1e300"));
    let err = Query::from_json(&v).unwrap_err();
    assert_eq!(err.field(), Some("IQ"));
}
