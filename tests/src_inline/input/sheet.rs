use super::*;
use crate::model::Construct;

#[test]
fn test_parse_sheet_values_mixed_cells() {
    let text = r#"{
        "range": "Sheet1!A1:L3",
        "majorDimension": "ROWS",
        "values": [
            ["id", "age", "IQ", "PL", "PR", "SE", "CT", "AT", "ABPM", "EBPM", "TBPM", "AV"],
            ["a", "30", "100", "90", "", "1", "1", "1", "1", "1", "1", "1"],
            ["b", 31, 102.5, 110, 2, 2, 2, 2, 2, 2, 2],
            []
        ]
    }"#;
    let table = parse_sheet_values(text).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0].construct(Construct::Pr), None);
    assert_eq!(table.rows[1].iq, Some(102.5));
    // Trailing empty cells are omitted by the API.
    assert_eq!(table.rows[1].construct(Construct::Av), None);
    assert_eq!(table.rows[1].construct(Construct::Tbpm), Some(2.0));
}

#[test]
fn test_parse_sheet_without_values() {
    let err = parse_sheet_values(r#"{"range":"Sheet1!A1:A1"}"#).unwrap_err();
    assert!(matches!(err, ProviderError::EmptySource(_)));
}

#[test]
fn test_parse_sheet_bad_json() {
    let err = parse_sheet_values("not json").unwrap_err();
    assert!(matches!(err, ProviderError::Json(_)));
}

#[test]
fn test_access_gate() {
    assert!(!AccessGate::from_token(None).is_authenticated());
    assert!(!AccessGate::from_token(Some("   ")).is_authenticated());
    let gate = AccessGate::from_token(Some(" abc "));
    assert_eq!(
        gate,
        AccessGate::Authenticated {
            token: "abc".to_string()
        }
    );
    assert!(gate.check().is_ok());
    assert!(!format!("{gate:?}").contains("abc"));
}
