use super::*;
use crate::model::Construct;

#[test]
fn test_parse_with_missing_and_garbage_cells() {
    let data = "\
name,age,iq,PL,PR,SE,CT,AT,ABPM,EBPM,TBPM,AV
ann,30,100,90,NA,1,1,1,1,1,1,1
bob,,102,110,2,2,2,2,2,2,2,2
cy,31,abc,100,3,3,3,3,3,3,3,3
";
    let table = parse_population_csv(data.as_bytes()).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.rows[0].construct(Construct::Pr), None);
    assert_eq!(table.rows[0].construct(Construct::Pl), Some(90.0));
    assert_eq!(table.rows[1].age, None);
    assert_eq!(table.rows[2].iq, None);
    let missing = table.missing_counts();
    assert_eq!(missing[0], 1);
    assert_eq!(missing[1], 1);
    assert_eq!(missing[2 + Construct::Pr.index()], 1);
}

#[test]
fn test_parse_ragged_rows() {
    let data = "age,IQ,PL,PR,SE,CT,AT,ABPM,EBPM,TBPM,AV\n30,100,90\n\n";
    let table = parse_population_csv(data.as_bytes()).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows[0].construct(Construct::Pl), Some(90.0));
    assert_eq!(table.rows[0].construct(Construct::Av), None);
}

#[test]
fn test_parse_missing_column() {
    let data = "age,IQ,PL\n30,100,90\n";
    let err = parse_population_csv(data.as_bytes()).unwrap_err();
    assert!(matches!(err, ProviderError::MissingColumn(ref c) if c == "PR"));
}

#[test]
fn test_count_unparseable_ignores_empty() {
    let data = "age,IQ,PL,PR,SE,CT,AT,ABPM,EBPM,TBPM,AV\n,x,y,1,1,1,1,1,1,1,\n";
    let mut rdr = csv::ReaderBuilder::new().from_reader(data.as_bytes());
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(str::to_string).collect();
    let columns = ColumnMap::from_headers(&headers).unwrap();
    let record = rdr.records().next().unwrap().unwrap();
    assert_eq!(count_unparseable(&record, &columns), 2);
}
