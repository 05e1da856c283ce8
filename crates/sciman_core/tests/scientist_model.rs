use chrono::NaiveDate;
use sciman_core::Scientist;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let record = Scientist::with_id(
        id,
        "Іван Петров",
        "CS",
        "Software Engineering",
        "PhD",
        "Professor",
        date(2021, 3, 7),
    );

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["fullName"], "Іван Петров");
    assert_eq!(json["faculty"], "CS");
    assert_eq!(json["department"], "Software Engineering");
    assert_eq!(json["degree"], "PhD");
    assert_eq!(json["rank"], "Professor");
    assert_eq!(json["rankDate"], "2021-03-07T00:00:00");

    let decoded: Scientist = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn missing_fields_decode_as_defaults() {
    let records: Vec<Scientist> = serde_json::from_str(r#"[{"fullName": "X"}]"#).unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.full_name, "X");
    assert_eq!(record.faculty, "");
    assert_eq!(record.department, "");
    assert_eq!(record.degree, "");
    assert_eq!(record.rank, "");
    assert_eq!(record.rank_date, NaiveDate::default());
    assert!(!record.id.is_nil());
}

#[test]
fn legacy_records_without_ids_get_distinct_ones() {
    let records: Vec<Scientist> =
        serde_json::from_str(r#"[{"fullName": "A"}, {"fullName": "B"}]"#).unwrap();
    assert_ne!(records[0].id, records[1].id);
}

#[test]
fn rank_date_accepts_midnight_and_bare_forms() {
    let midnight: Scientist =
        serde_json::from_str(r#"{"rankDate": "2020-05-04T00:00:00"}"#).unwrap();
    assert_eq!(midnight.rank_date, date(2020, 5, 4));

    let fractional: Scientist =
        serde_json::from_str(r#"{"rankDate": "2020-05-04T00:00:00.0000000"}"#).unwrap();
    assert_eq!(fractional.rank_date, date(2020, 5, 4));

    let bare: Scientist = serde_json::from_str(r#"{"rankDate": "2020-05-04"}"#).unwrap();
    assert_eq!(bare.rank_date, date(2020, 5, 4));

    let blank: Scientist = serde_json::from_str(r#"{"rankDate": ""}"#).unwrap();
    assert_eq!(blank.rank_date, NaiveDate::default());
}

#[test]
fn rank_date_rejects_garbage() {
    let result = serde_json::from_str::<Scientist>(r#"{"rankDate": "yesterday"}"#);
    assert!(result.is_err());
}

#[test]
fn empty_strings_are_accepted_everywhere() {
    let record = Scientist::new("", "", "", "", "", NaiveDate::default());
    let json = serde_json::to_string(&record).unwrap();
    let decoded: Scientist = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, record);
}
