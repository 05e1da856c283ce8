use chrono::NaiveDate;
use sciman_core::{filter, filter_with, RosterQuery, Scientist};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn roster() -> Vec<Scientist> {
    vec![
        Scientist::new(
            "Іван Петров",
            "CS",
            "Software Engineering",
            "PhD",
            "Professor",
            date(2020, 9, 1),
        ),
        Scientist::new(
            "Марія Коваль",
            "Physics",
            "Quantum Optics",
            "DSc",
            "Docent",
            date(2018, 3, 12),
        ),
        Scientist::new(
            "John Smith",
            "CS",
            "Databases",
            "PhD",
            "Senior Professor",
            date(2022, 6, 30),
        ),
    ]
}

#[test]
fn blank_query_returns_everything_in_order() {
    let records = roster();
    for query in ["", "   ", "\t"] {
        let hits = filter(&records, query);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].full_name, "Іван Петров");
        assert_eq!(hits[2].full_name, "John Smith");
    }
}

#[test]
fn match_is_case_insensitive_substring() {
    let records = roster();

    let hits = filter(&records, "pro");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].rank, "Professor");
    assert_eq!(hits[1].rank, "Senior Professor");

    assert!(filter(&records, "xyz").is_empty());
}

#[test]
fn padded_queries_match_literally() {
    let records = roster();

    // Padding is part of the query, not stripped: "Professor" has no
    // space-wrapped "pro" anywhere.
    assert!(filter(&records, " pro ").is_empty());

    // A query whose spaces line up with the field text still matches.
    let hits = filter(&records, "r pro");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].full_name, "John Smith");
}

#[test]
fn cyrillic_queries_match_case_insensitively() {
    let records = roster();

    let hits = filter(&records, "іван");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].full_name, "Іван Петров");

    let hits = filter(&records, "КОВАЛЬ");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].full_name, "Марія Коваль");
}

#[test]
fn only_name_faculty_and_rank_are_searched() {
    let records = roster();

    // Department and degree values must not match.
    assert!(filter(&records, "quantum").is_empty());
    assert!(filter(&records, "databases").is_empty());
    assert!(filter(&records, "dsc").is_empty());

    // Nor the rank date.
    assert!(filter(&records, "2020").is_empty());
}

#[test]
fn matching_preserves_relative_order() {
    let records = roster();

    let hits = filter(&records, "cs");
    assert_eq!(hits.len(), 2);
    assert!(records
        .iter()
        .position(|r| r.id == hits[0].id)
        .unwrap()
        < records.iter().position(|r| r.id == hits[1].id).unwrap());
}

#[test]
fn query_limit_caps_results() {
    let records = roster();

    let mut query = RosterQuery::new("");
    query.limit = Some(2);
    let hits = filter_with(&records, &query);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[1].full_name, "Марія Коваль");
}

#[test]
fn added_record_appears_once_at_the_end() {
    let mut records = roster();
    let newcomer = Scientist::new("New Person", "Biology", "Genetics", "PhD", "Assistant", date(2025, 1, 1));
    let id = newcomer.id;
    records.push(newcomer);

    let hits = filter(&records, "");
    assert_eq!(hits.len(), 4);
    assert_eq!(hits.last().unwrap().id, id);
    assert_eq!(hits.iter().filter(|r| r.id == id).count(), 1);
}
