use race_pace::parser::{load_dataset, parse_chip_time, parse_dataset, Category};
use race_pace::utils::error::ParseError;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE: &str = r#"{
    "distances": { "Marathon": 42.195, "5K": 5, "10K": 10 },
    "races": [
        { "name": "Spring 5K", "date": "2015-04-12", "type": "5K",
          "chip_time": "0:21:30", "position": 12, "participants": 240 },
        { "name": "City Marathon", "date": "2016-10-02", "type": "Marathon",
          "chip_time": "3:05:09", "position": 301, "participants": 5120,
          "url": "https://results.example.org/301", "strava": "https://www.strava.com/activities/1" }
    ]
}"#;

#[test]
fn test_parse_dataset_keeps_category_order() {
    let dataset = parse_dataset(SAMPLE).unwrap();

    let names: Vec<&str> = dataset.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Marathon", "5K", "10K"]);
    assert_eq!(dataset.distance_for("5K"), Some(5.0));
    assert_eq!(dataset.distance_for("Mile"), None);
}

#[test]
fn test_parse_dataset_race_fields() {
    let dataset = parse_dataset(SAMPLE).unwrap();

    assert_eq!(dataset.races.len(), 2);
    let marathon = &dataset.races[1];
    assert_eq!(marathon.category, "Marathon");
    assert_eq!(marathon.date.to_string(), "2016-10-02");
    assert_eq!(marathon.position, 301);
    assert_eq!(marathon.url.as_deref(), Some("https://results.example.org/301"));
    assert!(dataset.races[0].strava.is_none());
}

#[test]
fn test_duplicate_category_keeps_first_position_last_value() {
    let json = r#"{"distances": {"5K": 5, "10K": 10, "5K": 5.1}, "races": []}"#;
    let dataset = parse_dataset(json).unwrap();

    assert_eq!(
        dataset.categories,
        vec![Category::new("5K", 5.1), Category::new("10K", 10.0)]
    );
}

#[test]
fn test_missing_field_is_error() {
    let json = r#"{"distances": {"5K": 5}, "races": [
        {"name": "No time", "date": "2015-01-01", "type": "5K", "position": 1, "participants": 2}
    ]}"#;

    assert!(matches!(parse_dataset(json), Err(ParseError::JsonError(_))));
}

#[test]
fn test_bad_date_is_error() {
    let json = r#"{"distances": {"5K": 5}, "races": [
        {"name": "Bad", "date": "2015-02-30", "type": "5K", "chip_time": "0:20:00",
         "position": 1, "participants": 2}
    ]}"#;

    assert!(matches!(parse_dataset(json), Err(ParseError::JsonError(_))));
}

#[test]
fn test_non_positive_distance_is_error() {
    let json = r#"{"distances": {"5K": 0}, "races": []}"#;

    assert!(matches!(
        parse_dataset(json),
        Err(ParseError::InvalidDistance { .. })
    ));
}

#[test]
fn test_zero_position_is_error() {
    let json = r#"{"distances": {"5K": 5}, "races": [
        {"name": "Zero", "date": "2015-01-01", "type": "5K", "chip_time": "0:20:00",
         "position": 0, "participants": 2}
    ]}"#;

    assert!(matches!(
        parse_dataset(json),
        Err(ParseError::InvalidRace { .. })
    ));
}

#[test]
fn test_unknown_category_is_not_a_load_error() {
    let json = r#"{"distances": {"5K": 5}, "races": [
        {"name": "Trail", "date": "2015-01-01", "type": "Trail", "chip_time": "bogus",
         "position": 1, "participants": 2}
    ]}"#;

    let dataset = parse_dataset(json).unwrap();
    assert_eq!(dataset.unknown_category_races().count(), 1);
}

#[test]
fn test_load_dataset_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let dataset = load_dataset(file.path()).unwrap();
    assert_eq!(dataset.races.len(), 2);
}

#[test]
fn test_load_dataset_missing_file() {
    let result = load_dataset("/nonexistent/races.json");
    assert!(matches!(result, Err(ParseError::IoError(_))));
}

#[test]
fn test_parse_chip_time() {
    assert_eq!(parse_chip_time("00:25:30").unwrap(), 1530);
    assert!(matches!(
        parse_chip_time("25:30"),
        Err(ParseError::InvalidChipTime(_))
    ));
}
