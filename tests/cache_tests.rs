//! Integration tests for the grade cache over a JSON file store

use gradepoint::cache::GradeCache;
use gradepoint::grades::LetterGrade;
use gradepoint::models::{Assignment, CategoryConfig, CategoryWeighting, Course, Score, StatusFlag};
use gradepoint::store::{JsonFileStore, KeyValueStore};
use std::fs;
use tempfile::TempDir;

fn setup_store() -> (TempDir, JsonFileStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonFileStore::new(temp_dir.path().join("nested").join("store.json"));
    (temp_dir, store)
}

fn alice_courses() -> Vec<Course> {
    vec![
        Course::new(
            "AP Biology".to_string(),
            "scores.html?frn=42".to_string(),
            Some(LetterGrade::APlus),
            Some(91.25),
        )
        .with_assignments(vec![
            Assignment::new("Lab 1".to_string(), Score::from("19/20"), 0, []),
            Assignment::new("Lab 2".to_string(), Score::from("--"), 1, [StatusFlag::Missing, StatusFlag::Late]),
        ]),
        Course::new("Math".to_string(), String::new(), Some(LetterGrade::A), None),
    ]
}

#[test]
fn test_save_and_load_through_file() {
    let (_dir, store) = setup_store();
    let path = store.path().to_path_buf();

    let mut cache = GradeCache::new(store);
    cache.save_user_courses("alice", &alice_courses()).expect("Failed to save");
    assert!(path.exists());

    let reopened = GradeCache::new(JsonFileStore::new(&path));
    assert_eq!(reopened.load_user_courses("alice"), Some(alice_courses()));
    assert_eq!(reopened.load_user_courses("bob"), None);
    assert_eq!(reopened.most_recent_user(), Some("alice".to_string()));
}

#[test]
fn test_missing_file_reads_as_empty() {
    let (_dir, store) = setup_store();
    let cache = GradeCache::new(store);

    assert_eq!(cache.load_user_courses("alice"), None);
    assert!(cache.cached_users().is_empty());
    let settings = cache.load_settings().expect("Failed to load settings");
    assert_eq!(settings.get_toggle("opted_in"), Some(true));
}

#[test]
fn test_second_save_leaves_only_second_list() {
    let (_dir, store) = setup_store();
    let mut cache = GradeCache::new(store);

    cache.save_user_courses("alice", &alice_courses()).expect("Failed to save");
    let second = vec![Course::new("Chemistry".to_string(), String::new(), Some(LetterGrade::B), Some(58.0))];
    cache.save_user_courses("alice", &second).expect("Failed to save");

    assert_eq!(cache.load_user_courses("alice"), Some(second));
}

#[test]
fn test_users_are_isolated() {
    let (_dir, store) = setup_store();
    let mut cache = GradeCache::new(store);

    cache.save_user_courses("alice", &alice_courses()).expect("Failed to save");
    cache.save_user_courses("bob", &[]).expect("Failed to save");

    assert_eq!(cache.load_user_courses("alice"), Some(alice_courses()));
    assert_eq!(cache.load_user_courses("bob"), Some(Vec::new()));
    assert_eq!(cache.cached_users(), vec!["alice".to_string(), "bob".to_string()]);
    assert_eq!(cache.most_recent_user(), Some("bob".to_string()));
}

#[test]
fn test_weighting_round_trip() {
    let (_dir, store) = setup_store();
    let mut cache = GradeCache::new(store);

    let mut weighting = CategoryWeighting::new();
    weighting.insert("Labs".to_string(), CategoryConfig::weighted(0.3));
    weighting.insert("Tests".to_string(), CategoryConfig::weighted(0.7));

    assert_eq!(cache.get_weighting("Chemistry"), None);
    cache.save_weighting("Chemistry", &weighting).expect("Failed to save weighting");

    assert_eq!(cache.get_weighting("Chemistry"), Some(weighting));
    assert_eq!(cache.get_weighting("Physics"), None);

    cache
        .save_weighting("Physics", &CategoryWeighting::new())
        .expect("Failed to save weighting");
    assert_eq!(cache.get_weighting("Physics"), Some(CategoryWeighting::new()));
}

#[test]
fn test_weighting_survives_course_save() {
    let (_dir, store) = setup_store();
    let mut cache = GradeCache::new(store);

    let mut weighting = CategoryWeighting::new();
    weighting.insert("Labs".to_string(), CategoryConfig::weighted(1.0));
    cache.save_weighting("Chemistry", &weighting).expect("Failed to save weighting");
    cache.save_user_courses("alice", &alice_courses()).expect("Failed to save");

    assert_eq!(cache.get_weighting("Chemistry"), Some(weighting));
    let document = cache.store().get(None).expect("Failed to read store");
    assert!(document.contains_key("Chemistry-catmap"));
}

#[test]
fn test_placeholder_percent_keeps_other_courses() {
    let (_dir, store) = setup_store();
    let path = store.path().to_path_buf();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"{"user_data": {"USERDATA_alice": {"courses": [
            {"name": "Math", "grade": "A", "finalPercent": 80.1},
            {"name": "Art", "grade": "", "finalPercent": ""}
        ]}}}"#,
    )
    .unwrap();

    let cache = GradeCache::new(store);
    let courses = cache.load_user_courses("alice").expect("Record should be readable");
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].grade, Some(LetterGrade::A));
    assert_eq!(courses[1].final_percent, None);
}

#[test]
fn test_lenient_weighting_entries_are_found() {
    let (_dir, store) = setup_store();
    let path = store.path().to_path_buf();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"{"Chemistry-catmap": {"Labs": {"manual": true}}, "Physics-catmap": {"Labs": {"weight": "20"}}}"#,
    )
    .unwrap();

    let cache = GradeCache::new(store);
    let chemistry = cache.get_weighting("Chemistry").expect("Stored weighting should be found");
    assert_eq!(chemistry["Labs"].weight, None);
    let physics = cache.get_weighting("Physics").expect("Stored weighting should be found");
    assert_eq!(physics["Labs"].weight, Some(20.0));
}

#[test]
fn test_non_object_file_is_schema_error() {
    let (_dir, store) = setup_store();
    let path = store.path().to_path_buf();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[1, 2, 3]").unwrap();

    let mut cache = GradeCache::new(store);
    assert!(cache.load_settings().is_err());
    assert!(cache.save_user_courses("alice", &[]).is_err());
    assert_eq!(cache.load_user_courses("alice"), None);
}
