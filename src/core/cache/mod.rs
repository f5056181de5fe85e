//! Per-user grade cache on top of a [`KeyValueStore`]
//!
//! The store's top-level document is the [`Settings`] object. Each user's
//! courses live at `user_data["USERDATA_<username>"].courses`; category
//! weightings live at top-level `<course title>-catmap` keys.

pub mod merge;
pub mod settings;
pub mod weighting;

pub use merge::merge_with_cached;
pub use settings::{Settings, Toggle};
pub use weighting::catmap_key;

use crate::core::models::Course;
use crate::core::store::KeyValueStore;
use crate::core::StoreError;
use crate::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level store key holding every user's record
pub const USER_DATA_KEY: &str = "user_data";

/// Prefix of per-user keys inside `user_data`
pub const USER_KEY_PREFIX: &str = "USERDATA_";

/// Key of `username`'s record inside `user_data`
#[must_use]
pub fn user_key(username: &str) -> String {
    format!("{USER_KEY_PREFIX}{username}")
}

#[derive(Debug, Deserialize)]
struct UserRecord {
    #[serde(default)]
    courses: Vec<Course>,
}

#[derive(Serialize)]
struct UserRecordRef<'a> {
    courses: &'a [Course],
}

/// Grade cache over a key-value store
///
/// Saves for the same user must not be issued concurrently; the store's
/// last write wins.
#[derive(Debug)]
pub struct GradeCache<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> GradeCache<S> {
    /// Wrap a store
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Read the whole store as settings, with missing defaults filled in
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or a known key has the wrong shape.
    pub fn load_settings(&self) -> Result<Settings, StoreError> {
        let mut settings = Settings::from_document(self.store.get(None)?)?;
        if settings.merge_defaults(&Settings::from_defaults()) {
            debug!("Filled missing settings from defaults");
        }
        Ok(settings)
    }

    /// Write the whole settings document in one store call
    ///
    /// # Errors
    /// Returns an error if the store cannot be written.
    pub fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.store.set(settings.to_document()?)
    }

    /// Cached courses for `username`.
    ///
    /// `None` when the store has no `user_data`, when it has no record for
    /// this user, or when the record cannot be read.
    pub fn load_user_courses(&self, username: &str) -> Option<Vec<Course>> {
        let entry = match self.store.get(Some(USER_DATA_KEY)) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Could not read cached grades for '{username}': {e}");
                return None;
            }
        };
        let record = entry.get(USER_DATA_KEY)?.get(user_key(username))?;

        match UserRecord::deserialize(record) {
            Ok(record) => {
                debug!(
                    "Loaded {} cached course(s) for '{username}'",
                    record.courses.len()
                );
                Some(record.courses)
            }
            Err(e) => {
                warn!("Ignoring unreadable cached grades for '{username}': {e}");
                None
            }
        }
    }

    /// Replace `username`'s cached courses and mark them the most recent user.
    ///
    /// Reads the whole store, fills missing settings, replaces only this
    /// user's entry and writes everything back with one `set`. Courses cached
    /// earlier but absent from `courses` are dropped.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or written.
    pub fn save_user_courses(&mut self, username: &str, courses: &[Course]) -> Result<(), StoreError> {
        let mut settings = self.load_settings()?;
        let record = serde_json::to_value(UserRecordRef { courses })?;
        settings
            .user_data
            .get_or_insert_with(Map::new)
            .insert(user_key(username), record);
        settings.most_recent_user = Some(username.to_string());

        self.save_settings(&settings)?;
        info!("Saved {} course(s) for '{username}'", courses.len());
        Ok(())
    }

    /// Merge freshly fetched courses with the cache, save, and return the merged list.
    ///
    /// # Errors
    /// Returns an error if the save fails.
    pub fn refresh_user_courses(&mut self, username: &str, fresh: Vec<Course>) -> Result<Vec<Course>, StoreError> {
        let merged = match self.load_user_courses(username) {
            Some(cached) => merge_with_cached(fresh, &cached),
            None => fresh,
        };
        self.save_user_courses(username, &merged)?;
        Ok(merged)
    }

    /// Usernames with a cached record, sorted
    pub fn cached_users(&self) -> Vec<String> {
        let entry = match self.store.get(Some(USER_DATA_KEY)) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Could not read cached users: {e}");
                return Vec::new();
            }
        };
        let Some(Value::Object(users)) = entry.get(USER_DATA_KEY) else {
            return Vec::new();
        };
        let mut names: Vec<String> = users
            .keys()
            .filter_map(|key| key.strip_prefix(USER_KEY_PREFIX))
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    /// The last user whose courses were saved
    pub fn most_recent_user(&self) -> Option<String> {
        let entry = self.store.get(Some("most_recent_user")).ok()?;
        entry
            .get("most_recent_user")?
            .as_str()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grades::LetterGrade;
    use crate::core::models::{Assignment, Score, StatusFlag};
    use crate::core::store::MemoryStore;
    use serde_json::json;

    fn sample_courses() -> Vec<Course> {
        vec![
            Course::new(
                "Math".to_string(),
                "scores.html?frn=1".to_string(),
                Some(LetterGrade::A),
                Some(80.1),
            )
            .with_assignments(vec![
                Assignment::new("Quiz 1".to_string(), Score::from("9/10"), 0, []),
                Assignment::new(
                    "Quiz 2".to_string(),
                    Score::from("Not Due"),
                    1,
                    [StatusFlag::Missing],
                ),
            ]),
            Course::new("Art".to_string(), String::new(), None, None),
        ]
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut cache = GradeCache::new(MemoryStore::new());
        cache.save_user_courses("alice", &sample_courses()).unwrap();

        assert_eq!(cache.load_user_courses("alice"), Some(sample_courses()));
        assert_eq!(cache.load_user_courses("bob"), None);
    }

    #[test]
    fn test_load_without_user_data_is_none() {
        let cache = GradeCache::new(MemoryStore::new());
        assert_eq!(cache.load_user_courses("alice"), None);
    }

    #[test]
    fn test_save_is_single_write_with_defaults() {
        let mut cache = GradeCache::new(MemoryStore::new());
        cache.save_user_courses("alice", &sample_courses()).unwrap();

        let store = cache.store();
        assert_eq!(store.writes(), 1);
        let document = store.document();
        assert_eq!(document["most_recent_user"], "alice");
        assert_eq!(document["opted_in"]["value"], true);
        assert!(document["user_data"]["USERDATA_alice"]["courses"].is_array());
        assert_eq!(
            document["user_data"]["USERDATA_alice"]["courses"][0]["finalPercent"],
            80.1
        );
    }

    #[test]
    fn test_second_save_replaces_first() {
        let mut cache = GradeCache::new(MemoryStore::new());
        cache.save_user_courses("alice", &sample_courses()).unwrap();

        let second = vec![Course::new("Chemistry".to_string(), String::new(), Some(LetterGrade::B), None)];
        cache.save_user_courses("alice", &second).unwrap();

        assert_eq!(cache.load_user_courses("alice"), Some(second));
    }

    #[test]
    fn test_other_users_and_settings_untouched() {
        let mut document = Map::new();
        document.insert(
            "user_data".to_string(),
            json!({"USERDATA_carol": {"courses": "not a list"}}),
        );
        document.insert(
            "percent_main_page".to_string(),
            json!({"value": false, "changed": true}),
        );
        let mut cache = GradeCache::new(MemoryStore::with_document(document));

        cache.save_user_courses("alice", &sample_courses()).unwrap();

        let stored = cache.store().document();
        assert_eq!(stored["user_data"]["USERDATA_carol"]["courses"], "not a list");
        assert_eq!(stored["percent_main_page"]["value"], false);
        assert_eq!(cache.load_user_courses("carol"), None);
        assert_eq!(cache.cached_users(), vec!["alice".to_string(), "carol".to_string()]);
    }

    #[test]
    fn test_most_recent_user() {
        let mut cache = GradeCache::new(MemoryStore::new());
        assert_eq!(cache.most_recent_user(), None);
        cache.save_user_courses("alice", &[]).unwrap();
        cache.save_user_courses("bob", &[]).unwrap();
        assert_eq!(cache.most_recent_user(), Some("bob".to_string()));
        assert_eq!(cache.load_user_courses("alice"), Some(Vec::new()));
    }

    #[test]
    fn test_placeholder_fields_do_not_hide_user_record() {
        let mut document = Map::new();
        document.insert(
            "user_data".to_string(),
            json!({"USERDATA_alice": {"courses": [
                {"name": "Math", "link": "", "grade": "A", "finalPercent": 80.1, "assignments": []},
                {"name": "Art", "link": "", "grade": "--", "finalPercent": "", "assignments": []}
            ]}}),
        );
        let mut cache = GradeCache::new(MemoryStore::with_document(document));

        let loaded = cache.load_user_courses("alice").unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].final_percent, Some(80.1));
        assert_eq!(loaded[1].final_percent, None);

        let fresh = vec![Course::new("Math".to_string(), String::new(), None, None)];
        let merged = cache.refresh_user_courses("alice", fresh).unwrap();
        assert_eq!(merged[0].grade, Some(LetterGrade::A));
        assert_eq!(merged[0].final_percent, Some(80.1));
    }

    #[test]
    fn test_refresh_merges_then_saves() {
        let mut cache = GradeCache::new(MemoryStore::new());
        cache.save_user_courses("alice", &sample_courses()).unwrap();

        let fresh = vec![Course::new("Math".to_string(), String::new(), Some(LetterGrade::BPlus), Some(70.0))];
        let merged = cache.refresh_user_courses("alice", fresh).unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].grade, Some(LetterGrade::BPlus));
        assert_eq!(merged[0].assignments.len(), 2);
        assert_eq!(merged[0].link, "scores.html?frn=1");
        assert_eq!(cache.load_user_courses("alice"), Some(merged));
    }
}
