//! Category weighting entries, one top-level key per course

use super::GradeCache;
use crate::core::models::CategoryWeighting;
use crate::core::store::KeyValueStore;
use crate::core::StoreError;
use crate::{debug, warn};
use serde::Deserialize;
use serde_json::Map;

/// Store key for a course's category weighting
#[must_use]
pub fn catmap_key(course_title: &str) -> String {
    format!("{course_title}-catmap")
}

impl<S: KeyValueStore> GradeCache<S> {
    /// Saved category weighting for a course.
    ///
    /// `None` means nothing was saved; a saved empty mapping comes back as
    /// `Some` of an empty map. Entries are read leniently (see
    /// [`CategoryConfig`](crate::core::models::CategoryConfig)), so only a
    /// stored value that is not an object at all reads as `None`, with a
    /// warning. Use [`has_weighting`](Self::has_weighting) to tell that case
    /// apart before overwriting.
    pub fn get_weighting(&self, course_title: &str) -> Option<CategoryWeighting> {
        let key = catmap_key(course_title);
        let entry = match self.store.get(Some(&key)) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Could not read weighting for '{course_title}': {e}");
                return None;
            }
        };
        let value = entry.get(&key)?;
        match CategoryWeighting::deserialize(value) {
            Ok(weighting) => Some(weighting),
            Err(e) => {
                warn!("Ignoring unreadable weighting for '{course_title}': {e}");
                None
            }
        }
    }

    /// Whether anything is stored under the course's catmap key, readable or not
    pub fn has_weighting(&self, course_title: &str) -> bool {
        let key = catmap_key(course_title);
        self.store
            .get(Some(&key))
            .is_ok_and(|entry| entry.contains_key(&key))
    }

    /// Replace a course's category weighting
    ///
    /// # Errors
    /// Returns an error if the store cannot be written.
    pub fn save_weighting(&mut self, course_title: &str, weighting: &CategoryWeighting) -> Result<(), StoreError> {
        let mut entries = Map::new();
        entries.insert(catmap_key(course_title), serde_json::to_value(weighting)?);
        self.store.set(entries)?;
        debug!(
            "Saved weighting for '{course_title}' ({} categories)",
            weighting.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CategoryConfig;
    use crate::core::store::MemoryStore;
    use serde_json::json;

    fn chemistry() -> CategoryWeighting {
        let mut weighting = CategoryWeighting::new();
        weighting.insert("Labs".to_string(), CategoryConfig::weighted(0.3));
        let mut tests = CategoryConfig::weighted(0.7);
        tests.manual_percent = Some(88.0);
        weighting.insert("Tests".to_string(), tests);
        weighting
    }

    #[test]
    fn test_key_format() {
        assert_eq!(catmap_key("Chemistry"), "Chemistry-catmap");
    }

    #[test]
    fn test_round_trip() {
        let mut cache = GradeCache::new(MemoryStore::new());
        cache.save_weighting("Chemistry", &chemistry()).unwrap();
        assert_eq!(cache.get_weighting("Chemistry"), Some(chemistry()));
    }

    #[test]
    fn test_absent_versus_empty() {
        let mut cache = GradeCache::new(MemoryStore::new());
        assert_eq!(cache.get_weighting("Biology"), None);

        cache.save_weighting("Biology", &CategoryWeighting::new()).unwrap();
        assert_eq!(cache.get_weighting("Biology"), Some(CategoryWeighting::new()));
    }

    #[test]
    fn test_save_replaces_without_merging() {
        let mut cache = GradeCache::new(MemoryStore::new());
        cache.save_weighting("Chemistry", &chemistry()).unwrap();

        let mut replacement = CategoryWeighting::new();
        replacement.insert("Homework".to_string(), CategoryConfig::weighted(1.0));
        cache.save_weighting("Chemistry", &replacement).unwrap();

        assert_eq!(cache.get_weighting("Chemistry"), Some(replacement));
    }

    #[test]
    fn test_weighting_survives_course_save() {
        let mut cache = GradeCache::new(MemoryStore::new());
        cache.save_weighting("Chemistry", &chemistry()).unwrap();
        cache.save_user_courses("alice", &[]).unwrap();
        assert_eq!(cache.get_weighting("Chemistry"), Some(chemistry()));
    }

    fn seeded(key: &str, value: serde_json::Value) -> GradeCache<MemoryStore> {
        let mut document = Map::new();
        document.insert(key.to_string(), value);
        GradeCache::new(MemoryStore::with_document(document))
    }

    #[test]
    fn test_stored_entries_without_numeric_weight_are_present() {
        let cache = seeded("Chemistry-catmap", json!({"Labs": {"manual": true, "pct": 90}}));
        let weighting = cache.get_weighting("Chemistry").unwrap();
        assert_eq!(weighting["Labs"].weight, None);
        assert_eq!(weighting["Labs"].extra["pct"], 90);

        let cache = seeded("Physics-catmap", json!({"Labs": {"weight": "20"}}));
        let weighting = cache.get_weighting("Physics").unwrap();
        assert_eq!(weighting["Labs"].weight, Some(20.0));
    }

    #[test]
    fn test_non_object_entry_is_present_but_unreadable() {
        let cache = seeded("Chemistry-catmap", json!("labs=20"));
        assert_eq!(cache.get_weighting("Chemistry"), None);
        assert!(cache.has_weighting("Chemistry"));
        assert!(!cache.has_weighting("Physics"));
    }

    #[test]
    fn test_lenient_entry_written_back_intact() {
        let mut cache = seeded("Chemistry-catmap", json!({"Labs": {"manual": true, "pct": 90}}));
        let mut weighting = cache.get_weighting("Chemistry").unwrap();
        weighting.insert("Tests".to_string(), CategoryConfig::weighted(0.5));
        cache.save_weighting("Chemistry", &weighting).unwrap();

        let stored = cache.store().document();
        assert_eq!(stored["Chemistry-catmap"]["Labs"], json!({"manual": true, "pct": 90}));
        assert_eq!(stored["Chemistry-catmap"]["Tests"]["weight"], 0.5);
    }
}
