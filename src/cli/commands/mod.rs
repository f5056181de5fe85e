//! CLI command handlers for `gradepoint`.
//!
//! Each command is implemented in its own submodule.

pub mod cache;
pub mod config;
pub mod convert;
pub mod gpa;
pub mod settings;
pub mod weighting;

use gradepoint::cache::GradeCache;
use gradepoint::config::Config;
use gradepoint::models::Course;
use gradepoint::store::JsonFileStore;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Open the grade cache backed by the configured store file
pub fn open_cache(config: &Config) -> GradeCache<JsonFileStore> {
    GradeCache::new(JsonFileStore::new(&config.store.file))
}

/// Read a JSON list of course records.
///
/// Courses given only a percent get their letter grade derived from it.
pub fn load_courses(path: &Path) -> Result<Vec<Course>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    let mut courses: Vec<Course> = serde_json::from_str(&content)?;
    for course in courses.iter_mut().filter(|c| c.grade.is_none()) {
        course.grade_from_percent();
    }
    Ok(courses)
}
