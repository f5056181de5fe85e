//! Merging freshly fetched courses with cached ones

use crate::core::models::Course;

/// Fill gaps in freshly fetched courses from their cached counterparts.
///
/// The fresh list decides which courses exist and in what order. A fresh
/// course matched by name to a cached course takes the cached grade, percent
/// and link where its own are missing, and the cached assignments when it
/// arrived with none. Cached courses with no fresh counterpart are dropped.
#[must_use]
pub fn merge_with_cached(fresh: Vec<Course>, cached: &[Course]) -> Vec<Course> {
    fresh
        .into_iter()
        .map(|mut course| {
            let Some(previous) = cached.iter().find(|c| c.name == course.name) else {
                return course;
            };
            if course.grade.is_none() {
                course.grade = previous.grade;
            }
            if course.final_percent.is_none() {
                course.final_percent = previous.final_percent;
            }
            if course.link.is_empty() {
                course.link.clone_from(&previous.link);
            }
            if course.assignments.is_empty() {
                course.assignments.clone_from(&previous.assignments);
            }
            course
        })
        .collect()
}
