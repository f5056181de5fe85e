//! Course model

use super::assignment::Assignment;
use crate::core::grades::letter::{percent_to_grade, LetterGrade};
use serde::{Deserialize, Serialize};

/// A course with its current grade and assignments
///
/// `grade` and `final_percent` are not kept consistent automatically; use
/// [`Course::grade_from_percent`] or [`Course::percent_from_grade`] to derive
/// one from the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course name (e.g., "AP Biology")
    pub name: String,

    /// Link to the course detail page
    #[serde(default)]
    pub link: String,

    /// Current letter grade, if known
    #[serde(default, deserialize_with = "de::lenient_grade")]
    pub grade: Option<LetterGrade>,

    /// Current final percent, if known
    #[serde(default, deserialize_with = "de::lenient_percent")]
    pub final_percent: Option<f64>,

    /// Assignments in display order
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl Course {
    /// Create a new course with no assignments
    ///
    /// # Arguments
    /// * `name` - Course name
    /// * `link` - Detail page link
    /// * `grade` - Letter grade, if known
    /// * `final_percent` - Final percent, if known
    #[must_use]
    pub const fn new(
        name: String,
        link: String,
        grade: Option<LetterGrade>,
        final_percent: Option<f64>,
    ) -> Self {
        Self {
            name,
            link,
            grade,
            final_percent,
            assignments: Vec::new(),
        }
    }

    /// Attach assignments
    #[must_use]
    pub fn with_assignments(mut self, assignments: Vec<Assignment>) -> Self {
        self.assignments = assignments;
        self
    }

    /// Set `grade` from `final_percent`. Leaves the grade untouched when there is no percent.
    pub fn grade_from_percent(&mut self) {
        if let Some(percent) = self.final_percent {
            self.grade = percent_to_grade(percent);
        }
    }

    /// Set `final_percent` from `grade`. Leaves the percent untouched when there is no grade.
    pub fn percent_from_grade(&mut self) {
        if let Some(grade) = self.grade {
            self.final_percent = Some(grade.final_percent());
        }
    }

    /// Look up an assignment by its index
    #[must_use]
    pub fn assignment(&self, index: usize) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.index() == index)
    }
}

mod de {
    use super::LetterGrade;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Stored grades may be empty strings or placeholders like `"--"`; treat those as absent.
    pub fn lenient_grade<'de, D>(deserializer: D) -> Result<Option<LetterGrade>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(raw
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|s| s.trim().parse().ok()))
    }

    /// Numbers or numeric strings; anything else (`""`, `"--"`, text) is absent.
    pub fn lenient_percent<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s
                .trim()
                .trim_end_matches('%')
                .trim_end()
                .parse::<f64>()
                .ok()
                .filter(|p| p.is_finite()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::assignment::Score;

    #[test]
    fn test_course_creation() {
        let course = Course::new(
            "Chemistry".to_string(),
            "guardian/scores.html?frn=1".to_string(),
            Some(LetterGrade::B),
            Some(58.2),
        );

        assert_eq!(course.name, "Chemistry");
        assert_eq!(course.grade, Some(LetterGrade::B));
        assert!(course.assignments.is_empty());
    }

    #[test]
    fn test_grade_from_percent() {
        let mut course = Course::new("Art".to_string(), String::new(), None, Some(87.3));
        course.grade_from_percent();
        assert_eq!(course.grade, Some(LetterGrade::APlus));

        let mut no_percent = Course::new("Art".to_string(), String::new(), Some(LetterGrade::C), None);
        no_percent.grade_from_percent();
        assert_eq!(no_percent.grade, Some(LetterGrade::C));
    }

    #[test]
    fn test_percent_from_grade() {
        let mut course = Course::new("Art".to_string(), String::new(), Some(LetterGrade::BPlus), None);
        course.percent_from_grade();
        assert_eq!(course.final_percent, Some(65.0));
    }

    #[test]
    fn test_assignment_lookup_by_index() {
        let course = Course::new("Art".to_string(), String::new(), None, None).with_assignments(vec![
            Assignment::new("Sketch".to_string(), Score::from("5/5"), 3, []),
            Assignment::new("Collage".to_string(), Score::from("Not Due"), 7, []),
        ]);

        assert_eq!(course.assignment(7).map(Assignment::name), Some("Collage"));
        assert!(course.assignment(0).is_none());
    }

    #[test]
    fn test_plain_record_field_names() {
        let course = Course::new("Art".to_string(), "x".to_string(), Some(LetterGrade::A), Some(80.0));
        let value = serde_json::to_value(&course).unwrap();
        assert_eq!(value["finalPercent"], 80.0);
        assert_eq!(value["grade"], "A");
    }

    #[test]
    fn test_placeholder_grade_reads_as_absent() {
        let course: Course =
            serde_json::from_str(r#"{"name":"Art","grade":"--","finalPercent":null}"#).unwrap();
        assert!(course.grade.is_none());
        assert!(course.final_percent.is_none());
        assert!(course.link.is_empty());
    }

    #[test]
    fn test_placeholder_percent_reads_as_absent() {
        for raw in [r#""""#, r#""--""#, r#""n/a""#, "true"] {
            let json = format!(r#"{{"name":"Art","grade":"","finalPercent":{raw}}}"#);
            let course: Course = serde_json::from_str(&json).unwrap();
            assert!(course.final_percent.is_none(), "{raw}");
            assert!(course.grade.is_none());
        }
    }

    #[test]
    fn test_numeric_text_percent_is_parsed() {
        let course: Course =
            serde_json::from_str(r#"{"name":"Art","grade":" B ","finalPercent":" 58.5% "}"#).unwrap();
        assert_eq!(course.final_percent, Some(58.5));
        assert_eq!(course.grade, Some(LetterGrade::B));

        let numeric_grade: Course = serde_json::from_str(r#"{"name":"Art","grade":4}"#).unwrap();
        assert!(numeric_grade.grade.is_none());
    }
}
