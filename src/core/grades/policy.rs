//! Credit-hour and GPA boost rules

use super::letter::LetterGrade;

/// Combined courses that count double. Matched exactly.
pub const COMBINED_COURSES: [&str; 3] = [
    "English 10/American History",
    "English 9/World History",
    "Humanities 11/AP US History",
];

/// Prefix marking independent-study and service courses, which count half
pub const INDEPENDENT_PREFIX: &str = "IS: ";

/// Prefixes of advanced courses eligible for a boost
pub const BOOSTED_PREFIXES: [&str; 2] = ["AP ", "AT "];

/// Additive boost for advanced courses
pub const BOOST: f64 = 0.5;

/// Minimum grade points a course needs before it earns a boost
pub const BOOST_THRESHOLD: f64 = 1.8;

/// Credit-hour multiplier for a course name.
///
/// # Examples
/// ```
/// use gradepoint::grades::credit_hours;
///
/// assert!((credit_hours("English 10/American History") - 2.0).abs() < f64::EPSILON);
/// assert!((credit_hours("IS: Robotics") - 0.5).abs() < f64::EPSILON);
/// assert!((credit_hours("Art") - 1.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn credit_hours(course_name: &str) -> f64 {
    if COMBINED_COURSES.contains(&course_name) {
        2.0
    } else if course_name.starts_with(INDEPENDENT_PREFIX) {
        0.5
    } else {
        1.0
    }
}

/// Additive GPA boost for a course at a given grade.
///
/// Only `AP ` and `AT ` courses with at least [`BOOST_THRESHOLD`] grade
/// points qualify.
#[must_use]
pub fn course_boost(course_name: &str, grade: LetterGrade) -> f64 {
    if grade.gpa() < BOOST_THRESHOLD {
        return 0.0;
    }
    if BOOSTED_PREFIXES
        .iter()
        .any(|prefix| course_name.starts_with(prefix))
    {
        BOOST
    } else {
        0.0
    }
}
